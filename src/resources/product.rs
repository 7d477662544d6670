//! Products and product projections.
//!
//! A [`Product`] carries its catalog data twice: the `current`
//! representation that storefronts see and the `staged` one that absorbs
//! edits until the product is published. A [`ProductProjection`] is the
//! flattened single-sided view the query and search endpoints return.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ProjectClient;
use crate::queries::{
    LocalizedStringQueryModel, LongQueryModel, PagedQueryResult, QueryModel, ResourceQuery,
    StringQueryModel, TimestampQueryModel,
};
use crate::resources::common::{LocalizedString, Money, Reference, ResourceIdentifier};
use crate::resources::errors::ResourceError;
use crate::resources::resource::Resource;
use crate::search::{PagedSearchResult, ProductProjectionSearch};

/// An attribute of a product variant.
///
/// Attribute values are schemaless from the SDK's point of view; their
/// shape is defined by the product type.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Attribute {
    /// The attribute name, as defined in the product type.
    pub name: String,
    /// The attribute value.
    pub value: serde_json::Value,
}

impl Attribute {
    /// Creates an attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Pixel dimensions of an image.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

/// An image of a product variant.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// URL of the image.
    pub url: String,
    /// Pixel dimensions of the image.
    pub dimensions: ImageDimensions,
    /// Optional label shown with the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// An embedded price of a product variant.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Platform-assigned price ID.
    pub id: String,
    /// The monetary amount.
    pub value: Money,
    /// Country this price applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Customer group this price applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_group: Option<Reference>,
    /// Channel this price applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Reference>,
}

/// A price in a draft or update action, without the platform-assigned ID.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceDraft {
    /// The monetary amount.
    pub value: Money,
    /// Country this price applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl PriceDraft {
    /// Creates a price draft for the given amount.
    #[must_use]
    pub const fn of(value: Money) -> Self {
        Self {
            value,
            country: None,
        }
    }
}

/// A sellable variant of a product.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Variant ID, unique within the product. The master variant has ID 1.
    pub id: u64,
    /// Stock keeping unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// User-defined variant key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Embedded prices.
    #[serde(default)]
    pub prices: Vec<Price>,
    /// Images of this variant.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Product-type-defined attributes.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// One side (current or staged) of a product's catalog data.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    /// Product name.
    pub name: LocalizedString,
    /// URL slug, unique per locale across the project.
    pub slug: LocalizedString,
    /// Product description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    /// Categories this product belongs to.
    #[serde(default)]
    pub categories: Vec<Reference>,
    /// The master variant.
    pub master_variant: ProductVariant,
    /// Additional variants.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl ProductData {
    /// Returns all variants, master variant first.
    #[must_use]
    pub fn all_variants(&self) -> Vec<&ProductVariant> {
        std::iter::once(&self.master_variant)
            .chain(self.variants.iter())
            .collect()
    }
}

/// The current/staged pair of a product.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCatalogData {
    /// Whether the product is published.
    pub published: bool,
    /// The representation storefronts see.
    pub current: ProductData,
    /// The representation absorbing edits.
    pub staged: ProductData,
    /// Whether staged differs from current.
    pub has_staged_changes: bool,
}

/// A product.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Platform-assigned ID.
    pub id: String,
    /// Version for optimistic concurrency.
    pub version: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub last_modified_at: DateTime<Utc>,
    /// User-defined key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The product type defining the attribute schema.
    pub product_type: Reference,
    /// Current and staged catalog data.
    pub master_data: ProductCatalogData,
    /// Tax category for price calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_category: Option<Reference>,
}

impl Product {
    /// Entry point for building product query predicates.
    #[must_use]
    pub fn query_model() -> ProductQueryModel {
        ProductQueryModel {
            model: QueryModel::root(),
        }
    }
}

impl Resource for Product {
    const ENDPOINT: &'static str = "products";
    type Draft = ProductDraft;
    type UpdateAction = ProductUpdateAction;
}

/// A variant in a product draft.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantDraft {
    /// Stock keeping unit, unique across the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// User-defined identifier for the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Prices for the variant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<PriceDraft>,
    /// Attribute values per the product type schema.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

/// Draft for creating a product.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// The product type defining the attribute schema.
    pub product_type: ResourceIdentifier,
    /// Product name.
    pub name: LocalizedString,
    /// URL slug, unique per locale across the project.
    pub slug: LocalizedString,
    /// User-defined identifier for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Product description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    /// The master variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_variant: Option<ProductVariantDraft>,
    /// Additional variants.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariantDraft>,
    /// Publish immediately instead of leaving the draft staged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish: Option<bool>,
}

/// Update actions for products.
///
/// Actions apply to the staged representation unless the platform defines
/// otherwise; `publish` promotes staged to current.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ProductUpdateAction {
    ChangeName {
        name: LocalizedString,
    },
    ChangeSlug {
        slug: LocalizedString,
    },
    SetDescription {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<LocalizedString>,
    },
    SetKey {
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
    AddToCategory {
        category: ResourceIdentifier,
    },
    RemoveFromCategory {
        category: ResourceIdentifier,
    },
    SetTaxCategory {
        #[serde(skip_serializing_if = "Option::is_none")]
        tax_category: Option<ResourceIdentifier>,
    },
    SetSku {
        variant_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        sku: Option<String>,
    },
    SetAttribute {
        variant_id: u64,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<serde_json::Value>,
    },
    AddPrice {
        variant_id: u64,
        price: PriceDraft,
    },
    ChangePrice {
        price_id: String,
        price: PriceDraft,
    },
    RemovePrice {
        price_id: String,
    },
    AddExternalImage {
        variant_id: u64,
        image: Image,
    },
    RemoveImage {
        variant_id: u64,
        image_url: String,
    },
    Publish,
    Unpublish,
}

/// Typed query model for products.
#[derive(Clone, Debug)]
pub struct ProductQueryModel {
    model: QueryModel,
}

impl ProductQueryModel {
    /// The product's ID.
    #[must_use]
    pub fn id(&self) -> StringQueryModel {
        self.model.id()
    }

    /// The product's key.
    #[must_use]
    pub fn key(&self) -> StringQueryModel {
        self.model.key()
    }

    /// The product's version.
    #[must_use]
    pub fn version(&self) -> LongQueryModel {
        self.model.version()
    }

    /// The product's creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> TimestampQueryModel {
        self.model.created_at()
    }

    /// Descends into the catalog data.
    #[must_use]
    pub fn master_data(&self) -> ProductCatalogDataQueryModel {
        ProductCatalogDataQueryModel {
            model: self.model.nested("masterData"),
        }
    }

    /// The product type reference.
    #[must_use]
    pub fn product_type(&self) -> crate::queries::ReferenceQueryModel {
        self.model.reference("productType")
    }
}

/// Typed query model for a product's catalog data.
#[derive(Clone, Debug)]
pub struct ProductCatalogDataQueryModel {
    model: QueryModel,
}

impl ProductCatalogDataQueryModel {
    /// The published flag.
    #[must_use]
    pub fn published(&self) -> crate::queries::BooleanQueryModel {
        self.model.boolean("published")
    }

    /// The current representation.
    #[must_use]
    pub fn current(&self) -> ProductDataQueryModel {
        ProductDataQueryModel {
            model: self.model.nested("current"),
        }
    }

    /// The staged representation.
    #[must_use]
    pub fn staged(&self) -> ProductDataQueryModel {
        ProductDataQueryModel {
            model: self.model.nested("staged"),
        }
    }
}

/// Typed query model for one side of a product's catalog data.
#[derive(Clone, Debug)]
pub struct ProductDataQueryModel {
    model: QueryModel,
}

impl ProductDataQueryModel {
    /// The product name.
    #[must_use]
    pub fn name(&self) -> LocalizedStringQueryModel {
        self.model.localized_string("name")
    }

    /// The product slug.
    #[must_use]
    pub fn slug(&self) -> LocalizedStringQueryModel {
        self.model.localized_string("slug")
    }

    /// The categories of the product.
    #[must_use]
    pub fn categories(&self) -> crate::queries::ReferenceQueryModel {
        self.model.reference("categories")
    }
}

/// The flattened, single-sided view of a product.
///
/// Returned by the `product-projections` query endpoint and by search.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductProjection {
    /// The product's ID (shared with the product itself).
    pub id: String,
    /// The product's version.
    pub version: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub last_modified_at: DateTime<Utc>,
    /// User-defined key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The product type.
    pub product_type: Reference,
    /// Product name.
    pub name: LocalizedString,
    /// URL slug.
    pub slug: LocalizedString,
    /// Product description.
    #[serde(default)]
    pub description: Option<LocalizedString>,
    /// Categories this product belongs to.
    #[serde(default)]
    pub categories: Vec<Reference>,
    /// The master variant.
    pub master_variant: ProductVariant,
    /// Additional variants.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    /// Whether the underlying product is published.
    #[serde(default)]
    pub published: bool,
}

impl ProductProjection {
    /// The query endpoint for projections.
    pub const ENDPOINT: &'static str = "product-projections";

    /// Fetches the current projection of a product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no published product has
    /// this ID.
    pub async fn by_id(client: &ProjectClient, id: &str) -> Result<Self, ResourceError> {
        let response = client
            .get(&format!("{}/{id}", Self::ENDPOINT), Vec::new())
            .await?;
        serde_json::from_value(response.body).map_err(|e| ResourceError::deserialization(&e))
    }

    /// Runs a query against the projection endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for malformed predicates and transport
    /// failures.
    pub async fn query(
        client: &ProjectClient,
        query: &ResourceQuery,
    ) -> Result<PagedQueryResult<Self>, ResourceError> {
        let response = client.get(Self::ENDPOINT, query.to_query_params()).await?;
        serde_json::from_value(response.body).map_err(|e| ResourceError::deserialization(&e))
    }

    /// Runs a search against the search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for malformed filter expressions and
    /// transport failures.
    pub async fn search(
        client: &ProjectClient,
        search: &ProductProjectionSearch,
    ) -> Result<PagedSearchResult<Self>, ResourceError> {
        let response = client
            .get(ProductProjectionSearch::ENDPOINT, search.to_query_params())
            .await?;
        serde_json::from_value(response.body).map_err(|e| ResourceError::deserialization(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_json() -> &'static str {
        r#"{
            "id": "prod-1",
            "version": 4,
            "createdAt": "2024-01-15T09:30:00.000Z",
            "lastModifiedAt": "2024-02-01T10:00:00.000Z",
            "key": "shirt",
            "productType": {"typeId": "product-type", "id": "pt-1"},
            "masterData": {
                "published": true,
                "hasStagedChanges": false,
                "current": {
                    "name": {"en": "Shirt"},
                    "slug": {"en": "shirt"},
                    "categories": [{"typeId": "category", "id": "cat-1"}],
                    "masterVariant": {
                        "id": 1,
                        "sku": "SHIRT-1",
                        "prices": [{
                            "id": "price-1",
                            "value": {"currencyCode": "EUR", "centAmount": 2500}
                        }],
                        "attributes": [{"name": "color", "value": "red"}]
                    },
                    "variants": []
                },
                "staged": {
                    "name": {"en": "Shirt"},
                    "slug": {"en": "shirt"},
                    "categories": [],
                    "masterVariant": {"id": 1},
                    "variants": []
                }
            }
        }"#
    }

    #[test]
    fn test_product_deserializes_from_platform_json() {
        let product: Product = serde_json::from_str(product_json()).unwrap();

        assert_eq!(product.id, "prod-1");
        assert_eq!(product.version, 4);
        assert!(product.master_data.published);
        assert_eq!(
            product.master_data.current.name.get("en"),
            Some("Shirt")
        );
        let master = &product.master_data.current.master_variant;
        assert_eq!(master.sku.as_deref(), Some("SHIRT-1"));
        assert_eq!(master.prices[0].value.cent_amount, 2500);
    }

    #[test]
    fn test_all_variants_puts_master_first() {
        let product: Product = serde_json::from_str(product_json()).unwrap();
        let variants = product.master_data.current.all_variants();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].id, 1);
    }

    #[test]
    fn test_update_actions_serialize_with_action_tag() {
        let action = ProductUpdateAction::ChangeName {
            name: LocalizedString::of("en", "New Shirt"),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "changeName");
        assert_eq!(json["name"]["en"], "New Shirt");

        let publish = serde_json::to_value(ProductUpdateAction::Publish).unwrap();
        assert_eq!(publish, serde_json::json!({"action": "publish"}));
    }

    #[test]
    fn test_set_attribute_uses_camel_case_fields() {
        let action = ProductUpdateAction::SetAttribute {
            variant_id: 1,
            name: "color".to_string(),
            value: Some(serde_json::json!("blue")),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "setAttribute");
        assert_eq!(json["variantId"], 1);
        assert_eq!(json["value"], "blue");
    }

    #[test]
    fn test_unset_attribute_omits_value() {
        let action = ProductUpdateAction::SetAttribute {
            variant_id: 1,
            name: "color".to_string(),
            value: None,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_query_model_builds_nested_predicates() {
        let predicate = Product::query_model()
            .master_data()
            .current()
            .slug()
            .locale("en")
            .eq("shirt");
        assert_eq!(
            predicate.to_string(),
            r#"masterData(current(slug(en = "shirt")))"#
        );
    }

    #[test]
    fn test_query_model_published_flag() {
        let predicate = Product::query_model().master_data().published().eq(true);
        assert_eq!(predicate.to_string(), "masterData(published = true)");
    }

    #[test]
    fn test_product_draft_serializes_minimal_fields() {
        let draft = ProductDraft {
            product_type: ResourceIdentifier::by_id("product-type", "pt-1"),
            name: LocalizedString::of("en", "Shirt"),
            slug: LocalizedString::of("en", "shirt"),
            key: None,
            description: None,
            master_variant: None,
            variants: vec![],
            publish: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["productType"]["id"], "pt-1");
        assert!(json.get("description").is_none());
        assert!(json.get("variants").is_none());
    }

    #[test]
    fn test_product_projection_deserializes() {
        let json = r#"{
            "id": "prod-1",
            "version": 4,
            "createdAt": "2024-01-15T09:30:00.000Z",
            "lastModifiedAt": "2024-02-01T10:00:00.000Z",
            "productType": {"typeId": "product-type", "id": "pt-1"},
            "name": {"en": "Shirt"},
            "slug": {"en": "shirt"},
            "categories": [],
            "masterVariant": {"id": 1},
            "variants": [],
            "published": true
        }"#;

        let projection: ProductProjection = serde_json::from_str(json).unwrap();
        assert_eq!(projection.name.get("en"), Some("Shirt"));
        assert!(projection.published);
    }
}
