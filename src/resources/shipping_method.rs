//! Shipping methods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::queries::{BooleanQueryModel, QueryModel, StringQueryModel};
use crate::resources::common::{Money, Reference, ResourceIdentifier};
use crate::resources::resource::Resource;

/// The cost of shipping within a zone.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRate {
    /// The shipping price.
    pub price: Money,
    /// Order total above which shipping is free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_above: Option<Money>,
}

/// Shipping rates for one zone.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRate {
    /// The zone these rates apply to.
    pub zone: Reference,
    /// The rates, one per currency.
    #[serde(default)]
    pub shipping_rates: Vec<ShippingRate>,
}

/// A shipping method.
///
/// Unlike most resources, the name of a shipping method is a plain string,
/// not a localized one.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    /// Platform-assigned ID.
    pub id: String,
    /// Version for optimistic concurrency.
    pub version: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub last_modified_at: DateTime<Utc>,
    /// User-defined key.
    #[serde(default)]
    pub key: Option<String>,
    /// Name, unique across the project.
    pub name: String,
    /// Description shown during checkout.
    #[serde(default)]
    pub description: Option<String>,
    /// Tax category applied to the shipping price.
    pub tax_category: Reference,
    /// Rates per zone.
    #[serde(default)]
    pub zone_rates: Vec<ZoneRate>,
    /// Whether this is the project's default method.
    pub is_default: bool,
}

impl ShippingMethod {
    /// Entry point for building shipping method query predicates.
    #[must_use]
    pub fn query_model() -> ShippingMethodQueryModel {
        ShippingMethodQueryModel {
            model: QueryModel::root(),
        }
    }
}

impl Resource for ShippingMethod {
    const ENDPOINT: &'static str = "shipping-methods";
    type Draft = ShippingMethodDraft;
    type UpdateAction = ShippingMethodUpdateAction;
}

/// A zone rate in a draft.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRateDraft {
    /// The zone these rates apply to.
    pub zone: ResourceIdentifier,
    /// The rates, one per currency.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shipping_rates: Vec<ShippingRate>,
}

/// Draft for creating a shipping method.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethodDraft {
    /// Name, unique across the project.
    pub name: String,
    /// Tax category applied to the shipping price.
    pub tax_category: ResourceIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub zone_rates: Vec<ZoneRateDraft>,
    /// Whether this becomes the project's default method.
    pub is_default: bool,
}

/// Update actions for shipping methods.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ShippingMethodUpdateAction {
    ChangeName {
        name: String,
    },
    SetDescription {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    SetKey {
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
    ChangeIsDefault {
        is_default: bool,
    },
    ChangeTaxCategory {
        tax_category: ResourceIdentifier,
    },
    AddShippingRate {
        zone: ResourceIdentifier,
        shipping_rate: ShippingRate,
    },
    RemoveShippingRate {
        zone: ResourceIdentifier,
        shipping_rate: ShippingRate,
    },
}

/// Typed query model for shipping methods.
#[derive(Clone, Debug)]
pub struct ShippingMethodQueryModel {
    model: QueryModel,
}

impl ShippingMethodQueryModel {
    /// The shipping method's ID.
    #[must_use]
    pub fn id(&self) -> StringQueryModel {
        self.model.id()
    }

    /// The shipping method's key.
    #[must_use]
    pub fn key(&self) -> StringQueryModel {
        self.model.key()
    }

    /// The name (a plain string for shipping methods).
    #[must_use]
    pub fn name(&self) -> StringQueryModel {
        self.model.string("name")
    }

    /// The default flag.
    #[must_use]
    pub fn is_default(&self) -> BooleanQueryModel {
        self.model.boolean("isDefault")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_method_deserializes_from_platform_json() {
        let json = r#"{
            "id": "sm-1",
            "version": 1,
            "createdAt": "2024-01-01T00:00:00.000Z",
            "lastModifiedAt": "2024-01-01T00:00:00.000Z",
            "name": "DHL",
            "taxCategory": {"typeId": "tax-category", "id": "tc-1"},
            "zoneRates": [{
                "zone": {"typeId": "zone", "id": "zone-eu"},
                "shippingRates": [{
                    "price": {"currencyCode": "EUR", "centAmount": 495},
                    "freeAbove": {"currencyCode": "EUR", "centAmount": 5000}
                }]
            }],
            "isDefault": true
        }"#;

        let method: ShippingMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method.name, "DHL");
        assert!(method.is_default);
        let rate = &method.zone_rates[0].shipping_rates[0];
        assert_eq!(rate.price.cent_amount, 495);
        assert_eq!(rate.free_above.as_ref().unwrap().cent_amount, 5000);
    }

    #[test]
    fn test_change_is_default_action() {
        let action = ShippingMethodUpdateAction::ChangeIsDefault { is_default: false };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "changeIsDefault", "isDefault": false})
        );
    }

    #[test]
    fn test_query_model_default_flag_predicate() {
        let predicate = ShippingMethod::query_model().is_default().eq(true);
        assert_eq!(predicate.to_string(), "isDefault = true");
    }
}
