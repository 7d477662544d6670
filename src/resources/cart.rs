//! Carts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::queries::{QueryModel, StringQueryModel};
use crate::resources::common::{Address, LocalizedString, Money};
use crate::resources::product::ProductVariant;
use crate::resources::resource::Resource;

/// Lifecycle state of a cart.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum CartState {
    /// The cart can be modified and ordered.
    Active,
    /// The cart was merged into another cart.
    Merged,
    /// An order was created from the cart.
    Ordered,
    /// The cart was frozen for checkout.
    Frozen,
}

/// A line item of a cart or order.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Platform-assigned line item ID.
    pub id: String,
    /// The product this line item was added from.
    pub product_id: String,
    /// The product name at the time it was added.
    pub name: LocalizedString,
    /// The variant snapshot.
    pub variant: ProductVariant,
    /// Quantity of this line item.
    pub quantity: u64,
    /// The total price of this line item (price times quantity, after
    /// discounts).
    pub total_price: Money,
}

/// A cart.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
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
    /// The customer this cart belongs to, if signed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Email for anonymous checkout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Lifecycle state.
    pub cart_state: CartState,
    /// The line items.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Sum of line item totals.
    pub total_price: Money,
    /// Country used for price selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Shipping address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    /// Billing address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
}

impl Cart {
    /// Entry point for building cart query predicates.
    #[must_use]
    pub fn query_model() -> CartQueryModel {
        CartQueryModel {
            model: QueryModel::root(),
        }
    }

    /// Returns the total quantity over all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.line_items.iter().map(|item| item.quantity).sum()
    }
}

impl Resource for Cart {
    const ENDPOINT: &'static str = "carts";
    type Draft = CartDraft;
    type UpdateAction = CartUpdateAction;
}

/// A line item in a cart draft.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDraft {
    /// The product to add.
    pub product_id: String,
    /// The variant of the product; defaults to the master variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    /// Quantity to add.
    pub quantity: u64,
}

/// Draft for creating a cart.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartDraft {
    /// ISO 4217 currency of the cart.
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItemDraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
}

impl CartDraft {
    /// Creates a draft for an empty cart in the given currency.
    #[must_use]
    pub fn of_currency(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            customer_id: None,
            customer_email: None,
            country: None,
            line_items: Vec::new(),
            shipping_address: None,
        }
    }
}

/// Update actions for carts.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CartUpdateAction {
    AddLineItem {
        product_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        variant_id: Option<u64>,
        quantity: u64,
    },
    RemoveLineItem {
        line_item_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        quantity: Option<u64>,
    },
    ChangeLineItemQuantity {
        line_item_id: String,
        quantity: u64,
    },
    SetCustomerEmail {
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
    SetShippingAddress {
        #[serde(skip_serializing_if = "Option::is_none")]
        address: Option<Address>,
    },
    SetBillingAddress {
        #[serde(skip_serializing_if = "Option::is_none")]
        address: Option<Address>,
    },
    SetCountry {
        #[serde(skip_serializing_if = "Option::is_none")]
        country: Option<String>,
    },
    Recalculate,
}

/// Typed query model for carts.
#[derive(Clone, Debug)]
pub struct CartQueryModel {
    model: QueryModel,
}

impl CartQueryModel {
    /// The cart's ID.
    #[must_use]
    pub fn id(&self) -> StringQueryModel {
        self.model.id()
    }

    /// The customer the cart belongs to.
    #[must_use]
    pub fn customer_id(&self) -> StringQueryModel {
        self.model.string("customerId")
    }

    /// The customer email.
    #[must_use]
    pub fn customer_email(&self) -> StringQueryModel {
        self.model.string("customerEmail")
    }

    /// The lifecycle state, e.g. `Active`.
    #[must_use]
    pub fn cart_state(&self) -> StringQueryModel {
        self.model.string("cartState")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_json() -> &'static str {
        r#"{
            "id": "cart-1",
            "version": 3,
            "createdAt": "2024-03-01T10:00:00.000Z",
            "lastModifiedAt": "2024-03-01T10:05:00.000Z",
            "cartState": "Active",
            "customerEmail": "jo@example.com",
            "lineItems": [{
                "id": "li-1",
                "productId": "prod-1",
                "name": {"en": "Shirt"},
                "variant": {"id": 1, "sku": "SHIRT-1"},
                "quantity": 2,
                "totalPrice": {"currencyCode": "EUR", "centAmount": 5000}
            }],
            "totalPrice": {"currencyCode": "EUR", "centAmount": 5000},
            "country": "DE"
        }"#
    }

    #[test]
    fn test_cart_deserializes_from_platform_json() {
        let cart: Cart = serde_json::from_str(cart_json()).unwrap();
        assert_eq!(cart.cart_state, CartState::Active);
        assert_eq!(cart.line_items[0].quantity, 2);
        assert_eq!(cart.total_price.cent_amount, 5000);
    }

    #[test]
    fn test_total_quantity_sums_line_items() {
        let cart: Cart = serde_json::from_str(cart_json()).unwrap();
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_draft_of_currency_is_minimal() {
        let draft = CartDraft::of_currency("EUR");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"currency": "EUR"}));
    }

    #[test]
    fn test_add_line_item_action_serializes() {
        let action = CartUpdateAction::AddLineItem {
            product_id: "prod-1".to_string(),
            variant_id: Some(2),
            quantity: 3,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "addLineItem");
        assert_eq!(json["productId"], "prod-1");
        assert_eq!(json["variantId"], 2);
        assert_eq!(json["quantity"], 3);
    }

    #[test]
    fn test_recalculate_action_has_no_fields() {
        let json = serde_json::to_value(&CartUpdateAction::Recalculate).unwrap();
        assert_eq!(json, serde_json::json!({"action": "recalculate"}));
    }

    #[test]
    fn test_query_model_customer_id_predicate() {
        let predicate = Cart::query_model().customer_id().eq("cust-1");
        assert_eq!(predicate.to_string(), r#"customerId = "cust-1""#);
    }
}
