//! Orders.
//!
//! Orders are created from carts: the cart's line items and prices become
//! immutable order state, and subsequent changes happen through update
//! actions on the order's workflow states and return info.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::queries::{QueryModel, StringQueryModel, TimestampQueryModel};
use crate::resources::cart::LineItem;
use crate::resources::common::{Address, Money, Reference};
use crate::resources::resource::Resource;

/// Workflow state of an order.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum OrderState {
    /// The order was placed and is being processed.
    Open,
    /// The order was confirmed.
    Confirmed,
    /// The order was fulfilled.
    Complete,
    /// The order was cancelled.
    Cancelled,
}

/// Shipment state of an order.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ShipmentState {
    Shipped,
    Ready,
    Pending,
    Delayed,
    Partial,
    Backorder,
}

/// Payment state of an order.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum PaymentState {
    BalanceDue,
    Failed,
    Pending,
    CreditOwed,
    Paid,
}

/// Shipment state of a returned item.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ReturnShipmentState {
    Advised,
    Returned,
    BackInStock,
    Unusable,
}

/// One returned item within a return info entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItemDraft {
    /// Quantity returned.
    pub quantity: u64,
    /// The line item being returned.
    pub line_item_id: String,
    /// State of the returned shipment.
    pub shipment_state: ReturnShipmentState,
    /// Free-text comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A recorded return of order items.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReturnInfo {
    /// The returned items.
    pub items: Vec<serde_json::Value>,
    /// Tracking ID of the return shipment.
    #[serde(default)]
    pub return_tracking_id: Option<String>,
    /// When the return was initiated.
    #[serde(default)]
    pub return_date: Option<DateTime<Utc>>,
}

/// An order.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Platform-assigned ID.
    pub id: String,
    /// Version for optimistic concurrency.
    pub version: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub last_modified_at: DateTime<Utc>,
    /// User-defined order number, unique across the project.
    #[serde(default)]
    pub order_number: Option<String>,
    /// The customer the order belongs to.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// The customer email.
    #[serde(default)]
    pub customer_email: Option<String>,
    /// The line items, copied from the cart.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// The total price of the order.
    pub total_price: Money,
    /// Workflow state.
    pub order_state: OrderState,
    /// Shipment state.
    #[serde(default)]
    pub shipment_state: Option<ShipmentState>,
    /// Payment state.
    #[serde(default)]
    pub payment_state: Option<PaymentState>,
    /// The cart the order was created from.
    #[serde(default)]
    pub cart: Option<Reference>,
    /// Recorded returns.
    #[serde(default)]
    pub return_info: Vec<ReturnInfo>,
    /// Shipping address.
    #[serde(default)]
    pub shipping_address: Option<Address>,
    /// Billing address.
    #[serde(default)]
    pub billing_address: Option<Address>,
}

impl Order {
    /// Entry point for building order query predicates.
    #[must_use]
    pub fn query_model() -> OrderQueryModel {
        OrderQueryModel {
            model: QueryModel::root(),
        }
    }
}

impl Resource for Order {
    const ENDPOINT: &'static str = "orders";
    type Draft = OrderFromCartDraft;
    type UpdateAction = OrderUpdateAction;
}

/// Draft for creating an order from a cart.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderFromCartDraft {
    /// ID of the cart to order.
    pub id: String,
    /// Expected version of the cart.
    pub version: u64,
    /// Order number to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
}

impl OrderFromCartDraft {
    /// Creates a draft ordering the given cart.
    #[must_use]
    pub fn of_cart(cart_id: impl Into<String>, cart_version: u64) -> Self {
        Self {
            id: cart_id.into(),
            version: cart_version,
            order_number: None,
        }
    }
}

/// Update actions for orders.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum OrderUpdateAction {
    ChangeOrderState {
        order_state: OrderState,
    },
    ChangeShipmentState {
        shipment_state: ShipmentState,
    },
    ChangePaymentState {
        payment_state: PaymentState,
    },
    SetOrderNumber {
        #[serde(skip_serializing_if = "Option::is_none")]
        order_number: Option<String>,
    },
    AddReturnInfo {
        items: Vec<ReturnItemDraft>,
        #[serde(skip_serializing_if = "Option::is_none")]
        return_tracking_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        return_date: Option<DateTime<Utc>>,
    },
}

/// Typed query model for orders.
#[derive(Clone, Debug)]
pub struct OrderQueryModel {
    model: QueryModel,
}

impl OrderQueryModel {
    /// The order's ID.
    #[must_use]
    pub fn id(&self) -> StringQueryModel {
        self.model.id()
    }

    /// The order number.
    #[must_use]
    pub fn order_number(&self) -> StringQueryModel {
        self.model.string("orderNumber")
    }

    /// The customer the order belongs to.
    #[must_use]
    pub fn customer_id(&self) -> StringQueryModel {
        self.model.string("customerId")
    }

    /// The workflow state, e.g. `Open`.
    #[must_use]
    pub fn order_state(&self) -> StringQueryModel {
        self.model.string("orderState")
    }

    /// The creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> TimestampQueryModel {
        self.model.created_at()
    }
}
