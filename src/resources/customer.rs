//! Customers.
//!
//! Signing up a customer returns a [`CustomerSignInResult`] carrying the
//! new customer and, when an anonymous cart was merged during sign-in, the
//! resulting cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ProjectClient;
use crate::queries::{BooleanQueryModel, QueryModel, StringQueryModel};
use crate::resources::cart::Cart;
use crate::resources::common::{Address, Reference};
use crate::resources::errors::ResourceError;
use crate::resources::resource::Resource;

/// A customer account.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
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
    /// Customer number, unique across the project.
    #[serde(default)]
    pub customer_number: Option<String>,
    /// Email address, unique across the project (case insensitive).
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Stored addresses.
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// ID of the default shipping address within `addresses`.
    #[serde(default)]
    pub default_shipping_address_id: Option<String>,
    /// ID of the default billing address within `addresses`.
    #[serde(default)]
    pub default_billing_address_id: Option<String>,
    /// Whether the email address was verified.
    #[serde(default)]
    pub is_email_verified: bool,
    /// The customer group for group-specific prices.
    #[serde(default)]
    pub customer_group: Option<Reference>,
}

impl Customer {
    /// Entry point for building customer query predicates.
    #[must_use]
    pub fn query_model() -> CustomerQueryModel {
        CustomerQueryModel {
            model: QueryModel::root(),
        }
    }

    /// Returns the default shipping address, if one is set.
    #[must_use]
    pub fn default_shipping_address(&self) -> Option<&Address> {
        let id = self.default_shipping_address_id.as_deref()?;
        self.addresses
            .iter()
            .find(|address| address.id.as_deref() == Some(id))
    }

    /// Creates a customer account and returns the full sign-in result.
    ///
    /// Unlike [`Resource::create`], this keeps the cart that may have been
    /// merged during sign-up.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadRequest`] when the email is already
    /// taken (`DuplicateField`).
    pub async fn sign_up(
        client: &ProjectClient,
        draft: &CustomerDraft,
    ) -> Result<CustomerSignInResult, ResourceError> {
        let body =
            serde_json::to_value(draft).map_err(|e| ResourceError::deserialization(&e))?;
        let response = client.post(Self::ENDPOINT, body).await?;
        serde_json::from_value(response.body).map_err(|e| ResourceError::deserialization(&e))
    }
}

impl Resource for Customer {
    const ENDPOINT: &'static str = "customers";
    type Draft = CustomerDraft;
    type UpdateAction = CustomerUpdateAction;

    /// Creating a customer wraps the account in a sign-in result; this
    /// unwraps it. Use [`Customer::sign_up`] to keep the merged cart.
    async fn create(client: &ProjectClient, draft: &Self::Draft) -> Result<Self, ResourceError> {
        Self::sign_up(client, draft)
            .await
            .map(|result| result.customer)
    }
}

/// Result of creating a customer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSignInResult {
    /// The created customer.
    pub customer: Customer,
    /// The cart merged during sign-up, if any.
    #[serde(default)]
    pub cart: Option<Cart>,
}

/// Draft for creating a customer.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    /// Email address, unique across the project.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// User-defined customer number, unique across the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,
    /// Addresses on file for the customer.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
}

impl CustomerDraft {
    /// Creates a draft with the required credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: None,
            last_name: None,
            customer_number: None,
            addresses: Vec::new(),
        }
    }
}

/// Update actions for customers.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CustomerUpdateAction {
    ChangeEmail {
        email: String,
    },
    SetFirstName {
        #[serde(skip_serializing_if = "Option::is_none")]
        first_name: Option<String>,
    },
    SetLastName {
        #[serde(skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
    },
    SetCustomerNumber {
        #[serde(skip_serializing_if = "Option::is_none")]
        customer_number: Option<String>,
    },
    AddAddress {
        address: Address,
    },
    ChangeAddress {
        address_id: String,
        address: Address,
    },
    RemoveAddress {
        address_id: String,
    },
    SetDefaultShippingAddress {
        #[serde(skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
    },
    SetDefaultBillingAddress {
        #[serde(skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
    },
}

/// Typed query model for customers.
#[derive(Clone, Debug)]
pub struct CustomerQueryModel {
    model: QueryModel,
}

impl CustomerQueryModel {
    /// The customer's ID.
    #[must_use]
    pub fn id(&self) -> StringQueryModel {
        self.model.id()
    }

    /// The email address.
    #[must_use]
    pub fn email(&self) -> StringQueryModel {
        self.model.string("email")
    }

    /// The customer number.
    #[must_use]
    pub fn customer_number(&self) -> StringQueryModel {
        self.model.string("customerNumber")
    }

    /// The last name.
    #[must_use]
    pub fn last_name(&self) -> StringQueryModel {
        self.model.string("lastName")
    }

    /// The email verification flag.
    #[must_use]
    pub fn is_email_verified(&self) -> BooleanQueryModel {
        self.model.boolean("isEmailVerified")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_json() -> &'static str {
        r#"{
            "id": "cust-1",
            "version": 1,
            "createdAt": "2024-02-01T08:00:00.000Z",
            "lastModifiedAt": "2024-02-01T08:00:00.000Z",
            "email": "jo@example.com",
            "firstName": "Jo",
            "lastName": "Doe",
            "isEmailVerified": false,
            "addresses": [
                {"id": "addr-1", "country": "DE", "city": "Berlin"}
            ],
            "defaultShippingAddressId": "addr-1"
        }"#
    }

    #[test]
    fn test_customer_deserializes_from_platform_json() {
        let customer: Customer = serde_json::from_str(customer_json()).unwrap();
        assert_eq!(customer.email, "jo@example.com");
        assert_eq!(customer.first_name.as_deref(), Some("Jo"));
        assert!(!customer.is_email_verified);
    }

    #[test]
    fn test_default_shipping_address_lookup() {
        let customer: Customer = serde_json::from_str(customer_json()).unwrap();
        let address = customer.default_shipping_address().unwrap();
        assert_eq!(address.city.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_sign_in_result_deserializes_without_cart() {
        let json = format!(r#"{{"customer": {}}}"#, customer_json());
        let result: CustomerSignInResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.customer.id, "cust-1");
        assert!(result.cart.is_none());
    }

    #[test]
    fn test_draft_omits_unset_fields() {
        let draft = CustomerDraft::new("jo@example.com", "hunter2");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "jo@example.com", "password": "hunter2"})
        );
    }

    #[test]
    fn test_update_actions_serialize_with_action_tag() {
        let action = CustomerUpdateAction::SetDefaultShippingAddress {
            address_id: Some("addr-2".to_string()),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "setDefaultShippingAddress");
        assert_eq!(json["addressId"], "addr-2");
    }

    #[test]
    fn test_query_model_email_predicate() {
        let predicate = Customer::query_model().email().eq("jo@example.com");
        assert_eq!(predicate.to_string(), r#"email = "jo@example.com""#);
    }
}
