//! Value types shared across resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A string localized per IETF language tag.
///
/// Serialized as a JSON object keyed by locale, e.g.
/// `{"en": "Shirt", "de": "Hemd"}`.
///
/// # Example
///
/// ```rust
/// use commercetools_api::resources::LocalizedString;
///
/// let name = LocalizedString::of("en", "Shirt").with("de", "Hemd");
/// assert_eq!(name.get("de"), Some("Hemd"));
/// assert_eq!(name.get("fr"), None);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct LocalizedString(BTreeMap<String, String>);

impl LocalizedString {
    /// Creates an empty localized string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a localized string with a single locale.
    #[must_use]
    pub fn of(locale: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with(locale, value)
    }

    /// Adds or replaces the value for a locale.
    #[must_use]
    pub fn with(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(locale.into(), value.into());
        self
    }

    /// Returns the value for a locale, if present.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Returns `true` if no locale has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A monetary amount in the smallest unit of its currency.
///
/// `cent_amount` is cents for EUR and USD, yen for JPY.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// The amount in the currency's smallest unit.
    pub cent_amount: i64,
}

impl Money {
    /// Creates a monetary amount.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, cent_amount: i64) -> Self {
        Self {
            currency_code: currency_code.into(),
            cent_amount,
        }
    }
}

/// A reference to another resource.
///
/// When the query requested expansion for this reference's path, the
/// referenced resource is inlined under `obj`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// The referenced resource's type, e.g. `category`.
    pub type_id: String,
    /// The referenced resource's ID.
    pub id: String,
    /// The expanded resource, when expansion was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj: Option<serde_json::Value>,
}

impl Reference {
    /// Creates a reference.
    #[must_use]
    pub fn new(type_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            id: id.into(),
            obj: None,
        }
    }
}

/// Identifies a resource by ID or key in drafts and update actions.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    /// The resource type, e.g. `tax-category`.
    pub type_id: String,
    /// The resource's ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The resource's user-defined key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ResourceIdentifier {
    /// Identifies a resource by its ID.
    #[must_use]
    pub fn by_id(type_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            id: Some(id.into()),
            key: None,
        }
    }

    /// Identifies a resource by its key.
    #[must_use]
    pub fn by_key(type_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            id: None,
            key: Some(key.into()),
        }
    }
}

/// A postal address.
///
/// Only `country` is required by the platform; everything else is optional.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Platform-assigned address ID, present on stored addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Address {
    /// Creates an address with only the country set.
    #[must_use]
    pub fn of_country(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }
}
