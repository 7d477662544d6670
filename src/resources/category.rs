//! Categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::queries::{
    LocalizedStringQueryModel, QueryModel, ReferenceQueryModel, StringQueryModel,
};
use crate::resources::common::{LocalizedString, Reference, ResourceIdentifier};
use crate::resources::resource::Resource;

/// A category in the project's category tree.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
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
    /// Category name.
    pub name: LocalizedString,
    /// URL slug, unique per locale across the project.
    pub slug: LocalizedString,
    /// Category description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    /// The parent category; absent for root categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Reference>,
    /// All ancestors from the root down to the parent.
    #[serde(default)]
    pub ancestors: Vec<Reference>,
    /// Decimal string controlling the order among siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_hint: Option<String>,
    /// ID in an external system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl Category {
    /// Entry point for building category query predicates.
    #[must_use]
    pub fn query_model() -> CategoryQueryModel {
        CategoryQueryModel {
            model: QueryModel::root(),
        }
    }

    /// Returns `true` if this category has no parent.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl Resource for Category {
    const ENDPOINT: &'static str = "categories";
    type Draft = CategoryDraft;
    type UpdateAction = CategoryUpdateAction;
}

/// Draft for creating a category.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    /// Category name.
    pub name: LocalizedString,
    /// URL slug, unique per locale across the project.
    pub slug: LocalizedString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl CategoryDraft {
    /// Creates a draft with the required fields.
    #[must_use]
    pub fn new(name: LocalizedString, slug: LocalizedString) -> Self {
        Self {
            name,
            slug,
            key: None,
            description: None,
            parent: None,
            order_hint: None,
            external_id: None,
        }
    }
}

/// Update actions for categories.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CategoryUpdateAction {
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
    ChangeParent {
        parent: ResourceIdentifier,
    },
    ChangeOrderHint {
        order_hint: String,
    },
    SetKey {
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
    SetExternalId {
        #[serde(skip_serializing_if = "Option::is_none")]
        external_id: Option<String>,
    },
}

/// Typed query model for categories.
#[derive(Clone, Debug)]
pub struct CategoryQueryModel {
    model: QueryModel,
}

impl CategoryQueryModel {
    /// The category's ID.
    #[must_use]
    pub fn id(&self) -> StringQueryModel {
        self.model.id()
    }

    /// The category's key.
    #[must_use]
    pub fn key(&self) -> StringQueryModel {
        self.model.key()
    }

    /// The category name.
    #[must_use]
    pub fn name(&self) -> LocalizedStringQueryModel {
        self.model.localized_string("name")
    }

    /// The category slug.
    #[must_use]
    pub fn slug(&self) -> LocalizedStringQueryModel {
        self.model.localized_string("slug")
    }

    /// The parent category reference.
    #[must_use]
    pub fn parent(&self) -> ReferenceQueryModel {
        self.model.reference("parent")
    }

    /// The external ID.
    #[must_use]
    pub fn external_id(&self) -> StringQueryModel {
        self.model.string("externalId")
    }
}
