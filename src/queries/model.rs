//! Typed query models.
//!
//! A query model mirrors the shape of a resource so predicates can be built
//! without hand-writing path strings. Resource modules expose an entry point
//! (e.g. `Product::query()`) returning a model whose accessors walk into
//! nested attributes; the typed leaves ([`StringQueryModel`],
//! [`LongQueryModel`], ...) provide the comparisons.
//!
//! # Example
//!
//! ```rust
//! use commercetools_api::queries::QueryModel;
//!
//! let model = QueryModel::root();
//! let predicate = model
//!     .nested("masterData")
//!     .nested("current")
//!     .localized_string("name")
//!     .locale("en")
//!     .eq("shirt");
//!
//! assert_eq!(
//!     predicate.to_string(),
//!     r#"masterData(current(name(en = "shirt")))"#
//! );
//! ```

use chrono::{DateTime, Utc};

use crate::queries::predicate::{quote, QueryPredicate};
use crate::queries::sort::{QuerySort, SortDirection};

/// A path into a resource, built segment by segment.
#[derive(Clone, Debug, Default)]
pub struct QueryModel {
    segments: Vec<String>,
}

impl QueryModel {
    /// Creates a model rooted at the resource itself.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    fn appended(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Returns the dot-joined path of this model, used for sorting.
    #[must_use]
    pub fn sort_path(&self) -> String {
        self.segments.join(".")
    }

    /// Descends into a nested attribute.
    #[must_use]
    pub fn nested(&self, segment: &str) -> Self {
        self.appended(segment)
    }

    /// A string-valued attribute.
    #[must_use]
    pub fn string(&self, segment: &str) -> StringQueryModel {
        StringQueryModel {
            model: self.appended(segment),
        }
    }

    /// An integer-valued attribute.
    #[must_use]
    pub fn long(&self, segment: &str) -> LongQueryModel {
        LongQueryModel {
            model: self.appended(segment),
        }
    }

    /// A boolean-valued attribute.
    #[must_use]
    pub fn boolean(&self, segment: &str) -> BooleanQueryModel {
        BooleanQueryModel {
            model: self.appended(segment),
        }
    }

    /// A timestamp-valued attribute (`createdAt`, `lastModifiedAt`, ...).
    #[must_use]
    pub fn timestamp(&self, segment: &str) -> TimestampQueryModel {
        TimestampQueryModel {
            model: self.appended(segment),
        }
    }

    /// A localized-string-valued attribute.
    #[must_use]
    pub fn localized_string(&self, segment: &str) -> LocalizedStringQueryModel {
        LocalizedStringQueryModel {
            model: self.appended(segment),
        }
    }

    /// A reference-valued attribute.
    #[must_use]
    pub fn reference(&self, segment: &str) -> ReferenceQueryModel {
        ReferenceQueryModel {
            model: self.appended(segment),
        }
    }

    /// The `id` attribute every resource carries.
    #[must_use]
    pub fn id(&self) -> StringQueryModel {
        self.string("id")
    }

    /// The `key` attribute.
    #[must_use]
    pub fn key(&self) -> StringQueryModel {
        self.string("key")
    }

    /// The `version` attribute.
    #[must_use]
    pub fn version(&self) -> LongQueryModel {
        self.long("version")
    }

    /// The `createdAt` attribute.
    #[must_use]
    pub fn created_at(&self) -> TimestampQueryModel {
        self.timestamp("createdAt")
    }

    /// The `lastModifiedAt` attribute.
    #[must_use]
    pub fn last_modified_at(&self) -> TimestampQueryModel {
        self.timestamp("lastModifiedAt")
    }
}

macro_rules! defined_predicates {
    () => {
        /// Matches resources where this attribute is present.
        #[must_use]
        pub fn is_defined(&self) -> QueryPredicate {
            QueryPredicate::from_path(&self.model.segments, "is defined")
        }

        /// Matches resources where this attribute is absent.
        #[must_use]
        pub fn is_not_defined(&self) -> QueryPredicate {
            QueryPredicate::from_path(&self.model.segments, "is not defined")
        }

        /// Sorts ascending by this attribute.
        #[must_use]
        pub fn sort_asc(&self) -> QuerySort {
            QuerySort::new(self.model.sort_path(), SortDirection::Asc)
        }

        /// Sorts descending by this attribute.
        #[must_use]
        pub fn sort_desc(&self) -> QuerySort {
            QuerySort::new(self.model.sort_path(), SortDirection::Desc)
        }
    };
}

/// Query model for string attributes.
#[derive(Clone, Debug)]
pub struct StringQueryModel {
    model: QueryModel,
}

impl StringQueryModel {
    /// `path = "value"`
    #[must_use]
    pub fn eq(&self, value: &str) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("= {}", quote(value)))
    }

    /// `path != "value"`
    #[must_use]
    pub fn ne(&self, value: &str) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("!= {}", quote(value)))
    }

    /// `path in ("a", "b")`
    #[must_use]
    pub fn is_in<I, S>(&self, values: I) -> QueryPredicate
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rendered: Vec<String> = values.into_iter().map(|v| quote(v.as_ref())).collect();
        QueryPredicate::from_path(
            &self.model.segments,
            &format!("in ({})", rendered.join(", ")),
        )
    }

    defined_predicates!();
}

/// Query model for integer attributes.
#[derive(Clone, Debug)]
pub struct LongQueryModel {
    model: QueryModel,
}

impl LongQueryModel {
    /// `path = value`
    #[must_use]
    pub fn eq(&self, value: i64) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("= {value}"))
    }

    /// `path != value`
    #[must_use]
    pub fn ne(&self, value: i64) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("!= {value}"))
    }

    /// `path > value`
    #[must_use]
    pub fn gt(&self, value: i64) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("> {value}"))
    }

    /// `path < value`
    #[must_use]
    pub fn lt(&self, value: i64) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("< {value}"))
    }

    /// `path >= value`
    #[must_use]
    pub fn gte(&self, value: i64) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!(">= {value}"))
    }

    /// `path <= value`
    #[must_use]
    pub fn lte(&self, value: i64) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("<= {value}"))
    }

    /// `path in (1, 2)`
    #[must_use]
    pub fn is_in<I>(&self, values: I) -> QueryPredicate
    where
        I: IntoIterator<Item = i64>,
    {
        let rendered: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        QueryPredicate::from_path(
            &self.model.segments,
            &format!("in ({})", rendered.join(", ")),
        )
    }

    defined_predicates!();
}

/// Query model for boolean attributes.
#[derive(Clone, Debug)]
pub struct BooleanQueryModel {
    model: QueryModel,
}

impl BooleanQueryModel {
    /// `path = true|false`
    #[must_use]
    pub fn eq(&self, value: bool) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("= {value}"))
    }

    defined_predicates!();
}

/// Query model for timestamp attributes.
///
/// Timestamps render as quoted ISO 8601 in UTC, the format the platform
/// stores and compares.
#[derive(Clone, Debug)]
pub struct TimestampQueryModel {
    model: QueryModel,
}

impl TimestampQueryModel {
    fn render(value: DateTime<Utc>) -> String {
        quote(&value.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
    }

    /// `path = "2024-01-01T00:00:00.000Z"`
    #[must_use]
    pub fn eq(&self, value: DateTime<Utc>) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("= {}", Self::render(value)))
    }

    /// `path > "..."`
    #[must_use]
    pub fn gt(&self, value: DateTime<Utc>) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("> {}", Self::render(value)))
    }

    /// `path < "..."`
    #[must_use]
    pub fn lt(&self, value: DateTime<Utc>) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("< {}", Self::render(value)))
    }

    /// `path >= "..."`
    #[must_use]
    pub fn gte(&self, value: DateTime<Utc>) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!(">= {}", Self::render(value)))
    }

    /// `path <= "..."`
    #[must_use]
    pub fn lte(&self, value: DateTime<Utc>) -> QueryPredicate {
        QueryPredicate::from_path(&self.model.segments, &format!("<= {}", Self::render(value)))
    }

    defined_predicates!();
}

/// Query model for localized string attributes.
#[derive(Clone, Debug)]
pub struct LocalizedStringQueryModel {
    model: QueryModel,
}

impl LocalizedStringQueryModel {
    /// Descends into a specific locale, e.g. `name(en = "shirt")`.
    #[must_use]
    pub fn locale(&self, locale: &str) -> StringQueryModel {
        self.model.string(locale)
    }
}

/// Query model for reference attributes.
#[derive(Clone, Debug)]
pub struct ReferenceQueryModel {
    model: QueryModel,
}

impl ReferenceQueryModel {
    /// The `id` of the referenced resource.
    #[must_use]
    pub fn id(&self) -> StringQueryModel {
        self.model.string("id")
    }

    /// `path(typeId = "...")`
    #[must_use]
    pub fn type_id(&self) -> StringQueryModel {
        self.model.string("typeId")
    }

    /// Matches references to any of the given resource IDs.
    #[must_use]
    pub fn is_in_ids<I, S>(&self, ids: I) -> QueryPredicate
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.id().is_in(ids)
    }

    defined_predicates!();
}
