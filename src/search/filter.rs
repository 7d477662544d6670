//! Search filter expressions.
//!
//! The product search endpoint speaks a filter language distinct from the
//! query predicate language: a filter is `path:value`, ranges are
//! `path:range(a to b)`, and paths use dot notation. Filters are built
//! through [`SearchModel`] and its typed leaves.

use std::fmt;

/// A rendered search filter expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterExpression(String);

impl FilterExpression {
    /// Creates a filter from an already-rendered expression.
    #[must_use]
    pub fn raw(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A path into the searchable attributes of a product projection.
///
/// # Example
///
/// ```rust
/// use commercetools_api::search::SearchModel;
///
/// let filter = SearchModel::root()
///     .nested("variants")
///     .nested("attributes")
///     .string("color")
///     .is("red");
///
/// assert_eq!(filter.to_string(), r#"variants.attributes.color:"red""#);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SearchModel {
    segments: Vec<String>,
}

impl SearchModel {
    /// Creates a model rooted at the product projection.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    fn appended(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Returns the dot-joined path of this model.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join(".")
    }

    /// Descends into a nested attribute.
    #[must_use]
    pub fn nested(&self, segment: &str) -> Self {
        self.appended(segment)
    }

    /// A string-valued searchable attribute.
    #[must_use]
    pub fn string(&self, segment: &str) -> StringSearchModel {
        StringSearchModel {
            model: self.appended(segment),
        }
    }

    /// A number-valued searchable attribute.
    #[must_use]
    pub fn number(&self, segment: &str) -> NumberSearchModel {
        NumberSearchModel {
            model: self.appended(segment),
        }
    }

    /// A localized-string-valued searchable attribute.
    #[must_use]
    pub fn localized_string(&self, segment: &str) -> LocalizedStringSearchModel {
        LocalizedStringSearchModel {
            model: self.appended(segment),
        }
    }
}

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Term filters over string attributes.
#[derive(Clone, Debug)]
pub struct StringSearchModel {
    model: SearchModel,
}

impl StringSearchModel {
    /// Matches products where the attribute has exactly this value.
    #[must_use]
    pub fn is(&self, value: &str) -> FilterExpression {
        FilterExpression(format!("{}:{}", self.model.path(), quote(value)))
    }

    /// Matches products where the attribute has any of the given values.
    ///
    /// Renders a single expression with comma-separated values.
    #[must_use]
    pub fn contains_any<I, S>(&self, values: I) -> FilterExpression
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rendered: Vec<String> = values.into_iter().map(|v| quote(v.as_ref())).collect();
        FilterExpression(format!("{}:{}", self.model.path(), rendered.join(",")))
    }

    /// Matches products where the attribute has all of the given values.
    ///
    /// Renders one expression per value; the endpoint ANDs repeated filters
    /// on the same parameter.
    #[must_use]
    pub fn contains_all<I, S>(&self, values: I) -> Vec<FilterExpression>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values.into_iter().map(|v| self.is(v.as_ref())).collect()
    }

    /// Matches products where the attribute is present.
    #[must_use]
    pub fn exists(&self) -> FilterExpression {
        FilterExpression(format!("{}:exists", self.model.path()))
    }

    /// Matches products where the attribute is absent.
    #[must_use]
    pub fn missing(&self) -> FilterExpression {
        FilterExpression(format!("{}:missing", self.model.path()))
    }
}

/// Term and range filters over numeric attributes.
#[derive(Clone, Debug)]
pub struct NumberSearchModel {
    model: SearchModel,
}

impl NumberSearchModel {
    /// Matches products where the attribute has exactly this value.
    #[must_use]
    pub fn is(&self, value: i64) -> FilterExpression {
        FilterExpression(format!("{}:{value}", self.model.path()))
    }

    /// Matches products where the attribute has any of the given values.
    #[must_use]
    pub fn contains_any<I>(&self, values: I) -> FilterExpression
    where
        I: IntoIterator<Item = i64>,
    {
        let rendered: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        FilterExpression(format!("{}:{}", self.model.path(), rendered.join(",")))
    }

    /// Matches values in the given range. `None` bounds render as `*`.
    #[must_use]
    pub fn range(&self, from: Option<i64>, to: Option<i64>) -> FilterExpression {
        let from = from.map_or_else(|| "*".to_string(), |v| v.to_string());
        let to = to.map_or_else(|| "*".to_string(), |v| v.to_string());
        FilterExpression(format!("{}:range({from} to {to})", self.model.path()))
    }

    /// Matches values greater than or equal to `from`.
    #[must_use]
    pub fn at_least(&self, from: i64) -> FilterExpression {
        self.range(Some(from), None)
    }

    /// Matches values less than or equal to `to`.
    #[must_use]
    pub fn at_most(&self, to: i64) -> FilterExpression {
        self.range(None, Some(to))
    }
}

/// Search model for localized string attributes.
#[derive(Clone, Debug)]
pub struct LocalizedStringSearchModel {
    model: SearchModel,
}

impl LocalizedStringSearchModel {
    /// Descends into a specific locale, e.g. `name.en`.
    #[must_use]
    pub fn locale(&self, locale: &str) -> StringSearchModel {
        self.model.string(locale)
    }
}
