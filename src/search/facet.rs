//! Facet expressions and facet results for the product search endpoint.

use std::fmt;

use serde::Deserialize;

use crate::search::filter::SearchModel;

/// A facet expression for the `facet` parameter.
///
/// A term facet is just the attribute path; a range facet appends
/// `:range(a to b)`. The endpoint returns one [`FacetResult`] per
/// expression, keyed by the expression string.
///
/// # Example
///
/// ```rust
/// use commercetools_api::search::{FacetExpression, SearchModel};
///
/// let model = SearchModel::root().nested("variants").nested("attributes");
/// let facet = FacetExpression::terms(&model.nested("color"));
/// assert_eq!(facet.to_string(), "variants.attributes.color");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetExpression(String);

impl FacetExpression {
    /// Creates a facet from an already-rendered expression.
    #[must_use]
    pub fn raw(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    /// A term facet counting the distinct values at the given path.
    #[must_use]
    pub fn terms(model: &SearchModel) -> Self {
        Self(model.path())
    }

    /// A range facet counting values within the bounds. `None` renders as `*`.
    #[must_use]
    pub fn range(model: &SearchModel, from: Option<i64>, to: Option<i64>) -> Self {
        let from = from.map_or_else(|| "*".to_string(), |v| v.to_string());
        let to = to.map_or_else(|| "*".to_string(), |v| v.to_string());
        Self(format!("{}:range({from} to {to})", model.path()))
    }
}

impl fmt::Display for FacetExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One term bucket of a [`TermFacetResult`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TermStats {
    /// The attribute value of this bucket.
    pub term: serde_json::Value,
    /// How many products carry this value.
    pub count: u64,
}

/// Result of a term facet.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TermFacetResult {
    /// Data type of the faceted attribute (e.g. `text`, `number`).
    #[serde(default)]
    pub data_type: Option<String>,
    /// Products without a value for the attribute.
    pub missing: u64,
    /// Products counted across all buckets.
    pub total: u64,
    /// Products whose value fell outside the returned buckets.
    pub other: u64,
    /// The term buckets.
    pub terms: Vec<TermStats>,
}

/// One range bucket of a [`RangeFacetResult`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RangeStats {
    /// Lower bound of the range.
    #[serde(default)]
    pub from: Option<f64>,
    /// Upper bound of the range.
    #[serde(default)]
    pub to: Option<f64>,
    /// How many products fall into this range.
    pub count: u64,
    /// Smallest value in this range.
    #[serde(default)]
    pub min: Option<f64>,
    /// Largest value in this range.
    #[serde(default)]
    pub max: Option<f64>,
    /// Mean of the values in this range.
    #[serde(default)]
    pub mean: Option<f64>,
}

/// Result of a range facet.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RangeFacetResult {
    /// The range buckets.
    pub ranges: Vec<RangeStats>,
}

/// Result of a filtered facet.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FilteredFacetResult {
    /// How many products match the facet's filter.
    pub count: u64,
}

/// A facet result, discriminated by its `type` field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FacetResult {
    /// A term facet result.
    Terms(TermFacetResult),
    /// A range facet result.
    Range(RangeFacetResult),
    /// A filtered facet result.
    Filter(FilteredFacetResult),
}
