//! Query construction for the platform's query endpoints.

use crate::queries::expansion::ExpansionPath;
use crate::queries::predicate::QueryPredicate;
use crate::queries::sort::QuerySort;

/// A query against a resource endpoint.
///
/// Collects predicates, sorts, expansion paths and paging options and
/// renders them into the query parameters the platform expects. Multiple
/// predicates become repeated `where` parameters and are combined with
/// logical AND by the platform; sorts and expansions repeat the same way.
///
/// # Example
///
/// ```rust
/// use commercetools_api::queries::{QueryModel, QuerySort, ResourceQuery};
///
/// let query = ResourceQuery::new()
///     .with_predicate(QueryModel::root().key().eq("shirt"))
///     .with_sort(QuerySort::desc("createdAt"))
///     .with_limit(50);
///
/// let params = query.to_query_params();
/// assert!(params.contains(&("where".to_string(), r#"key = "shirt""#.to_string())));
/// assert!(params.contains(&("limit".to_string(), "50".to_string())));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ResourceQuery {
    predicates: Vec<QueryPredicate>,
    sorts: Vec<QuerySort>,
    expansions: Vec<ExpansionPath>,
    limit: Option<u64>,
    offset: Option<u64>,
    with_total: Option<bool>,
}

impl ResourceQuery {
    /// Creates an empty query matching all resources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate. Repeated predicates are ANDed by the platform.
    #[must_use]
    pub fn with_predicate(mut self, predicate: QueryPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Adds a sort expression. Later sorts break ties of earlier ones.
    #[must_use]
    pub fn with_sort(mut self, sort: QuerySort) -> Self {
        self.sorts.push(sort);
        self
    }

    /// Adds a reference expansion path.
    #[must_use]
    pub fn with_expansion(mut self, path: impl Into<ExpansionPath>) -> Self {
        self.expansions.push(path.into());
        self
    }

    /// Sets the page size. The platform caps this at 500 and defaults to 20.
    #[must_use]
    pub const fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the offset into the full result set.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Controls whether the platform computes the `total` of the result.
    ///
    /// Disabling the total makes deep queries cheaper.
    #[must_use]
    pub const fn with_total(mut self, with_total: bool) -> Self {
        self.with_total = Some(with_total);
        self
    }

    /// Renders this query into ordered query parameters.
    #[must_use]
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        for predicate in &self.predicates {
            params.push(("where".to_string(), predicate.to_string()));
        }
        for sort in &self.sorts {
            params.push(("sort".to_string(), sort.to_string()));
        }
        for expansion in &self.expansions {
            params.push(("expand".to_string(), expansion.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(with_total) = self.with_total {
            params.push(("withTotal".to_string(), with_total.to_string()));
        }
        params
    }
}
