//! Product projection search.
//!
//! The `product-projections/search` endpoint combines full-text search,
//! filtering and faceting. [`ProductProjectionSearch`] builds the request
//! parameters; [`PagedSearchResult`] is the response envelope with facet
//! results alongside the regular page fields.

use std::collections::HashMap;

use serde::Deserialize;

use crate::queries::{ExpansionPath, QuerySort};
use crate::search::facet::{FacetExpression, FacetResult};
use crate::search::filter::FilterExpression;

/// A search request against the product projection search endpoint.
///
/// The three filter scopes differ in when they are applied:
/// - `filter` restricts results after facets are calculated
/// - `filter.query` restricts both results and facet counts
/// - `filter.facets` restricts facet counts only
///
/// # Example
///
/// ```rust
/// use commercetools_api::search::{ProductProjectionSearch, SearchModel};
///
/// let color = SearchModel::root()
///     .nested("variants")
///     .nested("attributes")
///     .string("color");
///
/// let search = ProductProjectionSearch::new()
///     .with_text("en", "shirt")
///     .with_filter(color.is("red"))
///     .with_limit(50);
///
/// let params = search.to_query_params();
/// assert!(params.contains(&("text.en".to_string(), "shirt".to_string())));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProductProjectionSearch {
    text: Option<(String, String)>,
    fuzzy: Option<bool>,
    filters: Vec<FilterExpression>,
    query_filters: Vec<FilterExpression>,
    facet_filters: Vec<FilterExpression>,
    facets: Vec<FacetExpression>,
    sorts: Vec<QuerySort>,
    expansions: Vec<ExpansionPath>,
    staged: bool,
    mark_matching_variants: Option<bool>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl ProductProjectionSearch {
    /// The endpoint path of the product projection search.
    pub const ENDPOINT: &'static str = "product-projections/search";

    /// Creates an empty search matching all current product projections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the full-text search term for a locale (`text.{locale}`).
    #[must_use]
    pub fn with_text(mut self, locale: &str, term: impl Into<String>) -> Self {
        self.text = Some((locale.to_string(), term.into()));
        self
    }

    /// Enables or disables fuzzy matching for the text search.
    #[must_use]
    pub const fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = Some(fuzzy);
        self
    }

    /// Adds a `filter` expression (applied after facet calculation).
    #[must_use]
    pub fn with_filter(mut self, filter: FilterExpression) -> Self {
        self.filters.push(filter);
        self
    }

    /// Adds several `filter` expressions at once.
    #[must_use]
    pub fn with_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = FilterExpression>,
    {
        self.filters.extend(filters);
        self
    }

    /// Adds a `filter.query` expression (applied to results and facets).
    #[must_use]
    pub fn with_query_filter(mut self, filter: FilterExpression) -> Self {
        self.query_filters.push(filter);
        self
    }

    /// Adds a `filter.facets` expression (applied to facet counts only).
    #[must_use]
    pub fn with_facet_filter(mut self, filter: FilterExpression) -> Self {
        self.facet_filters.push(filter);
        self
    }

    /// Adds a facet expression.
    #[must_use]
    pub fn with_facet(mut self, facet: FacetExpression) -> Self {
        self.facets.push(facet);
        self
    }

    /// Adds a sort expression.
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

    /// Searches staged projections instead of current ones.
    #[must_use]
    pub const fn with_staged(mut self, staged: bool) -> Self {
        self.staged = staged;
        self
    }

    /// Asks the platform to mark which variants matched the filters.
    #[must_use]
    pub const fn with_mark_matching_variants(mut self, mark: bool) -> Self {
        self.mark_matching_variants = Some(mark);
        self
    }

    /// Sets the page size.
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

    /// Renders this search into ordered query parameters.
    #[must_use]
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some((locale, term)) = &self.text {
            params.push((format!("text.{locale}"), term.clone()));
        }
        if let Some(fuzzy) = self.fuzzy {
            params.push(("fuzzy".to_string(), fuzzy.to_string()));
        }
        for filter in &self.filters {
            params.push(("filter".to_string(), filter.to_string()));
        }
        for filter in &self.query_filters {
            params.push(("filter.query".to_string(), filter.to_string()));
        }
        for filter in &self.facet_filters {
            params.push(("filter.facets".to_string(), filter.to_string()));
        }
        for facet in &self.facets {
            params.push(("facet".to_string(), facet.to_string()));
        }
        for sort in &self.sorts {
            params.push(("sort".to_string(), sort.to_string()));
        }
        for expansion in &self.expansions {
            params.push(("expand".to_string(), expansion.to_string()));
        }
        params.push(("staged".to_string(), self.staged.to_string()));
        if let Some(mark) = self.mark_matching_variants {
            params.push(("markMatchingVariants".to_string(), mark.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        params
    }
}

/// A page of search results with facets.
#[derive(Clone, Debug, Deserialize)]
pub struct PagedSearchResult<T> {
    /// The offset applied to this search.
    pub offset: u64,
    /// The limit applied to this search.
    #[serde(default)]
    pub limit: u64,
    /// The number of results in this page.
    pub count: u64,
    /// The total number of matching products, when the platform reports one.
    #[serde(default)]
    pub total: Option<u64>,
    /// The results of this page.
    pub results: Vec<T>,
    /// Facet results, keyed by facet expression.
    #[serde(default)]
    pub facets: HashMap<String, FacetResult>,
}

impl<T> PagedSearchResult<T> {
    /// Returns `true` if this is the first page of results.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.offset == 0
    }

    /// Returns `true` if this is the last page of results.
    ///
    /// Without a total count the page cannot see past itself, so it counts
    /// as the last one.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        match self.total {
            Some(total) => self.offset + self.count >= total,
            None => true,
        }
    }

    /// Returns the first result of this page, if any.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.results.first()
    }

    /// Returns the facet result for the given expression, if present.
    #[must_use]
    pub fn facet(&self, expression: &str) -> Option<&FacetResult> {
        self.facets.get(expression)
    }
}
