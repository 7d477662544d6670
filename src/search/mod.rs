//! Product search: filters, facets and the search request builder.
//!
//! Search is distinct from querying: it runs against the search index of
//! product projections, speaks a `path:value` filter language instead of
//! predicates, and can calculate facets over the matched set.

mod facet;
mod filter;
mod product_search;

pub use facet::{
    FacetExpression, FacetResult, FilteredFacetResult, RangeFacetResult, RangeStats,
    TermFacetResult, TermStats,
};
pub use filter::{
    FilterExpression, LocalizedStringSearchModel, NumberSearchModel, SearchModel,
    StringSearchModel,
};
pub use product_search::{PagedSearchResult, ProductProjectionSearch};
