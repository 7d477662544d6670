//! Typed query DSL for the platform's query endpoints.
//!
//! The pieces fit together like this: a [`QueryModel`] mirrors the shape of
//! a resource and yields [`QueryPredicate`]s from its typed leaves; a
//! [`ResourceQuery`] collects predicates, [`QuerySort`]s, [`ExpansionPath`]s
//! and paging options and renders the platform's query parameters; query
//! responses arrive as [`PagedQueryResult`] envelopes.

mod expansion;
mod model;
mod paged;
mod predicate;
mod query;
mod sort;

pub use expansion::ExpansionPath;
pub use model::{
    BooleanQueryModel, LocalizedStringQueryModel, LongQueryModel, QueryModel,
    ReferenceQueryModel, StringQueryModel, TimestampQueryModel,
};
pub use paged::PagedQueryResult;
pub use predicate::QueryPredicate;
pub use query::ResourceQuery;
pub use sort::{QuerySort, SortDirection};
