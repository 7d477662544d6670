//! Typed resource models and the endpoint operations over them.
//!
//! Each resource module holds the representation type, its draft, its
//! update action enum, and a typed query model entry point. The shared
//! plumbing lives in [`resource`] (the [`Resource`] trait), [`common`]
//! (value types) and [`errors`] (status code mapping).

pub mod cart;
pub mod category;
mod common;
pub mod customer;
pub mod errors;
pub mod order;
pub mod product;
mod resource;
pub mod shipping_method;

pub use common::{Address, LocalizedString, Money, Reference, ResourceIdentifier};
pub use errors::{ErrorDetail, ErrorResponseBody, ResourceError};
pub use resource::Resource;
