//! # commercetools API Rust SDK
//!
//! A Rust SDK for the commercetools platform API, providing type-safe
//! configuration, OAuth client credentials authentication, typed resource
//! models, a query predicate DSL, product search, and update commands with
//! optimistic concurrency.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`Config`] and [`ConfigBuilder`]
//! - Validated newtypes for the project key, API credentials and host URLs
//! - OAuth 2.0 client credentials flow via [`auth::obtain_access_token`]
//! - Async HTTP client with retry logic and correlation ID tracing
//! - A [`ProjectClient`] scoping all requests to one project
//! - Typed resource models with CRUD via the [`resources::Resource`] trait
//! - A typed query DSL rendering the platform's predicate language
//! - Product projection search with filters and facets
//!
//! ## Quick Start
//!
//! ```rust
//! use commercetools_api::{Config, ProjectKey, ClientId, ClientSecret};
//!
//! // Create configuration using the builder pattern
//! let config = Config::builder()
//!     .project_key(ProjectKey::new("my-shop").unwrap())
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Authentication
//!
//! API clients authenticate with the OAuth 2.0 client credentials grant.
//! The default scope is `manage_project:{project_key}`:
//!
//! ```rust,ignore
//! use commercetools_api::auth::obtain_access_token;
//!
//! let token = obtain_access_token(&config).await?;
//! let client = commercetools_api::ProjectClient::new(&config, token.value());
//! ```
//!
//! ## Fetching and Querying Resources
//!
//! ```rust,ignore
//! use commercetools_api::resources::{Resource, product::Product};
//! use commercetools_api::queries::{QuerySort, ResourceQuery};
//!
//! // Fetch by ID
//! let product = Product::by_id(&client, "product-id").await?;
//!
//! // Query with typed predicates
//! let query = ResourceQuery::new()
//!     .with_predicate(
//!         Product::query_model()
//!             .master_data()
//!             .current()
//!             .slug()
//!             .locale("en")
//!             .eq("shirt"),
//!     )
//!     .with_sort(QuerySort::desc("createdAt"))
//!     .with_limit(50);
//!
//! let page = Product::query(&client, &query).await?;
//! if let Some(total) = page.total {
//!     println!("{} of {total} products", page.count);
//! }
//! ```
//!
//! ## Updating Resources
//!
//! Updates are commands carrying the expected version and a list of update
//! actions; a stale version yields
//! [`ResourceError::ConcurrentModification`](resources::ResourceError::ConcurrentModification):
//!
//! ```rust,ignore
//! use commercetools_api::resources::product::ProductUpdateAction;
//! use commercetools_api::resources::LocalizedString;
//!
//! let updated = Product::update(
//!     &client,
//!     &product.id,
//!     product.version,
//!     vec![
//!         ProductUpdateAction::ChangeName {
//!             name: LocalizedString::of("en", "Better Shirt"),
//!         },
//!         ProductUpdateAction::Publish,
//!     ],
//! )
//! .await?;
//! ```
//!
//! ## Searching Products
//!
//! ```rust,ignore
//! use commercetools_api::resources::product::ProductProjection;
//! use commercetools_api::search::{ProductProjectionSearch, SearchModel};
//!
//! let color = SearchModel::root()
//!     .nested("variants")
//!     .nested("attributes")
//!     .string("color");
//!
//! let search = ProductProjectionSearch::new()
//!     .with_text("en", "shirt")
//!     .with_filter(color.is("red"));
//!
//! let page = ProductProjection::search(&client, &search).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Optimistic concurrency**: Every mutation carries the expected version

pub mod auth;
pub mod clients;
pub mod commands;
pub mod config;
pub mod error;
pub mod queries;
pub mod resources;
pub mod search;

// Re-export public types at crate root for convenience
pub use config::{ApiUrl, ClientId, ClientSecret, Config, ConfigBuilder, ProjectKey};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, ProjectClient,
};

// Re-export auth types for convenience
pub use auth::{obtain_access_token, AccessToken, AuthError};
