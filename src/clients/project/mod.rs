//! Project-scoped client.

mod client;

pub use client::ProjectClient;
