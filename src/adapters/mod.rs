//! Adapter interfaces for the remote catalog API.
//!
//! The catalog never talks to the network directly; it goes through a
//! [`Transport`], which keeps the aggregation logic testable against
//! fixtures.

pub mod http;
pub mod pokeapi;

use async_trait::async_trait;
use serde_json::Value;

use crate::catalog::CatalogError;

// Re-export the HTTP transport
pub use http::HttpTransport;

/// Trait for fetching JSON resources by absolute URL
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET a resource and parse its body as JSON.
    ///
    /// A non-success status must surface as [`CatalogError::Status`].
    async fn get_json(&self, url: &str) -> Result<Value, CatalogError>;
}
