//! # payrail
//!
//! Rust client for the PayRail payment-gateway REST API.
//!
//! The library is a thin, resource-oriented wrapper: each resource family
//! (orders, customers, plans, payment links, ...) maps method calls to URL
//! templates and light parameter normalization, then delegates to a shared
//! HTTP transport. There is no retry policy, no caching and no pagination
//! traversal — resilience belongs to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use payrail::{Client, request::Params};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("key_id", "key_secret");
//!
//! // Create an order; params are forwarded verbatim as the JSON body.
//! let mut params = Params::new();
//! params.insert("amount".into(), json!(50000));
//! params.insert("currency".into(), json!("INR"));
//! let order = client.orders.create(params).await?;
//! println!("created {}", order["id"]);
//!
//! // List with normalized filters: human-readable dates become epoch
//! // seconds, count defaults to 10 and skip to 0.
//! let mut filters = Params::new();
//! filters.insert("from".into(), json!("Aug 25, 2016"));
//! let orders = client.orders.all(filters).await?;
//! println!("{orders}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Validation
//!
//! Operations that need a resource ID (or another mandatory identifier such
//! as the notification `medium`) validate it first and reject with
//! [`PayrailError::MissingField`] before any network call. Unparsable
//! `from`/`to` date filters reject with [`PayrailError::InvalidDate`].
//! Transport-level failures pass through unmodified.
//!
//! ## Concurrency
//!
//! Every call constructs its own request descriptor and performs exactly one
//! transport round trip; the client holds no shared mutable state, so
//! concurrent calls need no coordination.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod errors;
pub mod request;
pub mod resources;
pub mod transport;

// Re-export commonly used items
pub use client::{Client, ClientBuilder};
pub use errors::{PayrailError, Result};
pub use request::{ApiRequest, Method, Params, Payload};
pub use transport::{HttpTransport, Transport, DEFAULT_BASE_URL};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_accessibility() {
        // Ensure the public surface is reachable
        let _ = Client::new("key", "secret");
        let _ = HttpTransport::new("key", "secret");
        let _ = ApiRequest::get("orders", Params::new());
    }
}
