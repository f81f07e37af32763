//! Orders resource.
//!
//! An order represents an intent to pay; payments are made against it.

use super::{ResourceClient, ResourceDescriptor, Transport};
use crate::errors::Result;
use crate::request::{Method, Params};
use serde_json::Value;
use std::sync::Arc;

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    base: "orders",
    id_field: "order_id",
};

/// Operations on the `/orders` resource family.
pub struct Orders {
    inner: ResourceClient,
}

impl Orders {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, DESCRIPTOR),
        }
    }

    /// Creates an order. All params, including nested `notes`, are forwarded
    /// verbatim as the request body.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use payrail::{Client, request::Params};
    /// use serde_json::json;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("key_id", "key_secret");
    ///
    /// let mut params = Params::new();
    /// params.insert("amount".into(), json!(50000));
    /// params.insert("currency".into(), json!("INR"));
    ///
    /// let order = client.orders.create(params).await?;
    /// println!("created {}", order["id"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner.create(params).await
    }

    /// Fetches an order by ID. Rejects with a missing-field error, before any
    /// network call, if the ID is empty.
    pub async fn fetch(&self, order_id: &str) -> Result<Value> {
        self.inner.fetch(order_id).await
    }

    /// Lists orders. `from`/`to` date filters are normalized to epoch
    /// seconds; `count` defaults to 10 and `skip` to 0.
    pub async fn all(&self, params: Params) -> Result<Value> {
        self.inner.list(params).await
    }

    /// Updates an order's mutable fields (`PATCH /orders/{id}`).
    pub async fn edit(&self, order_id: &str, params: Params) -> Result<Value> {
        self.inner.update(order_id, params, Method::Patch).await
    }

    /// Fetches the payments made against an order.
    pub async fn payments(&self, order_id: &str) -> Result<Value> {
        let id = self.inner.id(order_id)?;
        self.inner.get_segments(&[id, "payments"]).await
    }
}
