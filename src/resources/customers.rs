//! Customers resource, including saved-token sub-resources.

use super::{ResourceClient, ResourceDescriptor, Transport};
use crate::errors::Result;
use crate::request::{require_field, Method, Params};
use serde_json::Value;
use std::sync::Arc;

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    base: "customers",
    id_field: "customer_id",
};

/// Operations on the `/customers` resource family.
pub struct Customers {
    inner: ResourceClient,
}

impl Customers {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, DESCRIPTOR),
        }
    }

    /// Creates a customer.
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner.create(params).await
    }

    /// Fetches a customer by ID.
    pub async fn fetch(&self, customer_id: &str) -> Result<Value> {
        self.inner.fetch(customer_id).await
    }

    /// Lists customers with normalized pagination and date filters.
    pub async fn all(&self, params: Params) -> Result<Value> {
        self.inner.list(params).await
    }

    /// Updates a customer (`PUT /customers/{id}`).
    pub async fn edit(&self, customer_id: &str, params: Params) -> Result<Value> {
        self.inner.update(customer_id, params, Method::Put).await
    }

    /// Fetches all saved tokens of a customer.
    pub async fn tokens(&self, customer_id: &str) -> Result<Value> {
        let id = self.inner.id(customer_id)?;
        self.inner.get_segments(&[id, "tokens"]).await
    }

    /// Fetches one saved token of a customer.
    pub async fn token(&self, customer_id: &str, token_id: &str) -> Result<Value> {
        let id = self.inner.id(customer_id)?;
        let token_id = require_field(token_id, "token_id")?;
        self.inner.get_segments(&[id, "tokens", token_id]).await
    }

    /// Deletes one saved token of a customer.
    pub async fn delete_token(&self, customer_id: &str, token_id: &str) -> Result<Value> {
        let id = self.inner.id(customer_id)?;
        let token_id = require_field(token_id, "token_id")?;
        self.inner.delete_segments(&[id, "tokens", token_id]).await
    }
}
