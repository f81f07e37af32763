//! Items resource.

use super::{ResourceClient, ResourceDescriptor, Transport};
use crate::errors::Result;
use crate::request::{Method, Params};
use serde_json::Value;
use std::sync::Arc;

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    base: "items",
    id_field: "item_id",
};

/// Operations on the `/items` resource family.
pub struct Items {
    inner: ResourceClient,
}

impl Items {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, DESCRIPTOR),
        }
    }

    /// Creates an item.
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner.create(params).await
    }

    /// Fetches an item by ID.
    pub async fn fetch(&self, item_id: &str) -> Result<Value> {
        self.inner.fetch(item_id).await
    }

    /// Lists items with normalized pagination and date filters.
    pub async fn all(&self, params: Params) -> Result<Value> {
        self.inner.list(params).await
    }

    /// Updates an item (`PATCH /items/{id}`).
    pub async fn edit(&self, item_id: &str, params: Params) -> Result<Value> {
        self.inner.update(item_id, params, Method::Patch).await
    }

    /// Deletes an item (`DELETE /items/{id}`).
    pub async fn delete(&self, item_id: &str) -> Result<Value> {
        let id = self.inner.id(item_id)?;
        self.inner.delete_segments(&[id]).await
    }
}
