//! Refunds resource.

use super::{ResourceClient, ResourceDescriptor, Transport};
use crate::errors::Result;
use crate::request::{Method, Params};
use serde_json::Value;
use std::sync::Arc;

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    base: "refunds",
    id_field: "refund_id",
};

/// Operations on the `/refunds` resource family.
pub struct Refunds {
    inner: ResourceClient,
}

impl Refunds {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, DESCRIPTOR),
        }
    }

    /// Fetches a refund by ID.
    pub async fn fetch(&self, refund_id: &str) -> Result<Value> {
        self.inner.fetch(refund_id).await
    }

    /// Lists refunds with normalized pagination and date filters.
    pub async fn all(&self, params: Params) -> Result<Value> {
        self.inner.list(params).await
    }

    /// Updates a refund's notes (`PATCH /refunds/{id}`).
    pub async fn edit(&self, refund_id: &str, params: Params) -> Result<Value> {
        self.inner.update(refund_id, params, Method::Patch).await
    }
}
