//! Settlements resource. Read-only.

use super::{ResourceClient, ResourceDescriptor, Transport};
use crate::errors::Result;
use crate::request::Params;
use serde_json::Value;
use std::sync::Arc;

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    base: "settlements",
    id_field: "settlement_id",
};

/// Operations on the `/settlements` resource family.
pub struct Settlements {
    inner: ResourceClient,
}

impl Settlements {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, DESCRIPTOR),
        }
    }

    /// Fetches a settlement by ID.
    pub async fn fetch(&self, settlement_id: &str) -> Result<Value> {
        self.inner.fetch(settlement_id).await
    }

    /// Lists settlements with normalized pagination and date filters.
    pub async fn all(&self, params: Params) -> Result<Value> {
        self.inner.list(params).await
    }
}
