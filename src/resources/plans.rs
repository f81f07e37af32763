//! Plans resource.

use super::{ResourceClient, ResourceDescriptor, Transport};
use crate::errors::Result;
use crate::request::Params;
use serde_json::Value;
use std::sync::Arc;

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    base: "plans",
    id_field: "plan_id",
};

/// Operations on the `/plans` resource family.
pub struct Plans {
    inner: ResourceClient,
}

impl Plans {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, DESCRIPTOR),
        }
    }

    /// Creates a plan.
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner.create(params).await
    }

    /// Fetches a plan by ID.
    pub async fn fetch(&self, plan_id: &str) -> Result<Value> {
        self.inner.fetch(plan_id).await
    }

    /// Lists plans with normalized pagination and date filters.
    pub async fn all(&self, params: Params) -> Result<Value> {
        self.inner.list(params).await
    }
}
