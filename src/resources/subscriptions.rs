//! Subscriptions resource.

use super::{ResourceClient, ResourceDescriptor, Transport};
use crate::errors::Result;
use crate::request::Params;
use serde_json::Value;
use std::sync::Arc;

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    base: "subscriptions",
    id_field: "subscription_id",
};

/// Operations on the `/subscriptions` resource family.
pub struct Subscriptions {
    inner: ResourceClient,
}

impl Subscriptions {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, DESCRIPTOR),
        }
    }

    /// Creates a subscription against an existing plan.
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner.create(params).await
    }

    /// Fetches a subscription by ID.
    pub async fn fetch(&self, subscription_id: &str) -> Result<Value> {
        self.inner.fetch(subscription_id).await
    }

    /// Lists subscriptions with normalized pagination and date filters.
    pub async fn all(&self, params: Params) -> Result<Value> {
        self.inner.list(params).await
    }

    /// Cancels a subscription (`POST /subscriptions/{id}/cancel`). Options
    /// such as cancel-at-cycle-end go in `params`.
    pub async fn cancel(&self, subscription_id: &str, params: Params) -> Result<Value> {
        let id = self.inner.id(subscription_id)?;
        self.inner.post_segments(&[id, "cancel"], params).await
    }
}
