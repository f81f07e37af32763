//! Payment links resource.
//!
//! A payment link is a shareable URL that collects a payment; it can be
//! cancelled and re-notified over a chosen medium after creation.

use super::{ResourceClient, ResourceDescriptor, Transport};
use crate::errors::Result;
use crate::request::{require_field, Method, Params};
use serde_json::Value;
use std::sync::Arc;

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    base: "payment_links",
    id_field: "payment_link_id",
};

/// Operations on the `/payment_links` resource family.
pub struct PaymentLinks {
    inner: ResourceClient,
}

impl PaymentLinks {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, DESCRIPTOR),
        }
    }

    /// Creates a payment link. All params, including nested `notes`, are
    /// forwarded verbatim as the request body.
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner.create(params).await
    }

    /// Fetches a payment link by ID.
    pub async fn fetch(&self, payment_link_id: &str) -> Result<Value> {
        self.inner.fetch(payment_link_id).await
    }

    /// Lists payment links with normalized pagination and date filters.
    pub async fn all(&self, params: Params) -> Result<Value> {
        self.inner.list(params).await
    }

    /// Updates a payment link (`PATCH /payment_links/{id}`).
    pub async fn edit(&self, payment_link_id: &str, params: Params) -> Result<Value> {
        self.inner
            .update(payment_link_id, params, Method::Patch)
            .await
    }

    /// Cancels a payment link (`POST /payment_links/{id}/cancel`).
    pub async fn cancel(&self, payment_link_id: &str) -> Result<Value> {
        let id = self.inner.id(payment_link_id)?;
        self.inner.post_segments(&[id, "cancel"], Params::new()).await
    }

    /// Re-sends a payment link over `medium` (`"email"` or `"sms"`).
    ///
    /// Both the link ID and the medium are validated before any request is
    /// sent (`POST /payment_links/{id}/notify_by/{medium}`).
    pub async fn notify_by(&self, payment_link_id: &str, medium: &str) -> Result<Value> {
        let id = self.inner.id(payment_link_id)?;
        let medium = require_field(medium, "medium")?;
        self.inner
            .post_segments(&[id, "notify_by", medium], Params::new())
            .await
    }
}
