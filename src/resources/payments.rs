//! Payments resource.
//!
//! Payments are created by the gateway checkout flow, so this family has no
//! `create`; it exposes capture and refund sub-actions instead.

use super::{ResourceClient, ResourceDescriptor, Transport};
use crate::errors::Result;
use crate::request::Params;
use serde_json::Value;
use std::sync::Arc;

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    base: "payments",
    id_field: "payment_id",
};

/// Operations on the `/payments` resource family.
pub struct Payments {
    inner: ResourceClient,
}

impl Payments {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, DESCRIPTOR),
        }
    }

    /// Fetches a payment by ID.
    pub async fn fetch(&self, payment_id: &str) -> Result<Value> {
        self.inner.fetch(payment_id).await
    }

    /// Lists payments with normalized pagination and date filters.
    pub async fn all(&self, params: Params) -> Result<Value> {
        self.inner.list(params).await
    }

    /// Captures an authorized payment (`POST /payments/{id}/capture`).
    /// Amount and currency go in `params`.
    pub async fn capture(&self, payment_id: &str, params: Params) -> Result<Value> {
        let id = self.inner.id(payment_id)?;
        self.inner.post_segments(&[id, "capture"], params).await
    }

    /// Creates a refund for a payment (`POST /payments/{id}/refund`).
    pub async fn refund(&self, payment_id: &str, params: Params) -> Result<Value> {
        let id = self.inner.id(payment_id)?;
        self.inner.post_segments(&[id, "refund"], params).await
    }

    /// Fetches the refunds issued against a payment.
    pub async fn refunds(&self, payment_id: &str) -> Result<Value> {
        let id = self.inner.id(payment_id)?;
        self.inner.get_segments(&[id, "refunds"]).await
    }
}
