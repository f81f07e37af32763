//! Invoices resource.
//!
//! Invoices support the full lifecycle: drafted invoices can be edited,
//! issued, re-notified, cancelled or deleted.

use super::{ResourceClient, ResourceDescriptor, Transport};
use crate::errors::Result;
use crate::request::{require_field, Method, Params};
use serde_json::Value;
use std::sync::Arc;

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    base: "invoices",
    id_field: "invoice_id",
};

/// Operations on the `/invoices` resource family.
pub struct Invoices {
    inner: ResourceClient,
}

impl Invoices {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, DESCRIPTOR),
        }
    }

    /// Creates an invoice.
    pub async fn create(&self, params: Params) -> Result<Value> {
        self.inner.create(params).await
    }

    /// Fetches an invoice by ID.
    pub async fn fetch(&self, invoice_id: &str) -> Result<Value> {
        self.inner.fetch(invoice_id).await
    }

    /// Lists invoices with normalized pagination and date filters.
    pub async fn all(&self, params: Params) -> Result<Value> {
        self.inner.list(params).await
    }

    /// Updates a draft invoice (`PATCH /invoices/{id}`).
    pub async fn edit(&self, invoice_id: &str, params: Params) -> Result<Value> {
        self.inner.update(invoice_id, params, Method::Patch).await
    }

    /// Issues a draft invoice (`POST /invoices/{id}/issue`).
    pub async fn issue(&self, invoice_id: &str) -> Result<Value> {
        let id = self.inner.id(invoice_id)?;
        self.inner.post_segments(&[id, "issue"], Params::new()).await
    }

    /// Cancels an issued invoice (`POST /invoices/{id}/cancel`).
    pub async fn cancel(&self, invoice_id: &str) -> Result<Value> {
        let id = self.inner.id(invoice_id)?;
        self.inner.post_segments(&[id, "cancel"], Params::new()).await
    }

    /// Re-sends an invoice over `medium` (`"email"` or `"sms"`).
    pub async fn notify_by(&self, invoice_id: &str, medium: &str) -> Result<Value> {
        let id = self.inner.id(invoice_id)?;
        let medium = require_field(medium, "medium")?;
        self.inner
            .post_segments(&[id, "notify_by", medium], Params::new())
            .await
    }

    /// Deletes a draft invoice (`DELETE /invoices/{id}`).
    pub async fn delete(&self, invoice_id: &str) -> Result<Value> {
        let id = self.inner.id(invoice_id)?;
        self.inner.delete_segments(&[id]).await
    }
}
