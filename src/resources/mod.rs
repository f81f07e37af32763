//! Resource modules, one per PayRail API resource family.
//!
//! Every family (orders, customers, plans, ...) binds a base path and exposes
//! a fixed set of operations. The shared [`ResourceClient`] implements the
//! generic shapes — create, fetch, all, edit, sub-actions — so each module is
//! a thin, typed wrapper over its resource descriptor.

use crate::errors::Result;
use crate::request::{build_list_query, build_path, require_field, ApiRequest, Method, Params};
use crate::transport::Transport;
use serde_json::Value;
use std::sync::Arc;

pub mod customers;
pub mod invoices;
pub mod items;
pub mod orders;
pub mod payment_links;
pub mod payments;
pub mod plans;
pub mod refunds;
pub mod settlements;
pub mod subscriptions;

pub use customers::Customers;
pub use invoices::Invoices;
pub use items::Items;
pub use orders::Orders;
pub use payment_links::PaymentLinks;
pub use payments::Payments;
pub use plans::Plans;
pub use refunds::Refunds;
pub use settlements::Settlements;
pub use subscriptions::Subscriptions;

/// Static description of a resource family: its base path and the name used
/// when reporting a missing identifier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResourceDescriptor {
    pub(crate) base: &'static str,
    pub(crate) id_field: &'static str,
}

/// Generic operations shared by all resource families.
///
/// Holds the injected transport and the resource descriptor; every operation
/// builds one [`ApiRequest`] and performs exactly one transport call.
/// Validation failures short-circuit before the transport is touched.
pub(crate) struct ResourceClient {
    transport: Arc<dyn Transport>,
    descriptor: ResourceDescriptor,
}

impl ResourceClient {
    pub(crate) fn new(transport: Arc<dyn Transport>, descriptor: ResourceDescriptor) -> Self {
        Self {
            transport,
            descriptor,
        }
    }

    /// Validates the resource identifier for this family.
    pub(crate) fn id<'a>(&self, id: &'a str) -> Result<&'a str> {
        require_field(id, self.descriptor.id_field)
    }

    /// `POST {base}` with `params` forwarded verbatim as the body.
    pub(crate) async fn create(&self, params: Params) -> Result<Value> {
        let path = build_path(self.descriptor.base, &[]);
        self.transport.send(ApiRequest::post(path, params)).await
    }

    /// `GET {base}/{id}`.
    pub(crate) async fn fetch(&self, id: &str) -> Result<Value> {
        let id = self.id(id)?;
        let path = build_path(self.descriptor.base, &[id]);
        self.transport
            .send(ApiRequest::get(path, Params::new()))
            .await
    }

    /// `GET {base}` with normalized list-query parameters.
    pub(crate) async fn list(&self, params: Params) -> Result<Value> {
        let query = build_list_query(params)?;
        let path = build_path(self.descriptor.base, &[]);
        self.transport.send(ApiRequest::get(path, query)).await
    }

    /// `PATCH`/`PUT {base}/{id}` with `params` as the body. The verb is fixed
    /// per resource.
    pub(crate) async fn update(&self, id: &str, params: Params, method: Method) -> Result<Value> {
        let id = self.id(id)?;
        let path = build_path(self.descriptor.base, &[id]);
        let request = match method {
            Method::Put => ApiRequest::put(path, params),
            _ => ApiRequest::patch(path, params),
        };
        self.transport.send(request).await
    }

    /// `POST {base}/{segments...}` for sub-actions such as `cancel` or
    /// `notify_by/{medium}`. Segments must already be validated.
    pub(crate) async fn post_segments(&self, segments: &[&str], params: Params) -> Result<Value> {
        let path = build_path(self.descriptor.base, segments);
        self.transport.send(ApiRequest::post(path, params)).await
    }

    /// `GET {base}/{segments...}` for sub-resources such as an order's
    /// payments or a customer's tokens.
    pub(crate) async fn get_segments(&self, segments: &[&str]) -> Result<Value> {
        let path = build_path(self.descriptor.base, segments);
        self.transport
            .send(ApiRequest::get(path, Params::new()))
            .await
    }

    /// `DELETE {base}/{segments...}`.
    pub(crate) async fn delete_segments(&self, segments: &[&str]) -> Result<Value> {
        let path = build_path(self.descriptor.base, segments);
        self.transport.send(ApiRequest::delete(path)).await
    }
}
