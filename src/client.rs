//! The top-level PayRail client.
//!
//! One constructor accepts the API credentials and exposes one handle per
//! resource family. Each handle shares a single injected [`Transport`], so
//! the client is cheap to construct and safe to use from concurrent tasks —
//! every call builds its own request descriptor and holds no shared mutable
//! state.

use crate::resources::{
    Customers, Invoices, Items, Orders, PaymentLinks, Payments, Plans, Refunds, Settlements,
    Subscriptions,
};
use crate::transport::{HttpTransport, Transport};
use std::sync::Arc;
use url::Url;

/// Client for the PayRail payment-gateway REST API.
///
/// # Examples
///
/// ```no_run
/// use payrail::{Client, request::Params};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("key_id", "key_secret");
///
/// let orders = client.orders.all(Params::new()).await?;
/// println!("{orders}");
/// # Ok(())
/// # }
/// ```
pub struct Client {
    /// Orders API
    pub orders: Orders,
    /// Customers API, including saved tokens
    pub customers: Customers,
    /// Plans API
    pub plans: Plans,
    /// Payments API, including capture and refund sub-actions
    pub payments: Payments,
    /// Refunds API
    pub refunds: Refunds,
    /// Payment links API
    pub payment_links: PaymentLinks,
    /// Items API
    pub items: Items,
    /// Invoices API
    pub invoices: Invoices,
    /// Subscriptions API
    pub subscriptions: Subscriptions,
    /// Settlements API (read-only)
    pub settlements: Settlements,
}

impl Client {
    /// Creates a client against the default gateway URL using HTTP basic
    /// auth with the given key id and secret.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(key_id, key_secret)))
    }

    /// Starts a builder for customizing the base URL or the underlying
    /// reqwest client.
    pub fn builder(key_id: impl Into<String>, key_secret: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            base_url: None,
            http_client: None,
        }
    }

    /// Creates a client over an explicit transport.
    ///
    /// This is the seam used by tests to substitute a recording transport;
    /// it also allows callers to wrap the HTTP layer (e.g. with their own
    /// resilience policy, which this library deliberately does not provide).
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            orders: Orders::new(transport.clone()),
            customers: Customers::new(transport.clone()),
            plans: Plans::new(transport.clone()),
            payments: Payments::new(transport.clone()),
            refunds: Refunds::new(transport.clone()),
            payment_links: PaymentLinks::new(transport.clone()),
            items: Items::new(transport.clone()),
            invoices: Invoices::new(transport.clone()),
            subscriptions: Subscriptions::new(transport.clone()),
            settlements: Settlements::new(transport),
        }
    }
}

/// Builder for [`Client`] with a custom base URL or reqwest client.
///
/// # Examples
///
/// ```
/// use payrail::Client;
/// use url::Url;
///
/// let client = Client::builder("key_id", "key_secret")
///     .with_base_url(Url::parse("https://sandbox.payrail.com/v1/").unwrap())
///     .build();
/// ```
pub struct ClientBuilder {
    key_id: String,
    key_secret: String,
    base_url: Option<Url>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Sets the versioned base URL (e.g. a sandbox environment).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets a custom reqwest client (timeouts, proxies, connection pools).
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Builds the client.
    pub fn build(self) -> Client {
        let mut transport = HttpTransport::new(self.key_id, self.key_secret);
        if let Some(base_url) = self.base_url {
            transport = transport.with_base_url(base_url);
        }
        if let Some(http_client) = self.http_client {
            transport = transport.with_http_client(http_client);
        }
        Client::with_transport(Arc::new(transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = Client::new("key_id", "key_secret");
        // All resource handles are reachable from one constructor.
        let _ = &client.orders;
        let _ = &client.customers;
        let _ = &client.plans;
        let _ = &client.payments;
        let _ = &client.refunds;
        let _ = &client.payment_links;
        let _ = &client.items;
        let _ = &client.invoices;
        let _ = &client.subscriptions;
        let _ = &client.settlements;
    }

    #[test]
    fn test_client_builder() {
        let url = Url::parse("https://sandbox.payrail.com/v1/").unwrap();
        let _client = Client::builder("key_id", "key_secret")
            .with_base_url(url)
            .with_http_client(reqwest::Client::new())
            .build();
    }
}
