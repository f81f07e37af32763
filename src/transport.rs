//! HTTP transport for PayRail API requests.
//!
//! The [`Transport`] trait is the seam between request construction and the
//! network: resource modules hand it a normalized [`ApiRequest`] and get back
//! the gateway's JSON response. The reqwest-backed [`HttpTransport`] is the
//! production implementation; tests substitute their own.

use crate::errors::{PayrailError, Result};
use crate::request::{ApiRequest, Method};
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Default versioned base URL of the PayRail gateway.
pub const DEFAULT_BASE_URL: &str = "https://api.payrail.com/v1/";

/// Sends normalized requests to the gateway.
///
/// Passed as an explicit dependency to every resource handle; there is no
/// global client instance. Implementations own connection handling, TLS,
/// timeouts and cancellation — this layer has no retry or backoff policy.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one HTTP round trip and returns the parsed JSON response.
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

/// reqwest-backed transport with HTTP basic-auth credential passthrough.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    key_id: String,
    key_secret: String,
}

impl HttpTransport {
    /// Creates a transport against the default gateway URL.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    /// Overrides the versioned base URL (e.g. for a sandbox environment).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Uses a custom reqwest client (timeouts, proxies, connection pools).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    fn build_url(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();

        // Url::path_segments_mut percent-encodes each segment as it is pushed.
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithoutBase)?
            .pop_if_empty()
            .extend(request.path.split('/').filter(|s| !s.is_empty()));

        if let Some(query) = request.query() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                if value.is_null() {
                    continue;
                }
                pairs.append_pair(key, &query_value_to_string(value)?);
            }
            drop(pairs);
            if url.query() == Some("") {
                url.set_query(None);
            }
        }

        Ok(url)
    }
}

fn query_value_to_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Ok(serde_json::to_string(other)?),
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.build_url(&request)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Sending {} {}", request.method, url);

        let mut builder = self
            .http
            .request(to_reqwest_method(request.method), url)
            .basic_auth(&self.key_id, Some(&self.key_secret));

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        if !status.is_success() {
            return Err(PayrailError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Params;
    use serde_json::json;

    fn transport() -> HttpTransport {
        HttpTransport::new("key_id", "key_secret")
    }

    #[test]
    fn test_default_base_url() {
        let t = transport();
        assert_eq!(t.base_url.as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_build_url_encodes_segments() {
        let t = transport();
        let req = ApiRequest::get("orders/ord 1/payments", Params::new());
        let url = t.build_url(&req).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.payrail.com/v1/orders/ord%201/payments"
        );
    }

    #[test]
    fn test_build_url_query_pairs() {
        let t = transport();
        let mut query = Params::new();
        query.insert("count".into(), json!(10));
        query.insert("status".into(), json!("paid"));
        let req = ApiRequest::get("orders", query);
        let url = t.build_url(&req).unwrap();
        assert_eq!(url.path(), "/v1/orders");
        let pairs: Vec<_> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("count".to_string(), "10".to_string())));
        assert!(pairs.contains(&("status".to_string(), "paid".to_string())));
    }

    #[test]
    fn test_build_url_skips_null_values() {
        let t = transport();
        let mut query = Params::new();
        query.insert("from".into(), Value::Null);
        let req = ApiRequest::get("orders", query);
        let url = t.build_url(&req).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_query_value_to_string() {
        assert_eq!(query_value_to_string(&json!("a")).unwrap(), "a");
        assert_eq!(query_value_to_string(&json!(42)).unwrap(), "42");
        assert_eq!(query_value_to_string(&json!(true)).unwrap(), "true");
    }
}
