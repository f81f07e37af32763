//! Request construction and parameter normalization.
//!
//! This module is the pure core of the library: given caller-supplied
//! parameters it produces a normalized [`ApiRequest`] descriptor (method,
//! path, query or body) without performing any I/O. Every resource module
//! funnels through the functions defined here.

use crate::errors::{PayrailError, Result};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use std::fmt;

/// Raw request parameters: an unordered field-name-to-value mapping.
///
/// No schema is enforced beyond the documented required fields; extra fields
/// pass through to the gateway untouched, including nested mappings such as
/// free-form `notes` objects.
pub type Params = serde_json::Map<String, Value>;

/// Default `count` applied to list queries when the caller does not set one.
pub const DEFAULT_COUNT: u64 = 10;

/// Default `skip` applied to list queries when the caller does not set one.
pub const DEFAULT_SKIP: u64 = 0;

/// HTTP method of a normalized request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET; parameters travel in the query string
    Get,
    /// POST; parameters travel in the JSON body
    Post,
    /// PUT; parameters travel in the JSON body
    Put,
    /// PATCH; parameters travel in the JSON body
    Patch,
    /// DELETE; parameters travel in the query string
    Delete,
}

impl Method {
    /// Returns the method name as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters attached to a request, keyed by the verb.
///
/// Exactly one variant is populated per request: read-style verbs (GET,
/// DELETE) carry a query string, mutating verbs (POST, PUT, PATCH) carry a
/// JSON body. The [`ApiRequest`] constructors enforce this.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Query-string parameters for GET/DELETE requests
    Query(Params),
    /// JSON body for POST/PUT/PATCH requests
    Body(Params),
}

/// A normalized request descriptor: method, path relative to the versioned
/// base URL, and either query parameters or a JSON body.
///
/// Constructed, handed to the transport, and discarded within one call;
/// nothing here outlives the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the versioned base URL, e.g. `orders/ord_123/payments`
    pub path: String,
    /// Query parameters or JSON body, chosen by the method
    pub payload: Payload,
}

impl ApiRequest {
    /// Builds a GET request carrying `query` in the query string.
    pub fn get(path: impl Into<String>, query: Params) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            payload: Payload::Query(query),
        }
    }

    /// Builds a POST request carrying `body` as JSON.
    pub fn post(path: impl Into<String>, body: Params) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            payload: Payload::Body(body),
        }
    }

    /// Builds a PUT request carrying `body` as JSON.
    pub fn put(path: impl Into<String>, body: Params) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            payload: Payload::Body(body),
        }
    }

    /// Builds a PATCH request carrying `body` as JSON.
    pub fn patch(path: impl Into<String>, body: Params) -> Self {
        Self {
            method: Method::Patch,
            path: path.into(),
            payload: Payload::Body(body),
        }
    }

    /// Builds a DELETE request with an empty query string.
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            payload: Payload::Query(Params::new()),
        }
    }

    /// Returns the query parameters, if this request carries any.
    pub fn query(&self) -> Option<&Params> {
        match &self.payload {
            Payload::Query(q) => Some(q),
            Payload::Body(_) => None,
        }
    }

    /// Returns the JSON body, if this request carries one.
    pub fn body(&self) -> Option<&Params> {
        match &self.payload {
            Payload::Query(_) => None,
            Payload::Body(b) => Some(b),
        }
    }
}

/// Joins a base resource path with ordered path segments.
///
/// Segments are joined with `/`; percent-encoding happens when the transport
/// splices the path into the final URL.
///
/// # Examples
///
/// ```
/// use payrail::request::build_path;
///
/// assert_eq!(build_path("orders", &[]), "orders");
/// assert_eq!(
///     build_path("payment_links", &["plink_123", "notify_by", "email"]),
///     "payment_links/plink_123/notify_by/email"
/// );
/// ```
pub fn build_path(base: &str, segments: &[&str]) -> String {
    let mut path = base.trim_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

/// Validates that a required identifier or field is present.
///
/// Returns the value unchanged, or [`PayrailError::MissingField`] if it is
/// empty or blank. Used for resource IDs and other mandatory identifiers
/// (e.g. the `medium` segment of notification endpoints) so that the failure
/// happens before any network call.
///
/// # Examples
///
/// ```
/// use payrail::request::require_field;
///
/// assert_eq!(require_field("ord_123", "order_id").unwrap(), "ord_123");
/// assert!(require_field("", "order_id").is_err());
/// ```
pub fn require_field<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(PayrailError::MissingField(field.to_string()));
    }
    Ok(value)
}

/// Normalizes parameters for a "fetch all" style call.
///
/// - `from` and `to`, when present, are converted to epoch seconds; an
///   unparsable value fails with [`PayrailError::InvalidDate`].
/// - `count` defaults to 10 and `skip` to 0. Values that parse as a
///   non-negative integer are kept (including an explicit 0); anything
///   unparsable falls back to the default.
/// - All other fields pass through untouched.
///
/// # Examples
///
/// ```
/// use payrail::request::{build_list_query, Params};
/// use serde_json::json;
///
/// let normalized = build_list_query(Params::new()).unwrap();
/// assert_eq!(normalized["count"], json!(10));
/// assert_eq!(normalized["skip"], json!(0));
///
/// let mut params = Params::new();
/// params.insert("from".into(), json!("Aug 25, 2016"));
/// let normalized = build_list_query(params).unwrap();
/// assert_eq!(normalized["from"], json!(1472083200));
/// ```
pub fn build_list_query(mut params: Params) -> Result<Params> {
    for key in ["from", "to"] {
        if let Some(value) = params.get(key) {
            let secs = date_to_epoch_secs(value)?;
            params.insert(key.to_string(), Value::from(secs));
        }
    }

    let count = parse_or_default(params.get("count"), DEFAULT_COUNT);
    let skip = parse_or_default(params.get("skip"), DEFAULT_SKIP);
    params.insert("count".to_string(), Value::from(count));
    params.insert("skip".to_string(), Value::from(skip));

    Ok(params)
}

/// Converts a date filter value to epoch seconds.
///
/// Accepts an integer (passed through as already-epoch), an integer string,
/// an RFC 3339 timestamp, or a human-readable date such as `"Aug 25, 2016"`,
/// `"August 25, 2016"` or `"2016-08-25"`. Bare dates resolve to UTC midnight.
pub fn date_to_epoch_secs(value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| PayrailError::InvalidDate(n.to_string())),
        Value::String(s) => parse_date_str(s),
        other => Err(PayrailError::InvalidDate(other.to_string())),
    }
}

fn parse_date_str(s: &str) -> Result<i64> {
    let s = s.trim();

    if let Ok(epoch) = s.parse::<i64>() {
        return Ok(epoch);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp());
    }

    for format in ["%b %d, %Y", "%B %d, %Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
                PayrailError::InvalidDate(s.to_string())
            })?;
            return Ok(midnight.and_utc().timestamp());
        }
    }

    Err(PayrailError::InvalidDate(s.to_string()))
}

/// Explicit parse-or-default for pagination values.
///
/// A value that parses as a non-negative integer is kept; a missing or
/// unparsable value yields `default`. This replaces permissive numeric
/// coercion with a documented fallback.
fn parse_or_default(value: Option<&Value>, default: u64) -> u64 {
    match value {
        None => default,
        Some(Value::Number(n)) => n.as_u64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse::<u64>().unwrap_or(default),
        Some(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // "Aug 25, 2016" at UTC midnight
    const AUG_25_2016: i64 = 1472083200;

    fn params(value: Value) -> Params {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_request_payload_matches_method() {
        let get = ApiRequest::get("orders", Params::new());
        assert!(get.query().is_some());
        assert!(get.body().is_none());

        let post = ApiRequest::post("orders", Params::new());
        assert!(post.body().is_some());
        assert!(post.query().is_none());

        let delete = ApiRequest::delete("items/item_1");
        assert_eq!(delete.query(), Some(&Params::new()));
    }

    #[test]
    fn test_build_path() {
        assert_eq!(build_path("orders", &[]), "orders");
        assert_eq!(build_path("/orders/", &["ord_1"]), "orders/ord_1");
        assert_eq!(
            build_path("customers", &["cust_1", "tokens", "tok_1"]),
            "customers/cust_1/tokens/tok_1"
        );
    }

    #[test]
    fn test_require_field() {
        assert_eq!(require_field("plink_1", "id").unwrap(), "plink_1");

        let err = require_field("", "medium").unwrap_err();
        assert!(matches!(err, PayrailError::MissingField(f) if f == "medium"));

        let err = require_field("   ", "order_id").unwrap_err();
        assert!(matches!(err, PayrailError::MissingField(_)));
    }

    #[test]
    fn test_list_query_defaults() {
        let normalized = build_list_query(Params::new()).unwrap();
        assert_eq!(normalized["count"], json!(10));
        assert_eq!(normalized["skip"], json!(0));
        assert_eq!(normalized.len(), 2);
    }

    #[test]
    fn test_list_query_passthrough() {
        let normalized =
            build_list_query(params(json!({"count": 25, "skip": 5, "status": "paid"}))).unwrap();
        assert_eq!(normalized["count"], json!(25));
        assert_eq!(normalized["skip"], json!(5));
        assert_eq!(normalized["status"], json!("paid"));
    }

    #[test]
    fn test_list_query_keeps_explicit_zero() {
        let normalized = build_list_query(params(json!({"count": 0}))).unwrap();
        assert_eq!(normalized["count"], json!(0));
    }

    #[test]
    fn test_list_query_string_pagination() {
        let normalized =
            build_list_query(params(json!({"count": "25", "skip": "oops"}))).unwrap();
        assert_eq!(normalized["count"], json!(25));
        assert_eq!(normalized["skip"], json!(0));
    }

    #[test]
    fn test_list_query_date_normalization() {
        let normalized = build_list_query(params(json!({
            "from": "Aug 25, 2016",
            "to": "Aug 30, 2016",
        })))
        .unwrap();
        assert_eq!(normalized["from"], json!(AUG_25_2016));
        assert_eq!(normalized["to"], json!(AUG_25_2016 + 5 * 86_400));
    }

    #[test]
    fn test_list_query_invalid_date() {
        let err = build_list_query(params(json!({"from": "not a date"}))).unwrap_err();
        assert!(matches!(err, PayrailError::InvalidDate(_)));
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(date_to_epoch_secs(&json!(AUG_25_2016)).unwrap(), AUG_25_2016);
        assert_eq!(
            date_to_epoch_secs(&json!(AUG_25_2016.to_string())).unwrap(),
            AUG_25_2016
        );
        assert_eq!(date_to_epoch_secs(&json!("2016-08-25")).unwrap(), AUG_25_2016);
        assert_eq!(
            date_to_epoch_secs(&json!("August 25, 2016")).unwrap(),
            AUG_25_2016
        );
        assert_eq!(
            date_to_epoch_secs(&json!("2016-08-25T00:00:00Z")).unwrap(),
            AUG_25_2016
        );
        assert!(date_to_epoch_secs(&json!(["nope"])).is_err());
    }
}
