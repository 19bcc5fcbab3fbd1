//! HTTP response types for the Instagram API client.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! information parsed from its headers.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Ratelimit-*` headers.
///
/// # Example
///
/// ```rust
/// use instagram_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("4990", "5000").unwrap();
/// assert_eq!(limit.remaining, 4990);
/// assert_eq!(limit.limit, 5000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Calls left in the current window.
    pub remaining: u32,
    /// Calls allowed per window.
    pub limit: u32,
}

impl RateLimit {
    /// Parses the `X-Ratelimit-Remaining` and `X-Ratelimit-Limit` header values.
    ///
    /// Returns `None` if either value is not an unsigned integer.
    #[must_use]
    pub fn parse(remaining: &str, limit: &str) -> Option<Self> {
        Some(Self {
            remaining: remaining.trim().parse().ok()?,
            limit: limit.trim().parse().ok()?,
        })
    }
}

/// An HTTP response from the Instagram API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Rate limit information, when both headers are present.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };
        let rate_limit = match (first("x-ratelimit-remaining"), first("x-ratelimit-limit")) {
            (Some(remaining), Some(limit)) => RateLimit::parse(remaining, limit),
            _ => None,
        };

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `meta` object of the body, if present.
    #[must_use]
    pub fn meta(&self) -> Option<&serde_json::Value> {
        self.body.get("meta")
    }

    /// Returns the Instagram error type reported in the body, if any.
    ///
    /// Looks in `meta.error_type` first, then at the top level where the
    /// OAuth endpoints put it.
    #[must_use]
    pub fn error_type(&self) -> Option<&str> {
        self.meta()
            .and_then(|meta| meta.get("error_type"))
            .or_else(|| self.body.get("error_type"))
            .and_then(serde_json::Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_rate_limit_parsed_from_headers() {
        let response = HttpResponse::new(
            200,
            headers(&[("x-ratelimit-remaining", "42"), ("x-ratelimit-limit", "5000")]),
            json!({}),
        );
        assert_eq!(
            response.rate_limit,
            Some(RateLimit {
                remaining: 42,
                limit: 5000
            })
        );
    }

    #[test]
    fn test_rate_limit_requires_both_headers() {
        let response = HttpResponse::new(200, headers(&[("x-ratelimit-limit", "5000")]), json!({}));
        assert!(response.rate_limit.is_none());
    }

    #[test]
    fn test_rate_limit_rejects_garbage() {
        assert!(RateLimit::parse("many", "5000").is_none());
        assert!(RateLimit::parse("-1", "5000").is_none());
    }

    #[test]
    fn test_is_ok_range() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(299, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(400, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(199, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_error_type_from_meta_or_top_level() {
        let response = HttpResponse::new(
            400,
            HashMap::new(),
            json!({"meta": {"code": 400, "error_type": "OAuthParameterException"}}),
        );
        assert_eq!(response.error_type(), Some("OAuthParameterException"));

        let response = HttpResponse::new(
            400,
            HashMap::new(),
            json!({"code": 400, "error_type": "OAuthException"}),
        );
        assert_eq!(response.error_type(), Some("OAuthException"));
    }
}
