//! HTTP transport for Instagram API communication.
//!
//! This module provides the [`HttpClient`] type that performs the GET
//! requests issued by resources. It applies the configured timeouts, attaches
//! the default headers, decodes JSON bodies and maps failures to [`HttpError`].

use std::collections::HashMap;

use crate::clients::errors::{DecodeError, HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::TransportConfig;
use crate::rest::redact_access_token;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Instagram API.
///
/// Requests are made against absolute URLs; building those URLs (and adding
/// the access token) is the job of the resources. The client never retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone (the inner reqwest
/// client is reference counted).
///
/// # Example
///
/// ```rust,ignore
/// use instagram_api::clients::HttpClient;
/// use instagram_api::TransportConfig;
///
/// let client = HttpClient::new(&TransportConfig::default())?;
/// let response = client
///     .get("https://api.instagram.com/v1/users/self?access_token=TOKEN")
///     .await?;
/// println!("{}", response.body);
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given transport configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &TransportConfig) -> Result<Self, HttpError> {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Instagram API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout());
        if let Some(connect_timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to an absolute URL and decodes the JSON body.
    ///
    /// An empty body decodes to an empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A network error or timeout occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - A 2xx body is not valid JSON (`Decode`)
    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let redacted = redact_access_token(url);
        tracing::debug!(url = %redacted, "GET request to Instagram API");

        let mut req_builder = self.client.get(url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let decoded = if body_text.trim().is_empty() {
            Ok(serde_json::json!({}))
        } else {
            serde_json::from_str::<serde_json::Value>(&body_text)
        };

        let body = match decoded {
            Ok(body) => body,
            Err(source) if (200..=299).contains(&code) => {
                return Err(HttpError::Decode(DecodeError {
                    url: redacted,
                    source,
                }));
            }
            Err(_) => serde_json::json!({ "raw_body": body_text }),
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(limit) = response.rate_limit {
            tracing::trace!(
                remaining = limit.remaining,
                limit = limit.limit,
                "Instagram API rate limit"
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        tracing::debug!(url = %redacted, code, "Instagram API returned an error status");

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_type: response.error_type().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the error details of a response to a JSON string.
    fn serialize_error(response: &HttpResponse) -> String {
        let source = response
            .meta()
            .filter(|meta| meta.get("error_type").is_some() || meta.get("error_message").is_some())
            .unwrap_or(&response.body);

        let mut error_body = serde_json::Map::new();
        for key in ["error_type", "error_message", "code", "raw_body"] {
            if let Some(value) = source.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
