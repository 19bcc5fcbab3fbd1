//! Resource-level error types.
//!
//! # Error Handling
//!
//! - [`ResourceError::Config`]: an unknown resource name was requested
//! - [`ResourceError::Type`]: a resource handle did not hold the expected resource
//! - [`ResourceError::InvalidResponse`]: a result set was built from a non-object
//! - [`ResourceError::InvalidUrl`]: a request URL could not be parsed
//! - [`ResourceError::Deserialize`]: result items did not match a typed model
//! - [`ResourceError::Http`]: transport or decode failures, unmodified
//!
//! "No next page" and "user not found" are not errors; they are `None`.
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_api::rest::ResourceError;
//!
//! match client.resource("Comments") {
//!     Ok(handle) => println!("Resolved {}", handle.kind()),
//!     Err(ResourceError::Config(e)) => println!("Configuration error: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use instagram_api::rest::ResourceError;
///
/// let error = ResourceError::Type {
///     name: "Media",
///     expected: "User",
/// };
/// assert!(error.to_string().contains("Media"));
/// assert!(error.to_string().contains("User"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource is not configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A resource does not provide the expected resource capabilities.
    #[error("Resource {name} does not implement the {expected} resource")]
    Type {
        /// The name of the resource that was found.
        name: &'static str,
        /// The name of the resource that was expected.
        expected: &'static str,
    },

    /// A result set was constructed from something that is not a response object.
    #[error("Invalid response: {reason}")]
    InvalidResponse {
        /// Why the value was rejected.
        reason: String,
    },

    /// A request URL could not be parsed.
    #[error("Invalid request URL '{url}'")]
    InvalidUrl {
        /// The offending URL, with any access token redacted.
        url: String,
    },

    /// Result data could not be deserialized into the requested model.
    #[error("Failed to deserialize {resource} data: {source}")]
    Deserialize {
        /// The resource that produced the data.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
