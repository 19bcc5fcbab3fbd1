//! Client types for Instagram API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`InstagramClient`]: The entry point; holds the access token, the
//!   transport configuration and the resource registry
//! - [`ClientContext`]: The state a client shares with its resources
//! - [`HttpClient`]: The async HTTP transport
//! - [`HttpResponse`]: A decoded response with rate limit information
//! - [`HttpError`]: Transport and decode failures
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_api::{InstagramClient, TransportConfig};
//!
//! let client = InstagramClient::new(TransportConfig::default())?;
//! client.set_access_token("TOKEN");
//!
//! let id = client.user_id("jack").await;
//! ```
//!
//! # Retry Behavior
//!
//! Requests are never retried. Each call performs a single round trip bounded
//! by the configured timeout.

mod client;
mod context;
mod errors;
mod http_client;
mod http_response;

pub use client::InstagramClient;
pub use context::ClientContext;
pub use errors::{DecodeError, HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::{HttpResponse, RateLimit};
