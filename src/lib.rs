//! # Instagram API Rust Library
//!
//! A Rust client for the Instagram API, providing an access-token based
//! client, lazily constructed resources and paginated result sets.
//!
//! ## Overview
//!
//! This library provides:
//! - An [`InstagramClient`] that holds the access token and transport settings
//! - Type-safe transport configuration via [`TransportConfig`] and
//!   [`TransportConfigBuilder`]
//! - `User` and `Media` resources, resolved by [`ResourceKind`] or by name
//! - [`ResultSet`] pages with cursor iteration and next-page fetching
//! - Typed models for users, media and comments
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use instagram_api::{InstagramClient, TransportConfig};
//!
//! let config = TransportConfig::builder()
//!     .timeout(Duration::from_secs(10))
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! let client = InstagramClient::with_access_token("your-access-token", config).unwrap();
//! assert_eq!(client.access_token(), "your-access-token");
//! ```
//!
//! ## Resources
//!
//! ```rust
//! use instagram_api::{InstagramClient, ResourceKind, TransportConfig};
//!
//! let client = InstagramClient::new(TransportConfig::default()).unwrap();
//!
//! // Lookup by name is case-insensitive and returns the cached instance
//! let a = client.resource("user").unwrap();
//! let b = client.resource("User").unwrap();
//! assert!(a.ptr_eq(&b));
//! assert_eq!(a.kind(), ResourceKind::User);
//! ```
//!
//! ## Pagination
//!
//! ```rust,ignore
//! let users = client.users()?;
//! let mut page = users.recent_media(1_574_083, Some(33)).await?;
//! loop {
//!     for item in &page {
//!         println!("{}", item["id"]);
//!     }
//!     match page.next_page(None).await? {
//!         Some(next) => page = next,
//!         None => break,
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Each client owns its token, transport and resources
//! - **Fail-fast validation**: Configuration is validated on `build()`
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One request at a time**: No retries, no prefetching

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiBaseUrl, TransportConfig, TransportConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ClientContext, DecodeError, HttpClient, HttpError, HttpResponse, HttpResponseError,
    InstagramClient, RateLimit,
};

// Re-export resource types
pub use rest::resources::{Media, MediaItem, User, UserLookup, UserProfile};
pub use rest::{Resource, ResourceError, ResourceHandle, ResourceKind, ResultSet};
