//! Resource layer for the Instagram API.
//!
//! This module provides:
//!
//! - **[`Resource`] trait**: the capability set shared by every resource
//! - **[`ResourceCore`]**: URL assembly and authenticated requests
//! - **[`ResourceKind`]**: the closed set of resources the client can build
//! - **[`ResourceRegistry`]**: the client-owned cache of constructed resources
//! - **[`ResultSet`]**: one page of results with cursor iteration and
//!   next-page fetching
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_api::{InstagramClient, TransportConfig};
//!
//! let client = InstagramClient::with_access_token("TOKEN", TransportConfig::default())?;
//! let users = client.users()?;
//!
//! let mut page = users.self_feed(Some(10)).await?;
//! while page.valid() {
//!     println!("{:?}", page.current());
//!     page.advance();
//! }
//!
//! // Follow the cursor
//! if let Some(next) = page.next_page(None).await? {
//!     println!("Next page has {} items", next.count());
//! }
//! ```

mod errors;
mod registry;
mod resource;
mod result_set;
mod url;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use registry::{ResourceHandle, ResourceRegistry};
pub use resource::{Resource, ResourceCore, ResourceKind};
pub use result_set::ResultSet;
pub use self::url::{redact_access_token, UrlParts, ACCESS_TOKEN_PARAM, COUNT_PARAM};
