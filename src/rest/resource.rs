//! Resource base types.
//!
//! A resource wraps one family of API endpoints (users, media). Every resource
//! is built on a [`ResourceCore`], which knows how to assemble URLs and issue
//! authenticated requests, and implements the [`Resource`] trait, which is the
//! capability set the client and the result sets rely on.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use instagram_api::rest::{Resource, ResourceCore, ResourceKind, ResultSet, ResourceError};
//!
//! #[derive(Debug)]
//! pub struct User {
//!     core: Arc<ResourceCore>,
//! }
//!
//! impl Resource for User {
//!     const KIND: ResourceKind = ResourceKind::User;
//!
//!     fn from_core(core: Arc<ResourceCore>) -> Self {
//!         Self { core }
//!     }
//!
//!     fn core(&self) -> &Arc<ResourceCore> {
//!         &self.core
//!     }
//! }
//!
//! // Usage:
//! let users = client.resource_as::<User>()?;
//! let page = users.request(&users.endpoint_url("users/self/feed"), Some(10)).await?;
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::clients::ClientContext;
use crate::error::ConfigError;
use crate::rest::url::{redact_access_token, UrlParts, ACCESS_TOKEN_PARAM, COUNT_PARAM};
use crate::rest::{ResourceError, ResourceHandle, ResultSet};

/// The resources this client knows how to construct.
///
/// This enum replaces lookup by class name: every kind maps to exactly one
/// constructor, resolved at compile time.
///
/// # Parsing
///
/// Names parse case-insensitively, with `_` and whitespace ignored:
///
/// ```rust
/// use instagram_api::ResourceKind;
///
/// assert_eq!("User".parse::<ResourceKind>().unwrap(), ResourceKind::User);
/// assert_eq!("user".parse::<ResourceKind>().unwrap(), ResourceKind::User);
/// assert_eq!("U_s_e_r".parse::<ResourceKind>().unwrap(), ResourceKind::User);
/// assert!("Comment".parse::<ResourceKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// User endpoints (`/users/...`).
    User,
    /// Media endpoints (`/media/...`).
    Media,
}

impl ResourceKind {
    /// All known kinds.
    pub const ALL: [Self; 2] = [Self::User, Self::Media];

    /// Returns the canonical resource name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Media => "Media",
        }
    }

    fn normalize(name: &str) -> String {
        name.chars()
            .filter(|c| *c != '_' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = Self::normalize(s);
        Self::ALL
            .into_iter()
            .find(|kind| Self::normalize(kind.name()) == wanted)
            .ok_or_else(|| ConfigError::UnknownResource {
                name: s.to_string(),
                known: Self::ALL.map(|kind| kind.name()).join(", "),
            })
    }
}

/// The shared machinery behind every resource.
///
/// Holds the resource kind and a back-reference to the client context. Result
/// sets keep an `Arc<ResourceCore>` so they can fetch further pages through
/// the resource that produced them.
#[derive(Debug)]
pub struct ResourceCore {
    kind: ResourceKind,
    context: Arc<ClientContext>,
}

impl ResourceCore {
    /// Creates a core for the given kind bound to a client context.
    #[must_use]
    pub const fn new(kind: ResourceKind, context: Arc<ClientContext>) -> Self {
        Self { kind, context }
    }

    /// Returns the kind of resource this core belongs to.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns the resource name (e.g., "User").
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns the client context this resource issues requests through.
    #[must_use]
    pub const fn context(&self) -> &Arc<ClientContext> {
        &self.context
    }

    /// Assembles an absolute URL from its parts.
    ///
    /// Used for endpoint construction and for rebuilding pagination cursors.
    #[must_use]
    pub fn build_url(&self, parts: &UrlParts) -> String {
        parts.to_url()
    }

    /// Joins an endpoint path onto the configured API base URL.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        self.context.endpoint_url(path)
    }

    /// Builds an endpoint URL with URL-encoded query parameters.
    #[must_use]
    pub fn endpoint_url_with_query(&self, path: &str, params: &[(&str, String)]) -> String {
        let url = self.endpoint_url(path);
        if params.is_empty() {
            return url;
        }
        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{url}?{query}")
    }

    /// Returns `url` with the current access token attached.
    ///
    /// Any `access_token` already present is dropped and the current token is
    /// placed first. When `quantity` is a positive number, any `count`
    /// parameter is replaced by `count=<quantity>` at the end.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidUrl`] if `url` cannot be parsed.
    pub fn authorized_url(&self, url: &str, quantity: Option<u32>) -> Result<String, ResourceError> {
        let mut parts = UrlParts::parse(url).ok_or_else(|| ResourceError::InvalidUrl {
            url: redact_access_token(url),
        })?;

        parts.remove_query_param(ACCESS_TOKEN_PARAM);
        let token = self.context.access_token();
        parts.prepend_query_param(ACCESS_TOKEN_PARAM, token.as_ref());

        if let Some(quantity) = quantity.filter(|q| *q > 0) {
            parts.remove_query_param(COUNT_PARAM);
            parts.append_query_param(COUNT_PARAM, &quantity.to_string());
        }

        Ok(self.build_url(&parts))
    }

    /// Performs an authenticated GET and wraps the response in a [`ResultSet`].
    ///
    /// # Errors
    ///
    /// - [`ResourceError::InvalidUrl`] if `url` cannot be parsed
    /// - [`ResourceError::Http`] for network failures, non-2xx responses and
    ///   bodies that are not valid JSON
    /// - [`ResourceError::InvalidResponse`] if the body is valid JSON but not
    ///   an object
    pub async fn request(
        self: &Arc<Self>,
        url: &str,
        quantity: Option<u32>,
    ) -> Result<ResultSet, ResourceError> {
        let url = self.authorized_url(url, quantity)?;
        let http_client = self.context.http_client();

        let response = http_client.get(&url).await?;
        let rate_limit = response.rate_limit;

        let result_set = ResultSet::new(response.body, Arc::clone(self))?.with_rate_limit(rate_limit);
        tracing::debug!(
            resource = self.name(),
            count = result_set.count(),
            has_next_page = result_set.has_next_page(),
            "Received result set"
        );
        Ok(result_set)
    }
}

/// The capability set every resource provides.
///
/// Implementors only supply their kind and access to their [`ResourceCore`];
/// URL building and requests come from the provided methods.
#[allow(async_fn_in_trait)]
pub trait Resource: fmt::Debug + Send + Sync + Sized {
    /// The kind this resource is registered under.
    const KIND: ResourceKind;

    /// Wraps a core into this resource.
    fn from_core(core: Arc<ResourceCore>) -> Self;

    /// Returns the shared core.
    fn core(&self) -> &Arc<ResourceCore>;

    /// Extracts this resource from a registry handle, if it holds one.
    fn from_handle(handle: ResourceHandle) -> Option<Arc<Self>>;

    /// Returns the resource name (e.g., "User").
    fn name(&self) -> &'static str {
        Self::KIND.name()
    }

    /// Assembles an absolute URL from its parts.
    fn build_url(&self, parts: &UrlParts) -> String {
        self.core().build_url(parts)
    }

    /// Joins an endpoint path onto the configured API base URL.
    fn endpoint_url(&self, path: &str) -> String {
        self.core().endpoint_url(path)
    }

    /// Performs an authenticated GET and wraps the response in a [`ResultSet`].
    ///
    /// # Errors
    ///
    /// See [`ResourceCore::request`].
    async fn request(&self, url: &str, quantity: Option<u32>) -> Result<ResultSet, ResourceError> {
        self.core().request(url, quantity).await
    }
}
