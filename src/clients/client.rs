//! The Instagram API client.
//!
//! [`InstagramClient`] is the entry point of the library. It owns the access
//! token, the transport configuration and the registry of resources it has
//! handed out.

use std::sync::Arc;

use crate::clients::{ClientContext, HttpError};
use crate::config::{AccessToken, TransportConfig};
use crate::rest::resources::{Media, User, UserLookup};
use crate::rest::{Resource, ResourceError, ResourceHandle, ResourceKind, ResourceRegistry};

/// Client for the Instagram API.
///
/// Resources are constructed on first use and cached for the lifetime of the
/// client, so asking for the same resource twice returns the same instance.
/// Resources see later token and transport changes made on the client.
///
/// # Thread Safety
///
/// `InstagramClient` is `Send + Sync`. Mutating methods take `&self`.
///
/// # Example
///
/// ```rust,ignore
/// use instagram_api::{InstagramClient, TransportConfig};
///
/// let client = InstagramClient::new(TransportConfig::default())?;
/// client.set_access_token("  TOKEN  ");
/// assert_eq!(client.access_token(), "TOKEN");
///
/// let users = client.users()?;
/// let page = users.search("jack", Some(5)).await?;
/// ```
#[derive(Debug)]
pub struct InstagramClient {
    context: Arc<ClientContext>,
    registry: ResourceRegistry,
}

// Verify InstagramClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InstagramClient>();
};

impl InstagramClient {
    /// Creates a client with no access token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: TransportConfig) -> Result<Self, HttpError> {
        Self::with_access_token(AccessToken::default(), config)
    }

    /// Creates a client with an access token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn with_access_token(
        token: impl Into<AccessToken>,
        config: TransportConfig,
    ) -> Result<Self, HttpError> {
        let context = ClientContext::new(token.into(), config)?;
        Ok(Self {
            context: Arc::new(context),
            registry: ResourceRegistry::new(),
        })
    }

    /// Sets the access token used by every subsequent request.
    ///
    /// Surrounding whitespace is removed.
    pub fn set_access_token(&self, token: impl Into<AccessToken>) -> &Self {
        self.context.set_access_token(token.into());
        self
    }

    /// Returns the current access token, or an empty string if none is set.
    #[must_use]
    pub fn access_token(&self) -> String {
        self.context.access_token().as_ref().to_string()
    }

    /// Replaces the transport configuration and rebuilds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the new HTTP client cannot be built.
    /// The previous configuration stays in effect.
    pub fn set_transport_config(&self, config: TransportConfig) -> Result<&Self, HttpError> {
        self.context.set_transport_config(config)?;
        Ok(self)
    }

    /// Returns a copy of the current transport configuration.
    #[must_use]
    pub fn transport_config(&self) -> TransportConfig {
        self.context.transport_config()
    }

    /// Returns the resource registered under `name`.
    ///
    /// Names are matched case-insensitively, ignoring `_` and whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if no resource has that name.
    pub fn resource(&self, name: &str) -> Result<ResourceHandle, ResourceError> {
        let kind = name.parse::<ResourceKind>()?;
        Ok(self.resource_of(kind))
    }

    /// Returns the resource for `kind`, constructing it on first use.
    #[must_use]
    pub fn resource_of(&self, kind: ResourceKind) -> ResourceHandle {
        self.registry.get(kind, &self.context)
    }

    /// Returns the resource of type `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Type`] if the registry holds a different
    /// resource under `R::KIND`.
    pub fn resource_as<R: Resource>(&self) -> Result<Arc<R>, ResourceError> {
        self.resource_of(R::KIND).downcast::<R>()
    }

    /// Returns the user resource.
    ///
    /// # Errors
    ///
    /// See [`InstagramClient::resource_as`].
    pub fn users(&self) -> Result<Arc<User>, ResourceError> {
        self.resource_as::<User>()
    }

    /// Returns the media resource.
    ///
    /// # Errors
    ///
    /// See [`InstagramClient::resource_as`].
    pub fn media(&self) -> Result<Arc<Media>, ResourceError> {
        self.resource_as::<Media>()
    }

    /// Resolves a username or numeric ID to a user ID.
    ///
    /// Returns `0` if the user cannot be resolved.
    pub async fn user_id(&self, user: impl Into<UserLookup>) -> u64 {
        let users = match self.users() {
            Ok(users) => users,
            Err(error) => {
                tracing::warn!(error = %error, "User resource unavailable");
                return 0;
            }
        };
        users.id_by_user(user).await.unwrap_or(0)
    }

    /// Returns the shared context handed to resources.
    #[must_use]
    pub const fn context(&self) -> &Arc<ClientContext> {
        &self.context
    }
}
