//! Shared request context.
//!
//! A [`ClientContext`] carries what a resource needs to issue a request: the
//! current access token, the transport configuration and the HTTP client built
//! from it. The client owns it behind an `Arc` and hands a clone of that `Arc`
//! to every resource it constructs, so a token or transport change made on the
//! client is seen by resources that were created earlier.

use std::sync::{PoisonError, RwLock};

use crate::clients::{HttpClient, HttpError};
use crate::config::{AccessToken, TransportConfig};

#[derive(Clone, Debug)]
struct Transport {
    config: TransportConfig,
    http_client: HttpClient,
}

/// The state shared between a client and the resources it created.
///
/// Locks are held only long enough to copy a value out; no lock is held
/// across an `.await`.
#[derive(Debug)]
pub struct ClientContext {
    access_token: RwLock<AccessToken>,
    transport: RwLock<Transport>,
}

// Verify ClientContext is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientContext>();
};

impl ClientContext {
    /// Creates a context, building the HTTP client for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(access_token: AccessToken, config: TransportConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self {
            access_token: RwLock::new(access_token),
            transport: RwLock::new(Transport {
                config,
                http_client,
            }),
        })
    }

    /// Returns the current access token.
    #[must_use]
    pub fn access_token(&self) -> AccessToken {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the access token.
    pub fn set_access_token(&self, token: AccessToken) {
        *self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Returns a copy of the current transport configuration.
    #[must_use]
    pub fn transport_config(&self) -> TransportConfig {
        self.transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .config
            .clone()
    }

    /// Replaces the transport configuration and rebuilds the HTTP client.
    ///
    /// On error the previous configuration stays in effect.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the new HTTP client cannot be built.
    pub fn set_transport_config(&self, config: TransportConfig) -> Result<(), HttpError> {
        let http_client = HttpClient::new(&config)?;
        tracing::debug!(
            timeout_ms = u64::try_from(config.timeout().as_millis()).unwrap_or(u64::MAX),
            api_base_url = config.api_base_url().as_ref(),
            "Replacing transport configuration"
        );
        *self.transport.write().unwrap_or_else(PoisonError::into_inner) = Transport {
            config,
            http_client,
        };
        Ok(())
    }

    /// Returns the HTTP client for the current transport configuration.
    #[must_use]
    pub fn http_client(&self) -> HttpClient {
        self.transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .http_client
            .clone()
    }

    /// Joins an endpoint path onto the configured API base URL.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        self.transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .config
            .api_base_url()
            .join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_access_token_roundtrip() {
        let context = ClientContext::new(AccessToken::default(), TransportConfig::default()).unwrap();
        assert!(context.access_token().is_empty());

        context.set_access_token(AccessToken::new(" fresh "));
        assert_eq!(context.access_token().as_ref(), "fresh");
    }

    #[test]
    fn test_set_transport_config_changes_endpoint_base() {
        let context = ClientContext::new(AccessToken::default(), TransportConfig::default()).unwrap();
        assert_eq!(
            context.endpoint_url("users/search"),
            "https://api.instagram.com/v1/users/search"
        );

        let config = TransportConfig::builder()
            .api_base_url("http://localhost:1234/v1")
            .timeout(Duration::from_secs(1))
            .build()
            .unwrap();
        context.set_transport_config(config).unwrap();

        assert_eq!(
            context.endpoint_url("users/search"),
            "http://localhost:1234/v1/users/search"
        );
        assert_eq!(context.transport_config().timeout(), Duration::from_secs(1));
    }
}
