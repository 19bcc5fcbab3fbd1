//! User resource.
//!
//! Endpoints under `/users`: search, profile lookup, recent media, the
//! authenticated user's feed and likes, and the follow graph.
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_api::rest::resources::UserProfile;
//!
//! let users = client.users()?;
//!
//! // Resolve a username to its numeric ID
//! if let Some(id) = users.id_by_user("jack").await {
//!     let page = users.recent_media(id, Some(20)).await?;
//!     for item in &page {
//!         println!("{item}");
//!     }
//! }
//!
//! // Typed profile
//! let page = users.info(1_574_083).await?;
//! let profile: Vec<UserProfile> = page.deserialize_data()?;
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::common::{deserialize_optional_id, parse_id};
use crate::rest::{Resource, ResourceCore, ResourceError, ResourceHandle, ResourceKind, ResultSet};

/// How a user is identified for [`User::id_by_user`].
///
/// Strings that parse as a non-zero unsigned integer (after trimming) are
/// treated as IDs; anything else is a username.
///
/// User IDs are always positive, so negative numbers such as `"-3"` and `0`
/// are not IDs. They are searched for as usernames, which yields `None`
/// unless an account with that name exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    /// A numeric user ID.
    Id(u64),
    /// A username to search for.
    Username(String),
}

impl From<u64> for UserLookup {
    fn from(id: u64) -> Self {
        if id == 0 {
            Self::Username(id.to_string())
        } else {
            Self::Id(id)
        }
    }
}

impl From<&str> for UserLookup {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.parse::<u64>() {
            Ok(id) if id != 0 => Self::Id(id),
            _ => Self::Username(trimmed.to_string()),
        }
    }
}

impl From<String> for UserLookup {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for UserLookup {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for UserLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

/// Follower and media counters on a user profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserCounts {
    /// Number of media the user has posted.
    #[serde(default)]
    pub media: u64,
    /// Number of accounts the user follows.
    #[serde(default)]
    pub follows: u64,
    /// Number of accounts following the user.
    #[serde(default)]
    pub followed_by: u64,
}

/// A user as returned by `users/{id}`, `users/search` and the follow lists.
///
/// Search and follow-list entries omit `bio`, `website` and `counts`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// The user ID.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<u64>,
    /// The username.
    #[serde(default)]
    pub username: String,
    /// The display name.
    pub full_name: Option<String>,
    /// URL of the profile picture.
    pub profile_picture: Option<String>,
    /// Profile biography.
    pub bio: Option<String>,
    /// Profile website.
    pub website: Option<String>,
    /// Counters, only present on full profiles.
    pub counts: Option<UserCounts>,
}

/// The `/users` endpoint family.
#[derive(Debug)]
pub struct User {
    core: Arc<ResourceCore>,
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::User;

    fn from_core(core: Arc<ResourceCore>) -> Self {
        Self { core }
    }

    fn core(&self) -> &Arc<ResourceCore> {
        &self.core
    }

    fn from_handle(handle: ResourceHandle) -> Option<Arc<Self>> {
        match handle {
            ResourceHandle::User(user) => Some(user),
            ResourceHandle::Media(_) => None,
        }
    }
}

impl User {
    /// Resolves a username or ID to a numeric user ID.
    ///
    /// IDs are returned as-is without a request. Usernames are looked up with a
    /// single `users/search` request and the ID of the first match is returned.
    ///
    /// Returns `None` when nothing matched, the first match carries no usable
    /// ID, or the request failed. Failures are logged, not returned.
    pub async fn id_by_user(&self, user: impl Into<UserLookup>) -> Option<u64> {
        let username = match user.into() {
            UserLookup::Id(id) => return Some(id),
            UserLookup::Username(username) => username,
        };

        match self.search(&username, None).await {
            Ok(result_set) => {
                let id = result_set.first().and_then(|item| item.get("id")).and_then(parse_id);
                if id.is_none() {
                    tracing::debug!(username = %username, "No user matched lookup");
                }
                id
            }
            Err(error) => {
                tracing::warn!(username = %username, error = %error, "User lookup failed");
                None
            }
        }
    }

    /// Searches users by name (`GET users/search`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn search(&self, query: &str, count: Option<u32>) -> Result<ResultSet, ResourceError> {
        let url = self
            .core
            .endpoint_url_with_query("users/search", &[("q", query.to_string())]);
        self.core.request(&url, count).await
    }

    /// Fetches a user's profile (`GET users/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn info(&self, user_id: u64) -> Result<ResultSet, ResourceError> {
        let url = self.endpoint_url(&format!("users/{user_id}"));
        self.core.request(&url, None).await
    }

    /// Fetches a user's most recent media (`GET users/{id}/media/recent`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn recent_media(
        &self,
        user_id: u64,
        count: Option<u32>,
    ) -> Result<ResultSet, ResourceError> {
        let url = self.endpoint_url(&format!("users/{user_id}/media/recent"));
        self.core.request(&url, count).await
    }

    /// Fetches the authenticated user's feed (`GET users/self/feed`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn self_feed(&self, count: Option<u32>) -> Result<ResultSet, ResourceError> {
        let url = self.endpoint_url("users/self/feed");
        self.core.request(&url, count).await
    }

    /// Fetches media liked by the authenticated user (`GET users/self/media/liked`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn liked(&self, count: Option<u32>) -> Result<ResultSet, ResourceError> {
        let url = self.endpoint_url("users/self/media/liked");
        self.core.request(&url, count).await
    }

    /// Lists the accounts a user follows (`GET users/{id}/follows`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn follows(&self, user_id: u64) -> Result<ResultSet, ResourceError> {
        let url = self.endpoint_url(&format!("users/{user_id}/follows"));
        self.core.request(&url, None).await
    }

    /// Lists the accounts following a user (`GET users/{id}/followed-by`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn followed_by(&self, user_id: u64) -> Result<ResultSet, ResourceError> {
        let url = self.endpoint_url(&format!("users/{user_id}/followed-by"));
        self.core.request(&url, None).await
    }
}
