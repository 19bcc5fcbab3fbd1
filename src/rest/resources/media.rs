//! Media resource.
//!
//! Endpoints under `/media`: single media lookup, the popular feed,
//! geographic search, and the comments and likes on a media item.
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_api::rest::resources::MediaItem;
//!
//! let media = client.media()?;
//!
//! let mut page = media.popular(Some(32)).await?;
//! loop {
//!     let items: Vec<MediaItem> = page.deserialize_data()?;
//!     for item in &items {
//!         println!("{} by {:?}", item.id, item.user.as_ref().map(|u| &u.username));
//!     }
//!     match page.next_page(None).await? {
//!         Some(next) => page = next,
//!         None => break,
//!     }
//! }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{deserialize_unix_timestamp, Count, Location, Renditions};
use super::UserProfile;
use crate::rest::{Resource, ResourceCore, ResourceError, ResourceHandle, ResourceKind, ResultSet};

/// The caption attached to a media item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Caption {
    /// The caption ID.
    #[serde(default)]
    pub id: String,
    /// The caption text.
    #[serde(default)]
    pub text: String,
    /// When the caption was written.
    #[serde(default, deserialize_with = "deserialize_unix_timestamp")]
    pub created_time: Option<DateTime<Utc>>,
    /// The author.
    pub from: Option<UserProfile>,
}

/// A photo or video as returned by the media endpoints and user feeds.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MediaItem {
    /// The media ID (e.g., `"3_3"`).
    #[serde(default)]
    pub id: String,
    /// `"image"` or `"video"`.
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    /// Tags attached to the media.
    #[serde(default)]
    pub tags: Vec<String>,
    /// The applied filter name.
    pub filter: Option<String>,
    /// When the media was posted.
    #[serde(default, deserialize_with = "deserialize_unix_timestamp")]
    pub created_time: Option<DateTime<Utc>>,
    /// Web link to the media.
    pub link: Option<String>,
    /// Like counter.
    pub likes: Option<Count>,
    /// Comment counter.
    pub comments: Option<Count>,
    /// Image renditions by size name.
    #[serde(default)]
    pub images: Renditions,
    /// Video renditions by size name, for videos.
    pub videos: Option<Renditions>,
    /// The caption, if any.
    pub caption: Option<Caption>,
    /// Where the media was taken, if known.
    pub location: Option<Location>,
    /// Whether the authenticated user has liked this media.
    pub user_has_liked: Option<bool>,
    /// The author.
    pub user: Option<UserProfile>,
}

/// A comment on a media item, as returned by `media/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MediaComment {
    /// The comment ID.
    #[serde(default)]
    pub id: String,
    /// The comment text.
    #[serde(default)]
    pub text: String,
    /// When the comment was written.
    #[serde(default, deserialize_with = "deserialize_unix_timestamp")]
    pub created_time: Option<DateTime<Utc>>,
    /// The author.
    pub from: Option<UserProfile>,
}

/// The `/media` endpoint family.
#[derive(Debug)]
pub struct Media {
    core: Arc<ResourceCore>,
}

impl Resource for Media {
    const KIND: ResourceKind = ResourceKind::Media;

    fn from_core(core: Arc<ResourceCore>) -> Self {
        Self { core }
    }

    fn core(&self) -> &Arc<ResourceCore> {
        &self.core
    }

    fn from_handle(handle: ResourceHandle) -> Option<Arc<Self>> {
        match handle {
            ResourceHandle::Media(media) => Some(media),
            ResourceHandle::User(_) => None,
        }
    }
}

impl Media {
    /// Fetches a single media item (`GET media/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn info(&self, media_id: &str) -> Result<ResultSet, ResourceError> {
        let url = self.endpoint_url(&format!("media/{}", urlencoding::encode(media_id)));
        self.core.request(&url, None).await
    }

    /// Fetches currently popular media (`GET media/popular`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn popular(&self, count: Option<u32>) -> Result<ResultSet, ResourceError> {
        let url = self.endpoint_url("media/popular");
        self.core.request(&url, count).await
    }

    /// Searches media taken near a point (`GET media/search`).
    ///
    /// `distance` is in meters; the API applies its own default when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn search(
        &self,
        lat: f64,
        lng: f64,
        distance: Option<u32>,
    ) -> Result<ResultSet, ResourceError> {
        let mut params = vec![("lat", lat.to_string()), ("lng", lng.to_string())];
        if let Some(distance) = distance {
            params.push(("distance", distance.to_string()));
        }
        let url = self.core.endpoint_url_with_query("media/search", &params);
        self.core.request(&url, None).await
    }

    /// Lists the comments on a media item (`GET media/{id}/comments`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn comments(&self, media_id: &str) -> Result<ResultSet, ResourceError> {
        let url = self.endpoint_url(&format!("media/{}/comments", urlencoding::encode(media_id)));
        self.core.request(&url, None).await
    }

    /// Lists the users who liked a media item (`GET media/{id}/likes`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn likes(&self, media_id: &str) -> Result<ResultSet, ResourceError> {
        let url = self.endpoint_url(&format!("media/{}/likes", urlencoding::encode(media_id)));
        self.core.request(&url, None).await
    }
}
