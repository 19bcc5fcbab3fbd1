//! Concrete Instagram resources and their response models.
//!
//! ```text
//! resources/
//!   mod.rs      <- This file
//!   common.rs   <- Types embedded in several models
//!   user.rs     <- User resource, UserProfile
//!   media.rs    <- Media resource, MediaItem, MediaComment
//! ```
//!
//! # Available Resources
//!
//! ## User Resource
//!
//! ```rust,ignore
//! let users = client.users()?;
//!
//! let id = users.id_by_user("jack").await;
//! let feed = users.self_feed(Some(20)).await?;
//! let followers = users.followed_by(1_574_083).await?;
//! ```
//!
//! ## Media Resource
//!
//! ```rust,ignore
//! let media = client.media()?;
//!
//! let nearby = media.search(48.858_844, 2.294_351, Some(500)).await?;
//! let comments = media.comments("3_3").await?;
//! ```
//!
//! # Typed Models
//!
//! Every endpoint returns a [`ResultSet`](crate::rest::ResultSet) over raw
//! JSON items. The models here give a typed view through
//! [`ResultSet::deserialize_data`](crate::rest::ResultSet::deserialize_data):
//!
//! ```rust,ignore
//! use instagram_api::rest::resources::MediaItem;
//!
//! let items: Vec<MediaItem> = media.popular(None).await?.deserialize_data()?;
//! ```

mod common;
mod media;
mod user;

pub use common::{parse_id, Count, Location, Rendition, Renditions};
pub use media::{Caption, Media, MediaComment, MediaItem};
pub use user::{User, UserCounts, UserLookup, UserProfile};
