//! Lazily populated, client-owned resource cache.
//!
//! The [`ResourceRegistry`] constructs each resource at most once per client
//! and hands out the same instance on every later lookup. Entries are never
//! evicted; they live as long as the client.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::clients::ClientContext;
use crate::rest::resources::{Media, User};
use crate::rest::{Resource, ResourceCore, ResourceError, ResourceKind};

/// A constructed resource, as stored in the registry.
///
/// Use [`ResourceHandle::downcast`] (or the `into_*` shortcuts) to get the
/// concrete resource type.
#[derive(Debug, Clone)]
pub enum ResourceHandle {
    /// The user resource.
    User(Arc<User>),
    /// The media resource.
    Media(Arc<Media>),
}

impl ResourceHandle {
    /// Constructs the resource for `kind`. This is the only place kinds are
    /// mapped to resource types.
    fn build(kind: ResourceKind, context: &Arc<ClientContext>) -> Self {
        let core = Arc::new(ResourceCore::new(kind, Arc::clone(context)));
        match kind {
            ResourceKind::User => Self::User(Arc::new(User::from_core(core))),
            ResourceKind::Media => Self::Media(Arc::new(Media::from_core(core))),
        }
    }

    /// Returns the kind of the held resource.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.core().kind()
    }

    /// Returns the core of the held resource.
    #[must_use]
    pub fn core(&self) -> &Arc<ResourceCore> {
        match self {
            Self::User(user) => user.core(),
            Self::Media(media) => media.core(),
        }
    }

    /// Returns `true` if both handles refer to the same resource instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self.core(), other.core())
    }

    /// Extracts the concrete resource type `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Type`] naming the held resource and `R` if
    /// the handle holds a different resource.
    pub fn downcast<R: Resource>(self) -> Result<Arc<R>, ResourceError> {
        let name = self.kind().name();
        R::from_handle(self).ok_or(ResourceError::Type {
            name,
            expected: R::KIND.name(),
        })
    }

    /// Extracts the user resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Type`] if the handle holds another resource.
    pub fn into_user(self) -> Result<Arc<User>, ResourceError> {
        self.downcast::<User>()
    }

    /// Extracts the media resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Type`] if the handle holds another resource.
    pub fn into_media(self) -> Result<Arc<Media>, ResourceError> {
        self.downcast::<Media>()
    }
}

/// Cache of constructed resources, keyed by kind.
///
/// # Thread Safety
///
/// The map is behind a `Mutex` so the owning client stays `Send + Sync`.
/// Lookups check and insert under a single lock, so a kind is never
/// constructed twice.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    pool: Mutex<HashMap<ResourceKind, ResourceHandle>>,
}

impl ResourceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached resource for `kind`, constructing it on first use.
    pub fn get(&self, kind: ResourceKind, context: &Arc<ClientContext>) -> ResourceHandle {
        let mut pool = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
        pool.entry(kind)
            .or_insert_with(|| {
                tracing::debug!(resource = kind.name(), "Constructing resource");
                ResourceHandle::build(kind, context)
            })
            .clone()
    }

    /// Returns `true` if a resource for `kind` has been constructed.
    #[must_use]
    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.pool
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&kind)
    }

    /// Returns the number of constructed resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if no resource has been constructed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
