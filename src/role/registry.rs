use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// A registry of handlers keyed by role tag.
///
/// A role is a space-separated list of tags from most specific to least
/// specific. Resolution scans the tags left to right and picks the first one
/// with a registered handler, falling back to the default handler. Resolved
/// compound roles are cached under the full role string; registering a new
/// tag drops the whole cache, since a role that previously fell through to
/// the default may now have a more specific match.
pub struct RoleRegistry<H> {
    base: HashMap<String, H>,
    default: Option<H>,
    /// Full role string -> matched tag (None = fell through to default).
    cache: Mutex<HashMap<String, Option<String>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No tag in the role matched and no default handler is registered
    NoHandler { role: Option<String> },

    /// A handler was requested under an exact tag that is not registered
    UnknownTag { tag: String },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NoHandler { role: Some(role) } => {
                write!(f, "no handler for role '{}' and no default registered", role)
            }
            DispatchError::NoHandler { role: None } => {
                write!(f, "no default handler registered for undefined role")
            }
            DispatchError::UnknownTag { tag } => {
                write!(f, "no handler registered under tag '{}'", tag)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

impl<H> RoleRegistry<H> {
    /// An empty registry with no handlers and no default.
    pub fn new() -> Self {
        RoleRegistry {
            base: HashMap::new(),
            default: None,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// A registry whose only handler is the default.
    pub fn with_default(handler: H) -> Self {
        let mut registry = Self::new();
        registry.default = Some(handler);
        registry
    }

    /// A registry seeded from an initial tag -> handler set.
    pub fn from_handlers<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = (String, H)>,
    {
        let mut registry = Self::new();
        registry.base.extend(handlers);
        registry
    }

    /// Install or replace the default handler.
    pub fn set_default(&mut self, handler: H) -> &H {
        self.clear_cache();
        self.default.insert(handler)
    }

    /// Register a handler under `tag`, replacing any previous one. The whole
    /// resolution cache is dropped: cached fallbacks for compound roles that
    /// mention `tag` are stale from this point on.
    pub fn define(&mut self, tag: impl Into<String>, handler: H) -> &H {
        self.clear_cache();
        match self.base.entry(tag.into()) {
            Entry::Occupied(mut slot) => {
                slot.insert(handler);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(handler),
        }
    }

    /// Direct lookup of a single tag, no fallback.
    pub fn get(&self, tag: &str) -> Option<&H> {
        self.base.get(tag)
    }

    pub fn default_handler(&self) -> Option<&H> {
        self.default.as_ref()
    }

    /// Resolve a role to a handler.
    ///
    /// An undefined role goes straight to the default handler and never
    /// touches the cache. Defined roles are answered from the cache when
    /// possible; on a miss the role is scanned for its most specific
    /// registered tag and the outcome is remembered under the full role
    /// string.
    pub fn resolve(&self, role: Option<&str>) -> Result<&H, DispatchError> {
        let Some(role) = role else {
            return self
                .default
                .as_ref()
                .ok_or(DispatchError::NoHandler { role: None });
        };

        if let Some(resolution) = self.cache_guard().get(role).cloned() {
            return match resolution {
                Some(tag) => self.base.get(&tag).ok_or_else(|| DispatchError::NoHandler {
                    role: Some(role.to_string()),
                }),
                None => self.default.as_ref().ok_or_else(|| DispatchError::NoHandler {
                    role: Some(role.to_string()),
                }),
            };
        }

        let hit = role
            .split_whitespace()
            .find(|tag| self.base.contains_key(*tag));

        // Registration takes &mut self, so no resolution can race a define();
        // concurrent misses on &self recompute and store the same entry.
        self.cache_guard()
            .insert(role.to_string(), hit.map(str::to_string));

        match hit {
            Some(tag) => self.base.get(tag).ok_or_else(|| DispatchError::NoHandler {
                role: Some(role.to_string()),
            }),
            None => self.default.as_ref().ok_or_else(|| DispatchError::NoHandler {
                role: Some(role.to_string()),
            }),
        }
    }

    /// The cached outcome for a full role string, if any. `Some(None)` means
    /// the role is known to fall through to the default handler.
    pub fn cached_resolution(&self, role: &str) -> Option<Option<String>> {
        self.cache_guard().get(role).cloned()
    }

    fn clear_cache(&mut self) {
        self.cache_guard().clear();
    }

    fn cache_guard(&self) -> MutexGuard<'_, HashMap<String, Option<String>>> {
        match self.cache.lock() {
            Ok(guard) => guard,
            // The cache holds plain resolution records; a panic mid-insert
            // cannot leave them inconsistent.
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<H> Default for RoleRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
