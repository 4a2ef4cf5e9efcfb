//! # Portal Registry
//!
//! Owns every live portal record. All access goes through one
//! `parking_lot::Mutex`; contention is one lock per portal created or
//! destroyed, not per tick.
//!
//! Ids come from a counter that only moves forward. A removed id is retired
//! for good, so a stale id held elsewhere (a block tag, a teleport cache)
//! resolves to "not found" instead of to a newer portal.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use crate::error::{PortalError, PortalResult};
use crate::geometry::FrameGeometry;

/// Identifier of a registered portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PortalId(u64);

impl PortalId {
    /// Wraps a raw id, e.g. one read back from a block tag.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id, for embedding in block tags.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PortalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "portal#{}", self.0)
    }
}

/// Construction state of a portal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PortalState {
    /// Built; validity checks consult the world.
    #[default]
    Idle,
    /// The engine is writing this portal's blocks. Validity checks pass
    /// unconditionally so the engine's own writes do not break it.
    Generating,
}

/// A registered portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portal {
    /// Registry id.
    pub id: PortalId,
    /// Frame geometry.
    pub geometry: FrameGeometry,
    /// Construction state.
    pub state: PortalState,
}

impl Portal {
    /// Returns true while the engine is building this portal.
    #[inline]
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.state == PortalState::Generating
    }
}

#[derive(Default)]
struct RegistryInner {
    next_id: u64,
    portals: HashMap<PortalId, Portal>,
    by_geometry: HashMap<FrameGeometry, PortalId>,
    retired: HashSet<PortalId>,
}

impl RegistryInner {
    fn allocate_id(&mut self) -> PortalId {
        let id = PortalId(self.next_id);
        self.next_id += 1;
        id
    }

    fn is_allocated(&self, id: PortalId) -> bool {
        id.0 < self.next_id && !self.retired.contains(&id)
    }

    fn insert(&mut self, portal: Portal) -> Option<Portal> {
        let replaced = self.portals.insert(portal.id, portal);
        if let Some(old) = &replaced {
            self.by_geometry.remove(&old.geometry);
        }
        self.by_geometry.insert(portal.geometry, portal.id);
        replaced
    }
}

/// Thread-safe map from portal id to portal record.
#[derive(Default)]
pub struct PortalRegistry {
    inner: Mutex<RegistryInner>,
}

impl PortalRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a fresh id. Ids are strictly increasing and never reused.
    pub fn allocate_id(&self) -> PortalId {
        self.inner.lock().allocate_id()
    }

    /// Inserts a portal under its own id, returning any record it replaced.
    ///
    /// The id must come from [`allocate_id`](Self::allocate_id) and must not
    /// have been removed.
    ///
    /// # Errors
    ///
    /// [`PortalError::UnallocatedId`] for ids past the counter or retired.
    pub fn insert(&self, portal: Portal) -> PortalResult<Option<Portal>> {
        let mut inner = self.inner.lock();
        if !inner.is_allocated(portal.id) {
            tracing::warn!("Refused insert of {}", portal.id);
            return Err(PortalError::UnallocatedId(portal.id));
        }
        Ok(inner.insert(portal))
    }

    /// Allocates an id and inserts the portal under one lock.
    pub fn register(&self, geometry: FrameGeometry, state: PortalState) -> PortalId {
        let mut inner = self.inner.lock();
        let id = inner.allocate_id();
        inner.insert(Portal {
            id,
            geometry,
            state,
        });
        id
    }

    /// Returns a copy of the portal record.
    #[must_use]
    pub fn get(&self, id: PortalId) -> Option<Portal> {
        self.inner.lock().portals.get(&id).copied()
    }

    /// Runs a closure against the portal record while holding the lock.
    ///
    /// Keep the closure short; it blocks every other registry user.
    pub fn with_portal<F, R>(&self, id: PortalId, f: F) -> Option<R>
    where
        F: FnOnce(&Portal) -> R,
    {
        self.inner.lock().portals.get(&id).map(f)
    }

    /// Updates a portal's construction state. Returns false for unknown ids.
    pub fn set_state(&self, id: PortalId, state: PortalState) -> bool {
        match self.inner.lock().portals.get_mut(&id) {
            Some(portal) => {
                portal.state = state;
                true
            }
            None => false,
        }
    }

    /// Removes a portal. Its id stays retired.
    pub fn remove(&self, id: PortalId) -> Option<Portal> {
        let mut inner = self.inner.lock();
        let portal = inner.portals.remove(&id)?;
        inner.retired.insert(id);
        if inner.by_geometry.get(&portal.geometry) == Some(&id) {
            inner.by_geometry.remove(&portal.geometry);
        }
        Some(portal)
    }

    /// Finds the portal registered with exactly this geometry.
    #[must_use]
    pub fn find_by_geometry(&self, geometry: &FrameGeometry) -> Option<PortalId> {
        self.inner.lock().by_geometry.get(geometry).copied()
    }

    /// Number of registered portals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().portals.len()
    }

    /// Returns true if no portal is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().portals.is_empty()
    }

    /// Ids of every registered portal, ascending.
    #[must_use]
    pub fn ids(&self) -> Vec<PortalId> {
        let mut ids: Vec<_> = self.inner.lock().portals.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
