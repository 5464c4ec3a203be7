//! Active-surface registry.
//!
//! Keyboard input is page-global, but several surfaces may be mounted at
//! once. The host installs one set of window listeners and routes every key
//! event to the single active surface held here. The most recently attached
//! or activated surface is active; when it detaches, the most recent
//! remaining one takes over. A surface that loses activity while keys are
//! held never sees their key-ups, so [`Registry::hand_off`] reports it.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Handle for a registered surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

/// Surfaces in activation order (last = active).
#[derive(Debug)]
pub struct Registry<S> {
    entries: Vec<(SurfaceId, S)>,
    next_id: u64,
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self { entries: Vec::new(), next_id: 0 }
    }
}

impl<S> Registry<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a surface and make it active.
    pub fn attach(&mut self, surface: S) -> SurfaceId {
        self.next_id += 1;
        let id = SurfaceId(self.next_id);
        self.entries.push((id, surface));
        id
    }

    /// Remove a surface, returning it. Activity falls back to the most recent
    /// remaining surface.
    pub fn detach(&mut self, id: SurfaceId) -> Option<S> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Make a registered surface active (pointer entered it, it gained focus).
    /// Returns `false` for unknown ids.
    pub fn activate(&mut self, id: SurfaceId) -> bool {
        let Some(index) = self.entries.iter().position(|(entry, _)| *entry == id) else {
            return false;
        };
        let entry = self.entries.remove(index);
        self.entries.push(entry);
        true
    }

    /// Make `id` active and return the surface that lost activity, if any.
    ///
    /// Keys still held on the returned surface will release over the new one,
    /// so the host must treat the handoff as a focus loss for it.
    pub fn hand_off(&mut self, id: SurfaceId) -> Option<SurfaceId> {
        let previous = self.active_id()?;
        if previous == id || !self.activate(id) {
            return None;
        }
        Some(previous)
    }

    #[must_use]
    pub fn active_id(&self) -> Option<SurfaceId> {
        self.entries.last().map(|(id, _)| *id)
    }

    #[must_use]
    pub fn active(&self) -> Option<&S> {
        self.entries.last().map(|(_, s)| s)
    }

    pub fn active_mut(&mut self) -> Option<&mut S> {
        self.entries.last_mut().map(|(_, s)| s)
    }

    #[must_use]
    pub fn get(&self, id: SurfaceId) -> Option<&S> {
        self.entries.iter().find(|(entry, _)| *entry == id).map(|(_, s)| s)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut S> {
        self.entries.iter_mut().find(|(entry, _)| *entry == id).map(|(_, s)| s)
    }
}
