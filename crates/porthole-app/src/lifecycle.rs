//! Main window lifecycle.
//!
//! `WindowLifecycle` is the only owner of the window slot. Everything else
//! gets a [`WindowPresence`], which can observe the slot but not change it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Read-only view of whether a main window currently exists.
#[derive(Debug, Clone)]
pub struct WindowPresence(Arc<AtomicBool>);

impl WindowPresence {
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Owns at most one main window.
pub struct WindowLifecycle<W> {
    slot: Option<W>,
    active: Arc<AtomicBool>,
}

impl<W> WindowLifecycle<W> {
    pub fn new() -> Self {
        Self {
            slot: None,
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn presence(&self) -> WindowPresence {
        WindowPresence(Arc::clone(&self.active))
    }

    /// Create the window with `create` when none exists.
    ///
    /// Returns `Ok(true)` if a window was created, `Ok(false)` if one
    /// already existed. A failed `create` leaves the slot empty.
    pub fn activate<E>(&mut self, create: impl FnOnce() -> Result<W, E>) -> Result<bool, E> {
        if self.slot.is_some() {
            return Ok(false);
        }
        let window = create()?;
        self.slot = Some(window);
        self.active.store(true, Ordering::Release);
        Ok(true)
    }

    /// Clear the slot, handing back the window for teardown.
    pub fn close(&mut self) -> Option<W> {
        let window = self.slot.take();
        self.active.store(false, Ordering::Release);
        window
    }

    pub fn get(&self) -> Option<&W> {
        self.slot.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut W> {
        self.slot.as_mut()
    }
}

impl<W> Default for WindowLifecycle<W> {
    fn default() -> Self {
        Self::new()
    }
}
