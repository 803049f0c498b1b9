//! One-shot attach scheduling for the rendering surface.
//!
//! Attachment to the visible tree is deferred until the host page signals
//! that its structural content has finished parsing. The latch here is the
//! explicit "already fired" guard for that single-shot subscription: the
//! ready signal either consumes it exactly once or never.

use std::cell::Cell;

/// Single-shot latch: [`AttachOnce::fire`] returns `true` exactly once.
///
/// `Cell`-based — the host environment is single-threaded, so interior
/// mutability without locking is sufficient.
#[derive(Debug, Default)]
pub struct AttachOnce {
    fired: Cell<bool>,
}

impl AttachOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the single shot. The first call returns `true`; every later
    /// call returns `false`.
    pub fn fire(&self) -> bool {
        if self.fired.get() {
            return false;
        }
        self.fired.set(true);
        log::trace!("attach latch consumed");
        true
    }

    /// Whether the shot has been consumed.
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}
