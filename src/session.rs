//! Per-window drag/resize session state.
//!
//! A [`DragSession`] lives for exactly one gesture.  It remembers the last
//! frame delivered to the host (so each step can tell a move from a resize)
//! and the sibling snapshot taken when the gesture began.

use crate::geometry::{Frame, WindowId};
use serde::{Deserialize, Serialize};

/// Another top-level window that the dragged window can snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingWindow {
    pub id: WindowId,
    pub frame: Frame,
}

impl SiblingWindow {
    pub fn new(id: WindowId, frame: Frame) -> Self {
        Self { id, frame }
    }
}

/// Session-scoped snapping state for one window.
///
/// The sibling list is a snapshot: windows that move while the gesture is
/// in progress are seen at their starting position until the next
/// [`begin`](DragSession::begin).
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    last_frame: Frame,
    siblings: Vec<SiblingWindow>,
    active: bool,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture at `start_frame`.
    ///
    /// Any session still in progress is discarded.
    pub fn begin(&mut self, start_frame: Frame, siblings: Vec<SiblingWindow>) {
        self.last_frame = start_frame;
        self.siblings = siblings;
        self.active = true;
    }

    /// End the gesture.  Safe to call when no gesture is in progress.
    pub fn end(&mut self) {
        self.active = false;
        self.siblings.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The frame most recently delivered to the host.
    pub fn last_frame(&self) -> Frame {
        self.last_frame
    }

    pub fn siblings(&self) -> &[SiblingWindow] {
        &self.siblings
    }

    pub(crate) fn set_last_frame(&mut self, frame: Frame) {
        self.last_frame = frame;
    }
}
