//! The per-window orchestrator that ties the drag session, the desktop and
//! the snap engine together.
//!
//! [`SnappingWindow`] owns one [`DragSession`] and reacts to
//! [`HostEvent`]s: a gesture start snapshots the sibling windows, every
//! position-changing notification is run through [`snap::step`], and a
//! gesture end closes the session.

use crate::config::SnapConfig;
use crate::event::{HostEvent, PositionChange, Reply};
use crate::geometry::{Frame, WindowId};
use crate::session::DragSession;
use crate::snap;
use crate::traits::{Desktop, SiblingSource};
use log::{debug, info, warn};

/// Possible errors from the snapping window.
#[derive(Debug, thiserror::Error)]
pub enum SnapperError {
    /// The desktop returned an error.
    #[error("desktop error: {0}")]
    Desktop(String),
}

/// Magnetic snapping for one window.
///
/// Generic over the [`Desktop`] that answers screen queries and the
/// [`SiblingSource`] that names the windows to snap to, so it is not tied to
/// any windowing system.
///
/// # Typical usage
///
/// ```ignore
/// let mut window = SnappingWindow::new(desktop, siblings);
/// window.on_session_start(current_frame);
/// let reply = window.on_position_changing(PositionChange::new(proposed))?;
/// window.on_session_end();
/// ```
pub struct SnappingWindow<D: Desktop, S: SiblingSource> {
    desktop: D,
    siblings: S,
    session: DragSession,
    snap_distance: i32,
    window_id: Option<WindowId>,
}

impl<D: Desktop, S: SiblingSource> SnappingWindow<D, S> {
    /// Create a snapping window with the default configuration.
    pub fn new(desktop: D, siblings: S) -> Self {
        Self {
            desktop,
            siblings,
            session: DragSession::new(),
            snap_distance: SnapConfig::default().snap_distance,
            window_id: None,
        }
    }

    /// Apply a [`SnapConfig`].  Takes effect on the next step.
    pub fn set_config(&mut self, config: &SnapConfig) {
        self.set_snap_distance(config.snap_distance);
    }

    /// Set the snap distance.  Negative values are treated as `0` and values
    /// above [`snap::MAX_SNAP_DISTANCE`] as that maximum.
    pub fn set_snap_distance(&mut self, distance: i32) {
        if distance < 0 {
            warn!("negative snap distance {}, using 0", distance);
        } else if distance > snap::MAX_SNAP_DISTANCE {
            warn!(
                "snap distance {} too large, using {}",
                distance,
                snap::MAX_SNAP_DISTANCE
            );
        }
        self.snap_distance = distance.clamp(0, snap::MAX_SNAP_DISTANCE);
    }

    pub fn snap_distance(&self) -> i32 {
        self.snap_distance
    }

    /// Identify the window itself, so it is never offered to itself as a
    /// snap target.
    pub fn set_window_id(&mut self, id: WindowId) {
        self.window_id = Some(id);
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn desktop(&self) -> &D {
        &self.desktop
    }

    /// Process a single [`HostEvent`].
    ///
    /// Returns the [`Reply`] for position-changing notifications and `None`
    /// for session boundaries.
    pub fn handle(&mut self, event: HostEvent) -> Result<Option<Reply>, SnapperError> {
        match event {
            HostEvent::SessionStart { frame } => {
                self.on_session_start(frame);
                Ok(None)
            }
            HostEvent::SessionEnd => {
                self.on_session_end();
                Ok(None)
            }
            HostEvent::PositionChanging(change) => self.on_position_changing(change).map(Some),
        }
    }

    /// A drag or resize gesture started with the window at `frame`.
    ///
    /// Takes the sibling snapshot used for the rest of the gesture.  A
    /// gesture already in progress is abandoned.
    pub fn on_session_start(&mut self, frame: Frame) {
        if self.session.is_active() {
            debug!("session start while active, restarting");
        }
        let own = self.window_id;
        let siblings: Vec<_> = self
            .siblings
            .sibling_windows()
            .into_iter()
            .filter(|w| Some(w.id) != own)
            .collect();
        info!("session start at {} with {} sibling(s)", frame, siblings.len());
        self.session.begin(frame, siblings);
    }

    /// The gesture ended.  Accepted at any time.
    pub fn on_session_end(&mut self) {
        if self.session.is_active() {
            info!("session end at {}", self.session.last_frame());
        }
        self.session.end();
    }

    /// The host is about to apply `change.frame`.
    ///
    /// Outside a gesture, for notifications that do not move the window,
    /// and for repeats of the last delivered frame, the proposal is passed
    /// through unhandled.  Errors leave the session untouched.
    pub fn on_position_changing(&mut self, change: PositionChange) -> Result<Reply, SnapperError> {
        if !self.session.is_active() {
            return Ok(Reply::pass_through(&change));
        }
        if change.no_move {
            debug!("no-move notification for {}, ignored", change.frame);
            return Ok(Reply::pass_through(&change));
        }
        if change.frame == self.session.last_frame() {
            return Ok(Reply::pass_through(&change));
        }

        let pointer = match change.pointer {
            Some(p) => p,
            None => self
                .desktop
                .pointer_position()
                .map_err(|e| SnapperError::Desktop(e.to_string()))?,
        };
        let area = self
            .desktop
            .working_area(pointer)
            .map_err(|e| SnapperError::Desktop(e.to_string()))?;

        let outcome = snap::step(change.frame, &mut self.session, area, self.snap_distance);
        Ok(Reply {
            frame: outcome.frame,
            handled: outcome.changed,
        })
    }
}

//  Tests
