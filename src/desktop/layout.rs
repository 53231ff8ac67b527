//! A [`Desktop`] answered from a fixed screen and window layout.
//!
//! Used by the daemon, which replays or relays host events without access
//! to a real windowing system, and by tests.

use crate::geometry::{Frame, Point, WindowId};
use crate::session::SiblingWindow;
use crate::traits::{Desktop, SiblingSource};
use log::warn;
use serde::{Deserialize, Serialize};

/// One physical screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Name of the output (e.g. `"DP-1"`).  Informational only.
    #[serde(default)]
    pub name: String,
    /// Full screen rectangle.
    pub bounds: Frame,
    /// Area available to windows.  Defaults to `bounds`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_area: Option<Frame>,
}

impl Screen {
    pub fn working_area(&self) -> Frame {
        self.working_area.unwrap_or(self.bounds)
    }
}

/// Screen and window layout served by [`StaticDesktop`].
///
/// # Example
///
/// ```json
/// {
///   "screens": [
///     { "name": "DP-1", "bounds": "0 0 1920 1080", "working_area": "0 0 1920 1040" },
///     { "name": "DP-2", "bounds": "1920 0 2560 1440" }
///   ],
///   "windows": [ { "id": 2, "frame": "300 100 640 480" } ],
///   "pointer": { "x": 400, "y": 300 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub screens: Vec<Screen>,
    /// Other top-level windows, offered as snap targets.
    pub windows: Vec<SiblingWindow>,
    /// Fixed pointer location.  When absent the pointer is assumed to be
    /// in the middle of the first screen.
    pub pointer: Option<Point>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            screens: vec![Screen {
                name: "default".into(),
                bounds: Frame::new(0, 0, 1920, 1080),
                working_area: None,
            }],
            windows: Vec::new(),
            pointer: None,
        }
    }
}

/// Errors from a [`StaticDesktop`] query.
#[derive(Debug, thiserror::Error)]
#[error("desktop error: {0}")]
pub struct DesktopError(String);

/// [`Desktop`] and [`SiblingSource`] backed by a [`DesktopConfig`].
#[derive(Debug, Clone)]
pub struct StaticDesktop {
    layout: DesktopConfig,
}

impl StaticDesktop {
    pub fn new(layout: DesktopConfig) -> Self {
        Self { layout }
    }

    pub fn screens(&self) -> &[Screen] {
        &self.layout.screens
    }

    /// The screen containing `at`, or the nearest one.
    pub fn screen_at(&self, at: Point) -> Option<&Screen> {
        self.layout
            .screens
            .iter()
            .find(|s| s.bounds.contains(at))
            .or_else(|| {
                self.layout
                    .screens
                    .iter()
                    .min_by_key(|s| s.bounds.distance_squared(at))
            })
    }
}

impl Desktop for StaticDesktop {
    type Error = DesktopError;

    fn pointer_position(&self) -> Result<Point, DesktopError> {
        if let Some(p) = self.layout.pointer {
            return Ok(p);
        }
        self.layout
            .screens
            .first()
            .map(|s| s.bounds.center())
            .ok_or_else(|| DesktopError("no screens configured".into()))
    }

    fn working_area(&self, at: Point) -> Result<Frame, DesktopError> {
        self.screen_at(at)
            .map(Screen::working_area)
            .ok_or_else(|| DesktopError("no screens configured".into()))
    }

    fn window_frame(&self, id: WindowId) -> Result<Frame, DesktopError> {
        self.layout
            .windows
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.frame)
            .ok_or_else(|| DesktopError(format!("unknown window {}", id)))
    }
}

impl SiblingSource for StaticDesktop {
    /// Every configured window, at the frame [`Desktop::window_frame`]
    /// reports for its id.
    fn sibling_windows(&self) -> Vec<SiblingWindow> {
        self.layout
            .windows
            .iter()
            .filter_map(|w| match self.sibling(w.id) {
                Ok(sibling) => Some(sibling),
                Err(e) => {
                    warn!("skipping sibling {}: {}", w.id, e);
                    None
                }
            })
            .collect()
    }
}
