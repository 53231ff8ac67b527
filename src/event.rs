//! Events exchanged with the host toolkit.
//!
//! The host delivers three kinds of [`HostEvent`]: a drag/resize gesture
//! starting, ending, and a position-changing notification for every step in
//! between.  Only the last one expects an answer, a [`Reply`] carrying the
//! frame the host should apply.
//!
//! # Wire format
//!
//! Events are externally tagged JSON, one per line:
//!
//! ```json
//! {"SessionStart":{"frame":{"left":100,"top":100,"width":200,"height":100}}}
//! {"PositionChanging":{"frame":"90 100 210 100"}}
//! {"PositionChanging":{"frame":"90 100 210 100","no_move":true}}
//! "SessionEnd"
//! ```

use crate::geometry::{Frame, Point};
use serde::{Deserialize, Serialize};

/// A proposed new frame for the window, about to be applied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionChange {
    /// The frame the host intends to apply.
    pub frame: Frame,

    /// The host is not moving the window in this notification (for
    /// instance a z-order-only change).  Such notifications are never
    /// snapped.
    #[serde(default)]
    pub no_move: bool,

    /// Pointer location at the time of the notification, if the host
    /// already knows it.  Otherwise the desktop is asked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<Point>,
}

impl PositionChange {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            no_move: false,
            pointer: None,
        }
    }
}

/// Everything the host tells a snapping window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// The user started dragging or resizing the window, which currently
    /// occupies `frame`.
    SessionStart { frame: Frame },

    /// The gesture ended (or was cancelled).
    SessionEnd,

    /// The host is about to move or resize the window.
    PositionChanging(PositionChange),
}

/// Answer to a [`HostEvent::PositionChanging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// The frame to apply.  Equal to the proposal when `handled` is false.
    pub frame: Frame,
    /// Whether the frame was rewritten.
    pub handled: bool,
}

impl Reply {
    /// Let the host apply its own proposal.
    pub fn pass_through(change: &PositionChange) -> Self {
        Self {
            frame: change.frame,
            handled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_session_start() {
        let json = r#"{"SessionStart":{"frame":{"left":100,"top":100,"width":200,"height":100}}}"#;
        let ev: HostEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            ev,
            HostEvent::SessionStart {
                frame: Frame::new(100, 100, 200, 100)
            }
        );
    }

    #[test]
    fn parse_session_end() {
        let ev: HostEvent = serde_json::from_str(r#""SessionEnd""#).unwrap();
        assert_eq!(ev, HostEvent::SessionEnd);
    }

    #[test]
    fn parse_position_changing_defaults() {
        let json = r#"{"PositionChanging":{"frame":"90 100 210 100"}}"#;
        let ev: HostEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            ev,
            HostEvent::PositionChanging(PositionChange::new(Frame::new(90, 100, 210, 100)))
        );
    }

    #[test]
    fn parse_position_changing_with_flags() {
        let json = r#"{"PositionChanging":{"frame":"0 0 10 10","no_move":true,"pointer":{"x":3,"y":4}}}"#;
        let ev: HostEvent = serde_json::from_str(json).unwrap();
        match ev {
            HostEvent::PositionChanging(change) => {
                assert!(change.no_move);
                assert_eq!(change.pointer, Some(Point::new(3, 4)));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn reply_serializes_frame_as_object() {
        let reply = Reply {
            frame: Frame::new(0, 100, 300, 100),
            handled: true,
        };
        let json = serde_json::to_string(&reply).unwrap();
        assert_eq!(
            json,
            r#"{"frame":{"left":0,"top":100,"width":300,"height":100},"handled":true}"#
        );
    }

    #[test]
    fn pass_through_keeps_proposal() {
        let change = PositionChange::new(Frame::new(1, 2, 3, 4));
        let reply = Reply::pass_through(&change);
        assert_eq!(reply.frame, change.frame);
        assert!(!reply.handled);
    }
}
