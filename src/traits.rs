//! Core traits that decouple the snapping logic from any specific windowing
//! system or transport.
//!
//! Every concrete backend (a real desktop, the static layout used by the
//! daemon or a test double) implements one of these traits.  The
//! [`SnappingWindow`](crate::snapper::SnappingWindow) only depends on these
//! abstractions.

use crate::event::{HostEvent, Reply};
use crate::geometry::{Frame, Point, WindowId};
use crate::session::SiblingWindow;
use std::sync::mpsc;

/// The operating-system queries the snapping logic needs.
///
/// An implementation might call into a native windowing API, or it might
/// answer from a fixed layout in tests.
pub trait Desktop {
    /// The error type produced by this desktop.
    type Error: std::error::Error + Send + 'static;

    /// Current pointer location.
    fn pointer_position(&self) -> Result<Point, Self::Error>;

    /// Working area (screen bounds minus panels and docks) of the screen
    /// containing `at`, or of the nearest screen when no screen contains it.
    fn working_area(&self, at: Point) -> Result<Frame, Self::Error>;

    /// Current on-screen rectangle of the window `id`.
    fn window_frame(&self, id: WindowId) -> Result<Frame, Self::Error>;

    /// Build a [`SiblingWindow`] for `id` from its current frame.
    fn sibling(&self, id: WindowId) -> Result<SiblingWindow, Self::Error> {
        Ok(SiblingWindow::new(id, self.window_frame(id)?))
    }
}

/// Supplies the windows a dragged window may snap to.
///
/// Queried once per gesture, when the gesture starts.  Returning an empty
/// list disables sibling snapping; screen-edge snapping still applies.
pub trait SiblingSource {
    fn sibling_windows(&self) -> Vec<SiblingWindow>;
}

impl<F> SiblingSource for F
where
    F: Fn() -> Vec<SiblingWindow>,
{
    fn sibling_windows(&self) -> Vec<SiblingWindow> {
        self()
    }
}

/// A [`SiblingSource`] for windows that only snap to the screen edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSiblings;

impl SiblingSource for NoSiblings {
    fn sibling_windows(&self) -> Vec<SiblingWindow> {
        Vec::new()
    }
}

//  Event Source

/// A [`HostEvent`] in flight from an [`EventSource`] to the thread that
/// owns the snapping window.
///
/// Position-changing notifications are answered through `reply`.  For the
/// other events the sender is dropped without an answer.
#[derive(Debug)]
pub struct Request {
    pub event: HostEvent,
    pub reply: mpsc::Sender<Reply>,
}

impl Request {
    /// Wrap `event`, returning the receiver the answer will arrive on.
    pub fn new(event: HostEvent) -> (Self, mpsc::Receiver<Reply>) {
        let (reply, rx) = mpsc::channel();
        (Self { event, reply }, rx)
    }
}

/// A source of [`HostEvent`]s.
///
/// Implementations listen on some transport (a Unix socket, a recorded
/// trace, an in-memory channel) and forward parsed events into the
/// provided [`mpsc::Sender`].
///
/// # Contract
///
/// * [`run`](EventSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each event must be sent through `sink` exactly once, in arrival order.
/// * After sending a [`HostEvent::PositionChanging`] the source waits for
///   its [`Reply`] before reading on, so the host sees a synchronous answer.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait EventSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming event into `sink`.
    fn run(&mut self, sink: mpsc::Sender<Request>) -> Result<(), Self::Error>;
}
