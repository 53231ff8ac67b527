//! **magsnap**: magnetic edge snapping for desktop windows.
//!
//! While the user drags or resizes a window, its edges are pulled onto the
//! working area of the screen and onto the edges of other windows once they
//! come within a configurable snap distance.
//!
//! # Architecture
//!
//! The geometry engine is a pure function over integer rectangles:
//!
//! * [`geometry::Frame`]: the one rectangle type used everywhere.
//! * [`zones::BorderZones`]: edge strips used for proximity tests.
//! * [`resize::ResizeSide`]: which edges a resize step moved.
//! * [`snap::step`]: the per-step snapping rules.
//! * [`session::DragSession`]: state kept for the length of one gesture.
//!
//! The host side is abstracted by the traits in [`traits`]:
//!
//! * [`traits::Desktop`]: pointer, working area and window queries, so the
//!   engine is not coupled to any windowing system.
//! * [`traits::SiblingSource`]: the windows a dragged window may snap to.
//! * [`traits::EventSource`]: the transport delivering [`event::HostEvent`]s.
//!
//! [`snapper::SnappingWindow`] ties these together for one window.
//! Concrete implementations live in [`desktop`] (a static layout) and
//! [`ipc`] (Unix socket and trace replay).

pub mod config;
pub mod desktop;
pub mod event;
pub mod geometry;
pub mod ipc;
pub mod resize;
pub mod session;
pub mod snap;
pub mod snapper;
pub mod traits;
pub mod zones;
