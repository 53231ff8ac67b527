//! The snap engine.
//!
//! [`step`] takes the frame the host is about to apply and decides whether
//! to pull any of its edges onto the screen's working area or onto a
//! sibling window.  It runs once per position-changing notification, on the
//! host's event thread, and must return before the host commits the frame.
//!
//! # Order of operations
//!
//! 1. Classify the step as a [`SnapMode::Move`] (size unchanged since the
//!    last delivered frame) or a [`SnapMode::Resize`], and for a resize
//!    work out which edges are being dragged ([`ResizeSide`]).
//! 2. Snap to the working area.  Any edge within `snap_distance` of the
//!    screen edge (or past it) is pulled onto it.
//! 3. Snap to siblings, one at a time, in snapshot order.  On a move the
//!    whole window translates so that an edge sits flush against the
//!    sibling, then lines up with the sibling's perpendicular edges.  On a
//!    resize only the dragged edges move.
//! 4. Remember the result as the session's last frame.
//!
//! While resizing, the edge opposite the dragged one never moves: every
//! change of `left`/`top` is compensated in `width`/`height`.

use crate::geometry::Frame;
use crate::resize::ResizeSide;
use crate::session::DragSession;
use crate::zones::BorderZones;
use log::debug;

/// Largest snap distance [`step`] honours.  Larger values are clamped.
pub const MAX_SNAP_DISTANCE: i32 = 1 << 16;

/// Whether a step moves the window or changes its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapMode {
    Move,
    Resize,
}

impl SnapMode {
    /// Classify the step from `last` to `proposed`.
    pub fn between(last: &Frame, proposed: &Frame) -> Self {
        if last.same_size(proposed) {
            SnapMode::Move
        } else {
            SnapMode::Resize
        }
    }
}

/// Result of one engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapOutcome {
    /// The frame the host should apply.
    pub frame: Frame,
    /// Whether `frame` differs from the host's proposal.
    pub changed: bool,
}

impl SnapOutcome {
    fn unchanged(frame: Frame) -> Self {
        Self {
            frame,
            changed: false,
        }
    }
}

/// Run one snapping step for `proposed`.
///
/// Returns the proposal untouched when `session` is not active or when the
/// proposal equals the last delivered frame.  Otherwise the adjusted frame
/// becomes the session's last frame, whether or not anything snapped.
///
/// A proposal or working area whose right or bottom edge does not fit in an
/// `i32` is delivered unmodified.  Such siblings are ignored.
pub fn step(
    proposed: Frame,
    session: &mut DragSession,
    working_area: Frame,
    snap_distance: i32,
) -> SnapOutcome {
    if !session.is_active() {
        return SnapOutcome::unchanged(proposed);
    }

    let last = session.last_frame();
    if proposed == last {
        return SnapOutcome::unchanged(proposed);
    }

    if !proposed.edges_in_range() || !working_area.edges_in_range() {
        debug!("{} or working area {} out of range, passing through", proposed, working_area);
        session.set_last_frame(proposed);
        return SnapOutcome::unchanged(proposed);
    }

    let snap_distance = snap_distance.clamp(0, MAX_SNAP_DISTANCE);
    let mode = SnapMode::between(&last, &proposed);
    let side = match mode {
        SnapMode::Move => ResizeSide::default(),
        SnapMode::Resize => ResizeSide::detect(&last, &proposed),
    };

    let mut frame = proposed;
    snap_to_screen(&mut frame, mode, working_area, snap_distance);

    let siblings = session.siblings();
    if !siblings.is_empty() {
        // Built once: every sibling is tested against the edges the window
        // had before sibling snapping started.
        let source = BorderZones::source(frame);
        let usable = siblings
            .iter()
            .filter(|s| !s.frame.is_empty() && s.frame.edges_in_range());
        for sibling in usable {
            let target = BorderZones::target(sibling.frame, snap_distance);
            match mode {
                SnapMode::Move => {
                    snap_move_to_sibling(&mut frame, &source, &target, sibling.frame, snap_distance)
                }
                SnapMode::Resize => snap_resize_to_sibling(
                    &mut frame,
                    side,
                    &source,
                    &target,
                    sibling.frame,
                    snap_distance,
                ),
            }
        }
    }

    keep_dimensions_non_negative(&mut frame, &proposed, side);

    let changed = frame != proposed;
    if changed {
        debug!("{:?} {} snapped to {}", mode, proposed, frame);
    }

    session.set_last_frame(frame);
    SnapOutcome { frame, changed }
}

//  Edge helpers

/// Put the left edge at `x`, keeping the right edge where it is.
fn drag_left_edge(frame: &mut Frame, x: i32) {
    frame.width = frame.right().saturating_sub(x);
    frame.left = x;
}

/// Put the right edge at `x`, keeping the left edge where it is.
fn drag_right_edge(frame: &mut Frame, x: i32) {
    frame.width = x.saturating_sub(frame.left);
}

/// Put the top edge at `y`, keeping the bottom edge where it is.
fn drag_top_edge(frame: &mut Frame, y: i32) {
    frame.height = frame.bottom().saturating_sub(y);
    frame.top = y;
}

/// Put the bottom edge at `y`, keeping the top edge where it is.
fn drag_bottom_edge(frame: &mut Frame, y: i32) {
    frame.height = y.saturating_sub(frame.top);
}

fn within(a: i32, b: i32, distance: i32) -> bool {
    i64::from(a.abs_diff(b)) <= i64::from(distance)
}

//  Screen

fn snap_to_screen(frame: &mut Frame, mode: SnapMode, area: Frame, snap_distance: i32) {
    let trigger = area.deflate(snap_distance, snap_distance);

    match mode {
        SnapMode::Resize => {
            if frame.left < trigger.left {
                drag_left_edge(frame, area.left);
            }
            if frame.right() > trigger.right() {
                drag_right_edge(frame, area.right());
            }
            if frame.top < trigger.top {
                drag_top_edge(frame, area.top);
            }
            if frame.bottom() > trigger.bottom() {
                drag_bottom_edge(frame, area.bottom());
            }
        }
        SnapMode::Move => {
            if frame.left < trigger.left {
                frame.left = area.left;
            }
            if frame.top < trigger.top {
                frame.top = area.top;
            }
            if frame.right() > trigger.right() {
                frame.left = area.right().saturating_sub(frame.width);
            }
            if frame.bottom() > trigger.bottom() {
                frame.top = area.bottom().saturating_sub(frame.height);
            }
        }
    }
}

//  Siblings

fn snap_move_to_sibling(
    frame: &mut Frame,
    source: &BorderZones,
    target: &BorderZones,
    sibling: Frame,
    snap_distance: i32,
) {
    if source.left.intersects(&target.right) {
        frame.left = sibling.right();
    }
    if source.right.intersects(&target.left) {
        frame.left = sibling.left.saturating_sub(frame.width);
    }
    if source.top.intersects(&target.bottom) {
        frame.top = sibling.bottom();
    }
    if source.bottom.intersects(&target.top) {
        frame.top = sibling.top.saturating_sub(frame.height);
    }

    // Stacked above or below: line up the vertical edges.
    if frame.top == sibling.bottom() || frame.bottom() == sibling.top {
        if within(frame.left, sibling.left, snap_distance) {
            frame.left = sibling.left;
        }
        if within(frame.right(), sibling.right(), snap_distance) {
            frame.left = sibling.right().saturating_sub(frame.width);
        }
    }

    // Side by side: line up the horizontal edges.
    if frame.left == sibling.right() || frame.right() == sibling.left {
        if within(sibling.bottom(), frame.bottom(), snap_distance) {
            frame.top = sibling.bottom().saturating_sub(frame.height);
        }
        if within(sibling.top, frame.top, snap_distance) {
            frame.top = sibling.top;
        }
    }
}

fn snap_resize_to_sibling(
    frame: &mut Frame,
    side: ResizeSide,
    source: &BorderZones,
    target: &BorderZones,
    sibling: Frame,
    snap_distance: i32,
) {
    // Stacking is unaffected by left/right edge moves, so it is checked once.
    let stacked = frame.top == sibling.bottom() || frame.bottom() == sibling.top;

    if side.left {
        if source.left.intersects(&target.right) {
            drag_left_edge(frame, sibling.right());
        } else if stacked && within(frame.left, sibling.left, snap_distance) {
            drag_left_edge(frame, sibling.left);
        }
    } else if side.right {
        if source.right.intersects(&target.left) {
            drag_right_edge(frame, sibling.left);
        } else if stacked && within(frame.right(), sibling.right(), snap_distance) {
            drag_right_edge(frame, sibling.right());
        }
    }

    let beside = frame.left == sibling.right() || frame.right() == sibling.left;

    if side.bottom {
        if source.bottom.intersects(&target.top) {
            drag_bottom_edge(frame, sibling.top);
        } else if beside && within(sibling.bottom(), frame.bottom(), snap_distance) {
            drag_bottom_edge(frame, sibling.bottom());
        }
    } else if side.top {
        if source.top.intersects(&target.bottom) {
            drag_top_edge(frame, sibling.bottom());
        } else if beside && within(sibling.top, frame.top, snap_distance) {
            drag_top_edge(frame, sibling.top);
        }
    }
}

/// Collapse a dimension the engine pushed below zero, keeping the edge
/// that is not being dragged in place.  Dimensions that were already
/// negative in the proposal are left alone.
fn keep_dimensions_non_negative(frame: &mut Frame, proposed: &Frame, side: ResizeSide) {
    if frame.width < 0 && proposed.width >= 0 {
        if side.left && !side.right {
            frame.left = frame.right();
        }
        frame.width = 0;
    }
    if frame.height < 0 && proposed.height >= 0 {
        if side.top && !side.bottom {
            frame.top = frame.bottom();
        }
        frame.height = 0;
    }
}

//  Tests
