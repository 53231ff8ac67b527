//! Border capture zones used for proximity tests.
//!
//! The window being dragged contributes 1-unit strips lying exactly on its
//! edges.  Each sibling contributes thick strips straddling its edges, so a
//! source strip anywhere within the snap distance of a sibling edge
//! intersects the matching sibling zone.

use crate::geometry::Frame;

/// The four edge strips of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderZones {
    pub top: Frame,
    pub bottom: Frame,
    pub left: Frame,
    pub right: Frame,
}

impl BorderZones {
    /// Build the zones of `frame`.
    ///
    /// With `straddle == false` each strip is `zone_width` thick and starts
    /// on the edge.  With `straddle == true` each strip is
    /// `2 * zone_width` thick, reaching `zone_width` to either side of the
    /// edge.
    pub fn build(frame: Frame, zone_width: i32, straddle: bool) -> Self {
        let offset = if straddle { zone_width } else { 0 };
        let thickness = if straddle {
            zone_width.saturating_mul(2)
        } else {
            zone_width
        };

        Self {
            top: Frame::new(frame.left, frame.top.saturating_sub(offset), frame.width, thickness),
            bottom: Frame::new(frame.left, frame.bottom().saturating_sub(offset), frame.width, thickness),
            left: Frame::new(frame.left.saturating_sub(offset), frame.top, thickness, frame.height),
            right: Frame::new(frame.right().saturating_sub(offset), frame.top, thickness, frame.height),
        }
    }

    /// Strips lying on the edges of a window being dragged.
    pub fn source(frame: Frame) -> Self {
        Self::build(frame, 1, false)
    }

    /// Strips straddling the edges of a snap target.
    pub fn target(frame: Frame, snap_distance: i32) -> Self {
        Self::build(frame, snap_distance, true)
    }
}
