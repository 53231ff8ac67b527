//! Which edges a resize step moved.

use crate::geometry::Frame;

/// Edges that differ between two frames of different size.
///
/// A corner drag sets two flags; a pure move sets none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeSide {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ResizeSide {
    /// Compare `before` with `after`.
    ///
    /// Frames of equal size are a move, not a resize, and yield no flags
    /// even if their positions differ.
    pub fn detect(before: &Frame, after: &Frame) -> Self {
        if before.same_size(after) {
            return Self::default();
        }

        Self {
            top: before.top != after.top,
            bottom: before.bottom() != after.bottom(),
            left: before.left != after.left,
            right: before.right() != after.right(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_reports_no_sides() {
        let a = Frame::new(0, 0, 100, 100);
        let b = Frame::new(50, 70, 100, 100);
        assert_eq!(ResizeSide::detect(&a, &b), ResizeSide::default());
    }

    #[test]
    fn left_edge_drag() {
        let a = Frame::new(100, 100, 200, 100);
        let b = Frame::new(90, 100, 210, 100);
        let side = ResizeSide::detect(&a, &b);
        assert_eq!(
            side,
            ResizeSide {
                left: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn bottom_edge_drag() {
        let a = Frame::new(100, 100, 200, 100);
        let b = Frame::new(100, 100, 200, 130);
        let side = ResizeSide::detect(&a, &b);
        assert!(side.bottom);
        assert!(!side.top && !side.left && !side.right);
    }

    #[test]
    fn corner_drag_sets_two_flags() {
        let a = Frame::new(100, 100, 200, 100);
        let b = Frame::new(100, 80, 230, 120);
        let side = ResizeSide::detect(&a, &b);
        assert!(side.top);
        assert!(side.right);
        assert!(!side.bottom);
        assert!(!side.left);
    }
}
