//! Integer geometry shared by every component.
//!
//! [`Frame`] is the single canonical rectangle type: the snap engine never
//! sees a host toolkit's geometry type.  Hosts convert at the boundary.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A point in the host's coordinate space (typically the pointer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned window rectangle.
///
/// Units are whatever the host uses (device pixels or DIPs); nothing here
/// scales.  `right` and `bottom` are derived and exclusive, so a frame at
/// `left = 0` with `width = 100` has `right = 100`.
///
/// On the wire a frame is either an object
/// `{"left":0,"top":0,"width":100,"height":50}` or the string
/// `"0 0 100 50"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Frame {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Whether `right` and `bottom` can be represented without saturating.
    pub fn edges_in_range(&self) -> bool {
        self.left.checked_add(self.width).is_some() && self.top.checked_add(self.height).is_some()
    }

    /// Whether `other` has the same width and height.
    pub fn same_size(&self, other: &Frame) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Whether the frame has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the two rectangles overlap with a non-zero area.
    ///
    /// Touching edges do not count, and an empty rectangle intersects
    /// nothing.
    pub fn intersects(&self, other: &Frame) -> bool {
        other.left < self.right()
            && self.left < other.right()
            && other.top < self.bottom()
            && self.top < other.bottom()
    }

    /// Whether `point` lies inside the frame (right/bottom exclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }

    /// Shrink the frame by `dx` on the left and right and by `dy` on the top
    /// and bottom.  Negative amounts grow it.
    pub fn deflate(&self, dx: i32, dy: i32) -> Frame {
        Frame {
            left: self.left.saturating_add(dx),
            top: self.top.saturating_add(dy),
            width: self.width.saturating_sub(dx.saturating_mul(2)),
            height: self.height.saturating_sub(dy.saturating_mul(2)),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left.saturating_add(self.width / 2),
            self.top.saturating_add(self.height / 2),
        )
    }

    /// Squared distance from `point` to the nearest point of the frame.
    /// Zero when the point is inside.
    pub fn distance_squared(&self, point: Point) -> i64 {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        let (left, top) = (i64::from(self.left), i64::from(self.top));
        let right = left + i64::from(self.width);
        let bottom = top + i64::from(self.height);

        let dx = if x < left {
            left - x
        } else if x >= right {
            x - right + 1
        } else {
            0
        };
        let dy = if y < top {
            top - y
        } else if y >= bottom {
            y - bottom + 1
        } else {
            0
        };
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.left, self.top)
    }
}

impl<'de> Deserialize<'de> for Frame {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = Frame;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "object {{left, top, width, height}} or string \"left top width height\"")
            }
            fn visit_map<A>(self, mut map: A) -> Result<Frame, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut left = None;
                let mut top = None;
                let mut width = None;
                let mut height = None;
                while let Some(k) = map.next_key::<String>()? {
                    match k.as_str() {
                        "left" => left = Some(map.next_value()?),
                        "top" => top = Some(map.next_value()?),
                        "width" => width = Some(map.next_value()?),
                        "height" => height = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(Frame {
                    left: left.ok_or_else(|| DeError::missing_field("left"))?,
                    top: top.ok_or_else(|| DeError::missing_field("top"))?,
                    width: width.ok_or_else(|| DeError::missing_field("width"))?,
                    height: height.ok_or_else(|| DeError::missing_field("height"))?,
                })
            }
            fn visit_str<E>(self, s: &str) -> Result<Frame, E>
            where
                E: DeError,
            {
                let parts: Vec<&str> = s.split_whitespace().collect();
                if parts.len() != 4 {
                    return Err(DeError::custom(format!(
                        "frame: expected \"left top width height\", got {:?}",
                        s
                    )));
                }
                let mut values = [0i32; 4];
                for (slot, part) in values.iter_mut().zip(&parts) {
                    *slot = part
                        .parse()
                        .map_err(|_| DeError::custom(format!("frame: {:?} is not an integer", part)))?;
                }
                let [left, top, width, height] = values;
                Ok(Frame {
                    left,
                    top,
                    width,
                    height,
                })
            }
        }
        deserializer.deserialize_any(V)
    }
}

/// Opaque handle of a top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_edges() {
        let f = Frame::new(10, 20, 100, 50);
        assert_eq!(f.right(), 110);
        assert_eq!(f.bottom(), 70);
    }

    #[test]
    fn touching_frames_do_not_intersect() {
        let a = Frame::new(0, 0, 100, 100);
        let b = Frame::new(100, 0, 100, 100);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn overlapping_frames_intersect() {
        let a = Frame::new(0, 0, 100, 100);
        let b = Frame::new(99, 99, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn empty_frame_intersects_nothing() {
        let a = Frame::new(0, 0, 100, 100);
        let zero = Frame::new(50, 50, 0, 10);
        assert!(zero.is_empty());
        assert!(!a.intersects(&zero));
        assert!(!zero.intersects(&a));
    }

    #[test]
    fn contains_is_right_exclusive() {
        let f = Frame::new(0, 0, 1920, 1080);
        assert!(f.contains(Point::new(0, 0)));
        assert!(f.contains(Point::new(1919, 1079)));
        assert!(!f.contains(Point::new(1920, 500)));
        assert!(!f.contains(Point::new(-1, 500)));
    }

    #[test]
    fn deflate_shrinks_every_side() {
        let f = Frame::new(0, 0, 1920, 1080).deflate(20, 20);
        assert_eq!(f, Frame::new(20, 20, 1880, 1040));
        assert_eq!(f.right(), 1900);
        assert_eq!(f.bottom(), 1060);
    }

    #[test]
    fn edges_saturate_near_limit() {
        let f = Frame::new(i32::MAX - 10, i32::MAX - 5, 200, 100);
        assert_eq!(f.right(), i32::MAX);
        assert_eq!(f.bottom(), i32::MAX);
        assert!(!f.edges_in_range());
        assert!(Frame::new(0, 0, 1920, 1080).edges_in_range());
    }

    #[test]
    fn deflate_by_huge_amount_saturates() {
        let f = Frame::new(0, 0, 1920, 1080).deflate(1_500_000_000, 1_500_000_000);
        assert_eq!(f.left, 1_500_000_000);
        assert_eq!(f.width, 1920 - i32::MAX);
        assert!(f.is_empty());
    }

    #[test]
    fn distance_to_far_point_does_not_overflow() {
        let f = Frame::new(i32::MAX - 1, 0, 1, 1);
        assert_eq!(f.distance_squared(Point::new(i32::MIN, 0)), {
            let d = i64::from(i32::MAX - 1) - i64::from(i32::MIN);
            d * d
        });
    }

    #[test]
    fn distance_to_outside_point() {
        let f = Frame::new(0, 0, 100, 100);
        assert_eq!(f.distance_squared(Point::new(50, 50)), 0);
        assert_eq!(f.distance_squared(Point::new(-3, 50)), 9);
        assert_eq!(f.distance_squared(Point::new(-3, -4)), 25);
    }

    #[test]
    fn deserialize_object_and_string() {
        let a: Frame = serde_json::from_str(r#"{"left":1,"top":2,"width":3,"height":4}"#).unwrap();
        let b: Frame = serde_json::from_str(r#""1 2 3 4""#).unwrap();
        assert_eq!(a, Frame::new(1, 2, 3, 4));
        assert_eq!(a, b);
    }

    #[test]
    fn deserialize_negative_string_frame() {
        let f: Frame = serde_json::from_str(r#""-10 100 310 100""#).unwrap();
        assert_eq!(f, Frame::new(-10, 100, 310, 100));
    }

    #[test]
    fn deserialize_rejects_short_string() {
        assert!(serde_json::from_str::<Frame>(r#""1 2 3""#).is_err());
        assert!(serde_json::from_str::<Frame>(r#""1 2 x 4""#).is_err());
    }

    #[test]
    fn deserialize_rejects_missing_field() {
        assert!(serde_json::from_str::<Frame>(r#"{"left":1,"top":2,"width":3}"#).is_err());
    }
}
