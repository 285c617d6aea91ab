use std::fmt;

/// Cursor or anchor coordinate in logical board pixels.
///
/// The y axis grows downward, matching the frontend's screen convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component delta from `self` to `other`.
    pub const fn delta_to(self, other: Point) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    /// Straight-line distance to `other`.
    pub fn distance_to(self, other: Point) -> f32 {
        let (dx, dy) = self.delta_to(other);
        ((dx * dx + dy * dy) as f32).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle in logical pixels, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict interior containment: a point on any edge is outside.
    pub const fn contains_interior(&self, point: Point) -> bool {
        self.x < point.x
            && point.x < self.x + self.width
            && self.y < point.y
            && point.y < self.y + self.height
    }

    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let origin = Point::ORIGIN;
        assert_eq!(origin.distance_to(Point::new(3, 4)), 5.0);
        assert_eq!(origin.distance_to(origin), 0.0);
    }

    #[test]
    fn interior_containment_excludes_all_edges() {
        let rect = PixelRect::new(10, 10, 20, 20);

        assert!(rect.contains_interior(Point::new(11, 11)));
        assert!(rect.contains_interior(Point::new(29, 29)));

        // Boundary points on every edge miss.
        assert!(!rect.contains_interior(Point::new(10, 15)));
        assert!(!rect.contains_interior(Point::new(30, 15)));
        assert!(!rect.contains_interior(Point::new(15, 10)));
        assert!(!rect.contains_interior(Point::new(15, 30)));
        assert!(!rect.contains_interior(Point::new(10, 10)));
    }

    #[test]
    fn center_is_footprint_midpoint() {
        assert_eq!(PixelRect::new(0, 0, 12, 12).center(), Point::new(6, 6));
        assert_eq!(PixelRect::new(100, 50, 24, 24).center(), Point::new(112, 62));
    }
}
