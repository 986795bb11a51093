//! Geometry primitives: [`Point`] and [`Size`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Dimensions of a grid: the half-open coordinate area
/// `[0, width) × [0, height)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size. Negative dimensions are clamped to zero.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the area contains no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `p` lies inside the area.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Row-major iterator over every coordinate in the area.
    #[inline]
    pub fn iter(self) -> SizeIter {
        SizeIter {
            size: self,
            cur: Point::ZERO,
        }
    }
}

impl IntoIterator for Size {
    type Item = Point;
    type IntoIter = SizeIter;
    #[inline]
    fn into_iter(self) -> SizeIter {
        self.iter()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major iterator over the coordinates of a [`Size`].
#[derive(Clone, Debug)]
pub struct SizeIter {
    size: Size,
    cur: Point,
}

impl Iterator for SizeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.size.height || self.size.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.size.width {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn point_ordering_row_major() {
        let mut pts = vec![Point::new(1, 1), Point::new(0, 0), Point::new(2, 0)];
        pts.sort();
        assert_eq!(
            pts,
            vec![Point::new(0, 0), Point::new(2, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn size_contains() {
        let s = Size::new(3, 2);
        assert!(s.contains(Point::new(0, 0)));
        assert!(s.contains(Point::new(2, 1)));
        assert!(!s.contains(Point::new(3, 0)));
        assert!(!s.contains(Point::new(0, 2)));
        assert!(!s.contains(Point::new(-1, 0)));
    }

    #[test]
    fn size_clamps_negative() {
        let s = Size::new(-4, 7);
        assert_eq!(s.width, 0);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn size_iter_row_major() {
        let s = Size::new(3, 2);
        let pts: Vec<_> = s.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(2, 0));
        assert_eq!(pts[5], Point::new(2, 1));
    }

    #[test]
    fn empty_size_iter() {
        assert_eq!(Size::new(0, 5).iter().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_and_size_round_trip() {
        let p = Point::new(3, 7);
        let s = Size::new(10, 20);
        let back_p: Point = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        let back_s: Size = serde_json::from_str(&serde_json::to_string(&s).unwrap()).unwrap();
        assert_eq!(p, back_p);
        assert_eq!(s, back_s);
    }
}
