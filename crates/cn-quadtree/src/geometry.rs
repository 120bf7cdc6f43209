//! Axis-aligned rectangles and payload-carrying points.

/// An axis-aligned region given by its centre and half extents.
///
/// All containment tests are inclusive of the border.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    /// Centre x.
    pub x: f64,
    /// Centre y.
    pub y: f64,
    /// Half width.
    pub w: f64,
    /// Half height.
    pub h: f64,
}

impl Rectangle {
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle spanning two opposite corners, in any order.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        let (min_x, max_x) = (a.0.min(b.0), a.0.max(b.0));
        let (min_y, max_y) = (a.1.min(b.1), a.1.max(b.1));
        Self::new(
            (min_x + max_x) * 0.5,
            (min_y + max_y) * 0.5,
            (max_x - min_x) * 0.5,
            (max_y - min_y) * 0.5,
        )
    }

    #[inline]
    pub fn min_x(&self) -> f64 { self.x - self.w }
    #[inline]
    pub fn max_x(&self) -> f64 { self.x + self.w }
    #[inline]
    pub fn min_y(&self) -> f64 { self.y - self.h }
    #[inline]
    pub fn max_y(&self) -> f64 { self.y + self.h }

    /// `true` if `(x, y)` lies inside or on the border.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x() && x <= self.max_x() && y >= self.min_y() && y <= self.max_y()
    }

    #[inline]
    pub fn contains_point<T>(&self, p: &Point<T>) -> bool {
        self.contains(p.x, p.y)
    }

    /// `true` if the two rectangles overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(other.min_x() > self.max_x()
            || other.max_x() < self.min_x()
            || other.min_y() > self.max_y()
            || other.max_y() < self.min_y())
    }

    /// Smallest Euclidean distance from `(x, y)` to any point of the
    /// rectangle.  Zero when the point is inside or on the border.
    #[inline]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = ((x - self.x).abs() - self.w).max(0.0);
        let dy = ((y - self.y).abs() - self.h).max(0.0);
        (dx * dx + dy * dy).sqrt()
    }
}

/// A 2-D point carrying an opaque payload.
///
/// The index never inspects or mutates `data`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point<T> {
    pub x:    f64,
    pub y:    f64,
    pub data: T,
}

impl<T> Point<T> {
    #[inline]
    pub fn new(x: f64, y: f64, data: T) -> Self {
        Self { x, y, data }
    }

    /// Euclidean distance to `(x, y)`.
    #[inline]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.x;
        let dy = y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
