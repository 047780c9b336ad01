use crate::math::Point2;

use super::ConvexPolygon;

/// An axis-aligned rectangle.
///
/// Clipping expects `xmin <= xmax` and `ymin <= ymax`; the clippers do not
/// sort the bounds. Use [`Rectangle::from_corners`] to build a normalized
/// rectangle from two arbitrary corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Rectangle {
    /// Creates a rectangle from bounds taken as-is.
    #[must_use]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Creates a normalized rectangle from two opposite corners given in any
    /// order.
    #[must_use]
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        Self {
            xmin: a.x.min(b.x),
            ymin: a.y.min(b.y),
            xmax: a.x.max(b.x),
            ymax: a.y.max(b.y),
        }
    }

    /// Returns `true` if `xmin <= xmax` and `ymin <= ymax`.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Checks whether `p` lies in the closed rectangle.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Returns the four corners as a counter-clockwise polygon, starting at
    /// `(xmin, ymin)`.
    #[must_use]
    pub fn to_polygon(&self) -> ConvexPolygon {
        ConvexPolygon::new(vec![
            Point2::new(self.xmin, self.ymin),
            Point2::new(self.xmax, self.ymin),
            Point2::new(self.xmax, self.ymax),
            Point2::new(self.xmin, self.ymax),
        ])
    }
}
