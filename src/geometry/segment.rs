use crate::math::{Point2, Vector2};

/// A line segment between two ordered endpoints.
///
/// The order defines the parametric form `P(t) = start + t * (end - start)`,
/// `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a segment from raw endpoint coordinates.
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Creates a segment from two points.
    #[must_use]
    pub fn from_points(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Evaluates the parametric form at `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.direction() * t
    }

    /// Returns the segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Checks whether both endpoints are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start.iter().chain(self.end.iter()).all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_at_interpolates() {
        let s = Segment::new(0.0, 0.0, 4.0, 2.0);
        assert_relative_eq!(s.point_at(0.0), s.start);
        assert_relative_eq!(s.point_at(1.0), s.end);
        assert_relative_eq!(s.point_at(0.5), Point2::new(2.0, 1.0));
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let s = Segment::new(1.0, 2.0, 3.0, 4.0);
        let r = s.reversed();
        assert_eq!(r.start, s.end);
        assert_eq!(r.end, s.start);
        assert_eq!(r.reversed(), s);
    }

    #[test]
    fn length_of_3_4_5() {
        assert_relative_eq!(Segment::new(0.0, 0.0, 3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn non_finite_detected() {
        assert!(Segment::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Segment::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
    }
}
