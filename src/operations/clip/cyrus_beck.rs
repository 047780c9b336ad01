use crate::geometry::{ConvexPolygon, Segment};
use crate::math::{Point2, Vector2, PARALLEL_EPSILON};

/// Clips a segment to a convex polygon (Cyrus–Beck).
///
/// Works on the parametric form `P(t) = P0 + t * d`, `d = P1 - P0`, and
/// narrows the admissible interval `[t_enter, t_leave] = [0, 1]` against the
/// half-plane of every edge. Returns the visible part in the direction of
/// the input, or `None` when the interval empties.
///
/// The polygon may wind either way: every edge normal is oriented away from
/// the vertex centroid. A polygon with fewer than 3 vertices yields `None`.
/// Results for non-convex polygons are unspecified.
#[must_use]
pub fn clip_convex(segment: &Segment, polygon: &ConvexPolygon) -> Option<Segment> {
    if !polygon.is_closed() {
        return None;
    }
    let centroid = polygon.centroid()?;

    let p0 = segment.start;
    let d = segment.direction();
    let mut t_enter = 0.0_f64;
    let mut t_leave = 1.0_f64;

    for (edge_start, edge_end) in polygon.edges() {
        let normal = outward_normal(&edge_start, &edge_end, &centroid);

        let w = p0 - edge_start;
        let numerator = -normal.dot(&w);
        let denominator = normal.dot(&d);

        if denominator.abs() < PARALLEL_EPSILON {
            if numerator < 0.0 {
                tracing::trace!("segment rejected: parallel and outside an edge");
                return None;
            }
            continue;
        }

        let t = numerator / denominator;
        if denominator < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_leave = t_leave.min(t);
        }

        if t_enter > t_leave {
            tracing::trace!(t_enter, t_leave, "segment rejected: empty interval");
            return None;
        }
    }

    Some(Segment::from_points(p0 + d * t_enter, p0 + d * t_leave))
}

/// Returns the normal of edge `a -> b` that points away from `interior`.
///
/// Starts from `(ey, -ex)` and flips it when `interior` lies on the side it
/// points to, measured from the edge midpoint.
fn outward_normal(a: &Point2, b: &Point2, interior: &Point2) -> Vector2 {
    let edge = b - a;
    let normal = Vector2::new(edge.y, -edge.x);
    let midpoint = nalgebra::center(a, b);
    if normal.dot(&(interior - midpoint)) > 0.0 {
        -normal
    } else {
        normal
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn polygon(coords: &[(f64, f64)]) -> ConvexPolygon {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn square_ccw() -> ConvexPolygon {
        polygon(&[(-5.0, -5.0), (5.0, -5.0), (5.0, 5.0), (-5.0, 5.0)])
    }

    fn square_cw() -> ConvexPolygon {
        polygon(&[(-5.0, -5.0), (-5.0, 5.0), (5.0, 5.0), (5.0, -5.0)])
    }

    fn assert_segment_near(actual: &Segment, expected: &Segment) {
        assert_relative_eq!(actual.start, expected.start, epsilon = 1e-9);
        assert_relative_eq!(actual.end, expected.end, epsilon = 1e-9);
    }

    #[test]
    fn outward_normal_points_away_from_interior() {
        let interior = Point2::new(0.0, 0.0);
        let n = outward_normal(&Point2::new(-5.0, -5.0), &Point2::new(5.0, -5.0), &interior);
        assert!(n.y < 0.0 && n.x.abs() < 1e-12);
        let n = outward_normal(&Point2::new(5.0, -5.0), &Point2::new(-5.0, -5.0), &interior);
        assert!(n.y < 0.0 && n.x.abs() < 1e-12);
    }

    #[test]
    fn horizontal_through_square_either_winding() {
        let s = Segment::new(-20.0, 0.0, 20.0, 0.0);
        let expected = Segment::new(-5.0, 0.0, 5.0, 0.0);
        assert_segment_near(&clip_convex(&s, &square_ccw()).unwrap(), &expected);
        assert_segment_near(&clip_convex(&s, &square_cw()).unwrap(), &expected);
    }

    #[test]
    fn keeps_input_direction() {
        let s = Segment::new(20.0, 0.0, -20.0, 0.0);
        let clipped = clip_convex(&s, &square_ccw()).unwrap();
        assert_segment_near(&clipped, &Segment::new(5.0, 0.0, -5.0, 0.0));
    }

    #[test]
    fn inside_segment_unchanged() {
        let s = Segment::new(-1.0, -2.0, 3.0, 4.0);
        assert_segment_near(&clip_convex(&s, &square_ccw()).unwrap(), &s);
    }

    #[test]
    fn parallel_outside_rejected() {
        let s = Segment::new(-20.0, 7.0, 20.0, 7.0);
        assert!(clip_convex(&s, &square_ccw()).is_none());
        assert!(clip_convex(&s, &square_cw()).is_none());
    }

    #[test]
    fn parallel_on_edge_kept() {
        let s = Segment::new(-20.0, 5.0, 20.0, 5.0);
        let clipped = clip_convex(&s, &square_ccw()).unwrap();
        assert_segment_near(&clipped, &Segment::new(-5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn misses_triangle() {
        let tri = polygon(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        let s = Segment::new(3.0, 3.0, 6.0, 0.5);
        assert!(clip_convex(&s, &tri).is_none());
    }

    #[test]
    fn crosses_triangle_hypotenuse() {
        let tri = polygon(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        let s = Segment::new(1.0, 1.0, 4.0, 4.0);
        let clipped = clip_convex(&s, &tri).unwrap();
        assert_segment_near(&clipped, &Segment::new(1.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn degenerate_windows_reject_everything() {
        let s = Segment::new(-1.0, 0.0, 1.0, 0.0);
        assert!(clip_convex(&s, &ConvexPolygon::default()).is_none());
        let two = polygon(&[(-5.0, -5.0), (5.0, 5.0)]);
        assert!(clip_convex(&s, &two).is_none());
    }

    #[test]
    fn point_segment_inside_and_outside() {
        let inside = Segment::new(1.0, 1.0, 1.0, 1.0);
        assert_segment_near(&clip_convex(&inside, &square_ccw()).unwrap(), &inside);
        let outside = Segment::new(9.0, 1.0, 9.0, 1.0);
        assert!(clip_convex(&outside, &square_ccw()).is_none());
    }
}
