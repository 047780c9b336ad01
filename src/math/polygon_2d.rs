use super::{cross_2d, Point2, TOLERANCE};

/// Winding direction of a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    /// Fewer than 3 vertices or zero enclosed area.
    Degenerate,
}

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the winding direction of a closed polygon.
#[must_use]
pub fn orientation(points: &[Point2]) -> Orientation {
    let area = signed_area(points);
    if area > TOLERANCE {
        Orientation::CounterClockwise
    } else if area < -TOLERANCE {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

/// Arithmetic mean of the vertices.
///
/// This is not the centroid of mass; it only needs to lie strictly inside a
/// convex polygon. Returns `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertex_centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords);
    Some(Point2::from(sum / points.len() as f64))
}

/// Checks whether a closed polygon is convex.
///
/// All turns must have the same sign; collinear vertices are tolerated.
/// Polygons with fewer than 3 vertices or zero area are not convex.
#[must_use]
pub fn is_convex(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 || orientation(points) == Orientation::Degenerate {
        return false;
    }
    let mut positive: Option<bool> = None;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let turn = cross_2d(&(b - a), &(c - b));
        if turn.abs() < TOLERANCE {
            continue;
        }
        match positive {
            None => positive = Some(turn > 0.0),
            Some(p) if p != (turn > 0.0) => return false,
            Some(_) => {}
        }
    }
    true
}
