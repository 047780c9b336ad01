use enumflags2::{bitflags, BitFlags};

use crate::geometry::{Rectangle, Segment};
use crate::math::Point2;

/// Half-planes outside an axis-aligned rectangle.
///
/// `Left`/`Right` and `Bottom`/`Top` are never set together by [`outcode`].
#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutCode {
    Left = 0b0001,
    Right = 0b0010,
    Bottom = 0b0100,
    Top = 0b1000,
}

/// Region code of a point; empty means inside or on the boundary.
pub type OutCodes = BitFlags<OutCode>;

/// Classifies `p` against the four half-planes of `rect`.
#[must_use]
pub fn outcode(p: &Point2, rect: &Rectangle) -> OutCodes {
    let mut code = OutCodes::empty();
    if p.x < rect.xmin {
        code |= OutCode::Left;
    } else if p.x > rect.xmax {
        code |= OutCode::Right;
    }
    if p.y < rect.ymin {
        code |= OutCode::Bottom;
    } else if p.y > rect.ymax {
        code |= OutCode::Top;
    }
    code
}

/// Clips a segment to a closed axis-aligned rectangle (Cohen–Sutherland).
///
/// Returns the part of `segment` inside `[xmin, xmax] × [ymin, ymax]`, keeping
/// the endpoint order, or `None` if nothing is visible. `rect` must be
/// normalized.
///
/// # Algorithm
///
/// Both endpoints get an [`OutCode`] set. While they are not both inside and
/// share no outside half-plane, the first outside endpoint is moved onto the
/// boundary of its highest-priority outside bit (top, bottom, right, left) and
/// reclassified. A set bit guarantees the segment crosses that boundary, so
/// the interpolation divisor is never zero.
#[must_use]
pub fn clip_rect(segment: &Segment, rect: &Rectangle) -> Option<Segment> {
    let mut p0 = segment.start;
    let mut p1 = segment.end;
    let mut code0 = outcode(&p0, rect);
    let mut code1 = outcode(&p1, rect);

    loop {
        if (code0 | code1).is_empty() {
            return Some(Segment::from_points(p0, p1));
        }
        if !(code0 & code1).is_empty() {
            tracing::trace!(?code0, ?code1, "segment rejected: shared outside region");
            return None;
        }

        let first_outside = !code0.is_empty();
        let code_out = if first_outside { code0 } else { code1 };
        let boundary = boundary_point(&p0, &p1, code_out, rect);

        if first_outside {
            p0 = boundary;
            code0 = outcode(&p0, rect);
        } else {
            p1 = boundary;
            code1 = outcode(&p1, rect);
        }
    }
}

/// Intersects the line through `p0`, `p1` with the boundary named by the
/// highest-priority bit of `code`.
fn boundary_point(p0: &Point2, p1: &Point2, code: OutCodes, rect: &Rectangle) -> Point2 {
    let (dx, dy) = (p1.x - p0.x, p1.y - p0.y);
    if code.contains(OutCode::Top) {
        Point2::new(p0.x + dx * (rect.ymax - p0.y) / dy, rect.ymax)
    } else if code.contains(OutCode::Bottom) {
        Point2::new(p0.x + dx * (rect.ymin - p0.y) / dy, rect.ymin)
    } else if code.contains(OutCode::Right) {
        Point2::new(rect.xmax, p0.y + dy * (rect.xmax - p0.x) / dx)
    } else {
        Point2::new(rect.xmin, p0.y + dy * (rect.xmin - p0.x) / dx)
    }
}
