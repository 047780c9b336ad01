use std::str::FromStr;

use crate::error::{ParseError, Result, SegclipError};
use crate::geometry::{ConvexPolygon, Rectangle, Segment};
use crate::math::Point2;

/// Segments and a rectangular window read from text.
///
/// The window is always normalized, so it can be passed to
/// [`clip_rect`](crate::operations::clip::clip_rect) directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipInput {
    pub segments: Vec<Segment>,
    pub window: Rectangle,
}

impl ClipInput {
    /// Parses the whole input, rejecting it entirely on the first malformed
    /// line.
    ///
    /// Blank lines are skipped and surrounding whitespace is ignored. Lines
    /// beyond the window line are ignored, as are tokens past the fourth.
    ///
    /// # Errors
    ///
    /// - `ParseError::MissingLines` if fewer than 2 non-blank lines exist
    /// - `ParseError::InvalidCount` if the first line is not a non-negative integer
    /// - `ParseError::InsufficientData` if there are fewer than `n + 1` lines after the count
    /// - `ParseError::InvalidSegment` / `ParseError::InvalidWindow` for malformed numbers
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() < 2 {
            return Err(ParseError::MissingLines.into());
        }

        let count: usize = lines[0].parse().map_err(|_| ParseError::InvalidCount {
            value: lines[0].to_owned(),
        })?;
        let expected = count.saturating_add(1);
        let found = lines.len() - 1;
        if found < expected {
            return Err(ParseError::InsufficientData { expected, found }.into());
        }

        let segments = lines[1..=count]
            .iter()
            .enumerate()
            .map(|(i, line)| {
                parse_quad(line)
                    .map(|[x1, y1, x2, y2]| Segment::new(x1, y1, x2, y2))
                    .ok_or(ParseError::InvalidSegment { index: i + 1 })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let [xa, ya, xb, yb] = parse_quad(lines[count + 1]).ok_or(ParseError::InvalidWindow)?;
        let window = Rectangle::from_corners(Point2::new(xa, ya), Point2::new(xb, yb));

        tracing::debug!(segments = segments.len(), ?window, "parsed clip input");
        Ok(Self { segments, window })
    }
}

impl FromStr for ClipInput {
    type Err = SegclipError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parses polygon vertices written as whitespace-separated `x,y` pairs.
///
/// Convexity is not checked.
///
/// # Errors
///
/// Returns `ParseError::InvalidVertex` for the first token that is not a
/// pair of finite numbers.
pub fn parse_vertices(text: &str) -> Result<ConvexPolygon> {
    text.split_whitespace()
        .map(|token| {
            parse_vertex(token).ok_or_else(|| {
                SegclipError::from(ParseError::InvalidVertex {
                    token: token.to_owned(),
                })
            })
        })
        .collect()
}

fn parse_vertex(token: &str) -> Option<Point2> {
    let (x, y) = token.split_once(',')?;
    let x = parse_number(x)?;
    let y = parse_number(y)?;
    Some(Point2::new(x, y))
}

/// Reads the first four whitespace-separated numbers of a line.
fn parse_quad(line: &str) -> Option<[f64; 4]> {
    let mut tokens = line.split_whitespace();
    let mut out = [0.0; 4];
    for slot in &mut out {
        *slot = parse_number(tokens.next()?)?;
    }
    Some(out)
}

fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
