use crate::geometry::{ConvexPolygon, Rectangle, Segment};

use super::{clip_convex, clip_rect};

/// A clip window together with the algorithm that handles it.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipWindow {
    /// Clipped with Cohen–Sutherland.
    Rectangle(Rectangle),
    /// Clipped with Cyrus–Beck.
    Convex(ConvexPolygon),
}

impl ClipWindow {
    /// Clips one segment against this window.
    #[must_use]
    pub fn clip(&self, segment: &Segment) -> Option<Segment> {
        match self {
            Self::Rectangle(rect) => clip_rect(segment, rect),
            Self::Convex(polygon) => clip_convex(segment, polygon),
        }
    }

    /// Human-readable name of the algorithm used for this window.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "Cohen-Sutherland",
            Self::Convex(_) => "Cyrus-Beck",
        }
    }
}

impl From<Rectangle> for ClipWindow {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<ConvexPolygon> for ClipWindow {
    fn from(polygon: ConvexPolygon) -> Self {
        Self::Convex(polygon)
    }
}

/// Clips a batch of segments against one fixed window.
///
/// Segments are clipped independently and in order; the window is only
/// read.
#[derive(Debug)]
pub struct ClipSegments {
    window: ClipWindow,
}

impl ClipSegments {
    /// Creates a new batch clip operation.
    #[must_use]
    pub fn new(window: impl Into<ClipWindow>) -> Self {
        Self {
            window: window.into(),
        }
    }

    #[must_use]
    pub fn window(&self) -> &ClipWindow {
        &self.window
    }

    /// Executes the clip, returning one result per input segment.
    #[must_use]
    pub fn execute(&self, segments: &[Segment]) -> Vec<Option<Segment>> {
        let results: Vec<_> = segments.iter().map(|s| self.window.clip(s)).collect();
        tracing::debug!(
            algorithm = self.window.algorithm(),
            total = segments.len(),
            visible = results.iter().flatten().count(),
            "clipped segment batch"
        );
        results
    }

    /// Executes the clip, keeping only the visible fragments.
    #[must_use]
    pub fn visible(&self, segments: &[Segment]) -> Vec<Segment> {
        self.execute(segments).into_iter().flatten().collect()
    }
}
