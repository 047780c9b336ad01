//! 2D line segment clipping.
//!
//! - [`clip_rect`]: Cohen–Sutherland against an axis-aligned [`Rectangle`]
//! - [`clip_convex`]: Cyrus–Beck against a [`ConvexPolygon`] of either winding
//!
//! Both are pure functions returning the visible sub-segment or `None`.
//! [`io`] reads the textual segment/window format and [`view`] holds the
//! world-to-surface math used by front ends.

pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod operations;
pub mod view;

pub use error::{Result, SegclipError};
pub use geometry::{ConvexPolygon, Rectangle, Segment};
pub use operations::clip::{clip_convex, clip_rect, ClipSegments, ClipWindow};
