mod batch;
mod cohen_sutherland;
mod cyrus_beck;

pub use batch::{ClipSegments, ClipWindow};
pub use cohen_sutherland::{clip_rect, outcode, OutCode, OutCodes};
pub use cyrus_beck::clip_convex;
