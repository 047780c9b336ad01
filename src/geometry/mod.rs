mod polygon;
mod rectangle;
mod segment;

pub use polygon::ConvexPolygon;
pub use rectangle::Rectangle;
pub use segment::Segment;
