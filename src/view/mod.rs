mod viewport;

pub use viewport::{wheel_zoom_factor, SurfaceSize, Viewport};
