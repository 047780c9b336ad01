use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Fraction of the content extent added as padding on each side by
/// [`Viewport::fit`].
const FIT_PADDING: f64 = 0.12;

/// Minimum padding in world units used by [`Viewport::fit`].
const FIT_MIN_PADDING: f64 = 1.0;

/// Wheel delta to zoom exponent.
const WHEEL_ZOOM_RATE: f64 = 0.0012;

/// Pixel size of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The world-space rectangle shown on a drawing surface.
///
/// World y grows upward, surface y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            xmin: -10.0,
            ymin: -10.0,
            xmax: 10.0,
            ymax: 10.0,
        }
    }
}

impl Viewport {
    /// Creates a viewport with the given world bounds.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if any bound is NaN or infinite
    /// - `GeometryError::Degenerate` if the extent is empty on either axis
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        if ![xmin, ymin, xmax, ymax].iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite.into());
        }
        if xmin >= xmax || ymin >= ymax {
            return Err(GeometryError::Degenerate(format!(
                "empty viewport [{xmin}, {xmax}] x [{ymin}, {ymax}]"
            ))
            .into());
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// Fits the viewport around `points` with padding on every side.
    ///
    /// Each axis is padded by 12% of its extent, at least one world unit.
    /// Without points (or with only non-finite ones) the default view is
    /// returned.
    #[must_use]
    pub fn fit<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut bounds: Option<(Point2, Point2)> = None;
        for p in points.into_iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
            bounds = Some(match bounds {
                None => (p, p),
                Some((lo, hi)) => (lo.inf(&p), hi.sup(&p)),
            });
        }
        let Some((lo, hi)) = bounds else {
            return Self::default();
        };

        let pad_x = ((hi.x - lo.x) * FIT_PADDING).max(FIT_MIN_PADDING);
        let pad_y = ((hi.y - lo.y) * FIT_PADDING).max(FIT_MIN_PADDING);
        Self {
            xmin: lo.x - pad_x,
            ymin: lo.y - pad_y,
            xmax: hi.x + pad_x,
            ymax: hi.y + pad_y,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Maps a world point onto the surface.
    #[must_use]
    pub fn world_to_surface(&self, p: &Point2, size: SurfaceSize) -> Point2 {
        let sx = size.width / self.width();
        let sy = size.height / self.height();
        Point2::new(
            (p.x - self.xmin) * sx,
            size.height - (p.y - self.ymin) * sy,
        )
    }

    /// Maps a surface point back into world coordinates.
    #[must_use]
    pub fn surface_to_world(&self, p: &Point2, size: SurfaceSize) -> Point2 {
        let sx = size.width / self.width();
        let sy = size.height / self.height();
        Point2::new(p.x / sx + self.xmin, (size.height - p.y) / sy + self.ymin)
    }

    /// Returns the viewport dragged by `(dx, dy)` surface pixels, so the
    /// content follows the pointer.
    #[must_use]
    pub fn pan(&self, dx: f64, dy: f64, size: SurfaceSize) -> Self {
        let wx = dx * self.width() / size.width;
        let wy = dy * self.height() / size.height;
        Self {
            xmin: self.xmin - wx,
            xmax: self.xmax - wx,
            ymin: self.ymin + wy,
            ymax: self.ymax + wy,
        }
    }

    /// Scales the viewport by `factor` around a world-space `anchor`, which
    /// stays at the same surface position. `factor < 1` zooms in.
    #[must_use]
    pub fn zoom_at(&self, anchor: &Point2, factor: f64) -> Self {
        let xmin = anchor.x - (anchor.x - self.xmin) * factor;
        let ymin = anchor.y - (anchor.y - self.ymin) * factor;
        Self {
            xmin,
            ymin,
            xmax: xmin + self.width() * factor,
            ymax: ymin + self.height() * factor,
        }
    }
}

/// Converts a mouse wheel delta to a zoom factor for [`Viewport::zoom_at`].
///
/// Positive deltas (scrolling down) zoom in.
#[must_use]
pub fn wheel_zoom_factor(delta: f64) -> f64 {
    (-delta * WHEEL_ZOOM_RATE).exp()
}
