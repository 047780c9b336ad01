use crate::math::polygon_2d::{is_convex, orientation, vertex_centroid, Orientation};
use crate::math::Point2;

/// A clip window given as a closed loop of vertices.
///
/// Vertices may wind either way. Convexity is a precondition of the
/// Cyrus–Beck clipper and is not checked on construction; call
/// [`ConvexPolygon::is_convex`] when the source of the vertices is untrusted.
/// Fewer than 3 vertices is allowed while the polygon is being accumulated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point2>,
}

impl ConvexPolygon {
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Appends a vertex, closing the loop back to the first one.
    pub fn push(&mut self, vertex: Point2) {
        self.vertices.push(vertex);
    }

    /// Removes all vertices.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` once the polygon has enough vertices to enclose an area.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Iterates over the edges `(v[i], v[i + 1])`, wrapping from the last
    /// vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Arithmetic mean of the vertices, `None` when empty.
    #[must_use]
    pub fn centroid(&self) -> Option<Point2> {
        vertex_centroid(&self.vertices)
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        orientation(&self.vertices)
    }

    #[must_use]
    pub fn is_convex(&self) -> bool {
        is_convex(&self.vertices)
    }
}

impl From<Vec<Point2>> for ConvexPolygon {
    fn from(vertices: Vec<Point2>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Point2> for ConvexPolygon {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
