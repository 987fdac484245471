use crate::error::ValidationError;
use crate::math::vec2::Vec2;

/// A convex polygon in body-local space.
///
/// Vertices must describe a convex outline in one consistent winding
/// order. Convexity and winding are not checked; degenerate input
/// (too few vertices, zero-length edges, repeated vertices) is rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, ValidationError> {
        let n = vertices.len();
        if n < 3 {
            return Err(ValidationError::TooFewVertices(n));
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(ValidationError::NonFiniteVertex { index });
        }
        for i in 0..n {
            if vertices[i] == vertices[(i + 1) % n] {
                return Err(ValidationError::ZeroLengthEdge { index: i });
            }
        }
        for first in 0..n {
            for second in (first + 1)..n {
                if vertices[first] == vertices[second] {
                    return Err(ValidationError::DuplicateVertex { first, second });
                }
            }
        }
        Ok(Polygon { vertices })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Iterates the edges `(v[i], v[(i + 1) % n])` in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// One unit-length candidate separating axis per edge: the edge's
    /// right-hand normal, in edge order.
    pub fn axes(&self) -> Vec<Vec2> {
        self.edges()
            .map(|(start, end)| (end - start).right_normal().normalize())
            .collect()
    }

    /// Arithmetic mean of the vertices. This is not the area centroid for
    /// irregular polygons.
    pub fn center(&self) -> Vec2 {
        let sum = self
            .vertices
            .iter()
            .fold(Vec2::ZERO, |acc, &v| acc + v);
        sum / self.vertices.len() as f64
    }

    /// Unsigned area using the shoelace formula.
    pub fn area(&self) -> f64 {
        let twice_signed: f64 = self.edges().map(|(a, b)| a.cross(b)).sum();
        (twice_signed / 2.0).abs()
    }

    /// Vertices shifted by `offset`, e.g. into world space.
    pub fn translated(&self, offset: Vec2) -> Vec<Vec2> {
        self.vertices.iter().map(|&v| v + offset).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn square(size: f64) -> Polygon {
        Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(size, 0.0),
            Vec2::new(size, size),
            Vec2::new(0.0, size),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_new() {
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(polygon.vertices().len(), 3);
    }

    #[test]
    fn test_polygon_too_few_vertices() {
        let err = Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]).unwrap_err();
        assert_eq!(err, ValidationError::TooFewVertices(2));
    }

    #[test]
    fn test_polygon_zero_length_edge() {
        let err = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ])
        .unwrap_err();
        assert_eq!(err, ValidationError::ZeroLengthEdge { index: 1 });

        // closing edge wraps around to the first vertex
        let err = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, 0.0),
        ])
        .unwrap_err();
        assert_eq!(err, ValidationError::ZeroLengthEdge { index: 3 });
    }

    #[test]
    fn test_polygon_duplicate_vertex() {
        let err = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
        ])
        .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateVertex { first: 0, second: 2 });
    }

    #[test]
    fn test_polygon_non_finite_vertex() {
        let err = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(f64::NAN, 0.0),
            Vec2::new(0.0, 1.0),
        ])
        .unwrap_err();
        assert_eq!(err, ValidationError::NonFiniteVertex { index: 1 });
    }

    #[test]
    fn test_polygon_axes_square() {
        let axes = square(10.0).axes();
        assert_eq!(axes.len(), 4);
        let expected = [
            Vec2::new(0.0, -1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
        ];
        for (axis, want) in axes.iter().zip(expected.iter()) {
            assert!((axis.x - want.x).abs() < EPSILON, "{:?} != {:?}", axis, want);
            assert!((axis.y - want.y).abs() < EPSILON, "{:?} != {:?}", axis, want);
        }
    }

    #[test]
    fn test_polygon_axes_are_unit_length() {
        let triangle = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(0.0, 5.0),
        ])
        .unwrap();
        for axis in triangle.axes() {
            assert!((axis.magnitude() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_polygon_center_is_vertex_mean() {
        let center = square(10.0).center();
        assert!((center.x - 5.0).abs() < EPSILON);
        assert!((center.y - 5.0).abs() < EPSILON);

        // mean of vertices, not the area centroid
        let quad = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(3.0, 1.0),
            Vec2::new(0.0, 3.0),
        ])
        .unwrap();
        let c = quad.center();
        assert!((c.x - 1.5).abs() < EPSILON);
        assert!((c.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_area() {
        assert!((square(2.0).area() - 4.0).abs() < EPSILON);
        let triangle = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 0.0),
        ])
        .unwrap();
        assert!((triangle.area() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_translated() {
        let moved = square(1.0).translated(Vec2::new(10.0, -5.0));
        assert_eq!(moved[0], Vec2::new(10.0, -5.0));
        assert_eq!(moved[2], Vec2::new(11.0, -4.0));
    }
}
