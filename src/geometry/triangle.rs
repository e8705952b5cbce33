use crate::error::Result;
use crate::math::Point3;

use super::Polygon;

/// A triangle: a three-vertex polygon.
#[derive(Debug, Clone)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    /// Creates a triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if two vertices coincide or all three are collinear.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Result<Self> {
        Ok(Self {
            polygon: Polygon::new(vec![a, b, c])?,
        })
    }

    /// Returns the underlying polygon.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Area: half the magnitude of `(b - a) x (c - a)`.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = [0, 1, 2].map(|i| self.polygon.vertices()[i]);
        (b - a).cross(&(c - a)).norm() * 0.5
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Shape;
    use crate::math::{Ray, Vector};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector {
        Vector::new(x, y, z).unwrap()
    }

    #[test]
    fn area_of_right_triangle() {
        let t = Triangle::new(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 3.0, 0.0)).unwrap();
        assert_relative_eq!(t.area(), 6.0);
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        assert!(Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(2.0, 2.0, 0.0)).is_err());
    }

    #[test]
    fn normal_follows_winding() {
        let shape = Shape::from(
            Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)).unwrap(),
        );
        assert_eq!(shape.normal(&p(0.2, 0.2, 0.0)).unwrap(), v(0.0, 0.0, 1.0));
    }

    #[test]
    fn ray_inside_and_outside() {
        let shape = Shape::from(
            Triangle::new(p(0.0, 0.0, 2.0), p(2.0, 0.0, 2.0), p(0.0, 2.0, 2.0)).unwrap(),
        );
        let inside = Ray::new(p(0.5, 0.5, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(shape.intersections(&inside).unwrap(), vec![p(0.5, 0.5, 2.0)]);

        let outside = Ray::new(p(1.5, 1.5, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        assert!(shape.intersections(&outside).is_none());
    }
}
