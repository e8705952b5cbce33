use crate::error::{GeometryError, Result};
use crate::math::{is_zero, Point3, Ray, Vector3};

use super::Plane;

/// A convex planar polygon.
///
/// The vertices are ordered along the boundary; the plane normal is derived
/// from the first three.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
}

impl Polygon {
    /// Creates a polygon from its boundary vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than three vertices, if they are
    /// not coplanar, if two consecutive edges are collinear, or if the
    /// boundary is not convex.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate(
                "a polygon needs at least three vertices".into(),
            )
            .into());
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        if vertices.len() > 3 {
            check_convex_and_coplanar(&vertices, &plane)?;
        }

        Ok(Self { vertices, plane })
    }

    /// Returns the boundary vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the supporting plane.
    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Ray parameter of the hit, if the ray crosses the polygon's interior.
    ///
    /// Each edge spans a triangle with the ray origin; the ray is inside when
    /// it sees every such triangle with the same orientation. Hits on an edge
    /// or a vertex do not count.
    pub(crate) fn intersect_t(&self, ray: &Ray) -> Option<f64> {
        let t = self.plane.intersect_t(ray)?;

        let origin = ray.origin();
        let dir = ray.direction().raw();
        let n = self.vertices.len();
        let mut sign = 0.0;
        for i in 0..n {
            let v1 = self.vertices[i] - origin;
            let v2 = self.vertices[(i + 1) % n] - origin;
            let s = dir.dot(&v1.cross(&v2));
            if is_zero(s) || s * sign < 0.0 {
                return None;
            }
            sign = s;
        }
        Some(t)
    }
}

/// Checks that all vertices lie on `plane` and that every turn along the
/// boundary has the same orientation with respect to its normal.
fn check_convex_and_coplanar(vertices: &[Point3], plane: &Plane) -> Result<()> {
    let normal = plane.plane_normal().raw();
    let n = vertices.len();

    for v in &vertices[3..] {
        if !is_zero(plane.signed_distance(v)) {
            return Err(
                GeometryError::Degenerate("polygon vertices are not coplanar".into()).into(),
            );
        }
    }

    let mut positive = None;
    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let curr = vertices[i];
        let next = vertices[(i + 1) % n];
        let turn: Vector3 = (curr - prev).cross(&(next - curr));
        let side = turn.dot(normal);
        if is_zero(side) {
            return Err(GeometryError::Degenerate(
                "polygon has repeated vertices or collinear edges".into(),
            )
            .into());
        }
        match positive {
            None => positive = Some(side > 0.0),
            Some(p) if p != (side > 0.0) => {
                return Err(GeometryError::Degenerate("polygon is not convex".into()).into());
            }
            Some(_) => {}
        }
    }

    Ok(())
}
