use crate::error::{GeometryError, Result};
use crate::math::{align_zero, is_zero, Point3, Ray, Vector, TOLERANCE};

/// An infinite plane in 3D space.
///
/// Defined by a point on the plane and a unit normal.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    normal: Vector,
}

impl Plane {
    /// Creates a plane from a point and a normal vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal cannot be normalized.
    pub fn new(origin: Point3, normal: Vector) -> Result<Self> {
        Ok(Self {
            origin,
            normal: normal.normalize()?,
        })
    }

    /// Creates the plane through three points.
    ///
    /// The normal is `(b - a) x (c - a)`, normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if two points coincide or all three are collinear.
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Result<Self> {
        if a == b || a == c || b == c {
            return Err(
                GeometryError::Degenerate("two of the plane's points coincide".into()).into(),
            );
        }

        let ab = Vector::between(&a, &b)?;
        let ac = Vector::between(&a, &c)?;
        let normal = ab
            .cross(&ac)
            .ok()
            .filter(|n| n.length() >= TOLERANCE)
            .ok_or_else(|| GeometryError::Degenerate("the plane's points are collinear".into()))?;

        Ok(Self {
            origin: a,
            normal: normal.normalize()?,
        })
    }

    /// Returns the reference point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn plane_normal(&self) -> &Vector {
        &self.normal
    }

    /// Signed distance from a point to the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.raw().dot(&(point - self.origin))
    }

    /// Ray parameter of the hit, if the ray crosses the plane ahead of its origin.
    ///
    /// Rays parallel to the plane, or starting on it, do not hit.
    pub(crate) fn intersect_t(&self, ray: &Ray) -> Option<f64> {
        let denom = self.normal.dot(ray.direction());
        if is_zero(denom) {
            return None;
        }
        let numer = align_zero(self.normal.raw().dot(&(self.origin - ray.origin())));
        let t = align_zero(numer / denom);
        (t > 0.0).then_some(t)
    }
}
