use crate::error::{GeometryError, Result};
use crate::math::{Point3, Ray, Vector, TOLERANCE};

use super::distinct_roots;

/// A sphere defined by a center and a radius.
///
/// The outward normal at `P` is `(P - center) / |P - center|`.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("sphere radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Outward unit normal at `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` is the center.
    pub fn normal(&self, point: &Point3) -> Result<Vector> {
        Vector::between(&self.center, point)
            .map_err(|_| GeometryError::UndefinedNormal("point is the sphere center".into()))?
            .normalize()
    }

    /// Ray parameters of the crossings: solve `|O + t*D - C|^2 = r^2`.
    pub(crate) fn intersect_ts(&self, ray: &Ray) -> Vec<f64> {
        let dir = ray.direction().raw();
        let dp = ray.origin() - self.center;

        let a = dir.dot(dir);
        let b = 2.0 * dp.dot(dir);
        let c = dp.dot(&dp) - self.radius * self.radius;

        distinct_roots(a, b, c)
    }
}
