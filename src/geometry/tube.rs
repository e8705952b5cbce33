use crate::error::{GeometryError, Result};
use crate::math::{is_zero, Point3, Ray, Vector, Vector3, TOLERANCE};

use super::distinct_roots;

/// An infinite tube: all points at `radius` from an axis line.
#[derive(Debug, Clone)]
pub struct Tube {
    axis: Ray,
    radius: f64,
}

impl Tube {
    /// Creates a new tube around `axis`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(radius: f64, axis: Ray) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("tube radius must be positive".into()).into());
        }
        Ok(Self { axis, radius })
    }

    /// Returns the axis ray.
    #[must_use]
    pub fn axis(&self) -> &Ray {
        &self.axis
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed position of the projection of `point` along the axis.
    #[must_use]
    pub fn axial_parameter(&self, point: &Point3) -> f64 {
        self.axis
            .direction()
            .raw()
            .dot(&(point - self.axis.origin()))
    }

    /// Outward unit normal at `point`.
    ///
    /// Projects `point` onto the axis and returns the normalized direction
    /// from that projection to `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` lies on the axis.
    pub fn normal(&self, point: &Point3) -> Result<Vector> {
        let center = self.axis.point_at(self.axial_parameter(point));
        let radial = point - center;
        if is_zero(radial.norm()) {
            return Err(
                GeometryError::UndefinedNormal("point lies on the tube axis".into()).into(),
            );
        }
        Vector::from_raw(radial)?.normalize()
    }

    /// Ray parameters of the crossings.
    ///
    /// Reduces to a circle-line problem in the plane perpendicular to the
    /// axis. Rays parallel to the axis never cross.
    pub(crate) fn intersect_ts(&self, ray: &Ray) -> Vec<f64> {
        let axis = self.axis.direction().raw();
        let dir = ray.direction().raw();

        let dp = ray.origin() - self.axis.origin();
        let dp_perp: Vector3 = dp - axis * dp.dot(axis);
        let dir_perp: Vector3 = dir - axis * dir.dot(axis);

        // Solve |dp_perp + t * dir_perp|^2 = r^2
        let a = dir_perp.dot(&dir_perp);
        let b = 2.0 * dp_perp.dot(&dir_perp);
        let c = dp_perp.dot(&dp_perp) - self.radius * self.radius;

        distinct_roots(a, b, c)
    }
}
