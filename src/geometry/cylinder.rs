use crate::error::{GeometryError, Result};
use crate::math::{is_zero, Point3, Ray, Vector, TOLERANCE};

use super::{Plane, Tube};

/// A tube cut to a finite height and closed by two flat caps.
///
/// The base cap lies at the axis origin, the top cap at `height` along
/// the axis direction.
#[derive(Debug, Clone)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
    base: Plane,
    top: Plane,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or the height is non-positive.
    pub fn new(radius: f64, axis: Ray, height: f64) -> Result<Self> {
        if height < TOLERANCE {
            return Err(
                GeometryError::Degenerate("cylinder height must be positive".into()).into(),
            );
        }
        let tube = Tube::new(radius, axis)?;
        let dir = *axis.direction();
        let base = Plane::new(*axis.origin(), -dir)?;
        let top = Plane::new(axis.point_at(height), dir)?;
        Ok(Self {
            tube,
            height,
            base,
            top,
        })
    }

    /// Returns the side surface.
    #[must_use]
    pub fn tube(&self) -> &Tube {
        &self.tube
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Outward unit normal at `point`.
    ///
    /// Points whose axial projection is at 0 or at `height` are on a cap and
    /// get the cap's normal; all others get the side normal.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` lies on the axis strictly between the caps.
    pub fn normal(&self, point: &Point3) -> Result<Vector> {
        let s = self.tube.axial_parameter(point);
        if is_zero(s) {
            Ok(*self.base.plane_normal())
        } else if is_zero(s - self.height) {
            Ok(*self.top.plane_normal())
        } else {
            self.tube.normal(point)
        }
    }

    /// Ray parameters of the crossings with the side and both caps.
    pub(crate) fn intersect_ts(&self, ray: &Ray) -> Vec<f64> {
        let radius_sq = self.tube.radius() * self.tube.radius();

        let side = self.tube.intersect_ts(ray).into_iter().filter(|&t| {
            let s = self.tube.axial_parameter(&ray.point_at(t));
            s > TOLERANCE && s < self.height - TOLERANCE
        });

        let caps = [&self.base, &self.top].into_iter().filter_map(|cap| {
            let t = cap.intersect_t(ray)?;
            let dist_sq = (ray.point_at(t) - cap.origin()).norm_squared();
            (dist_sq < radius_sq - TOLERANCE).then_some(t)
        });

        side.chain(caps).collect()
    }
}
