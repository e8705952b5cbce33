use crate::error::Result;
use crate::geometry::GeoPoint;

use super::{align_zero, Point3, Vector};

/// A half-line with an origin and a unit direction.
///
/// `P(t) = origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector,
}

impl Ray {
    /// Distance by which [`Ray::offset`] moves the origin off a surface.
    pub const DELTA: f64 = 1e-5;

    /// Creates a ray; the direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction cannot be normalized.
    pub fn new(origin: Point3, direction: Vector) -> Result<Self> {
        Ok(Self {
            origin,
            direction: direction.normalize()?,
        })
    }

    /// Creates a ray leaving a surface point.
    ///
    /// The origin is moved by [`Ray::DELTA`] along `normal`, towards the side
    /// the direction points to, so the ray does not re-hit the surface it
    /// starts on. A direction tangent to the surface leaves the origin as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction cannot be normalized.
    pub fn offset(point: Point3, direction: Vector, normal: &Vector) -> Result<Self> {
        let direction = direction.normalize()?;
        let nd = align_zero(normal.dot(&direction));
        let origin = if nd > 0.0 {
            point + normal.raw() * Self::DELTA
        } else if nd < 0.0 {
            point - normal.raw() * Self::DELTA
        } else {
            point
        };
        Ok(Self { origin, direction })
    }

    /// Returns the origin.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction.
    #[must_use]
    pub fn direction(&self) -> &Vector {
        &self.direction
    }

    /// Evaluates the ray at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction.raw() * t
    }

    /// Returns the point closest to the ray origin, or `None` for an empty slice.
    #[must_use]
    pub fn find_closest_point(&self, points: &[Point3]) -> Option<Point3> {
        points
            .iter()
            .min_by(|a, b| {
                nalgebra::distance_squared(&self.origin, a)
                    .total_cmp(&nalgebra::distance_squared(&self.origin, b))
            })
            .copied()
    }

    /// Returns the intersection closest to the ray origin.
    ///
    /// Among equidistant points the first one in `points` wins.
    #[must_use]
    pub fn find_closest_geo_point<'a>(&self, points: Vec<GeoPoint<'a>>) -> Option<GeoPoint<'a>> {
        points.into_iter().min_by(|a, b| {
            nalgebra::distance_squared(&self.origin, &a.point)
                .total_cmp(&nalgebra::distance_squared(&self.origin, &b.point))
        })
    }
}
