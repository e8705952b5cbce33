use crate::color::Color;
use crate::error::{LightError, Result};
use crate::math::{Point3, Vector};

use super::PointLight;

/// A point light whose intensity falls off away from its axis.
///
/// The intensity at `P` is the point light's attenuated intensity times
/// `max(0, axis . l)^narrow_beam`, `l` being the unit direction from the
/// light to `P`.
#[derive(Debug, Clone)]
pub struct SpotLight {
    point_light: PointLight,
    direction: Vector,
    narrow_beam: f64,
}

impl SpotLight {
    /// Creates a spot light at `position` aimed along `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction cannot be normalized.
    pub fn new(intensity: Color, position: Point3, direction: Vector) -> Result<Self> {
        Ok(Self {
            point_light: PointLight::new(intensity, position),
            direction: direction.normalize()?,
            narrow_beam: 1.0,
        })
    }

    /// Sets the constant attenuation factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `kc` is not positive.
    pub fn with_kc(mut self, kc: f64) -> Result<Self> {
        self.point_light = self.point_light.with_kc(kc)?;
        Ok(self)
    }

    /// Sets the linear attenuation factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `kl` is negative.
    pub fn with_kl(mut self, kl: f64) -> Result<Self> {
        self.point_light = self.point_light.with_kl(kl)?;
        Ok(self)
    }

    /// Sets the quadratic attenuation factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `kq` is negative.
    pub fn with_kq(mut self, kq: f64) -> Result<Self> {
        self.point_light = self.point_light.with_kq(kq)?;
        Ok(self)
    }

    /// Sets the beam exponent; larger values give a tighter beam.
    ///
    /// # Errors
    ///
    /// Returns an error if `narrow_beam` is less than 1.
    pub fn with_narrow_beam(mut self, narrow_beam: f64) -> Result<Self> {
        if narrow_beam.is_nan() || narrow_beam < 1.0 {
            return Err(LightError::InvalidParameter {
                parameter: "narrow_beam",
                value: narrow_beam,
                reason: "must be at least 1",
            }
            .into());
        }
        self.narrow_beam = narrow_beam;
        Ok(self)
    }

    /// Returns the underlying point light.
    #[must_use]
    pub fn point_light(&self) -> &PointLight {
        &self.point_light
    }

    /// Returns the unit axis direction.
    #[must_use]
    pub fn direction(&self) -> &Vector {
        &self.direction
    }

    /// Intensity reaching `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` is the light's position.
    pub fn intensity_at(&self, point: &Point3) -> Result<Color> {
        let l = self.point_light.direction_at(point)?;
        let factor = self.direction.dot(&l).max(0.0).powf(self.narrow_beam);
        Ok(self.point_light.intensity_at(point) * factor)
    }
}
