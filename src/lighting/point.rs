use crate::color::Color;
use crate::error::{LightError, Result};
use crate::math::{Point3, Vector};

/// Omnidirectional light at a position, attenuated with distance.
///
/// The intensity at distance `d` is `I0 / (kc + kl * d + kq * d^2)`.
#[derive(Debug, Clone)]
pub struct PointLight {
    intensity: Color,
    position: Point3,
    kc: f64,
    kl: f64,
    kq: f64,
}

impl PointLight {
    /// Creates a point light with no distance attenuation (`kc = 1`, `kl = kq = 0`).
    #[must_use]
    pub fn new(intensity: Color, position: Point3) -> Self {
        Self {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }

    /// Sets the constant attenuation factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `kc` is not positive.
    pub fn with_kc(mut self, kc: f64) -> Result<Self> {
        if kc.is_nan() || kc <= 0.0 {
            return Err(LightError::InvalidParameter {
                parameter: "kc",
                value: kc,
                reason: "must be positive",
            }
            .into());
        }
        self.kc = kc;
        Ok(self)
    }

    /// Sets the linear attenuation factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `kl` is negative.
    pub fn with_kl(mut self, kl: f64) -> Result<Self> {
        self.kl = non_negative("kl", kl)?;
        Ok(self)
    }

    /// Sets the quadratic attenuation factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `kq` is negative.
    pub fn with_kq(mut self, kq: f64) -> Result<Self> {
        self.kq = non_negative("kq", kq)?;
        Ok(self)
    }

    /// Returns the position.
    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Returns the unattenuated intensity.
    #[must_use]
    pub fn intensity(&self) -> Color {
        self.intensity
    }

    /// Intensity reaching `point` after distance attenuation.
    #[must_use]
    pub fn intensity_at(&self, point: &Point3) -> Color {
        let d = self.distance_to(point);
        self.intensity * (1.0 / (self.kc + self.kl * d + self.kq * d * d))
    }

    /// Unit direction from the light toward `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` is the light's position.
    pub fn direction_at(&self, point: &Point3) -> Result<Vector> {
        Vector::between(&self.position, point)?.normalize()
    }

    /// Distance from the light to `point`.
    #[must_use]
    pub fn distance_to(&self, point: &Point3) -> f64 {
        nalgebra::distance(&self.position, point)
    }
}

fn non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    if value < 0.0 || value.is_nan() {
        return Err(LightError::InvalidParameter {
            parameter,
            value,
            reason: "must be non-negative",
        }
        .into());
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unattenuated_by_default() {
        let light = PointLight::new(Color::new(100.0, 50.0, 0.0), Point3::new(0.0, 0.0, 10.0));
        assert_eq!(
            light.intensity_at(&Point3::new(3.0, 4.0, 0.0)),
            Color::new(100.0, 50.0, 0.0)
        );
    }

    #[test]
    fn attenuation_model() {
        let light = PointLight::new(Color::new(100.0, 50.0, 0.0), Point3::new(0.0, 0.0, 0.0))
            .with_kc(2.0)
            .unwrap()
            .with_kl(0.5)
            .unwrap()
            .with_kq(0.25)
            .unwrap();
        // d = 2: 2 + 1 + 1 = 4
        let i = light.intensity_at(&Point3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(i.r(), 25.0);
        assert_relative_eq!(i.g(), 12.5);
        assert_relative_eq!(i.b(), 0.0);
    }

    #[test]
    fn invalid_factors_are_rejected() {
        let light = PointLight::new(Color::new(1.0, 1.0, 1.0), Point3::origin());
        assert!(light.clone().with_kc(0.0).is_err());
        assert!(light.clone().with_kl(-1.0).is_err());
        assert!(light.with_kq(f64::NAN).is_err());
    }
}
