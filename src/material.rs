use crate::color::Factors;
use crate::error::{MaterialError, Result};

/// Surface response to light.
///
/// All coefficients default to zero, so a default material only shows its
/// geometry's emission.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    kd: Factors,
    ks: Factors,
    kt: Factors,
    kr: Factors,
    shininess: f64,
}

impl Material {
    /// Creates a material with all coefficients zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diffuse coefficient.
    ///
    /// # Errors
    ///
    /// Returns an error if a channel is outside `[0, 1]`.
    pub fn with_kd(mut self, kd: impl Into<Factors>) -> Result<Self> {
        self.kd = unit_range("kd", kd.into())?;
        Ok(self)
    }

    /// Sets the specular coefficient.
    ///
    /// # Errors
    ///
    /// Returns an error if a channel is outside `[0, 1]`.
    pub fn with_ks(mut self, ks: impl Into<Factors>) -> Result<Self> {
        self.ks = unit_range("ks", ks.into())?;
        Ok(self)
    }

    /// Sets the transmission coefficient.
    ///
    /// # Errors
    ///
    /// Returns an error if a channel is outside `[0, 1]`.
    pub fn with_kt(mut self, kt: impl Into<Factors>) -> Result<Self> {
        self.kt = unit_range("kt", kt.into())?;
        Ok(self)
    }

    /// Sets the reflection coefficient.
    ///
    /// # Errors
    ///
    /// Returns an error if a channel is outside `[0, 1]`.
    pub fn with_kr(mut self, kr: impl Into<Factors>) -> Result<Self> {
        self.kr = unit_range("kr", kr.into())?;
        Ok(self)
    }

    /// Sets the specular exponent.
    ///
    /// # Errors
    ///
    /// Returns an error if `shininess` is negative or not finite.
    pub fn with_shininess(mut self, shininess: f64) -> Result<Self> {
        if !(shininess >= 0.0 && shininess.is_finite()) {
            return Err(MaterialError::ParameterOutOfRange {
                parameter: "shininess",
                value: shininess,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        self.shininess = shininess;
        Ok(self)
    }

    /// Diffuse coefficient.
    #[must_use]
    pub fn kd(&self) -> Factors {
        self.kd
    }

    /// Specular coefficient.
    #[must_use]
    pub fn ks(&self) -> Factors {
        self.ks
    }

    /// Transmission coefficient.
    #[must_use]
    pub fn kt(&self) -> Factors {
        self.kt
    }

    /// Reflection coefficient.
    #[must_use]
    pub fn kr(&self) -> Factors {
        self.kr
    }

    /// Specular exponent.
    #[must_use]
    pub fn shininess(&self) -> f64 {
        self.shininess
    }
}

/// Checks that every channel lies in `[0, 1]`.
fn unit_range(parameter: &'static str, factors: Factors) -> Result<Factors> {
    for value in [factors.r(), factors.g(), factors.b()] {
        if !(0.0..=1.0).contains(&value) {
            return Err(MaterialError::ParameterOutOfRange {
                parameter,
                value,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
    }
    Ok(factors)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LumisError;

    fn out_of_range(r: Result<Material>) -> bool {
        matches!(
            r,
            Err(LumisError::Material(MaterialError::ParameterOutOfRange { .. }))
        )
    }

    #[test]
    fn default_is_inert() {
        let m = Material::new();
        assert_eq!(m.kd(), Factors::zero());
        assert_eq!(m.kt(), Factors::zero());
        assert!(m.shininess().abs() < f64::EPSILON);
    }

    #[test]
    fn builder_sets_coefficients() {
        let m = Material::new()
            .with_kd(0.5)
            .unwrap()
            .with_ks(Factors::new(0.1, 0.2, 0.3))
            .unwrap()
            .with_kt(1.0)
            .unwrap()
            .with_kr(0.25)
            .unwrap()
            .with_shininess(100.0)
            .unwrap();
        assert_eq!(m.kd(), Factors::uniform(0.5));
        assert_eq!(m.ks(), Factors::new(0.1, 0.2, 0.3));
        assert_eq!(m.kt(), Factors::one());
        assert_eq!(m.kr(), Factors::uniform(0.25));
        assert!((m.shininess() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn coefficients_outside_unit_range_are_rejected() {
        assert!(out_of_range(Material::new().with_kt(2.0)));
        assert!(out_of_range(Material::new().with_kd(-0.1)));
        assert!(out_of_range(Material::new().with_ks(Factors::new(0.5, 1.5, 0.5))));
        assert!(out_of_range(Material::new().with_kr(f64::NAN)));
    }

    #[test]
    fn negative_shininess_is_rejected() {
        assert!(out_of_range(Material::new().with_shininess(-1.0)));
        assert!(out_of_range(Material::new().with_shininess(f64::NAN)));
        assert!(Material::new().with_shininess(0.0).is_ok());
    }
}
