use crate::color::Color;
use crate::error::Result;
use crate::math::Vector;

/// Light from infinitely far away along a fixed direction.
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    intensity: Color,
    direction: Vector,
}

impl DirectionalLight {
    /// Creates a directional light travelling along `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction cannot be normalized.
    pub fn new(intensity: Color, direction: Vector) -> Result<Self> {
        Ok(Self {
            intensity,
            direction: direction.normalize()?,
        })
    }

    /// Returns the intensity.
    #[must_use]
    pub fn intensity(&self) -> Color {
        self.intensity
    }

    /// Returns the unit travel direction.
    #[must_use]
    pub fn direction(&self) -> &Vector {
        &self.direction
    }
}
