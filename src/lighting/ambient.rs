use crate::color::{Color, Factors};

/// Constant environmental light with no direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AmbientLight {
    intensity: Color,
}

impl AmbientLight {
    /// Creates an ambient light of `color` attenuated by `ka`.
    #[must_use]
    pub fn new(color: Color, ka: impl Into<Factors>) -> Self {
        Self {
            intensity: color * ka.into(),
        }
    }

    /// An ambient light contributing nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the ambient intensity.
    #[must_use]
    pub fn intensity(&self) -> Color {
        self.intensity
    }
}
