mod ambient;
mod directional;
mod point;
mod spot;

pub use ambient::AmbientLight;
pub use directional::DirectionalLight;
pub use point::PointLight;
pub use spot::SpotLight;

use crate::color::Color;
use crate::error::Result;
use crate::math::{Point3, Vector};

/// A light that illuminates points from a direction.
#[derive(Debug, Clone)]
pub enum LightSource {
    /// Parallel rays from infinitely far away.
    Directional(DirectionalLight),
    /// Omnidirectional light at a position.
    Point(PointLight),
    /// Point light focused along an axis.
    Spot(SpotLight),
}

impl LightSource {
    /// Intensity arriving at `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if the intensity is undefined at `point`, such as a
    /// spot light evaluated at its own position.
    pub fn intensity_at(&self, point: &Point3) -> Result<Color> {
        match self {
            LightSource::Directional(l) => Ok(l.intensity()),
            LightSource::Point(l) => Ok(l.intensity_at(point)),
            LightSource::Spot(l) => l.intensity_at(point),
        }
    }

    /// Unit direction in which the light travels when it reaches `point`.
    ///
    /// This points from the light toward `point`; negate it to get the
    /// direction from `point` toward the light.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` coincides with the light's position.
    pub fn direction_at(&self, point: &Point3) -> Result<Vector> {
        match self {
            LightSource::Directional(l) => Ok(*l.direction()),
            LightSource::Point(l) => l.direction_at(point),
            LightSource::Spot(l) => l.point_light().direction_at(point),
        }
    }

    /// Distance from `point` to the light; infinite for directional lights.
    #[must_use]
    pub fn distance_to(&self, point: &Point3) -> f64 {
        match self {
            LightSource::Directional(_) => f64::INFINITY,
            LightSource::Point(l) => l.distance_to(point),
            LightSource::Spot(l) => l.point_light().distance_to(point),
        }
    }
}

impl From<DirectionalLight> for LightSource {
    fn from(light: DirectionalLight) -> Self {
        LightSource::Directional(light)
    }
}

impl From<PointLight> for LightSource {
    fn from(light: PointLight) -> Self {
        LightSource::Point(light)
    }
}

impl From<SpotLight> for LightSource {
    fn from(light: SpotLight) -> Self {
        LightSource::Spot(light)
    }
}
