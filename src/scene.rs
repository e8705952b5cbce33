use crate::color::Color;
use crate::geometry::{Geometries, Geometry, GeometryId};
use crate::lighting::{AmbientLight, LightSource};

/// Everything a ray tracer reads while rendering.
///
/// A scene is assembled up front and then shared read-only for the whole
/// render.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    name: String,
    geometries: Geometries,
    lights: Vec<LightSource>,
    ambient_light: AmbientLight,
    background: Color,
}

impl Scene {
    /// Creates an empty scene with a black background and no ambient light.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the background color.
    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the ambient light.
    #[must_use]
    pub fn with_ambient_light(mut self, ambient_light: AmbientLight) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    /// Replaces the geometries.
    #[must_use]
    pub fn with_geometries(mut self, geometries: Geometries) -> Self {
        self.geometries = geometries;
        self
    }

    /// Adds a geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometries.add(geometry);
        self
    }

    /// Adds a light source.
    #[must_use]
    pub fn with_light(mut self, light: impl Into<LightSource>) -> Self {
        self.lights.push(light.into());
        self
    }

    /// Adds a geometry and returns its handle.
    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryId {
        self.geometries.add(geometry)
    }

    /// Adds a light source.
    pub fn add_light(&mut self, light: impl Into<LightSource>) {
        self.lights.push(light.into());
    }

    /// Returns the scene name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the geometries.
    #[must_use]
    pub fn geometries(&self) -> &Geometries {
        &self.geometries
    }

    /// Returns the light sources.
    #[must_use]
    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    /// Returns the ambient light.
    #[must_use]
    pub fn ambient_light(&self) -> &AmbientLight {
        &self.ambient_light
    }

    /// Returns the background color.
    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Sphere;
    use crate::lighting::PointLight;
    use crate::math::Point3;

    #[test]
    fn new_scene_is_empty_and_black() {
        let scene = Scene::new("empty");
        assert_eq!(scene.name(), "empty");
        assert!(scene.geometries().is_empty());
        assert!(scene.lights().is_empty());
        assert_eq!(scene.background(), Color::black());
        assert_eq!(scene.ambient_light().intensity(), Color::black());
    }

    #[test]
    fn builder_assembles_scene() {
        let mut scene = Scene::new("assembled")
            .with_background(Color::new(0.1, 0.2, 0.3))
            .with_ambient_light(AmbientLight::new(Color::new(1.0, 1.0, 1.0), 0.5))
            .with_geometry(Geometry::new(Sphere::new(Point3::origin(), 1.0).unwrap()))
            .with_light(PointLight::new(Color::new(1.0, 1.0, 1.0), Point3::new(0.0, 5.0, 0.0)));
        let id = scene.add_geometry(Geometry::new(
            Sphere::new(Point3::new(3.0, 0.0, 0.0), 1.0).unwrap(),
        ));
        scene.add_light(PointLight::new(Color::new(1.0, 1.0, 1.0), Point3::new(0.0, -5.0, 0.0)));

        assert_eq!(scene.geometries().len(), 2);
        assert!(scene.geometries().get(id).is_some());
        assert_eq!(scene.lights().len(), 2);
        assert_eq!(scene.background(), Color::new(0.1, 0.2, 0.3));
        assert_eq!(scene.ambient_light().intensity(), Color::new(0.5, 0.5, 0.5));
    }
}
