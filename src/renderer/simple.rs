use tracing::{debug, trace};

use crate::color::{Color, Factors};
use crate::error::Result;
use crate::geometry::{GeoPoint, Intersectable};
use crate::lighting::LightSource;
use crate::material::Material;
use crate::math::{align_zero, is_zero, Ray, Vector};
use crate::scene::Scene;

use super::{RayTracer, TracerSettings};

/// Whitted-style recursive ray tracer.
///
/// At every hit the color is the geometry's emission plus the diffuse and
/// specular light of each visible source, attenuated by the transmission of
/// whatever lies between the point and the light. Two secondary rays then
/// continue from the hit:
///
/// - the reflected ray travels back along the incoming direction, weighted
///   by `kR`;
/// - the refracted ray keeps the incoming direction, weighted by `kT`.
///
/// A branch stops after [`TracerSettings::max_level`] levels or once its
/// accumulated attenuation is below [`TracerSettings::min_k`] on every
/// channel. The ambient light is added once per traced ray.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRayTracer<'a> {
    scene: &'a Scene,
    settings: TracerSettings,
}

impl<'a> SimpleRayTracer<'a> {
    /// Creates a tracer over `scene` with default settings.
    #[must_use]
    pub fn new(scene: &'a Scene) -> Self {
        Self::with_settings(scene, TracerSettings::default())
    }

    /// Creates a tracer over `scene` with the given settings.
    #[must_use]
    pub fn with_settings(scene: &'a Scene, settings: TracerSettings) -> Self {
        debug!(
            scene = scene.name(),
            geometries = scene.geometries().len(),
            lights = scene.lights().len(),
            max_level = settings.max_level(),
            min_k = settings.min_k(),
            "ray tracer created"
        );
        Self { scene, settings }
    }

    /// Returns the scene being traced.
    #[must_use]
    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Returns the recursion bounds.
    #[must_use]
    pub fn settings(&self) -> &TracerSettings {
        &self.settings
    }

    fn find_closest_intersection(&self, ray: &Ray) -> Option<GeoPoint<'a>> {
        let scene: &'a Scene = self.scene;
        let hits = scene.geometries().find_geo_intersections(ray)?;
        ray.find_closest_geo_point(hits)
    }

    /// Full color at a primary hit: the recursive part plus the ambient light.
    fn calc_color(&self, gp: &GeoPoint<'_>, ray: &Ray) -> Result<Color> {
        let color = self.calc_color_at_level(gp, ray, self.settings.max_level(), Factors::one())?;
        Ok(color + self.scene.ambient_light().intensity())
    }

    fn calc_color_at_level(
        &self,
        gp: &GeoPoint<'_>,
        ray: &Ray,
        level: u32,
        k: Factors,
    ) -> Result<Color> {
        let normal = gp.geometry.normal(&gp.point)?;
        let color = self.calc_local_effects(gp, ray, &normal, k)?;
        if level <= 1 {
            trace!("recursion depth reached");
            return Ok(color);
        }
        Ok(color + self.calc_global_effects(gp, ray, &normal, level, k)?)
    }

    fn calc_local_effects(
        &self,
        gp: &GeoPoint<'_>,
        ray: &Ray,
        normal: &Vector,
        k: Factors,
    ) -> Result<Color> {
        let mut color = gp.geometry.emission();
        let v = ray.direction();
        let nv = normal.dot(v);
        if is_zero(nv) {
            return Ok(color);
        }

        let material = gp.geometry.material();
        for light in self.scene.lights() {
            let l = light.direction_at(&gp.point)?;
            let nl = align_zero(normal.dot(&l));
            // light and viewer must be on the same side of the surface
            if nl * nv <= 0.0 {
                continue;
            }
            let ktr = self.transparency(gp, light, &l, normal)?;
            if (ktr * k).lower_than(self.settings.min_k()) {
                continue;
            }
            let il = light.intensity_at(&gp.point)? * ktr;
            color += il * (diffusive(material, nl) + specular(material, normal, &l, nl, v));
        }
        Ok(color)
    }

    /// Product of the transmission coefficients of everything strictly
    /// between the point and the light.
    fn transparency(
        &self,
        gp: &GeoPoint<'_>,
        light: &LightSource,
        l: &Vector,
        normal: &Vector,
    ) -> Result<Factors> {
        let shadow_ray = Ray::offset(gp.point, -*l, normal)?;
        let Some(hits) = self.scene.geometries().find_geo_intersections(&shadow_ray) else {
            return Ok(Factors::one());
        };

        let light_distance = light.distance_to(&gp.point);
        let mut ktr = Factors::one();
        for hit in hits {
            if align_zero(nalgebra::distance(&hit.point, &gp.point) - light_distance) < 0.0 {
                ktr = ktr * hit.geometry.material().kt();
                if ktr.lower_than(self.settings.min_k()) {
                    return Ok(Factors::zero());
                }
            }
        }
        Ok(ktr)
    }

    fn calc_global_effects(
        &self,
        gp: &GeoPoint<'_>,
        ray: &Ray,
        normal: &Vector,
        level: u32,
        k: Factors,
    ) -> Result<Color> {
        let material = gp.geometry.material();
        let direction = *ray.direction();
        let reflected = Ray::offset(gp.point, -direction, normal)?;
        let refracted = Ray::offset(gp.point, direction, normal)?;
        Ok(self.calc_global_effect(&reflected, level, k, material.kr())?
            + self.calc_global_effect(&refracted, level, k, material.kt())?)
    }

    fn calc_global_effect(&self, ray: &Ray, level: u32, k: Factors, kx: Factors) -> Result<Color> {
        let kkx = k * kx;
        if kkx.lower_than(self.settings.min_k()) {
            trace!(level, "branch attenuated below threshold");
            return Ok(Color::black());
        }
        let color = match self.find_closest_intersection(ray) {
            Some(gp) => self.calc_color_at_level(&gp, ray, level - 1, kkx)?,
            None => self.scene.background(),
        };
        Ok(color * kx)
    }
}

impl RayTracer for SimpleRayTracer<'_> {
    fn trace_ray(&self, ray: &Ray) -> Result<Color> {
        match self.find_closest_intersection(ray) {
            Some(gp) => self.calc_color(&gp, ray),
            None => Ok(self.scene.background()),
        }
    }
}

fn diffusive(material: &Material, nl: f64) -> Factors {
    material.kd() * nl.abs()
}

/// Phong term `kS * max(0, -v . r)^shininess`, `r` being `l` mirrored about `n`.
fn specular(material: &Material, n: &Vector, l: &Vector, nl: f64, v: &Vector) -> Factors {
    let r = l.raw() - n.raw() * (2.0 * nl);
    let minus_vr = -align_zero(v.raw().dot(&r));
    material.ks() * minus_vr.max(0.0).powf(material.shininess())
}
