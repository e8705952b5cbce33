mod cylinder;
mod geometries;
mod plane;
mod polygon;
mod sphere;
mod triangle;
mod tube;

pub use cylinder::Cylinder;
pub use geometries::{Geometries, GeometryId};
pub use plane::Plane;
pub use polygon::Polygon;
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use tube::Tube;

use crate::color::Color;
use crate::error::Result;
use crate::material::Material;
use crate::math::{align_zero, is_zero, Point3, Ray, Vector};

/// The closed set of primitive shapes.
#[derive(Debug, Clone)]
pub enum Shape {
    /// An infinite plane.
    Plane(Plane),
    /// A sphere.
    Sphere(Sphere),
    /// An infinite tube around an axis.
    Tube(Tube),
    /// A capped tube of finite height.
    Cylinder(Cylinder),
    /// A convex planar polygon.
    Polygon(Polygon),
    /// A triangle.
    Triangle(Triangle),
}

impl Shape {
    /// Outward unit normal at a point on the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is undefined at `point`.
    pub fn normal(&self, point: &Point3) -> Result<Vector> {
        match self {
            Shape::Plane(s) => Ok(*s.plane_normal()),
            Shape::Sphere(s) => s.normal(point),
            Shape::Tube(s) => s.normal(point),
            Shape::Cylinder(s) => s.normal(point),
            Shape::Polygon(s) => Ok(*s.plane().plane_normal()),
            Shape::Triangle(s) => Ok(*s.polygon().plane().plane_normal()),
        }
    }

    /// Intersection points with `ray`, ordered by distance along it.
    ///
    /// Returns `None` when the ray has no proper hit. A tangent contact is
    /// not a hit, and `Some` never holds an empty list.
    #[must_use]
    pub fn intersections(&self, ray: &Ray) -> Option<Vec<Point3>> {
        let ts: Vec<f64> = match self {
            Shape::Plane(s) => s.intersect_t(ray).into_iter().collect(),
            Shape::Sphere(s) => s.intersect_ts(ray),
            Shape::Tube(s) => s.intersect_ts(ray),
            Shape::Cylinder(s) => s.intersect_ts(ray),
            Shape::Polygon(s) => s.intersect_t(ray).into_iter().collect(),
            Shape::Triangle(s) => s.polygon().intersect_t(ray).into_iter().collect(),
        };
        points_along(ray, &ts)
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Plane, Sphere, Tube, Cylinder, Polygon, Triangle);

/// A shape placed in a scene, with its emission and material.
#[derive(Debug, Clone)]
pub struct Geometry {
    shape: Shape,
    emission: Color,
    material: Material,
}

impl Geometry {
    /// Wraps a shape with black emission and the default material.
    #[must_use]
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            emission: Color::black(),
            material: Material::default(),
        }
    }

    /// Sets the emission color.
    #[must_use]
    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    /// Sets the material.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Returns the shape.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the emission color.
    #[must_use]
    pub fn emission(&self) -> Color {
        self.emission
    }

    /// Returns the material.
    #[must_use]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Outward unit normal at a point on the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is undefined at `point`.
    pub fn normal(&self, point: &Point3) -> Result<Vector> {
        self.shape.normal(point)
    }
}

/// An intersection point tagged with the geometry that produced it.
#[derive(Debug, Clone, Copy)]
pub struct GeoPoint<'a> {
    /// The geometry that was hit.
    pub geometry: &'a Geometry,
    /// The hit point.
    pub point: Point3,
}

impl<'a> GeoPoint<'a> {
    /// Creates a new tagged point.
    #[must_use]
    pub fn new(geometry: &'a Geometry, point: Point3) -> Self {
        Self { geometry, point }
    }
}

impl PartialEq for GeoPoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.geometry, other.geometry) && self.point == other.point
    }
}

/// Anything a ray can be intersected with.
pub trait Intersectable {
    /// Intersections with `ray`, each tagged with its owning geometry.
    ///
    /// `None` means the ray misses; `Some` is never empty.
    fn find_geo_intersections(&self, ray: &Ray) -> Option<Vec<GeoPoint<'_>>>;

    /// Intersection points with `ray`, without their owners.
    fn find_intersections(&self, ray: &Ray) -> Option<Vec<Point3>> {
        self.find_geo_intersections(ray)
            .map(|hits| hits.into_iter().map(|gp| gp.point).collect())
    }
}

impl Intersectable for Geometry {
    fn find_geo_intersections(&self, ray: &Ray) -> Option<Vec<GeoPoint<'_>>> {
        self.shape
            .intersections(ray)
            .map(|points| points.into_iter().map(|p| GeoPoint::new(self, p)).collect())
    }
}

/// Keeps the strictly positive parameters, sorts them and evaluates the ray.
fn points_along(ray: &Ray, ts: &[f64]) -> Option<Vec<Point3>> {
    let mut ts: Vec<f64> = ts.iter().copied().filter(|&t| align_zero(t) > 0.0).collect();
    if ts.is_empty() {
        return None;
    }
    ts.sort_by(f64::total_cmp);
    Some(ts.into_iter().map(|t| ray.point_at(t)).collect())
}

/// Distinct real roots of `a*t^2 + b*t + c = 0`, in ascending order when `a > 0`.
///
/// A double root (tangent contact) yields nothing.
fn distinct_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if is_zero(a) {
        return Vec::new();
    }
    let disc = align_zero(b * b - 4.0 * a * c);
    if disc <= 0.0 {
        return Vec::new();
    }
    let disc = disc.sqrt();
    vec![(-b - disc) / (2.0 * a), (-b + disc) / (2.0 * a)]
}
