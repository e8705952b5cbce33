use slotmap::SlotMap;

use crate::math::Ray;

use super::{GeoPoint, Geometry, Intersectable};

slotmap::new_key_type! {
    /// Stable handle of a geometry inside a [`Geometries`] collection.
    pub struct GeometryId;
}

/// A collection of geometries queried as one.
///
/// Intersection fans the ray out to every member in slot order and merges
/// the results. When two members produce equidistant hits, consumers that
/// pick the first minimum favor the earlier slot.
#[derive(Debug, Default, Clone)]
pub struct Geometries {
    items: SlotMap<GeometryId, Geometry>,
}

impl Geometries {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a geometry and returns its handle.
    pub fn add(&mut self, geometry: Geometry) -> GeometryId {
        self.items.insert(geometry)
    }

    /// Removes a geometry, returning it if it was present.
    pub fn remove(&mut self, id: GeometryId) -> Option<Geometry> {
        self.items.remove(id)
    }

    /// Returns the geometry for `id`, if present.
    #[must_use]
    pub fn get(&self, id: GeometryId) -> Option<&Geometry> {
        self.items.get(id)
    }

    /// Number of geometries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no geometries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over handles and geometries.
    pub fn iter(&self) -> impl Iterator<Item = (GeometryId, &Geometry)> {
        self.items.iter()
    }
}

impl FromIterator<Geometry> for Geometries {
    fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
        let mut geometries = Self::new();
        for geometry in iter {
            geometries.add(geometry);
        }
        geometries
    }
}

impl Intersectable for Geometries {
    fn find_geo_intersections(&self, ray: &Ray) -> Option<Vec<GeoPoint<'_>>> {
        let mut result: Option<Vec<GeoPoint<'_>>> = None;
        for geometry in self.items.values() {
            if let Some(hits) = geometry.find_geo_intersections(ray) {
                result.get_or_insert_with(Vec::new).extend(hits);
            }
        }
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Plane, Sphere, Triangle};
    use crate::math::{Point3, Vector};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector {
        Vector::new(x, y, z).unwrap()
    }

    fn scene() -> Geometries {
        [
            Geometry::new(Sphere::new(p(0.0, 0.0, 5.0), 1.0).unwrap()),
            Geometry::new(Plane::new(p(0.0, 0.0, 10.0), v(0.0, 0.0, 1.0)).unwrap()),
            Geometry::new(
                Triangle::new(p(5.0, 5.0, 3.0), p(6.0, 5.0, 3.0), p(5.0, 6.0, 3.0)).unwrap(),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_collection_has_no_hits() {
        let empty = Geometries::new();
        let ray = Ray::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        assert!(empty.is_empty());
        assert!(empty.find_geo_intersections(&ray).is_none());
    }

    #[test]
    fn no_member_hit_is_none() {
        let geometries = scene();
        let ray = Ray::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, -1.0)).unwrap();
        assert!(geometries.find_intersections(&ray).is_none());
    }

    #[test]
    fn hits_are_merged_and_tagged() {
        let geometries = scene();
        let ray = Ray::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        let hits = geometries.find_geo_intersections(&ray).unwrap();
        // two on the sphere, one on the plane
        assert_eq!(hits.len(), 3);

        let (sphere_id, sphere) = geometries.iter().next().unwrap();
        let on_sphere = hits.iter().filter(|gp| std::ptr::eq(gp.geometry, sphere)).count();
        assert_eq!(on_sphere, 2);
        assert!(std::ptr::eq(geometries.get(sphere_id).unwrap(), sphere));

        let closest = ray.find_closest_geo_point(hits).unwrap();
        assert_eq!(closest.point, p(0.0, 0.0, 4.0));
        assert!(std::ptr::eq(closest.geometry, sphere));
    }

    #[test]
    fn equidistant_hits_favor_lower_slot() {
        let mut geometries = Geometries::new();
        let first = geometries.add(Geometry::new(
            Plane::new(p(0.0, 0.0, 2.0), v(0.0, 0.0, 1.0)).unwrap(),
        ));
        let second = geometries.add(Geometry::new(
            Plane::new(p(1.0, 1.0, 2.0), v(0.0, 0.0, -1.0)).unwrap(),
        ));

        let ray = Ray::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        let hits = geometries.find_geo_intersections(&ray).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].point, hits[1].point);

        let closest = ray.find_closest_geo_point(hits).unwrap();
        assert!(std::ptr::eq(closest.geometry, geometries.get(first).unwrap()));
        assert!(!std::ptr::eq(closest.geometry, geometries.get(second).unwrap()));
    }

    #[test]
    fn remove_and_len() {
        let mut geometries = scene();
        assert_eq!(geometries.len(), 3);
        let id = geometries.iter().next().map(|(id, _)| id).unwrap();
        assert!(geometries.remove(id).is_some());
        assert!(geometries.get(id).is_none());
        assert_eq!(geometries.len(), 2);

        let ray = Ray::new(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(geometries.find_intersections(&ray).unwrap().len(), 1);
    }
}
