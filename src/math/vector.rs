use std::fmt;
use std::ops::Neg;

use crate::error::{GeometryError, Result};

use super::{Point3, Vector3};

/// A non-zero displacement or direction in 3D space.
///
/// Every `Vector` ever constructed, including intermediate results of its
/// arithmetic, is guaranteed not to be the zero triple. Operations whose
/// result could collapse to zero are therefore fallible.
///
/// Equality is exact per component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(Vector3);

impl Vector {
    /// Creates a vector from its components.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if all components are zero.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::from_raw(Vector3::new(x, y, z))
    }

    /// Wraps a raw coordinate triple.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the triple is zero.
    pub fn from_raw(raw: Vector3) -> Result<Self> {
        if raw == Vector3::zeros() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self(raw))
    }

    /// Creates the vector pointing from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the two points coincide.
    pub fn between(from: &Point3, to: &Point3) -> Result<Self> {
        Self::from_raw(to - from)
    }

    /// Returns the underlying coordinate triple.
    #[must_use]
    pub fn raw(&self) -> &Vector3 {
        &self.0
    }

    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Adds another vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `other` is the negation of `self`.
    pub fn add(&self, other: &Vector) -> Result<Self> {
        Self::from_raw(self.0 + other.0)
    }

    /// Subtracts another vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the two vectors are equal.
    pub fn subtract(&self, other: &Vector) -> Result<Self> {
        Self::from_raw(self.0 - other.0)
    }

    /// Scales the vector by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroScale`] if `factor` is zero, or
    /// [`GeometryError::ZeroVector`] if the product underflows to zero.
    pub fn scale(&self, factor: f64) -> Result<Self> {
        if factor == 0.0 {
            return Err(GeometryError::ZeroScale.into());
        }
        Self::from_raw(self.0 * factor)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.0.dot(&other.0)
    }

    /// Cross product.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the vectors are parallel.
    pub fn cross(&self, other: &Vector) -> Result<Self> {
        Self::from_raw(self.0.cross(&other.0))
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.0.norm()
    }

    /// Returns the unit vector with the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if a component is not finite.
    pub fn normalize(&self) -> Result<Self> {
        let max = self.0.amax();
        if !max.is_finite() {
            return Err(
                GeometryError::Degenerate("vector has a non-finite component".into()).into(),
            );
        }
        // prescale so the norm neither overflows nor underflows
        let scaled = self.0 / max;
        Self::from_raw(scaled / scaled.norm())
    }

    /// Returns an arbitrary unit vector orthogonal to this one.
    ///
    /// The construction divides by the component of largest magnitude, which
    /// is never zero for a valid vector.
    ///
    /// # Errors
    ///
    /// Returns an error only if normalization of the candidate fails.
    pub fn find_orthogonal(&self) -> Result<Self> {
        let (a, b, c) = (self.x(), self.y(), self.z());
        let candidate = match self.0.iamax() {
            0 => Vector3::new(-(b + c) / a, 1.0, 1.0),
            1 => Vector3::new(1.0, -(a + c) / b, 1.0),
            _ => Vector3::new(1.0, 1.0, -(a + b) / c),
        };
        Self::from_raw(candidate)?.normalize()
    }

    /// Returns `point` translated by this vector.
    #[must_use]
    pub fn translate(&self, point: &Point3) -> Point3 {
        point + self.0
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl TryFrom<Vector3> for Vector {
    type Error = crate::error::LumisError;

    fn try_from(raw: Vector3) -> Result<Self> {
        Self::from_raw(raw)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LumisError;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64, z: f64) -> Vector {
        Vector::new(x, y, z).unwrap()
    }

    #[test]
    fn zero_vector_is_rejected() {
        let r = Vector::new(0.0, 0.0, 0.0);
        assert!(matches!(
            r,
            Err(LumisError::Geometry(GeometryError::ZeroVector))
        ));
    }

    #[test]
    fn adding_the_negation_fails() {
        let a = v(1.0, 2.0, 3.0);
        assert!(a.add(&-a).is_err());
        assert!(a.subtract(&a).is_err());
    }

    #[test]
    fn add_and_subtract() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(-2.0, -4.0, -6.0);
        assert_eq!(a.add(&b).unwrap(), v(-1.0, -2.0, -3.0));
        assert_eq!(a.subtract(&b).unwrap(), v(3.0, 6.0, 9.0));
    }

    #[test]
    fn scale_by_zero_fails() {
        let a = v(1.0, 2.0, 3.0);
        assert!(matches!(
            a.scale(0.0),
            Err(LumisError::Geometry(GeometryError::ZeroScale))
        ));
        assert_eq!(a.scale(-2.0).unwrap(), v(-2.0, -4.0, -6.0));
    }

    #[test]
    fn dot_is_commutative() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(-2.0, 0.5, 4.0);
        assert_relative_eq!(a.dot(&b), b.dot(&a));
        assert_relative_eq!(a.dot(&b), 11.0);
    }

    #[test]
    fn cross_is_anti_commutative() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(0.0, 3.0, -2.0);
        let ab = a.cross(&b).unwrap();
        let ba = b.cross(&a).unwrap();
        assert_eq!(ab, -ba);
        assert_relative_eq!(ab.dot(&a), 0.0);
        assert_relative_eq!(ab.dot(&b), 0.0);
    }

    #[test]
    fn cross_of_parallel_vectors_fails() {
        let a = v(1.0, 2.0, 3.0);
        assert!(a.cross(&v(-2.0, -4.0, -6.0)).is_err());
    }

    #[test]
    fn lengths() {
        let a = v(1.0, 2.0, 2.0);
        assert_relative_eq!(a.length_squared(), 9.0);
        assert_relative_eq!(a.length(), 3.0);
    }

    #[test]
    fn normalize_yields_unit_length() {
        for a in [
            v(1.0, 2.0, 3.0),
            v(-1e-3, 0.0, 4e-3),
            v(1e6, -1e6, 3.0),
            v(0.0, 0.0, -7.0),
        ] {
            let u = a.normalize().unwrap();
            assert_relative_eq!(u.length(), 1.0, epsilon = 1e-12);
            assert!(u.dot(&a) > 0.0);
        }
    }

    #[test]
    fn scale_that_underflows_fails() {
        let tiny = v(1e-300, 0.0, 0.0).scale(1e-300);
        assert!(tiny.is_err());
    }

    #[test]
    fn find_orthogonal_for_each_branch() {
        for a in [v(1.0, 2.0, 3.0), v(1.0, 2.0, 0.0), v(5.0, 0.0, 0.0)] {
            let o = a.find_orthogonal().unwrap();
            assert_relative_eq!(o.dot(&a), 0.0, epsilon = 1e-12);
            assert_relative_eq!(o.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn find_orthogonal_with_tiny_components() {
        for a in [v(0.0, 1e-11, 1e-11), v(1e-12, 0.0, 0.0), v(1e-300, 3e-300, 0.0)] {
            let o = a.find_orthogonal().unwrap();
            assert!(o.x().is_finite() && o.y().is_finite() && o.z().is_finite());
            assert_relative_eq!(o.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(o.dot(&a.normalize().unwrap()), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalize_rejects_infinite_components() {
        assert!(v(f64::INFINITY, 0.0, 0.0).normalize().is_err());
    }

    #[test]
    fn normalize_extreme_magnitudes() {
        assert_eq!(v(1e200, 0.0, 0.0).normalize().unwrap(), v(1.0, 0.0, 0.0));
        assert_eq!(v(0.0, -1e-320, 0.0).normalize().unwrap(), v(0.0, -1.0, 0.0));
        let u = v(1e200, 1e200, 0.0).normalize().unwrap();
        assert_relative_eq!(u.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(u.x(), std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn between_points() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let q = Point3::new(2.0, 3.0, 4.0);
        assert_eq!(Vector::between(&p, &q).unwrap(), v(1.0, 2.0, 3.0));
        assert!(Vector::between(&p, &p).is_err());
    }
}
