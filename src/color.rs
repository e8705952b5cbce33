use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use crate::math::Vector3;

/// Radiance carried along a ray, one non-negative value per channel.
///
/// Values are not clamped from above; mapping to a displayable range is the
/// job of whatever writes the image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(Vector3);

impl Color {
    /// Creates a color. Negative channels are clamped to zero.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self(Vector3::new(r.max(0.0), g.max(0.0), b.max(0.0)))
    }

    /// The zero color.
    #[must_use]
    pub fn black() -> Self {
        Self(Vector3::zeros())
    }

    /// Red channel.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.0.x
    }

    /// Green channel.
    #[must_use]
    pub fn g(&self) -> f64 {
        self.0.y
    }

    /// Blue channel.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.0.z
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.0.x * rhs, self.0.y * rhs, self.0.z * rhs)
    }
}

impl Mul<Factors> for Color {
    type Output = Color;

    fn mul(self, rhs: Factors) -> Self::Output {
        let c = self.0.component_mul(&rhs.0);
        Self::new(c.x, c.y, c.z)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Self {
        iter.fold(Color::black(), Add::add)
    }
}

/// Per-channel coefficient triple.
///
/// Used for material coefficients (kD, kS, kT, kR) and for the attenuation
/// accumulated along a chain of secondary rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factors(Vector3);

impl Factors {
    /// Creates factors from per-channel values.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self(Vector3::new(r, g, b))
    }

    /// The same value on every channel.
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self(Vector3::repeat(value))
    }

    /// All channels one.
    #[must_use]
    pub fn one() -> Self {
        Self::uniform(1.0)
    }

    /// All channels zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(Vector3::zeros())
    }

    /// Red channel.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.0.x
    }

    /// Green channel.
    #[must_use]
    pub fn g(&self) -> f64 {
        self.0.y
    }

    /// Blue channel.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.0.z
    }

    /// Returns `true` if every channel is below `threshold`.
    #[must_use]
    pub fn lower_than(&self, threshold: f64) -> bool {
        self.0.iter().all(|&c| c < threshold)
    }
}

impl Default for Factors {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for Factors {
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}

impl Add for Factors {
    type Output = Factors;

    fn add(self, rhs: Factors) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul for Factors {
    type Output = Factors;

    fn mul(self, rhs: Factors) -> Self::Output {
        Self(self.0.component_mul(&rhs.0))
    }
}

impl Mul<f64> for Factors {
    type Output = Factors;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}
