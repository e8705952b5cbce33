pub mod ray;
pub mod vector;

pub use ray::Ray;
pub use vector::Vector;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Raw 3D coordinate triple. Unlike [`Vector`], it may be zero.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` if `value` is within [`TOLERANCE`] of zero.
#[must_use]
pub fn is_zero(value: f64) -> bool {
    value.abs() < TOLERANCE
}

/// Snaps values within [`TOLERANCE`] of zero to exactly zero.
#[must_use]
pub fn align_zero(value: f64) -> f64 {
    if is_zero(value) {
        0.0
    } else {
        value
    }
}
