mod settings;
mod simple;

pub use settings::{TracerSettings, MAX_CALC_COLOR_LEVEL, MIN_CALC_COLOR_K};
pub use simple::SimpleRayTracer;

use crate::color::Color;
use crate::error::Result;
use crate::math::Ray;

/// Computes the color seen along a ray.
///
/// Implementations only read their scene, so one tracer can serve rays from
/// many threads at once.
pub trait RayTracer {
    /// Color arriving at the ray origin from along its direction.
    ///
    /// # Errors
    ///
    /// Returns an error if shading hits an undefined operation, such as a
    /// surface normal requested on a tube's axis.
    fn trace_ray(&self, ray: &Ray) -> Result<Color>;
}
