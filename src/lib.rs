pub mod color;
pub mod error;
pub mod geometry;
pub mod lighting;
pub mod material;
pub mod math;
pub mod renderer;
pub mod scene;

pub use error::{LumisError, Result};
