use thiserror::Error;

/// Top-level error type for the Lumis shading core.
#[derive(Debug, Error)]
pub enum LumisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error(transparent)]
    Light(#[from] LightError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Errors related to geometric construction and queries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("vectors cannot be scaled by zero")]
    ZeroScale,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("normal is undefined: {0}")]
    UndefinedNormal(String),
}

/// Errors related to material construction.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to light source construction.
#[derive(Debug, Error)]
pub enum LightError {
    #[error("invalid light parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors related to tracer configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid tracer settings: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`LumisError`].
pub type Result<T> = std::result::Result<T, LumisError>;
