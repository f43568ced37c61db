use crate::index::Axis;

/// Error type for geohash-bits operations.
#[derive(Debug, PartialEq)]
pub enum GeoHashError {
    /// The step is outside the valid range (1-32).
    InvalidStep(u8),
    /// A range has `min > max` or a NaN bound.
    InvalidRange { min: f64, max: f64 },
    /// A direction name or discriminant was not recognised.
    InvalidDirection(String),
    /// A quadrant name was not recognised.
    InvalidQuadrant(String),
    /// A code carries bits above its `2 * step` window.
    InvalidCode { bits: u64, step: u8 },
    /// A required input was never supplied.
    MissingArgument(&'static str),
    /// A coordinate lies outside the range of its axis.
    OutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Coordinate projection failed (WGS84 to Web Mercator).
    ProjectionError(String),
    /// A bounds configuration could not be parsed.
    ConfigError(String),
}

/// Coarse classification of a [`GeoHashError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    Projection,
    Config,
}

impl GeoHashError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeoHashError::InvalidStep(_)
            | GeoHashError::InvalidRange { .. }
            | GeoHashError::InvalidDirection(_)
            | GeoHashError::InvalidQuadrant(_)
            | GeoHashError::InvalidCode { .. }
            | GeoHashError::MissingArgument(_) => ErrorKind::InvalidArgument,
            GeoHashError::OutOfRange { .. } => ErrorKind::OutOfRange,
            GeoHashError::ProjectionError(_) => ErrorKind::Projection,
            GeoHashError::ConfigError(_) => ErrorKind::Config,
        }
    }
}

impl std::fmt::Display for GeoHashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoHashError::InvalidStep(s) => write!(f, "Invalid step: {}", s),
            GeoHashError::InvalidRange { min, max } => {
                write!(f, "Invalid range: [{}, {}]", min, max)
            }
            GeoHashError::InvalidDirection(d) => write!(f, "Invalid direction: {}", d),
            GeoHashError::InvalidQuadrant(q) => write!(f, "Invalid quadrant: {}", q),
            GeoHashError::InvalidCode { bits, step } => {
                write!(f, "Invalid code: {:#x} has bits above step {}", bits, step)
            }
            GeoHashError::MissingArgument(name) => write!(f, "Missing argument: {}", name),
            GeoHashError::OutOfRange {
                axis,
                value,
                min,
                max,
            } => write!(
                f,
                "{} {} out of range [{}, {}]",
                axis, value, min, max
            ),
            GeoHashError::ProjectionError(msg) => write!(f, "Projection error: {}", msg),
            GeoHashError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for GeoHashError {}
