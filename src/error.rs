use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum GeoPointIndexError {
    /// A latitude or longitude was NaN or outside its valid range.
    #[error("{kind} out of range: {value}")]
    InvalidCoordinate {
        /// Which coordinate was rejected.
        kind: CoordinateKind,
        /// The offending value.
        value: f64,
    },

    /// An ordinate was requested for an axis outside the three spatial
    /// dimensions. Dimension indices are always derived from a modulo-3
    /// counter, so hitting this indicates a bug in the traversal logic
    /// rather than bad user input.
    #[error("Dimension index out of range: {0}")]
    InvalidDimension(usize),
}

/// The coordinate axis named by an [`GeoPointIndexError::InvalidCoordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    Latitude,
    Longitude,
}

impl std::fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latitude => write!(f, "Latitude"),
            Self::Longitude => write!(f, "Longitude"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoPointIndexError>;
