use std::fmt;

/// Errors surfaced by shape construction and vertex generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A count parameter is below the smallest meaningful value.
    InvalidParameter {
        name: &'static str,
        value: usize,
        min: usize,
    },
}

impl ShapeError {
    pub(crate) fn too_small(name: &'static str, value: usize, min: usize) -> Self {
        tracing::warn!(name, value, min, "rejecting shape parameter");
        Self::InvalidParameter { name, value, min }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidParameter { name, value, min } => {
                write!(f, "invalid {name}: {value} (needs ≥{min})")
            }
        }
    }
}

impl std::error::Error for ShapeError {}
