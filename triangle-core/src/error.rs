use thiserror::Error;

use crate::model::Field;

/// Which leg was compared against the hypotenuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    Opposite,
    Adjacent,
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Leg::Opposite => f.write_str("opposite"),
            Leg::Adjacent => f.write_str("adjacent"),
        }
    }
}

/// Reasons a solve request can fail. None of these are transient.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SolveError {
    #[error("expected exactly 2 known values, found {found}")]
    WrongInputCount { found: usize },

    #[error("angle {angle} is outside the open range (0, 90) degrees")]
    InvalidAngleRange { angle: f64 },

    #[error("{leg} leg is longer than the hypotenuse")]
    LegExceedsHypotenuse { leg: Leg },

    #[error("{field} must be a positive length")]
    NonPositiveSide { field: Field },

    #[error("invalid combination of known values")]
    InvalidCombination,
}

impl SolveError {
    /// Raised by the count gate rather than by the solver itself.
    pub fn is_count_error(&self) -> bool {
        matches!(self, SolveError::WrongInputCount { .. })
    }
}
