use crate::error::SolveError;
use crate::model::TriangleInputs;

/// Number of values a request must supply.
pub const REQUIRED_KNOWN: usize = 2;

/// Count how many of the four slots carry a value.
pub fn classify(inputs: &TriangleInputs) -> usize {
    inputs.present().count()
}

/// Gate applied before the solver runs.
pub fn require_two(count: usize) -> Result<(), SolveError> {
    if count == REQUIRED_KNOWN {
        Ok(())
    } else {
        Err(SolveError::WrongInputCount { found: count })
    }
}
