//! Right-triangle solving: supply two of angle, opposite, adjacent and
//! hypotenuse, get the other two back.

pub mod angle;
mod classify;
mod error;
mod format;
pub mod i18n;
mod model;
mod solve;

pub use classify::{REQUIRED_KNOWN, classify, require_two};
pub use error::{Leg, SolveError};
pub use format::{DISPLAY_DECIMALS, format_display, parse_field};
pub use i18n::{Lang, Message, localize};
pub use model::{Derived, Field, TriangleInputs, TriangleOutputs};
pub use solve::solve;

/// Count gate followed by the solver. The solver never sees a request that
/// does not carry exactly two values.
pub fn calculate(inputs: &TriangleInputs) -> Result<TriangleOutputs, SolveError> {
    require_two(classify(inputs))?;
    solve(inputs)
}
