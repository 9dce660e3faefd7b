use crate::angle::{is_acute, to_degrees, to_radians};
use crate::error::{Leg, SolveError};
use crate::model::{Field, TriangleInputs, TriangleOutputs};

/// Compute the two missing quantities from the two supplied ones.
///
/// Expects exactly two slots to be filled (see `classify`); any other
/// pattern yields [`SolveError::InvalidCombination`].
pub fn solve(inputs: &TriangleInputs) -> Result<TriangleOutputs, SolveError> {
    use Field::{Adjacent, Angle, Hypotenuse, Opposite};

    let out = match (
        inputs.angle,
        inputs.opposite,
        inputs.adjacent,
        inputs.hypotenuse,
    ) {
        (Some(angle), None, None, Some(hyp)) => {
            let rad = acute_radians(angle)?;
            let hyp = side(Hypotenuse, hyp)?;
            TriangleOutputs::pair((Opposite, hyp * rad.sin()), (Adjacent, hyp * rad.cos()))
        }
        (Some(angle), Some(opp), None, None) => {
            let rad = acute_radians(angle)?;
            let opp = side(Opposite, opp)?;
            TriangleOutputs::pair((Adjacent, opp / rad.tan()), (Hypotenuse, opp / rad.sin()))
        }
        (Some(angle), None, Some(adj), None) => {
            let rad = acute_radians(angle)?;
            let adj = side(Adjacent, adj)?;
            TriangleOutputs::pair((Opposite, adj * rad.tan()), (Hypotenuse, adj / rad.cos()))
        }
        (None, Some(opp), Some(adj), None) => {
            let opp = side(Opposite, opp)?;
            let adj = side(Adjacent, adj)?;
            TriangleOutputs::pair(
                (Hypotenuse, opp.hypot(adj)),
                (Angle, to_degrees((opp / adj).atan())),
            )
        }
        (None, Some(opp), None, Some(hyp)) => {
            let opp = side(Opposite, opp)?;
            let hyp = side(Hypotenuse, hyp)?;
            if opp > hyp {
                return Err(SolveError::LegExceedsHypotenuse { leg: Leg::Opposite });
            }
            TriangleOutputs::pair(
                (Adjacent, leg_from(hyp, opp)),
                (Angle, to_degrees((opp / hyp).asin())),
            )
        }
        (None, None, Some(adj), Some(hyp)) => {
            let adj = side(Adjacent, adj)?;
            let hyp = side(Hypotenuse, hyp)?;
            if adj > hyp {
                return Err(SolveError::LegExceedsHypotenuse { leg: Leg::Adjacent });
            }
            TriangleOutputs::pair(
                (Opposite, leg_from(hyp, adj)),
                (Angle, to_degrees((adj / hyp).acos())),
            )
        }
        _ => return Err(SolveError::InvalidCombination),
    };
    Ok(out)
}

fn acute_radians(angle: f64) -> Result<f64, SolveError> {
    if is_acute(angle) {
        Ok(to_radians(angle))
    } else {
        Err(SolveError::InvalidAngleRange { angle })
    }
}

/// Remaining leg from the hypotenuse and one leg. Factored so that sides near
/// `f64::MAX` do not overflow when squared.
fn leg_from(hyp: f64, leg: f64) -> f64 {
    ((hyp - leg) * (hyp + leg)).sqrt()
}

fn side(field: Field, value: f64) -> Result<f64, SolveError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SolveError::NonPositiveSide { field })
    }
}
