//! Degree/radian conversion. The solver works in radians internally and only
//! crosses into degrees at its inputs and outputs.

use std::f64::consts::PI;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// True for angles strictly between 0 and 90 degrees. NaN is rejected.
pub fn is_acute(degrees: f64) -> bool {
    degrees > 0.0 && degrees < 90.0
}
