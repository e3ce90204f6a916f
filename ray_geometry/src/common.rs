/// Tolerance shared by every near-zero test in the crate.
/// Cap/side classification on cylinders and the ray parameter cut-off
/// of every intersection routine are functions of this value.
pub const EPSILON: f64 = 1e-10;

/// Returns true if the value is within `EPSILON` of zero.
pub fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

pub fn equal(a: f64, b: f64) -> bool {
    is_zero(a - b)
}
