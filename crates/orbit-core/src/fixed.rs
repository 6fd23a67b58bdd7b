// Fixed-point conversion for values crossing the host boundary

/// Number of fixed-point units per real unit
pub const SCALE: f64 = 10000.0;

/// Decode a fixed-point integer into the engine's working precision
pub fn from_fixed(value: i32) -> f32 {
    (f64::from(value) / SCALE) as f32
}

/// Encode a real value as a fixed-point integer, truncating toward zero.
///
/// The one exception is a value that is exactly the decoded form of a step,
/// which encodes back to that step even when its `f32` sits just below it.
/// This keeps `to_fixed(from_fixed(v)) == v` for every `v` the working
/// precision can resolve.
pub fn to_fixed(value: f32) -> i32 {
    let scaled = f64::from(value) * SCALE;
    let nearest = scaled.round() as i32;
    if from_fixed(nearest) == value {
        nearest
    } else {
        scaled.trunc() as i32
    }
}
