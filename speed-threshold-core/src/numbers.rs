//! Numeric conversion helpers centralizing the engine's float/integer casts.

use num_traits::cast::cast;

/// Ceil a f64 into an i64, returning `None` for non-finite or out-of-range values.
#[must_use]
pub fn ceil_f64_to_i64(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    cast::<f64, i64>(value.ceil())
}

/// Convert i64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    cast::<i64, f64>(value).unwrap_or(0.0)
}

/// Compare two floats within a relative tolerance suitable for advance math.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= f64::EPSILON * 16.0 * scale
}
