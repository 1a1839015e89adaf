/// Return `v` when finite, `fallback` otherwise.
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Round to two decimal places.
pub(crate) fn round2(v: f64) -> f64 {
    let r = (v * 100.0).round() / 100.0;
    // -0.0 prints oddly in plans; normalize it.
    if r == 0.0 { 0.0 } else { r }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Divide, returning `fallback` when the result is not finite.
pub(crate) fn safe_div(num: f64, den: f64, fallback: f64) -> f64 {
    if den == 0.0 {
        return fallback;
    }
    finite_or(num / den, fallback)
}
