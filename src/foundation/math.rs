/// Clamp scalar value to normalized range `[0, 1]`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Hermite smoothstep. `edge0 > edge1` is allowed and yields a falling ramp.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = clamp01((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// Scale a unit value to a byte, truncating toward zero.
#[inline]
pub fn unit_to_u8(x: f64) -> u8 {
    (clamp01(x) * 255.0) as u8
}

#[inline]
pub fn u8_to_unit(x: u8) -> f64 {
    f64::from(x) / 255.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
