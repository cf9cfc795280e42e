//! Mapping between normalized image coordinates and the math plane.
//!
//! UV space has its origin at the top-left corner with `v` growing downward; the
//! math plane is centered on the image with `y` growing upward.

use crate::foundation::core::{Point, Vec2};

/// Map a normalized image coordinate into plane units.
#[inline]
pub fn uv_to_math(uv: Point, graph_scale: f64) -> Point {
    let centered = uv - Point::new(0.5, 0.5);
    (Vec2::new(centered.x, -centered.y) / graph_scale).to_point()
}

/// Inverse of [`uv_to_math`].
#[inline]
pub fn math_to_uv(p: Point, graph_scale: f64) -> Point {
    let scaled = p.to_vec2() * graph_scale;
    Point::new(scaled.x + 0.5, 0.5 - scaled.y)
}

/// UV of the center of pixel `(x, y)` in a square image of `size` pixels.
#[inline]
pub fn pixel_center_uv(x: u32, y: u32, size: u32) -> Point {
    let size = f64::from(size);
    Point::new(
        (f64::from(x) + 0.5) / size,
        (f64::from(y) + 0.5) / size,
    )
}

#[cfg(test)]
#[path = "../tests/unit/mapper/mapper.rs"]
mod tests;
