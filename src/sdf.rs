//! Unsigned distance functions for the graph primitives.
//!
//! Distances are in plane units and never negative; only proximity to a
//! boundary is used for shading.

use crate::{
    config::GraphConfig,
    foundation::core::{Point, Vec2},
};

/// Tick half-length divisor for major ticks, relative to `1 / graph_scale`.
const MAJOR_TICK_DIVISOR: f64 = 32.0;
const MINOR_TICK_DIVISOR: f64 = 128.0;

#[inline]
pub fn distance_to_point(coord: Point, point: Point) -> f64 {
    coord.distance(point)
}

/// Distance from `coord` to the closed segment `a..=b`.
///
/// A zero-length segment degrades to [`distance_to_point`] against `a`.
pub fn distance_to_segment(coord: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len = ab.hypot();
    if len == 0.0 {
        return distance_to_point(coord, a);
    }
    let dir = ab / len;
    let t = (coord - a).dot(dir).clamp(0.0, len);
    distance_to_point(coord, a + dir * t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn distance(&self, coord: Point) -> f64 {
        distance_to_segment(coord, self.a, self.b)
    }
}

/// The x/y axis lines plus their tick marks, precomputed from a config.
#[derive(Clone, Debug)]
pub struct AxisGrid {
    ticks: Vec<Segment>,
}

impl AxisGrid {
    pub fn new(config: &GraphConfig) -> Self {
        let bound = config.half_extent();
        let mut ticks = Vec::new();
        push_ticks(
            &mut ticks,
            config.major_tick,
            bound,
            1.0 / (config.graph_scale * MAJOR_TICK_DIVISOR),
        );
        push_ticks(
            &mut ticks,
            config.minor_tick,
            bound,
            1.0 / (config.graph_scale * MINOR_TICK_DIVISOR),
        );
        tracing::debug!(ticks = ticks.len(), "built axis grid");
        Self { ticks }
    }

    pub fn ticks(&self) -> &[Segment] {
        &self.ticks
    }

    pub fn distance(&self, coord: Point) -> f64 {
        let axes = coord.x.abs().min(coord.y.abs());
        self.ticks
            .iter()
            .fold(axes, |dist, tick| dist.min(tick.distance(coord)))
    }
}

/// One-off axis distance; prefer [`AxisGrid`] when evaluating many coordinates.
pub fn distance_to_axis_grid(coord: Point, config: &GraphConfig) -> f64 {
    AxisGrid::new(config).distance(coord)
}

// Walks `spacing, 2*spacing, ...` by accumulation while strictly below `bound`,
// emitting a vertical tick at +-x and a horizontal tick at +-y for each step.
fn push_ticks(out: &mut Vec<Segment>, spacing: f64, bound: f64, half_len: f64) {
    let across = Vec2::new(0.0, half_len);
    let along = Vec2::new(half_len, 0.0);
    let mut tick = spacing;
    while tick < bound {
        for x in [tick, -tick] {
            let c = Point::new(x, 0.0);
            out.push(Segment::new(c - across, c + across));
        }
        for y in [tick, -tick] {
            let c = Point::new(0.0, y);
            out.push(Segment::new(c - along, c + along));
        }
        tick += spacing;
    }
}

#[cfg(test)]
#[path = "../tests/unit/sdf/sdf.rs"]
mod tests;
