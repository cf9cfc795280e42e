//! Per-pixel layer evaluation and blending.
//!
//! A [`Scene`] is an ordered list of [`Layer`]s drawn back to front. Each layer
//! turns its distance into a coverage value over a one-sided antialias band and
//! blends its color into an 8-bit RGB pixel.

use crate::{
    config::GraphConfig,
    foundation::{
        core::{Point, Rgb},
        error::GraphResult,
        math::{clamp01, lerp, smoothstep, u8_to_unit, unit_to_u8},
    },
    mapper::uv_to_math,
    sdf::{AxisGrid, Segment, distance_to_point},
    shape::PointSets,
    transform::ObliqueScale,
};

pub type Rgb8 = [u8; 3];

pub const WHITE: Rgb8 = [255, 255, 255];

pub const AXIS_COLOR: Rgb = Rgb::new(0.1, 0.1, 0.1);
pub const SCALED_VECTOR_COLOR: Rgb = Rgb::new(0.1, 0.9, 0.1);
pub const UNSCALED_VECTOR_COLOR: Rgb = Rgb::new(0.1, 0.5, 0.1);
pub const TRANSFORMED_POINTS_COLOR: Rgb = Rgb::new(0.1, 0.1, 0.9);
pub const ORIGINAL_POINTS_COLOR: Rgb = Rgb::new(0.9, 0.1, 0.1);

pub const AXIS_STROKE_BIAS: f64 = 0.0015;
pub const VECTOR_STROKE_BIAS: f64 = 0.001;
pub const POINT_STROKE_BIAS: f64 = 0.0045;

/// Coverage for a stroke distance: 1 at or inside the stroke edge, 0 at or
/// beyond `antialias` outside it.
#[inline]
pub fn coverage(dist: f64, antialias: f64) -> f64 {
    smoothstep(antialias, 0.0, dist)
}

/// `dest = lerp(dest, color, coverage)` per channel. Non-positive coverage
/// leaves `dest` untouched.
pub fn alpha_blend(dest: &mut Rgb8, color: Rgb, coverage: f64) {
    if coverage <= 0.0 {
        return;
    }
    for (d, c) in dest.iter_mut().zip(color.channels()) {
        *d = unit_to_u8(clamp01(lerp(u8_to_unit(*d), c, coverage)));
    }
}

#[derive(Clone, Debug)]
pub enum LayerGeometry<'a> {
    AxisGrid(AxisGrid),
    Segment(Segment),
    Points(&'a [Point]),
}

impl LayerGeometry<'_> {
    /// Raw plane-unit distance. An empty point set is infinitely far away.
    pub fn distance(&self, coord: Point) -> f64 {
        match self {
            Self::AxisGrid(grid) => grid.distance(coord),
            Self::Segment(seg) => seg.distance(coord),
            Self::Points(points) => points
                .iter()
                .map(|&p| distance_to_point(coord, p))
                .fold(f64::INFINITY, f64::min),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Layer<'a> {
    pub name: &'static str,
    pub color: Rgb,
    /// Subtracted from the scaled distance to thicken the stroke.
    pub stroke_bias: f64,
    pub geometry: LayerGeometry<'a>,
}

impl Layer<'_> {
    /// Coverage of this layer at a plane coordinate.
    pub fn coverage_at(&self, coord: Point, graph_scale: f64, antialias: f64) -> f64 {
        let dist = self.geometry.distance(coord) * graph_scale - self.stroke_bias;
        coverage(dist, antialias)
    }
}

/// Everything a pixel evaluation reads. Immutable once built, so it can be
/// shared across worker threads.
#[derive(Clone, Debug)]
pub struct Scene<'a> {
    graph_scale: f64,
    antialias: f64,
    layers: Vec<Layer<'a>>,
}

impl<'a> Scene<'a> {
    pub fn from_layers(config: &GraphConfig, layers: Vec<Layer<'a>>) -> Self {
        Self {
            graph_scale: config.graph_scale,
            antialias: config.antialias_size(),
            layers,
        }
    }

    /// The standard five-layer picture: axes, scaled vector, unscaled vector,
    /// transformed points, original points.
    pub fn new(config: &GraphConfig, scale: &ObliqueScale, points: &'a PointSets) -> Self {
        let unscaled = scale.dir().to_point();
        let scaled = (scale.dir() * scale.amount()).to_point();

        let layers = vec![
            Layer {
                name: "axes",
                color: AXIS_COLOR,
                stroke_bias: AXIS_STROKE_BIAS,
                geometry: LayerGeometry::AxisGrid(AxisGrid::new(config)),
            },
            Layer {
                name: "scaled-vector",
                color: SCALED_VECTOR_COLOR,
                stroke_bias: VECTOR_STROKE_BIAS,
                geometry: LayerGeometry::Segment(Segment::new(Point::ORIGIN, scaled)),
            },
            Layer {
                name: "unscaled-vector",
                color: UNSCALED_VECTOR_COLOR,
                stroke_bias: VECTOR_STROKE_BIAS,
                geometry: LayerGeometry::Segment(Segment::new(Point::ORIGIN, unscaled)),
            },
            Layer {
                name: "transformed-points",
                color: TRANSFORMED_POINTS_COLOR,
                stroke_bias: POINT_STROKE_BIAS,
                geometry: LayerGeometry::Points(&points.transformed),
            },
            Layer {
                name: "original-points",
                color: ORIGINAL_POINTS_COLOR,
                stroke_bias: POINT_STROKE_BIAS,
                geometry: LayerGeometry::Points(&points.original),
            },
        ];
        Self::from_layers(config, layers)
    }

    pub fn layers(&self) -> &[Layer<'a>] {
        &self.layers
    }

    pub fn pixel_color(&self, uv: Point) -> Rgb8 {
        let coord = uv_to_math(uv, self.graph_scale);
        let mut rgb = WHITE;
        for layer in &self.layers {
            let cov = layer.coverage_at(coord, self.graph_scale, self.antialias);
            alpha_blend(&mut rgb, layer.color, cov);
        }
        rgb
    }
}

/// One-shot evaluation of the standard scene at `uv`.
pub fn compute_pixel_color(
    config: &GraphConfig,
    points: &PointSets,
    uv: Point,
) -> GraphResult<Rgb8> {
    let scale = ObliqueScale::from_config(config)?;
    Ok(Scene::new(config, &scale, points).pixel_color(uv))
}

#[cfg(test)]
#[path = "../tests/unit/composite/composite.rs"]
mod tests;
