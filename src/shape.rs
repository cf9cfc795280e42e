//! Point-set generators and the original/transformed pair used for a render.

use std::f64::consts::{PI, TAU};

use crate::{
    config::GraphConfig,
    foundation::{core::Point, error::GraphResult},
    transform::ObliqueScale,
};

const STAR_TIPS: usize = 5;
const STAR_OUTER_RADIUS: f64 = 1.0;
const STAR_INNER_RADIUS: f64 = 0.5;

/// Which parametric shape to sample. Only one is active per render.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// `point_count` samples of the unit circle.
    #[default]
    Circle,
    /// Five-pointed star, alternating outer and inner vertices.
    Star,
    /// Corners of the square `[-1, 1]^2`.
    Box,
}

impl ShapeKind {
    pub fn points(self, point_count: usize) -> Vec<Point> {
        match self {
            Self::Circle => (0..point_count)
                .map(|i| {
                    let theta = TAU * (i as f64) / (point_count as f64);
                    Point::new(theta.cos(), theta.sin())
                })
                .collect(),
            Self::Star => (0..STAR_TIPS)
                .flat_map(|i| {
                    let outer = (i as f64) * TAU / (STAR_TIPS as f64) + PI / 2.0;
                    let inner = outer + TAU / (2 * STAR_TIPS) as f64;
                    [
                        polar(STAR_OUTER_RADIUS, outer),
                        polar(STAR_INNER_RADIUS, inner),
                    ]
                })
                .collect(),
            Self::Box => vec![
                Point::new(1.0, 1.0),
                Point::new(1.0, -1.0),
                Point::new(-1.0, -1.0),
                Point::new(-1.0, 1.0),
            ],
        }
    }
}

fn polar(radius: f64, theta: f64) -> Point {
    Point::new(radius * theta.cos(), radius * theta.sin())
}

/// The sampled shape and its image under the oblique scale, index-aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSets {
    pub original: Vec<Point>,
    pub transformed: Vec<Point>,
}

impl PointSets {
    pub fn build(config: &GraphConfig) -> GraphResult<Self> {
        let scale = ObliqueScale::from_config(config)?;
        let original = config.shape.points(config.point_count);
        let transformed = original.iter().map(|&p| scale.apply(p)).collect();
        Ok(Self {
            original,
            transformed,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/shape/shape.rs"]
mod tests;
