//! Anisotropic scale along an arbitrary oblique axis.

use crate::{
    config::GraphConfig,
    foundation::{
        core::{Affine, Point, Vec2},
        error::{GraphError, GraphResult},
    },
};

/// Scales the component of a point along `dir` by `amount` and keeps the
/// perpendicular component. In the basis `{dir, perp}` this is `diag(amount, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObliqueScale {
    dir: Vec2,
    perp: Vec2,
    amount: f64,
}

impl ObliqueScale {
    pub fn new(dir: Vec2, amount: f64) -> GraphResult<Self> {
        let len = dir.hypot();
        if !len.is_finite() || len == 0.0 {
            return Err(GraphError::validation(
                "oblique scale direction must be finite and non-zero",
            ));
        }
        let dir = dir / len;
        Ok(Self {
            dir,
            perp: Vec2::new(-dir.y, dir.x),
            amount,
        })
    }

    pub fn from_config(config: &GraphConfig) -> GraphResult<Self> {
        Self::new(config.scale_dir, config.scale_amount)
    }

    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    pub fn perp(&self) -> Vec2 {
        self.perp
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        let v = p.to_vec2();
        let along = self.dir.dot(v) * self.amount;
        let across = self.perp.dot(v);
        (self.dir * along + self.perp * across).to_point()
    }

    /// The same mapping as a `kurbo` matrix: `D * diag(amount, 1) * D^T` with
    /// `D = [dir perp]`.
    pub fn to_affine(&self) -> Affine {
        let (d, n, s) = (self.dir, self.perp, self.amount);
        let xx = s * d.x * d.x + n.x * n.x;
        let xy = s * d.x * d.y + n.x * n.y;
        let yy = s * d.y * d.y + n.y * n.y;
        Affine::new([xx, xy, xy, yy, 0.0, 0.0])
    }
}

#[cfg(test)]
#[path = "../tests/unit/transform/oblique.rs"]
mod tests;
