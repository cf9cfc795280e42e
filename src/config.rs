//! Immutable graph configuration shared read-only by every pixel evaluation.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Vec2,
        error::{GraphError, GraphResult},
    },
    shape::ShapeKind,
};

/// All knobs that shape the rendered picture.
///
/// Missing fields in a JSON document fall back to [`GraphConfig::default`], so a
/// config file only needs to list what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Width and height of the square output image, in pixels.
    pub image_size: u32,
    /// Inverse of the plane extent: the image spans `1 / graph_scale` units.
    pub graph_scale: f64,
    /// Spacing of the long tick marks, in plane units.
    pub major_tick: f64,
    /// Spacing of the short tick marks, in plane units.
    pub minor_tick: f64,
    /// Direction of the oblique scale axis. Normalized on use.
    pub scale_dir: Vec2,
    /// Scale factor applied along `scale_dir`.
    pub scale_amount: f64,
    /// Point-set generator.
    pub shape: ShapeKind,
    /// Number of samples for [`ShapeKind::Circle`]; other shapes have a fixed count.
    pub point_count: usize,
}

/// Largest accepted `image_size`, in pixels per side.
pub const MAX_IMAGE_SIZE: u32 = 16_384;

/// Largest number of tick steps per half axis. Beyond this the per-pixel grid
/// walk explodes and additive tick accumulation stops advancing.
pub const MAX_TICK_STEPS: f64 = 4096.0;

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            image_size: 512,
            graph_scale: 1.0 / 8.0,
            major_tick: 1.0,
            minor_tick: 0.25,
            scale_dir: Vec2::new(3.0, 1.0),
            scale_amount: 4.0,
            shape: ShapeKind::Circle,
            point_count: 100,
        }
    }
}

impl GraphConfig {
    /// Reject configurations that would divide by zero or never terminate.
    pub fn validate(&self) -> GraphResult<()> {
        if self.image_size == 0 || self.image_size > MAX_IMAGE_SIZE {
            return Err(GraphError::validation(format!(
                "image_size must be in 1..={MAX_IMAGE_SIZE} (got {})",
                self.image_size
            )));
        }
        positive_finite("graph_scale", self.graph_scale)?;
        positive_finite("major_tick", self.major_tick)?;
        positive_finite("minor_tick", self.minor_tick)?;
        self.tick_steps_bounded("major_tick", self.major_tick)?;
        self.tick_steps_bounded("minor_tick", self.minor_tick)?;

        if !self.scale_dir.is_finite() {
            return Err(GraphError::validation("scale_dir must be finite"));
        }
        if self.scale_dir.hypot() == 0.0 {
            return Err(GraphError::validation("scale_dir must be non-zero"));
        }
        if !self.scale_amount.is_finite() {
            return Err(GraphError::validation("scale_amount must be finite"));
        }
        if self.shape == ShapeKind::Circle && self.point_count == 0 {
            return Err(GraphError::validation(
                "point_count must be > 0 for circle",
            ));
        }
        Ok(())
    }

    fn tick_steps_bounded(&self, name: &str, spacing: f64) -> GraphResult<()> {
        let steps = self.half_extent() / spacing;
        if steps.is_finite() && steps <= MAX_TICK_STEPS {
            Ok(())
        } else {
            Err(GraphError::validation(format!(
                "{name} too small for graph_scale: {steps:.0} ticks per half axis exceeds {MAX_TICK_STEPS}"
            )))
        }
    }

    /// Width of the antialias band in plane-scaled units (1.5 pixels).
    pub fn antialias_size(&self) -> f64 {
        1.5 / f64::from(self.image_size)
    }

    pub fn scale_dir_unit(&self) -> Vec2 {
        self.scale_dir / self.scale_dir.hypot()
    }

    pub fn scale_dir_perp(&self) -> Vec2 {
        let d = self.scale_dir_unit();
        Vec2::new(-d.y, d.x)
    }

    /// Half-extent of the visible plane, which also bounds tick generation.
    pub fn half_extent(&self) -> f64 {
        0.5 / self.graph_scale
    }

    pub fn from_json_str(s: &str) -> GraphResult<Self> {
        serde_json::from_str(s).map_err(|e| GraphError::serde(format!("parse config JSON: {e}")))
    }

    pub fn from_json_path(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::serde(format!("serialize config JSON: {e}")))
    }
}

fn positive_finite(name: &str, v: f64) -> GraphResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(GraphError::validation(format!(
            "{name} must be finite and > 0 (got {v})"
        )))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
