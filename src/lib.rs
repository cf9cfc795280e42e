//! sdfgraph renders an annotated Cartesian graph as a raster image.
//!
//! The picture is produced the way a full-screen fragment shader would: every
//! pixel independently maps its UV coordinate into the math plane, evaluates a
//! handful of unsigned distance fields and blends layer colors back to front.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: a validated, immutable [`GraphConfig`]
//! 2. **Prepare**: sample a [`ShapeKind`] into [`PointSets`] and apply the [`ObliqueScale`]
//! 3. **Shade**: [`Scene::pixel_color`] for each pixel center, optionally on a rayon pool
//! 4. **Write**: encode the [`PixelBuffer`] as an RGB PNG
//!
//! Output is deterministic: the same configuration always yields the same bytes,
//! independent of threading.
#![forbid(unsafe_code)]

mod foundation;

pub mod composite;
pub mod config;
pub mod mapper;
pub mod render;
pub mod sdf;
pub mod shape;
pub mod transform;

pub use composite::{
    Layer, LayerGeometry, Rgb8, Scene, alpha_blend, compute_pixel_color, coverage,
};
pub use config::GraphConfig;
pub use foundation::core::{Affine, Point, Rgb, Vec2};
pub use foundation::error::{GraphError, GraphResult};
pub use mapper::{math_to_uv, pixel_center_uv, uv_to_math};
pub use render::{PixelBuffer, RenderThreading, render_image, render_to_file, write_png};
pub use sdf::{
    AxisGrid, Segment, distance_to_axis_grid, distance_to_point, distance_to_segment,
};
pub use shape::{PointSets, ShapeKind};
pub use transform::ObliqueScale;
