//! Image driver: runs the per-pixel shader over a buffer and writes it out.

use std::{path::Path, time::Instant};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    composite::Scene,
    config::GraphConfig,
    foundation::error::{GraphError, GraphResult},
    mapper::pixel_center_uv,
    shape::PointSets,
    transform::ObliqueScale,
};

pub const CHANNELS: usize = 3;

/// Tightly packed RGB8 pixels, row-major, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> GraphResult<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                GraphError::validation(format!("pixel buffer {width}x{height} is too large"))
            })?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    pub fn row_stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Render rows on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Worker count for the pool. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Validate `config`, build the point sets and render every pixel.
///
/// Sequential and parallel modes produce byte-identical buffers.
#[tracing::instrument(skip(config), fields(size = config.image_size, shape = ?config.shape))]
pub fn render_image(
    config: &GraphConfig,
    threading: &RenderThreading,
) -> GraphResult<PixelBuffer> {
    config.validate()?;
    let scale = ObliqueScale::from_config(config)?;
    let points = PointSets::build(config)?;
    tracing::debug!(
        points = points.original.len(),
        dir_x = scale.dir().x,
        dir_y = scale.dir().y,
        amount = scale.amount(),
        "prepared point sets"
    );
    let scene = Scene::new(config, &scale, &points);

    let size = config.image_size;
    let mut buffer = PixelBuffer::new(size, size)?;
    let stride = buffer.row_stride();
    let started = Instant::now();

    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            buffer
                .data
                .par_chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(y, row)| shade_row(&scene, row, y as u32, size));
        });
    } else {
        for (y, row) in buffer.data.chunks_exact_mut(stride).enumerate() {
            shade_row(&scene, row, y as u32, size);
        }
    }

    tracing::debug!(
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        parallel = threading.parallel,
        "shaded pixels"
    );
    Ok(buffer)
}

fn shade_row(scene: &Scene<'_>, row: &mut [u8], y: u32, size: u32) {
    for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
        px.copy_from_slice(&scene.pixel_color(pixel_center_uv(x as u32, y, size)));
    }
}

fn build_thread_pool(threads: Option<usize>) -> GraphResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GraphError::validation(
            "--threads needs at least one worker for parallel row shading",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GraphError::render(format!("failed to build rayon thread pool: {e}")))
}

/// Encode `buffer` as an RGB PNG at `path`, replacing any existing file.
pub fn write_png(path: &Path, buffer: &PixelBuffer) -> GraphResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &buffer.data,
        buffer.width,
        buffer.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "wrote image");
    Ok(())
}

pub fn render_to_file(
    config: &GraphConfig,
    path: &Path,
    threading: &RenderThreading,
) -> GraphResult<PixelBuffer> {
    let buffer = render_image(config, threading)?;
    write_png(path, &buffer)?;
    Ok(buffer)
}

#[cfg(test)]
#[path = "../tests/unit/render/driver.rs"]
mod tests;
