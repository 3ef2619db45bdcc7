//! Projection of the raster onto the viewport and the per-pixel driver.

use crate::error::Result;
use crate::intersect::Ray;
use crate::scene::Scene;
use crate::trace::trace_ray;
use crate::vector::{Color, Vec3};
use image::RgbImage;
use log::info;
use rayon::prelude::*;
use std::f64;
use std::path::Path;
use std::time::Instant;

/// Anything that can receive the final, clamped pixels of a render.
///
/// `x` is the column and `y` the row, with the origin at the top-left
/// corner. Every pixel is written exactly once.
pub trait PixelSink {
    fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]);
}

impl PixelSink for RgbImage {
    fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.put_pixel(x, y, image::Rgb(rgb));
    }
}

/// Maps centered canvas coordinates, `y` pointing up, to a point on the
/// viewport. The result doubles as the direction of the primary ray.
pub fn canvas_to_viewport(x: i64, y: i64, scene: &Scene) -> Vec3 {
    let canvas = &scene.canvas;
    let viewport = &scene.viewport;
    Vec3::new(
        x as f64 * viewport.width / canvas.width as f64,
        y as f64 * viewport.height / canvas.height as f64,
        viewport.distance,
    )
}

/// Rounds each component and clamps it to the displayable range.
/// NaN ends up as 0.
pub fn to_rgb(color: &Color) -> [u8; 3] {
    let channel = |c: f64| c.round().clamp(0.0, 255.0) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Traces one primary ray per pixel and returns the unclamped colors in
/// top-left to bottom-right scanline order.
pub fn render_pixels(scene: &Scene) -> Vec<Color> {
    let width = scene.canvas.width as usize;
    let height = scene.canvas.height as usize;
    let half_width = (width / 2) as i64;
    let half_height = (height / 2) as i64;

    (0..width * height)
        .into_par_iter()
        .map(|i| {
            let column = (i % width) as i64;
            let row = (i / width) as i64;
            let direction = canvas_to_viewport(column - half_width, half_height - 1 - row, scene);
            let ray = Ray::new(scene.camera, direction);
            trace_ray(
                scene,
                &ray,
                scene.viewport.distance,
                f64::INFINITY,
                scene.recursion_depth,
            )
        })
        .collect()
}

/// Renders `scene` and writes every pixel to `sink`.
pub fn render<S: PixelSink>(scene: &Scene, sink: &mut S) {
    info!(
        "rendering {}x{} pixels, {} spheres, {} lights, depth {}",
        scene.canvas.width,
        scene.canvas.height,
        scene.spheres.len(),
        scene.lights.len(),
        scene.recursion_depth
    );
    let start = Instant::now();

    let pixels = render_pixels(scene);
    let width = scene.canvas.width as usize;
    for (i, color) in pixels.iter().enumerate() {
        sink.set_pixel((i % width) as u32, (i / width) as u32, to_rgb(color));
    }

    info!("rendered in {:.2?}", start.elapsed());
}

/// Renders `scene` into a freshly allocated image.
pub fn render_image(scene: &Scene) -> RgbImage {
    let mut image = RgbImage::new(scene.canvas.width, scene.canvas.height);
    render(scene, &mut image);
    image
}

/// Save an image to `filename`, the format being taken from its extension.
pub fn save<P: AsRef<Path>>(filename: P, image: &RgbImage) -> Result<()> {
    let filename = filename.as_ref();
    image.save(filename)?;
    info!("wrote {}", filename.display());
    Ok(())
}
