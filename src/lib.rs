extern crate image;
extern crate log;
extern crate nalgebra as na;
extern crate rayon;

pub mod error;
pub mod intersect;
pub mod lighting;
pub mod render;
pub mod scene;
pub mod trace;
pub mod vector;

pub use error::{Error, Result};
pub use intersect::{closest_intersection, intersect_ray_sphere, Ray};
pub use lighting::compute_lighting;
pub use render::{canvas_to_viewport, render, render_image, render_pixels, save, to_rgb, PixelSink};
pub use scene::{Canvas, Light, Scene, Sphere, Viewport};
pub use trace::trace_ray;
pub use vector::{Color, Vec3};

/// Reflection bounces followed when a scene does not say otherwise.
pub const DEFAULT_RECURSION_DEPTH: u32 = 3;

/// Lower bound for secondary rays, keeps a surface from shadowing or
/// reflecting itself.
pub const SHADOW_EPSILON: f64 = 0.001;

/// Side length of the square raster used by the reference scene.
pub const DEFAULT_CANVAS_SIZE: u32 = 600;
