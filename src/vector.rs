//! Vector helpers shared by the intersection, lighting and tracing code.
//!
//! Addition, subtraction, scaling and the dot product come straight from
//! `nalgebra`. What lives here are the few operations whose semantics we
//! pin down ourselves.

use na::Vector3;

pub type Vec3 = Vector3<f64>;

/// An RGB triple in the 0-255 range. Intermediate values may leave that
/// range; clamping only happens when a pixel is written out.
pub type Color = Vector3<f64>;

/// Euclidean length of `v`.
pub fn magnitude(v: &Vec3) -> f64 {
    v.dot(v).sqrt()
}

/// Scales `v` to unit length.
///
/// Unlike `Vector3::normalize` this never branches on the length: a zero
/// vector yields NaN components, which then propagate through the caller.
pub fn normalize(v: &Vec3) -> Vec3 {
    v * (1.0 / magnitude(v))
}

/// Mirrors `v` about `normal`: `2 * (n . v) * n - v`.
pub fn reflect(v: &Vec3, normal: &Vec3) -> Vec3 {
    normal * (2.0 * normal.dot(v)) - v
}

pub fn color_from_rgb(rgb: [u8; 3]) -> Color {
    Color::new(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64)
}
