use crate::intersect::{closest_intersection, Ray};
use crate::lighting::compute_lighting;
use crate::scene::Scene;
use crate::vector::{reflect, Color};
use crate::SHADOW_EPSILON;
use std::f64;

/// Recursive function to compute the color seen along `ray`, considering
/// hits in `[t_min, t_max]` only.
///
/// A miss yields the scene's background. A hit is shaded locally and, if
/// the surface is reflective and `depth` is not yet exhausted, blended with
/// the color seen along the mirrored ray, which is traced with `depth - 1`.
/// The result is not clamped.
pub fn trace_ray(scene: &Scene, ray: &Ray, t_min: f64, t_max: f64, depth: u32) -> Color {
    let (t, sphere) = match closest_intersection(ray, t_min, t_max, &scene.spheres) {
        Some(hit) => hit,
        None => return scene.background,
    };

    let point = ray.at(t);
    let normal = sphere.surface_normal(&point);
    let view = -ray.direction;

    let local_color = sphere.color * compute_lighting(&point, &normal, &view, sphere.specular, scene);

    let reflective = sphere.reflective;
    if depth == 0 || reflective <= 0.0 {
        return local_color;
    }

    let reflected_ray = Ray::new(point, reflect(&view, &normal));
    let reflected_color = trace_ray(scene, &reflected_ray, SHADOW_EPSILON, f64::INFINITY, depth - 1);

    local_color * (1.0 - reflective) + reflected_color * reflective
}
