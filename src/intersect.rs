use crate::scene::Sphere;
use crate::vector::Vec3;
use std::f64;

/// A ray `origin + t * direction`. The direction is not required to be
/// of unit length; `t` is measured in multiples of it.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Both parametric distances at which `ray` crosses the surface of
/// `sphere`, or `None` if it misses.
///
/// The roots come back as `((-b + sqrt(disc)) / 2a, (-b - sqrt(disc)) / 2a)`.
/// Callers must not rely on their order.
pub fn intersect_ray_sphere(ray: &Ray, sphere: &Sphere) -> Option<(f64, f64)> {
    let center_to_origin = ray.origin - sphere.center;
    let a = ray.direction.dot(&ray.direction);
    let b = 2.0 * center_to_origin.dot(&ray.direction);
    let c = center_to_origin.dot(&center_to_origin) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    Some(((-b + root) / (2.0 * a), (-b - root) / (2.0 * a)))
}

/// Finds the smallest `t` in the closed interval `[t_min, t_max]` at which
/// `ray` hits any of `spheres`, together with the sphere that was hit.
///
/// Spheres are scanned in order and only a strictly smaller `t` replaces
/// the current best, so on exact ties the earlier sphere wins.
pub fn closest_intersection<'a>(
    ray: &Ray,
    t_min: f64,
    t_max: f64,
    spheres: &'a [Sphere],
) -> Option<(f64, &'a Sphere)> {
    let mut closest_t = f64::INFINITY;
    let mut closest_sphere: Option<&Sphere> = None;

    for sphere in spheres {
        if let Some((t1, t2)) = intersect_ray_sphere(ray, sphere) {
            for &t in &[t1, t2] {
                if t >= t_min && t <= t_max && t < closest_t {
                    closest_t = t;
                    closest_sphere = Some(sphere);
                }
            }
        }
    }

    closest_sphere.map(|sphere| (closest_t, sphere))
}
