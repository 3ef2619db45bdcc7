use crate::intersect::{closest_intersection, Ray};
use crate::scene::{Light, Scene, MATTE};
use crate::vector::{magnitude, reflect, Vec3};
use crate::SHADOW_EPSILON;
use std::f64;

/// Total light intensity arriving at `point`.
///
/// Sums the ambient lights unconditionally, and for every point and
/// directional light that is not occluded a Lambertian diffuse term plus,
/// unless `specular` is [`MATTE`], a Phong highlight. Neither `normal` nor
/// `view` need to be unit length; the terms divide by their magnitudes.
///
/// Shadow rays towards a point light stop at `t = 1`, which is the light's
/// own position. Shadow rays towards a directional light are unbounded.
pub fn compute_lighting(point: &Vec3, normal: &Vec3, view: &Vec3, specular: f64, scene: &Scene) -> f64 {
    let mut total = 0.0;

    for light in &scene.lights {
        let (light_intensity, light_direction, t_max) = match *light {
            Light::Ambient { intensity: ambient } => {
                total += ambient;
                continue;
            }
            Light::Point {
                intensity,
                position,
            } => (intensity, position - point, 1.0),
            Light::Directional {
                intensity,
                direction,
            } => (intensity, direction, f64::INFINITY),
        };

        let shadow_ray = Ray::new(*point, light_direction);
        if closest_intersection(&shadow_ray, SHADOW_EPSILON, t_max, &scene.spheres).is_some() {
            continue;
        }

        let n_dot_l = normal.dot(&light_direction);
        if n_dot_l > 0.0 {
            total += light_intensity * n_dot_l / (magnitude(normal) * magnitude(&light_direction));
        }

        if specular != MATTE {
            let reflection = reflect(&light_direction, normal);
            let r_dot_v = reflection.dot(view);
            if r_dot_v > 0.0 {
                total += light_intensity
                    * (r_dot_v / (magnitude(&reflection) * magnitude(view))).powf(specular);
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Sphere;
    use std::f64::consts::FRAC_1_SQRT_2;

    const EPSILON: f64 = 1e-9;

    fn scene_with(lights: Vec<Light>, spheres: Vec<Sphere>) -> Scene {
        Scene {
            lights,
            spheres,
            ..Scene::empty()
        }
    }

    // A point on the front of a unit sphere at (0, 0, 3), facing the camera.
    fn front_point() -> (Vec3, Vec3, Vec3) {
        let point = Vec3::new(0.0, 0.0, 2.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let view = Vec3::new(0.0, 0.0, -1.0);
        (point, normal, view)
    }

    #[test]
    fn no_lights_means_darkness() {
        let (point, normal, view) = front_point();
        let scene = scene_with(vec![], vec![]);
        assert_eq!(compute_lighting(&point, &normal, &view, MATTE, &scene), 0.0);
    }

    #[test]
    fn ambient_is_added_unconditionally() {
        let (point, normal, view) = front_point();
        let scene = scene_with(
            vec![
                Light::Ambient { intensity: 0.2 },
                Light::Ambient { intensity: 0.3 },
            ],
            vec![],
        );
        let i = compute_lighting(&point, &normal, &view, 100.0, &scene);
        assert!((i - 0.5).abs() < EPSILON);
    }

    #[test]
    fn diffuse_head_on_gives_full_intensity() {
        let (point, normal, view) = front_point();
        let scene = scene_with(
            vec![Light::Point {
                intensity: 0.6,
                position: Vec3::new(0.0, 0.0, 0.0),
            }],
            vec![],
        );
        let i = compute_lighting(&point, &normal, &view, MATTE, &scene);
        assert!((i - 0.6).abs() < EPSILON);
    }

    #[test]
    fn diffuse_falls_off_with_cosine() {
        let (point, normal, view) = front_point();
        // 45 degrees off the normal.
        let scene = scene_with(
            vec![Light::Directional {
                intensity: 1.0,
                direction: Vec3::new(0.0, 3.0, -3.0),
            }],
            vec![],
        );
        let i = compute_lighting(&point, &normal, &view, MATTE, &scene);
        assert!((i - FRAC_1_SQRT_2).abs() < EPSILON);
    }

    #[test]
    fn light_behind_surface_contributes_nothing() {
        let (point, normal, view) = front_point();
        let scene = scene_with(
            vec![Light::Directional {
                intensity: 1.0,
                direction: Vec3::new(0.0, 0.0, 1.0),
            }],
            vec![],
        );
        assert_eq!(compute_lighting(&point, &normal, &view, 10.0, &scene), 0.0);
    }

    #[test]
    fn specular_highlight_adds_to_diffuse() {
        let (point, normal, view) = front_point();
        let scene = scene_with(
            vec![Light::Point {
                intensity: 0.5,
                position: Vec3::new(0.0, 0.0, 0.0),
            }],
            vec![],
        );
        // Light, normal and viewer are aligned, so the highlight is at full
        // strength whatever the exponent.
        let i = compute_lighting(&point, &normal, &view, 500.0, &scene);
        assert!((i - 1.0).abs() < EPSILON);
    }

    #[test]
    fn specular_exponent_tightens_highlight() {
        let point = Vec3::new(0.0, 0.0, 2.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let view = Vec3::new(0.0, 1.0, -1.0);
        let scene = scene_with(
            vec![Light::Directional {
                intensity: 1.0,
                direction: Vec3::new(0.0, 0.0, -1.0),
            }],
            vec![],
        );
        let broad = compute_lighting(&point, &normal, &view, 1.0, &scene);
        let tight = compute_lighting(&point, &normal, &view, 10.0, &scene);
        // diffuse 1.0, highlight cos(45deg)^s
        assert!((broad - (1.0 + FRAC_1_SQRT_2)).abs() < EPSILON);
        assert!(tight < broad);
        assert!(tight > 1.0);
    }

    #[test]
    fn occluder_blocks_point_light_but_not_ambient() {
        let (point, normal, view) = front_point();
        let lights = vec![
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                intensity: 0.6,
                position: Vec3::new(0.0, 0.0, -4.0),
            },
        ];
        let blocker = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, [0, 0, 0], MATTE, 0.0);

        let lit = compute_lighting(&point, &normal, &view, 50.0, &scene_with(lights.clone(), vec![]));
        let shadowed = compute_lighting(&point, &normal, &view, 50.0, &scene_with(lights, vec![blocker]));
        assert!(lit > 0.2 + EPSILON);
        assert!((shadowed - 0.2).abs() < EPSILON);
    }

    #[test]
    fn sphere_beyond_point_light_casts_no_shadow() {
        let (point, normal, view) = front_point();
        let lights = vec![Light::Point {
            intensity: 0.6,
            position: Vec3::new(0.0, 0.0, 0.0),
        }];
        let behind_light = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 0.5, [0, 0, 0], MATTE, 0.0);
        let i = compute_lighting(&point, &normal, &view, MATTE, &scene_with(lights, vec![behind_light]));
        assert!((i - 0.6).abs() < EPSILON);
    }

    #[test]
    fn directional_shadow_ray_is_unbounded() {
        let (point, normal, view) = front_point();
        let lights = vec![Light::Directional {
            intensity: 0.6,
            direction: Vec3::new(0.0, 0.0, -1.0),
        }];
        // Far past t = 1 along the light direction, yet still in the way.
        let far_blocker = Sphere::new(Vec3::new(0.0, 0.0, -50.0), 1.0, [0, 0, 0], MATTE, 0.0);
        let i = compute_lighting(&point, &normal, &view, MATTE, &scene_with(lights, vec![far_blocker]));
        assert_eq!(i, 0.0);
    }

    #[test]
    fn shading_point_does_not_shadow_itself() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, [255, 0, 0], MATTE, 0.0);
        let (point, normal, view) = front_point();
        let lights = vec![Light::Point {
            intensity: 0.6,
            position: Vec3::new(0.0, 0.0, 0.0),
        }];
        let i = compute_lighting(&point, &normal, &view, MATTE, &scene_with(lights, vec![sphere]));
        assert!((i - 0.6).abs() < EPSILON);
    }
}
