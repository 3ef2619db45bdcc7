//! Static scene description: spheres, lights, camera and raster geometry.
//!
//! A scene is built once, checked with [`Scene::validate`], and then only
//! ever borrowed by the renderer.

use crate::error::{Error, Result};
use crate::vector::{color_from_rgb, Color, Vec3};
use crate::{DEFAULT_CANVAS_SIZE, DEFAULT_RECURSION_DEPTH};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Specular exponent marking a matte surface without highlights.
pub const MATTE: f64 = -1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub color: Color,
    /// Phong exponent, or [`MATTE`].
    #[serde(default = "matte")]
    pub specular: f64,
    /// Share of the final color taken from the mirrored ray, in [0, 1].
    #[serde(default)]
    pub reflective: f64,
}

fn matte() -> f64 {
    MATTE
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64, color: [u8; 3], specular: f64, reflective: f64) -> Sphere {
        Sphere {
            center,
            radius,
            color: color_from_rgb(color),
            specular,
            reflective,
        }
    }

    pub fn surface_normal(&self, point: &Vec3) -> Vec3 {
        crate::vector::normalize(&(point - self.center))
    }
}

/// The three kinds of light the shading model knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    Ambient { intensity: f64 },
    Point { intensity: f64, position: Vec3 },
    Directional { intensity: f64, direction: Vec3 },
}

impl Light {
    pub fn intensity(&self) -> f64 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}

/// The window in world space that primary rays pass through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Distance from the camera along +z.
    pub distance: f64,
}

impl Default for Viewport {
    fn default() -> Viewport {
        Viewport {
            width: 1.0,
            height: 1.0,
            distance: 1.0,
        }
    }
}

/// Output raster dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn square(size: u32) -> Canvas {
        Canvas {
            width: size,
            height: size,
        }
    }
}

impl Default for Canvas {
    fn default() -> Canvas {
        Canvas::square(DEFAULT_CANVAS_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "origin")]
    pub camera: Vec3,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub canvas: Canvas,
    #[serde(default = "white")]
    pub background: Color,
    #[serde(default = "default_depth")]
    pub recursion_depth: u32,
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

fn origin() -> Vec3 {
    Vec3::zeros()
}

fn white() -> Color {
    color_from_rgb([255, 255, 255])
}

fn default_depth() -> u32 {
    DEFAULT_RECURSION_DEPTH
}

impl Scene {
    /// An empty scene with default camera, viewport and raster.
    pub fn empty() -> Scene {
        Scene {
            camera: origin(),
            viewport: Viewport::default(),
            canvas: Canvas::default(),
            background: white(),
            recursion_depth: DEFAULT_RECURSION_DEPTH,
            spheres: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Three colored spheres resting on a large yellow one, lit by an
    /// ambient, a point and a directional light.
    pub fn reference() -> Scene {
        let spheres = vec![
            Sphere::new(Vec3::new(0.0, -1.0, 3.0), 1.0, [255, 0, 0], 500.0, 0.2),
            Sphere::new(Vec3::new(2.0, 0.0, 4.0), 1.0, [0, 0, 255], 500.0, 0.3),
            Sphere::new(Vec3::new(-2.0, 0.0, 4.0), 1.0, [0, 255, 0], 10.0, 0.4),
            Sphere::new(
                Vec3::new(0.0, -5001.0, 0.0),
                5000.0,
                [255, 255, 0],
                1000.0,
                0.5,
            ),
        ];
        let lights = vec![
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                intensity: 0.6,
                position: Vec3::new(2.0, 1.0, 0.0),
            },
            Light::Directional {
                intensity: 0.2,
                direction: Vec3::new(1.0, 4.0, 4.0),
            },
        ];
        Scene {
            background: Color::zeros(),
            spheres,
            lights,
            ..Scene::empty()
        }
    }

    /// Parses and validates a JSON scene description.
    pub fn from_json(json: &str) -> Result<Scene> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Scene> {
        let path = path.as_ref();
        debug!("loading scene from {}", path.display());
        let json = fs::read_to_string(path)?;
        Scene::from_json(&json)
    }

    /// Checks the constraints the renderer takes for granted. The tracer
    /// itself never re-checks any of this.
    pub fn validate(&self) -> Result<()> {
        if !all_finite(&self.camera) {
            return Err(Error::invalid_scene("camera position must be finite"));
        }
        let v = &self.viewport;
        if !(v.width > 0.0 && v.height > 0.0 && v.distance > 0.0) {
            return Err(Error::invalid_scene(format!(
                "viewport dimensions must be positive, got {}x{} at distance {}",
                v.width, v.height, v.distance
            )));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::invalid_scene("canvas must have at least one pixel"));
        }
        if !is_rgb(&self.background) {
            return Err(Error::invalid_scene("background must be three integers in 0-255"));
        }
        for (i, sphere) in self.spheres.iter().enumerate() {
            validate_sphere(sphere).map_err(|reason| {
                Error::invalid_scene(format!("sphere {}: {}", i, reason))
            })?;
        }
        for (i, light) in self.lights.iter().enumerate() {
            validate_light(light).map_err(|reason| {
                Error::invalid_scene(format!("light {}: {}", i, reason))
            })?;
        }
        debug!(
            "scene ok: {} spheres, {} lights, depth {}",
            self.spheres.len(),
            self.lights.len(),
            self.recursion_depth
        );
        Ok(())
    }
}

fn all_finite(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Whole-numbered channels in 0-255.
fn is_rgb(c: &Color) -> bool {
    c.iter()
        .all(|&v| (0.0..=255.0).contains(&v) && v.fract() == 0.0)
}

fn validate_sphere(sphere: &Sphere) -> std::result::Result<(), String> {
    if !all_finite(&sphere.center) {
        return Err("center must be finite".to_string());
    }
    if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
        return Err(format!("radius must be positive, got {}", sphere.radius));
    }
    if !is_rgb(&sphere.color) {
        return Err("color must be three integers in 0-255".to_string());
    }
    if sphere.specular != MATTE && !(sphere.specular > 0.0) {
        return Err(format!(
            "specular must be -1 or positive, got {}",
            sphere.specular
        ));
    }
    if !(0.0..=1.0).contains(&sphere.reflective) {
        return Err(format!(
            "reflectiveness must lie in [0, 1], got {}",
            sphere.reflective
        ));
    }
    Ok(())
}

fn validate_light(light: &Light) -> std::result::Result<(), String> {
    let intensity = light.intensity();
    if !(intensity >= 0.0 && intensity.is_finite()) {
        return Err(format!("intensity must be non-negative, got {}", intensity));
    }
    match light {
        Light::Ambient { .. } => Ok(()),
        Light::Point { position, .. } if !all_finite(position) => {
            Err("position must be finite".to_string())
        }
        Light::Point { .. } => Ok(()),
        Light::Directional { direction, .. } => {
            if !all_finite(direction) || direction.norm_squared() == 0.0 {
                Err("direction must be a finite, non-zero vector".to_string())
            } else {
                Ok(())
            }
        }
    }
}
