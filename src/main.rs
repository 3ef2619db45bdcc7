extern crate env_logger;
extern crate tracelib;

use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;
use tracelib::render::render_image;
use tracelib::scene::{Canvas, Scene};
use tracelib::vector::color_from_rgb;

/// Renders spheres lit by ambient, point and directional lights.
#[derive(Debug, Parser)]
#[command(name = "tracer", version)]
struct Args {
    /// JSON scene description; the built-in scene is used if omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Image to write, format taken from the extension
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Side length of the square output raster in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Maximum number of reflection bounces
    #[arg(long)]
    depth: Option<u32>,

    /// Background color as R,G,B
    #[arg(long, value_parser = parse_rgb)]
    background: Option<[u8; 3]>,
}

fn parse_rgb(s: &str) -> Result<[u8; 3], String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<u8>().map_err(|e| format!("{}: {}", c, e)))
        .collect::<Result<Vec<u8>, String>>()?;
    match channels.as_slice() {
        [r, g, b] => Ok([*r, *g, *b]),
        _ => Err(format!("expected three channels, got {}", channels.len())),
    }
}

/// Command line flags win over whatever the scene file says.
fn apply_overrides(scene: &mut Scene, args: &Args) {
    if let Some(size) = args.size {
        scene.canvas = Canvas::square(size);
    }
    if let Some(depth) = args.depth {
        scene.recursion_depth = depth;
    }
    if let Some(rgb) = args.background {
        scene.background = color_from_rgb(rgb);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => {
            info!("no scene file given, using the built-in scene");
            Scene::reference()
        }
    };
    apply_overrides(&mut scene, &args);
    scene.validate()?;

    let image = render_image(&scene);
    tracelib::save(&args.output, &image)?;

    Ok(())
}
