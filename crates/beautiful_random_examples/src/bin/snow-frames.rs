use beautiful_random::prelude::*;
use beautiful_random_examples::{init_tracing, Canvas};
use glam::DVec2;
use tracing::info;

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;
const FLAKES: usize = 120;
const FRAMES: usize = 240;
const DT: f64 = 1.0;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SnowConfig::new(DVec2::new(WIDTH as f64, HEIGHT as f64));
    let mut snow = SnowGenerator::try_new(config)?;
    let mut flakes = snow.generate(FLAKES);

    let mut total = 0.0;
    for _ in 0..FRAMES {
        total += DT;
        snow.update(&mut flakes, DT, total);
    }

    let mut by_shape = [0usize; 5];
    for f in &flakes {
        by_shape[f.shape.complexity() as usize - 1] += 1;
    }
    info!("Shapes by complexity 1..=5: {by_shape:?}");

    let mut canvas = Canvas::new(WIDTH, HEIGHT, [16, 24, 40]);
    for f in &flakes {
        match f.shape {
            SnowflakeShape::Circle => {
                canvas.fill_circle(f.position, f.size * 0.5, [255, 255, 255], f.opacity)
            }
            _ => {
                // spokes rotated by the flake's current rotation
                let spokes = 2 * f.shape.complexity() as usize;
                for i in 0..spokes {
                    let theta = f.rotation + i as f64 / spokes as f64 * std::f64::consts::TAU;
                    let tip = f.position + DVec2::new(theta.cos(), theta.sin()) * f.size;
                    canvas.line(f.position, tip, [255, 255, 255], f.opacity);
                }
            }
        }
    }

    canvas.save("snow-frames.png")
}
