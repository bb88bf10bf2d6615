use beautiful_random::prelude::*;
use beautiful_random_examples::{init_tracing, Canvas};
use glam::DVec2;
use tracing::info;

const WIDTH: u32 = 300;
const HEIGHT: u32 = 600;
const DROPS: usize = 150;
const FRAMES: usize = 120;
const DT: f64 = 1.0;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RainConfig::new(DVec2::new(WIDTH as f64, HEIGHT as f64));
    let mut rain = RainGenerator::try_new(config)?;
    let mut drops = rain.generate(DROPS);

    for _ in 0..FRAMES {
        rain.update(&mut drops, DT);
    }
    let visible = drops
        .iter()
        .filter(|d| d.position.y >= 0.0 && d.position.y <= HEIGHT as f64)
        .count();
    info!("{visible}/{DROPS} drops visible after {FRAMES} frames.");

    let mut canvas = Canvas::new(WIDTH, HEIGHT, [10, 14, 30]);
    for d in &drops {
        canvas.line(d.position, d.end_point(), [170, 190, 255], d.opacity);
    }

    canvas.save("rain-frames.png")
}
