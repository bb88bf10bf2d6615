use beautiful_random::prelude::*;
use beautiful_random_examples::{init_tracing, Canvas};
use glam::DVec2;
use tracing::info;

const WIDTH: u32 = 400;
const FRAME_H: u32 = 60;
const FRAMES: usize = 8;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AudioConfig::new(24).with_jitter(0.05);
    let mut visualizer = AudioVisualizer::try_new(config)?;
    let mut canvas = Canvas::new(WIDTH, FRAME_H * FRAMES as u32, [12, 12, 12]);

    let bar_w = WIDTH as f64 / config.bar_count as f64;
    for frame in 0..FRAMES {
        let bars = visualizer.generate_bars();
        let bottom = ((frame as u32 + 1) * FRAME_H) as f64;
        for (i, &h) in bars.iter().enumerate() {
            let x = i as f64 * bar_w;
            canvas.fill_rect(
                DVec2::new(x + 2.0, bottom - h * (FRAME_H as f64 - 4.0)),
                DVec2::new(x + bar_w - 2.0, bottom),
                [90, 200, 250],
                0.85,
            );
        }
    }
    info!(
        "Rendered {FRAMES} frames, final phase {:.2}.",
        visualizer.phase()
    );

    canvas.save("audio-bars.png")
}
