use beautiful_random::prelude::*;
use beautiful_random_examples::{init_tracing, Canvas};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

const DRAWS: usize = 20_000;
const BINS: usize = 60;
const RANGE: (f64, f64) = (-3.0, 3.0);
const PANEL_W: u32 = 600;
const PANEL_H: u32 = 100;
/// Phase advance per draw for the time-coupled kinds.
const TIME_STEP: f64 = 0.01;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut seeder = StdRng::seed_from_u64(2025);
    let kinds = DistributionKind::ALL;
    let mut canvas = Canvas::new(PANEL_W, PANEL_H * kinds.len() as u32, [26, 26, 26]);

    for (row, kind) in kinds.into_iter().enumerate() {
        let mut src = ScalarRandomSource::from_rng(kind, &mut seeder);
        let mut bins = [0usize; BINS];
        let mut sum = 0.0;
        let mut sum_sq = 0.0;

        for i in 0..DRAWS {
            let v = src.sample_at(i as f64 * TIME_STEP);
            sum += v;
            sum_sq += v * v;
            let t = (v - RANGE.0) / (RANGE.1 - RANGE.0);
            if (0.0..1.0).contains(&t) {
                bins[(t * BINS as f64) as usize] += 1;
            }
        }

        let mean = sum / DRAWS as f64;
        let variance = sum_sq / DRAWS as f64 - mean * mean;
        info!("{kind:?}: mean {mean:.4}, variance {variance:.4}");

        let peak = bins.iter().copied().max().unwrap_or(1).max(1) as f64;
        let top = (row as u32 * PANEL_H) as f64;
        let bin_w = PANEL_W as f64 / BINS as f64;
        for (i, &count) in bins.iter().enumerate() {
            let h = count as f64 / peak * (PANEL_H as f64 - 10.0);
            let x = i as f64 * bin_w;
            canvas.fill_rect(
                DVec2::new(x + 1.0, top + PANEL_H as f64 - h),
                DVec2::new(x + bin_w - 1.0, top + PANEL_H as f64),
                [235, 235, 235],
                0.9,
            );
        }
        canvas.line(
            DVec2::new(PANEL_W as f64 / 2.0, top),
            DVec2::new(PANEL_W as f64 / 2.0, top + PANEL_H as f64),
            [200, 80, 80],
            0.6,
        );
    }

    canvas.save("distributions-histogram.png")
}
