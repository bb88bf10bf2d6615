use beautiful_random::prelude::*;
use beautiful_random_examples::{fade_blips, init_tracing, Canvas};
use glam::DVec2;
use tracing::info;

const SIZE: u32 = 300;
const MAX_DISTANCE: f64 = 150.0;
const SWEEP_STEP: f64 = 1.5;
const MAX_BLIPS: usize = 20;
/// Intensity kept per sweep step.
const AFTERGLOW: f64 = 0.99;
const MIN_INTENSITY: f64 = 0.3;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut scanner = RadarScanner::try_new(MAX_DISTANCE)?.with_max_attempts(8);
    scanner.set_scan_sector_width(60.0);

    // Rotate the sweep one full turn, scanning each time it crosses a 30° mark.
    let mut blips: Vec<PointOfInterest> = Vec::new();
    let mut sweep = 0.0f64;
    let mut rejected = 0;
    while sweep < 360.0 {
        sweep += SWEEP_STEP;
        scanner.update_scan_angle(sweep);
        if (sweep as i64) % 30 == 0 && sweep.fract() == 0.0 {
            let report = scanner.scan_detailed(None, None);
            rejected += report.rejected;
            blips.extend(report.points);
        }
        fade_blips(&mut blips, AFTERGLOW, MIN_INTENSITY, MAX_BLIPS);
    }
    info!(
        "Sweep finished with {} blips ({} candidates rejected).",
        blips.len(),
        rejected
    );

    let center = DVec2::splat(SIZE as f64 / 2.0);
    let mut canvas = Canvas::new(SIZE, SIZE, [0, 0, 0]);
    let green = [40, 220, 90];

    canvas.stroke_circle(center, MAX_DISTANCE - 1.0, green, 0.3);
    for ring in 1..=3 {
        canvas.stroke_circle(center, MAX_DISTANCE * ring as f64 / 4.0, green, 0.2);
    }
    canvas.line(
        DVec2::new(center.x, 0.0),
        DVec2::new(center.x, SIZE as f64),
        green,
        0.2,
    );
    canvas.line(
        DVec2::new(0.0, center.y),
        DVec2::new(SIZE as f64, center.y),
        green,
        0.2,
    );

    let sector = scanner.sector();
    for edge in [sector.start, sector.end] {
        let rad = edge.to_radians();
        canvas.line(
            center,
            center + DVec2::new(rad.cos(), rad.sin()) * MAX_DISTANCE,
            green,
            0.6,
        );
    }

    for p in &blips {
        let radius = 2.0 + p.intensity * 2.0;
        canvas.fill_circle(center + p.to_cartesian(), radius, green, p.intensity);
    }

    canvas.save("radar-sweep.png")
}
