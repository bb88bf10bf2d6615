use std::time::Duration;

use criterion::{Criterion, Throughput};

/// Per-draw work is a few nanoseconds, so more samples are affordable than for scans.
pub const DRAW_SAMPLE_SIZE: usize = 50;
pub const SCAN_SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

fn configured(sample_size: usize) -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(sample_size)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

#[allow(dead_code)]
pub fn draw_criterion() -> Criterion {
    configured(DRAW_SAMPLE_SIZE)
}

#[allow(dead_code)]
pub fn scan_criterion() -> Criterion {
    configured(SCAN_SAMPLE_SIZE)
}

/// Throughput in elements, never zero so empty scans still report.
pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}
