mod common;

use std::hint::black_box;

use beautiful_random::source::{DistributionKind, FixedClock, ScalarRandomSource};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const DRAWS: usize = 4096;

fn sources_next_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sources/next");
    group.throughput(common::elements_throughput(DRAWS));

    for kind in DistributionKind::ALL {
        let mut src = ScalarRandomSource::with_seed(kind, 0xA11CE).with_clock(FixedClock(1.5));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{kind:?}")),
            &kind,
            |b, _| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for _ in 0..DRAWS {
                        acc += src.next();
                    }
                    black_box(acc);
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::draw_criterion();
    targets = sources_next_benches
}
criterion_main!(benches);
