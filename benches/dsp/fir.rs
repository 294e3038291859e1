//! Benchmarks for RRC interpolation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ysf_tx::dsp::{map_byte, Deviation, RrcInterpolator};

use crate::BYTE_COUNTS;

pub fn bench_fir(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fir");

    for &count in BYTE_COUNTS {
        // Pseudo-random symbols so every branch of the mapper shows up
        let symbols: Vec<[i16; 4]> = (0..count)
            .map(|i| map_byte((i * 73 + 11) as u8, Deviation::Normal))
            .collect();

        let mut rrc = RrcInterpolator::new();
        group.bench_with_input(BenchmarkId::new("data", count), &count, |b, _| {
            b.iter(|| {
                for syms in &symbols {
                    black_box(rrc.interpolate(black_box(syms)));
                }
            })
        });

        let mut rrc = RrcInterpolator::new();
        group.bench_with_input(BenchmarkId::new("silence", count), &count, |b, &n| {
            b.iter(|| {
                for _ in 0..n {
                    black_box(rrc.silence());
                }
            })
        });
    }

    group.finish();
}
