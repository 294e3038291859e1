//! Benchmarks for byte to symbol mapping.

use std::hint::black_box;

use criterion::Criterion;
use ysf_tx::dsp::{map_byte, Deviation};

pub fn bench_symbol(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/symbol");

    for deviation in [Deviation::Normal, Deviation::Low] {
        group.bench_function(format!("{:?}/all_bytes", deviation), |b| {
            b.iter(|| {
                for byte in 0..=u8::MAX {
                    black_box(map_byte(black_box(byte), deviation));
                }
            })
        });
    }

    group.finish();
}
