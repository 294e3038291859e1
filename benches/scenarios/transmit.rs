//! Benchmarks for complete transmissions.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ysf_tx::{io::MemorySink, TxConfig, TxPhase, YsfTx, FRAME_LENGTH_BYTES};

/// Samples of sink space per tick: roughly a 10 ms scheduling slot at 48 kHz.
const SPACE: usize = 480;

fn transmit(frames: usize, config: TxConfig) -> usize {
    let mut tx = YsfTx::with_queue_capacity(MemorySink::keyed(SPACE), config, frames);
    for i in 0..frames {
        let _ = tx.submit_frame(&[i as u8; FRAME_LENGTH_BYTES]);
    }

    let mut ticks = 0;
    while tx.phase() != TxPhase::Idle || tx.queued_frames() > 0 || ticks == 0 {
        tx.tick();
        ticks += 1;
    }
    black_box(tx.sink().block_count())
}

pub fn bench_transmit(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/transmit");

    for frames in [1usize, 4, 16] {
        // === SIMPLEX ===
        // Data only, idle as soon as the queue drains
        let simplex = TxConfig {
            hang_steps: 0,
            duplex: false,
            ..TxConfig::default()
        };
        group.bench_with_input(BenchmarkId::new("simplex", frames), &frames, |b, &n| {
            b.iter(|| transmit(n, simplex))
        });

        // === DUPLEX WITH HANG ===
        // One second of shaped silence after the last frame
        let mut duplex = TxConfig::default();
        duplex.set_deviation_and_hang(false, 1);
        group.bench_with_input(BenchmarkId::new("duplex_hang", frames), &frames, |b, &n| {
            b.iter(|| transmit(n, duplex))
        });
    }

    group.finish();
}
