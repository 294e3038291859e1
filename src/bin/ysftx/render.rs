//! Offline render - runs the modulator against a sample ring drained at a fixed rate

use ysf_tx::{io::RingSink, TxConfig, TxPhase, YsfTx, SAMPLE_RATE};

use crate::feeder::FrameFeeder;

/// 200 ms of samples between the modulator and the consumer.
const RING_SAMPLES: usize = SAMPLE_RATE as usize / 5;
/// Samples consumed per simulated scheduling slot (10 ms).
const SLOT_SAMPLES: usize = SAMPLE_RATE as usize / 100;

pub fn render_offline(mut feeder: FrameFeeder, config: TxConfig, queue_frames: usize) -> Vec<i16> {
    let (sink, mut rx) = RingSink::new(RING_SAMPLES);
    let mut tx = YsfTx::with_queue_capacity(sink, config, queue_frames);
    let mut samples = Vec::new();

    loop {
        feeder.feed(&mut tx);
        tx.tick();

        // Draining less than one slot's worth of writes keeps the ring from
        // running dry, which would unkey the transmitter mid-stream
        for _ in 0..SLOT_SAMPLES {
            match rx.pop() {
                Ok(sample) => samples.push(sample),
                Err(_) => break,
            }
        }

        if feeder.is_done() && tx.phase() == TxPhase::Idle && tx.queued_frames() == 0 {
            break;
        }
    }

    samples.extend(std::iter::from_fn(|| rx.pop().ok()));
    tracing::info!(
        frames = tx.frames_sent(),
        samples = samples.len(),
        "render complete"
    );
    samples
}
