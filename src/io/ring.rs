use rtrb::{Consumer, Producer, RingBuffer};

use crate::io::sink::{ModemState, SampleSink};

/// Sink feeding a lock-free sample ring, drained by an audio or DAC callback.
///
/// Free space is the ring's free slot count. The transmitter counts as keyed
/// while samples are still waiting for the consumer, so a stream that keeps the
/// ring topped up stays on air without a second preamble.
pub struct RingSink {
    tx: Producer<i16>,
    capacity: usize,
}

impl RingSink {
    pub fn new(capacity: usize) -> (Self, Consumer<i16>) {
        let (tx, rx) = RingBuffer::<i16>::new(capacity.max(1));
        let capacity = tx.buffer().capacity();
        (Self { tx, capacity }, rx)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples written but not yet consumed.
    pub fn pending(&self) -> usize {
        self.capacity - self.tx.slots()
    }
}

impl SampleSink for RingSink {
    fn space(&self) -> usize {
        self.tx.slots()
    }

    fn is_keyed(&self) -> bool {
        self.pending() > 0
    }

    fn write(&mut self, _state: ModemState, samples: &[i16]) {
        let fits = samples.len().min(self.tx.slots());
        if fits < samples.len() {
            tracing::warn!(
                dropped = samples.len() - fits,
                "sample ring full, truncating block"
            );
        }

        if let Ok(chunk) = self.tx.write_chunk_uninit(fits) {
            chunk.fill_from_iter(samples.iter().copied());
        }
    }
}
