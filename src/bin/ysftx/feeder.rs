//! Frame feeder - hands file frames to the modulator as queue space frees up

use ysf_tx::{SampleSink, YsfTx};

pub struct FrameFeeder {
    frames: Vec<Vec<u8>>,
    next: usize,
}

impl FrameFeeder {
    pub fn new(frames: Vec<Vec<u8>>) -> Self {
        Self { frames, next: 0 }
    }

    /// Submit frames until the queue pushes back.
    pub fn feed<S: SampleSink>(&mut self, tx: &mut YsfTx<S>) {
        while let Some(frame) = self.frames.get(self.next) {
            match tx.submit_frame(frame) {
                Ok(()) => self.next += 1,
                Err(err) if err.is_retryable() => break,
                Err(err) => {
                    tracing::warn!(frame = self.next, %err, "skipping frame");
                    self.next += 1;
                }
            }
        }
    }

    pub fn submitted(&self) -> usize {
        self.next
    }

    pub fn total(&self) -> usize {
        self.frames.len()
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.frames.len()
    }
}
