//! Status snapshot shown by the UI
//!
//! Taken from the modulator once per UI frame; Copy so rendering never
//! borrows the transmitter.

use ysf_tx::{io::RingSink, Deviation, TxPhase, YsfTx};

use crate::feeder::FrameFeeder;

#[derive(Clone, Copy, Debug)]
pub struct TxStatus {
    pub phase: TxPhase,
    /// Frames handed to the queue so far / frames in the input file
    pub submitted: usize,
    pub total: usize,
    /// Frames taken off the queue for transmission
    pub frames_sent: u64,
    pub queued: usize,
    pub queue_free: usize,
    pub hang_remaining: u32,
    pub hang_steps: u32,
    pub preamble_len: u16,
    pub deviation: Deviation,
    pub duplex: bool,
    /// Samples waiting in the ring for the audio callback
    pub ring_pending: usize,
    pub ring_capacity: usize,
}

impl TxStatus {
    pub fn capture(tx: &YsfTx<RingSink>, feeder: &FrameFeeder) -> Self {
        let config = tx.config();
        Self {
            phase: tx.phase(),
            submitted: feeder.submitted(),
            total: feeder.total(),
            frames_sent: tx.frames_sent(),
            queued: tx.queued_frames(),
            queue_free: tx.queue_capacity_remaining(),
            hang_remaining: tx.hang_remaining(),
            hang_steps: config.hang_steps,
            preamble_len: config.preamble_len,
            deviation: config.deviation(),
            duplex: config.duplex,
            ring_pending: tx.sink().pending(),
            ring_capacity: tx.sink().capacity(),
        }
    }

    /// All frames sent and the transmitter has unkeyed.
    pub fn is_finished(&self) -> bool {
        self.submitted == self.total
            && self.queued == 0
            && self.phase == TxPhase::Idle
            && self.ring_pending == 0
    }
}
