//! Transmit sequencer - preamble, data and hang timing
//!
//! The sequencer runs from an external scheduler, one [`YsfTx::tick`] per time
//! slice. Each tick asks the sink how much room it has and fills that room with
//! 40-sample blocks, one byte per block, tracking the remaining space locally
//! instead of asking again.
//!
//! ```text
//!   Idle ──frame queued, sink cold──▶ Preamble ──drained──▶ Data
//!    │                                                      │ ▲
//!    └──────frame queued, sink keyed─────────────────────▶  │ │ more frames
//!                                                           ▼ │
//!   Idle ◀──counter hits zero── Hang ◀──queue empty, duplex──┘
//! ```
//!
//! A tick either drains the pending output buffer or emits hang silence, never
//! both, so one call does a bounded amount of work however much space the sink
//! reports.

use crate::{
    dsp::{rrc::RrcInterpolator, symbol::map_byte},
    io::sink::{ModemState, SampleSink},
    tx::{
        config::{TxConfig, MAX_PREAMBLE_LEN},
        error::{Result, TxError},
        queue::{Frame, FrameQueue, DEFAULT_QUEUE_FRAMES},
    },
    BLOCK_LEN, FRAME_LENGTH_BYTES,
};

/// Marker byte repeated through the preamble.
pub const START_SYNC: u8 = 0x77;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxPhase {
    /// Nothing queued, nothing pending, hang expired.
    Idle,
    /// Sending sync bytes ahead of the first frame. Still reported after the
    /// last sync byte until the next tick loads that frame.
    Preamble,
    /// Sending frame bytes.
    Data,
    /// Sending shaped silence to hold the transmitter keyed.
    Hang,
}

/// Bytes waiting to be modulated: one preamble run or one frame.
struct PendingOutput {
    bytes: Vec<u8>,
    cursor: usize,
}

impl PendingOutput {
    fn new() -> Self {
        Self {
            bytes: Vec::with_capacity((MAX_PREAMBLE_LEN as usize).max(FRAME_LENGTH_BYTES)),
            cursor: 0,
        }
    }

    fn load_preamble(&mut self, len: usize) {
        self.bytes.clear();
        self.bytes.resize(len, START_SYNC);
        self.cursor = 0;
    }

    fn load_frame(&mut self, frame: &Frame) {
        self.bytes.clear();
        self.bytes.extend_from_slice(frame);
        self.cursor = 0;
    }

    fn next(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(byte)
    }

    fn is_drained(&self) -> bool {
        self.cursor >= self.bytes.len()
    }

    fn clear(&mut self) {
        self.bytes.clear();
        self.cursor = 0;
    }
}

/// YSF transmit pipeline: frame queue, symbol mapping, RRC shaping and timing.
pub struct YsfTx<S: SampleSink> {
    sink: S,
    config: TxConfig,
    queue: FrameQueue,
    filter: RrcInterpolator,
    pending: PendingOutput,
    phase: TxPhase,
    hang_remaining: u32,
    frames_sent: u64,
}

impl<S: SampleSink> YsfTx<S> {
    pub fn new(sink: S, config: TxConfig) -> Self {
        Self::with_queue_capacity(sink, config, DEFAULT_QUEUE_FRAMES)
    }

    pub fn with_queue_capacity(sink: S, config: TxConfig, frames: usize) -> Self {
        Self {
            sink,
            config,
            queue: FrameQueue::new(frames),
            filter: RrcInterpolator::new(),
            pending: PendingOutput::new(),
            phase: TxPhase::Idle,
            hang_remaining: 0,
            frames_sent: 0,
        }
    }

    /// Queue one frame of exactly [`FRAME_LENGTH_BYTES`] bytes.
    pub fn submit_frame(&mut self, data: &[u8]) -> Result<()> {
        let frame: Frame = data.try_into().map_err(|_| {
            rejected(TxError::InvalidLength {
                expected: FRAME_LENGTH_BYTES,
                actual: data.len(),
            })
        })?;

        self.queue.enqueue(frame).map_err(rejected)
    }

    /// Queue a frame as it arrives over the host link: one control byte, then the frame.
    pub fn submit_host_frame(&mut self, data: &[u8]) -> Result<()> {
        if data.len() != FRAME_LENGTH_BYTES + 1 {
            return Err(rejected(TxError::InvalidLength {
                expected: FRAME_LENGTH_BYTES + 1,
                actual: data.len(),
            }));
        }

        self.submit_frame(&data[1..])
    }

    /// Advance by one scheduling step. Never fails; does nothing when idle.
    pub fn tick(&mut self) {
        if self.queue.is_empty() && self.pending.is_drained() && self.hang_remaining == 0 {
            self.enter(TxPhase::Idle);
            return;
        }

        if self.pending.is_drained() && !self.queue.is_empty() {
            self.load_next();
        }

        if !self.pending.is_drained() {
            self.drain_pending();
        } else if self.hang_remaining > 0 {
            self.emit_hang();
        }
    }

    /// Set the preamble from the host TX delay setting.
    pub fn set_preamble_delay(&mut self, delay: u8) {
        self.config.set_preamble_delay(delay);
    }

    pub fn set_deviation_and_hang(&mut self, low_deviation: bool, hang: u8) {
        self.config.set_deviation_and_hang(low_deviation, hang);
    }

    /// Frames that can still be submitted.
    pub fn queue_capacity_remaining(&self) -> usize {
        self.queue.available_slots()
    }

    pub fn queued_frames(&self) -> usize {
        self.queue.queued_count()
    }

    pub fn phase(&self) -> TxPhase {
        self.phase
    }

    pub fn hang_remaining(&self) -> u32 {
        self.hang_remaining
    }

    /// Frames taken off the queue for transmission so far.
    pub fn frames_sent(&self) -> u64 {
        self.frames_sent
    }

    pub fn config(&self) -> &TxConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn load_next(&mut self) {
        let preamble_len = self.config.effective_preamble_len();
        if !self.sink.is_keyed() && preamble_len > 0 {
            // Cold start: sync run first, the frame stays queued until it drains
            self.pending.load_preamble(preamble_len);
            self.enter(TxPhase::Preamble);
        } else if let Some(frame) = self.queue.dequeue() {
            self.pending.load_frame(&frame);
            self.frames_sent += 1;
            tracing::trace!(frames_sent = self.frames_sent, "frame loaded");
            self.enter(TxPhase::Data);
        }
    }

    fn drain_pending(&mut self) {
        let mut space = self.sink.space();

        while space > BLOCK_LEN {
            let Some(byte) = self.pending.next() else {
                break;
            };
            self.write_byte(byte);

            space -= BLOCK_LEN;
            if self.config.duplex {
                self.hang_remaining = self.config.hang_steps;
            }

            if self.pending.is_drained() {
                self.pending.clear();
                if self.queue.is_empty() {
                    self.enter(if self.hang_remaining > 0 {
                        TxPhase::Hang
                    } else {
                        TxPhase::Idle
                    });
                }
                return;
            }
        }
    }

    fn emit_hang(&mut self) {
        self.enter(TxPhase::Hang);
        let mut space = self.sink.space();

        while space > BLOCK_LEN {
            self.write_silence();

            space -= BLOCK_LEN;
            self.hang_remaining -= 1;

            if self.hang_remaining == 0 {
                self.enter(TxPhase::Idle);
                return;
            }
        }
    }

    fn write_byte(&mut self, byte: u8) {
        let symbols = map_byte(byte, self.config.deviation());
        let block = self.filter.interpolate(&symbols);
        self.sink.write(ModemState::Ysf, &block);
    }

    fn write_silence(&mut self) {
        let block = self.filter.silence();
        self.sink.write(ModemState::Ysf, &block);
    }

    fn enter(&mut self, phase: TxPhase) {
        if self.phase != phase {
            tracing::debug!(from = ?self.phase, to = ?phase, "tx phase");
            self.phase = phase;
        }
    }
}

fn rejected(err: TxError) -> TxError {
    tracing::debug!(%err, "frame rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::memory::MemorySink;

    // 400 samples of room: nine blocks per tick (space must exceed one block)
    const SPACE: usize = 400;
    const BLOCKS_PER_TICK: usize = 9;

    fn frame(fill: u8) -> Vec<u8> {
        vec![fill; FRAME_LENGTH_BYTES]
    }

    fn config(preamble_len: u16, hang_steps: u32, duplex: bool) -> TxConfig {
        TxConfig {
            low_deviation: false,
            preamble_len,
            hang_steps,
            duplex,
        }
    }

    #[test]
    fn test_idle_tick_writes_nothing() {
        let mut tx = YsfTx::new(MemorySink::new(SPACE), TxConfig::default());
        tx.tick();
        assert_eq!(tx.sink().block_count(), 0);
        assert_eq!(tx.phase(), TxPhase::Idle);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let mut tx = YsfTx::new(MemorySink::new(SPACE), TxConfig::default());
        tx.submit_frame(&frame(0x5A)).unwrap();

        for len in [0, 1, FRAME_LENGTH_BYTES - 1, FRAME_LENGTH_BYTES + 1] {
            let err = tx.submit_frame(&vec![0; len]).unwrap_err();
            assert_eq!(
                err,
                TxError::InvalidLength {
                    expected: FRAME_LENGTH_BYTES,
                    actual: len
                }
            );
        }
        assert!(tx.submit_host_frame(&frame(0x5A)).is_err());

        assert_eq!(tx.queued_frames(), 1);
        assert_eq!(tx.queue_capacity_remaining(), DEFAULT_QUEUE_FRAMES - 1);
    }

    #[test]
    fn test_host_frame_strips_control_byte() {
        let mut tx = YsfTx::new(MemorySink::keyed(SPACE), config(0, 0, false));
        let mut data = vec![0xEE];
        data.extend_from_slice(&frame(0xAA));

        tx.submit_host_frame(&data).unwrap();
        assert!(tx.submit_host_frame(&frame(0xAA)).is_err());

        tx.tick();
        // 0xAA maps to four identical symbols; 0xEE would not
        let mut reference = RrcInterpolator::new();
        let expected = reference.interpolate(&map_byte(0xAA, crate::Deviation::Normal));
        assert_eq!(tx.sink().blocks()[0].1, expected.to_vec());
    }

    #[test]
    fn test_queue_full_until_tick_dequeues() {
        let mut tx = YsfTx::with_queue_capacity(MemorySink::keyed(SPACE), config(0, 0, false), 2);
        tx.submit_frame(&frame(1)).unwrap();
        tx.submit_frame(&frame(2)).unwrap();
        assert_eq!(tx.queue_capacity_remaining(), 0);
        assert_eq!(
            tx.submit_frame(&frame(3)),
            Err(TxError::QueueFull { capacity: 2 })
        );

        tx.tick();
        assert_eq!(tx.queue_capacity_remaining(), 1);
        tx.submit_frame(&frame(3)).unwrap();
    }

    #[test]
    fn test_cold_start_sends_preamble_then_frame() {
        let mut tx = YsfTx::new(MemorySink::new(SPACE), config(10, 0, false));
        tx.submit_frame(&frame(0x00)).unwrap();

        tx.tick();
        assert_eq!(tx.phase(), TxPhase::Preamble);
        assert_eq!(tx.sink().block_count(), BLOCKS_PER_TICK);
        assert_eq!(tx.queued_frames(), 1, "preamble must not consume the frame");

        tx.tick();
        assert_eq!(tx.sink().block_count(), 10, "preamble drain stops at its end");
        assert_eq!(tx.phase(), TxPhase::Preamble);
        assert_eq!(tx.queued_frames(), 1);

        tx.tick();
        assert_eq!(tx.phase(), TxPhase::Data);
        assert_eq!(tx.queued_frames(), 0);
        assert_eq!(tx.frames_sent(), 1);
    }

    #[test]
    fn test_cold_sink_without_preamble_sends_frame() {
        let mut tx = YsfTx::new(MemorySink::new(SPACE), config(0, 0, false));
        tx.submit_frame(&frame(0x00)).unwrap();

        tx.tick();
        assert_eq!(tx.phase(), TxPhase::Data);
        assert_eq!(tx.sink().block_count(), BLOCKS_PER_TICK);

        for _ in 0..20 {
            tx.tick();
        }
        assert_eq!(tx.sink().block_count(), FRAME_LENGTH_BYTES);
        assert_eq!(tx.queued_frames(), 0);
        assert_eq!(tx.frames_sent(), 1);
        assert_eq!(tx.phase(), TxPhase::Idle);
    }

    #[test]
    fn test_keyed_sink_skips_preamble() {
        let mut tx = YsfTx::new(MemorySink::keyed(SPACE), config(600, 0, false));
        tx.submit_frame(&frame(0x00)).unwrap();

        tx.tick();
        assert_eq!(tx.phase(), TxPhase::Data);

        let mut reference = RrcInterpolator::new();
        let expected = reference.interpolate(&map_byte(0x00, crate::Deviation::Normal));
        assert_eq!(tx.sink().blocks()[0].1, expected.to_vec());
    }

    #[test]
    fn test_small_space_writes_nothing() {
        let mut tx = YsfTx::new(MemorySink::keyed(BLOCK_LEN), config(0, 0, false));
        tx.submit_frame(&frame(0x00)).unwrap();

        tx.tick();
        assert_eq!(tx.sink().block_count(), 0);
        assert_eq!(tx.phase(), TxPhase::Data);

        tx.sink_mut().set_space(BLOCK_LEN + 1);
        tx.tick();
        assert_eq!(tx.sink().block_count(), 1);
    }

    #[test]
    fn test_simplex_goes_idle_without_hang() {
        let mut tx = YsfTx::new(MemorySink::keyed(SPACE), config(0, 1_200, false));
        tx.submit_frame(&frame(0x55)).unwrap();

        for _ in 0..20 {
            tx.tick();
        }
        assert_eq!(tx.sink().block_count(), FRAME_LENGTH_BYTES);
        assert_eq!(tx.hang_remaining(), 0);
        assert_eq!(tx.phase(), TxPhase::Idle);
    }

    #[test]
    fn test_duplex_hang_counts_down() {
        let mut tx = YsfTx::new(MemorySink::keyed(SPACE), config(0, 20, true));
        tx.submit_frame(&frame(0x55)).unwrap();

        while tx.phase() != TxPhase::Hang {
            tx.tick();
        }
        assert_eq!(tx.hang_remaining(), 20);
        let data_blocks = tx.sink().block_count();
        assert_eq!(data_blocks, FRAME_LENGTH_BYTES);

        tx.tick();
        assert_eq!(tx.hang_remaining(), 20 - BLOCKS_PER_TICK as u32);
        tx.tick();
        tx.tick();
        assert_eq!(tx.hang_remaining(), 0);
        assert_eq!(tx.phase(), TxPhase::Idle);
        assert_eq!(tx.sink().block_count(), data_blocks + 20);

        tx.tick();
        assert_eq!(tx.sink().block_count(), data_blocks + 20);
    }

    #[test]
    fn test_each_data_byte_rearms_hang() {
        let mut tx = YsfTx::new(MemorySink::keyed(SPACE), config(0, 500, true));
        tx.submit_frame(&frame(0x11)).unwrap();
        tx.submit_frame(&frame(0x22)).unwrap();

        tx.tick();
        assert_eq!(tx.hang_remaining(), 500);

        tx.set_deviation_and_hang(false, 1);
        tx.tick();
        assert_eq!(tx.hang_remaining(), 1_200);
    }

    #[test]
    fn test_frame_during_hang() {
        let mut tx = YsfTx::new(MemorySink::keyed(SPACE), config(0, 100, true));
        tx.submit_frame(&frame(0x33)).unwrap();
        while tx.phase() != TxPhase::Hang {
            tx.tick();
        }
        tx.tick();
        let remaining = tx.hang_remaining();
        assert!(remaining < 100);

        tx.submit_frame(&frame(0x44)).unwrap();
        assert_eq!(tx.hang_remaining(), remaining, "submitting leaves hang untouched");

        // Sink is still keyed: the frame goes straight out, no hang silence this tick
        let before = tx.sink().block_count();
        tx.tick();
        assert_eq!(tx.phase(), TxPhase::Data);
        assert_eq!(tx.sink().block_count(), before + BLOCKS_PER_TICK);
        assert_eq!(tx.hang_remaining(), 100, "transmitted data re-arms the hang");
    }

    #[test]
    fn test_consecutive_frames_share_one_preamble() {
        let mut tx = YsfTx::new(MemorySink::new(SPACE), config(5, 0, false));
        tx.submit_frame(&frame(0x01)).unwrap();
        tx.submit_frame(&frame(0x02)).unwrap();

        for _ in 0..100 {
            tx.tick();
        }
        assert_eq!(tx.sink().block_count(), 5 + 2 * FRAME_LENGTH_BYTES);
        assert_eq!(tx.frames_sent(), 2);
        assert_eq!(tx.phase(), TxPhase::Idle);
    }

    #[test]
    fn test_low_deviation_reaches_sink() {
        let mut tx = YsfTx::new(MemorySink::keyed(SPACE), config(0, 0, false));
        tx.set_deviation_and_hang(true, 0);
        tx.submit_frame(&frame(0xFF)).unwrap();
        tx.tick();

        let mut reference = RrcInterpolator::new();
        let expected = reference.interpolate(&map_byte(0xFF, crate::Deviation::Low));
        assert_eq!(tx.sink().blocks()[0].1, expected.to_vec());
    }
}
