use rtrb::{Consumer, Producer, RingBuffer};

use crate::{
    tx::error::{Result, TxError},
    FRAME_LENGTH_BYTES,
};

/// One protocol frame, exactly as it goes to air.
pub type Frame = [u8; FRAME_LENGTH_BYTES];

/// Default queue depth: a 2000 byte transmit buffer worth of frames.
pub const DEFAULT_QUEUE_FRAMES: usize = 16;

/// Bounded FIFO of frames waiting for the sequencer.
///
/// Backed by a single-producer/single-consumer ring. Both ends live here, so
/// callers sharing a modulator across threads must serialise access themselves.
/// Enqueue never overwrites: a full queue rejects the frame.
pub struct FrameQueue {
    tx: Producer<Frame>,
    rx: Consumer<Frame>,
}

impl FrameQueue {
    /// Capacity of zero is rounded up to one frame.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = RingBuffer::<Frame>::new(capacity.max(1));
        Self { tx, rx }
    }

    pub fn enqueue(&mut self, frame: Frame) -> Result<()> {
        let capacity = self.capacity();
        self.tx
            .push(frame)
            .map_err(|_| TxError::QueueFull { capacity })
    }

    pub fn dequeue(&mut self) -> Option<Frame> {
        self.rx.pop().ok()
    }

    /// Frames that can still be enqueued.
    #[inline]
    pub fn available_slots(&self) -> usize {
        self.tx.slots()
    }

    #[inline]
    pub fn queued_count(&self) -> usize {
        self.rx.slots()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.tx.buffer().capacity()
    }
}
