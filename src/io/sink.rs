/// Channel tag attached to every block written to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModemState {
    Ysf,
}

/// Downstream consumer of modulated samples (radio DAC feed, audio device, test double).
///
/// The sequencer asks for free space once per tick and then writes blocks while
/// its local copy of that figure allows, so `write` must accept every block that
/// fits in the last reported space without blocking.
pub trait SampleSink {
    /// Samples that can be written right now.
    fn space(&self) -> usize;

    /// Whether the transmitter is already on air.
    ///
    /// A keyed sink skips the preamble for the next frame.
    fn is_keyed(&self) -> bool;

    fn write(&mut self, state: ModemState, samples: &[i16]);
}

impl<S: SampleSink + ?Sized> SampleSink for &mut S {
    fn space(&self) -> usize {
        (**self).space()
    }

    fn is_keyed(&self) -> bool {
        (**self).is_keyed()
    }

    fn write(&mut self, state: ModemState, samples: &[i16]) {
        (**self).write(state, samples)
    }
}

/// Allow boxed sinks to be used as sinks (for dynamic dispatch)
impl<S: SampleSink + ?Sized> SampleSink for Box<S> {
    fn space(&self) -> usize {
        (**self).space()
    }

    fn is_keyed(&self) -> bool {
        (**self).is_keyed()
    }

    fn write(&mut self, state: ModemState, samples: &[i16]) {
        (**self).write(state, samples)
    }
}
