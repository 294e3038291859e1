use crate::io::sink::{ModemState, SampleSink};

/// Recording sink for tests and offline rendering.
///
/// Reports a fixed free space every time it is asked (as if the hardware drained
/// everything between ticks) and keeps every written block with its tag.
pub struct MemorySink {
    space: usize,
    keyed: bool,
    key_on_write: bool,
    blocks: Vec<(ModemState, Vec<i16>)>,
}

impl MemorySink {
    /// Unkeyed sink that keys itself on the first write.
    pub fn new(space: usize) -> Self {
        Self {
            space,
            keyed: false,
            key_on_write: true,
            blocks: Vec::new(),
        }
    }

    /// Sink that is already on air.
    pub fn keyed(space: usize) -> Self {
        Self {
            keyed: true,
            ..Self::new(space)
        }
    }

    /// Never reports keyed unless [`MemorySink::set_keyed`] says so.
    pub fn manual_key(mut self) -> Self {
        self.key_on_write = false;
        self
    }

    pub fn set_space(&mut self, space: usize) {
        self.space = space;
    }

    pub fn set_keyed(&mut self, keyed: bool) {
        self.keyed = keyed;
    }

    pub fn blocks(&self) -> &[(ModemState, Vec<i16>)] {
        &self.blocks
    }

    pub fn take_blocks(&mut self) -> Vec<(ModemState, Vec<i16>)> {
        std::mem::take(&mut self.blocks)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// All written samples, concatenated.
    pub fn samples(&self) -> Vec<i16> {
        self.blocks
            .iter()
            .flat_map(|(_, block)| block.iter().copied())
            .collect()
    }
}

impl SampleSink for MemorySink {
    fn space(&self) -> usize {
        self.space
    }

    fn is_keyed(&self) -> bool {
        self.keyed
    }

    fn write(&mut self, state: ModemState, samples: &[i16]) {
        self.blocks.push((state, samples.to_vec()));
        if self.key_on_write {
            self.keyed = true;
        }
    }
}
