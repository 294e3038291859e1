pub mod dsp; // Symbol mapping and pulse shaping
pub mod io; // Sample sinks and format conversions
pub mod tx; // Frame queue and transmit sequencing

/// Bytes in one YSF frame as handed to the modulator.
pub const FRAME_LENGTH_BYTES: usize = 120;
/// Output samples per symbol (interpolation factor of the shaping filter).
pub const SYMBOL_LENGTH: usize = 10;
/// Symbols carried by one byte (2 bits each).
pub const SYMBOLS_PER_BYTE: usize = 4;
/// Samples produced for one byte of input.
pub const BLOCK_LEN: usize = SYMBOLS_PER_BYTE * SYMBOL_LENGTH;

pub const SYMBOL_RATE: u32 = 4_800;
pub const SAMPLE_RATE: u32 = SYMBOL_RATE * SYMBOL_LENGTH as u32;

pub use dsp::symbol::Deviation;
pub use io::sink::{ModemState, SampleSink};
pub use tx::{
    config::TxConfig,
    error::{Result, TxError},
    sequencer::{TxPhase, YsfTx},
};
