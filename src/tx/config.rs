use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{dsp::symbol::Deviation, SYMBOLS_PER_BYTE, SYMBOL_RATE};

/// Longest preamble, in sync bytes (one second).
pub const MAX_PREAMBLE_LEN: u16 = 1_200;
/// Hang steps per unit of the host's hang setting (one second each).
pub const HANG_STEPS_PER_UNIT: u32 = 1_200;

const PREAMBLE_BASE: u16 = 600;
const PREAMBLE_PER_DELAY_UNIT: u16 = 12;

/// Transmitter timing and deviation settings.
///
/// Read by the sequencer whenever it starts a new phase; changing it in the
/// middle of a transmission takes effect at the next phase boundary.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxConfig {
    /// Use the reduced amplitude level set.
    pub low_deviation: bool,
    /// Sync bytes sent before data on a cold transmitter.
    pub preamble_len: u16,
    /// Silence blocks sent after the last frame (duplex only).
    pub hang_steps: u32,
    /// Keep the transmitter keyed across frame gaps using the hang timer.
    pub duplex: bool,
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            low_deviation: false,
            preamble_len: 240, // 200 ms
            hang_steps: 4 * HANG_STEPS_PER_UNIT,
            duplex: true,
        }
    }
}

impl TxConfig {
    /// Preamble length for a host TX delay setting, capped at [`MAX_PREAMBLE_LEN`].
    pub fn preamble_from_delay(delay: u8) -> u16 {
        (PREAMBLE_BASE + delay as u16 * PREAMBLE_PER_DELAY_UNIT).min(MAX_PREAMBLE_LEN)
    }

    pub fn hang_from_units(units: u8) -> u32 {
        units as u32 * HANG_STEPS_PER_UNIT
    }

    pub fn set_preamble_delay(&mut self, delay: u8) {
        self.preamble_len = Self::preamble_from_delay(delay);
    }

    pub fn set_deviation_and_hang(&mut self, low_deviation: bool, hang: u8) {
        self.low_deviation = low_deviation;
        self.hang_steps = Self::hang_from_units(hang);
    }

    pub fn deviation(&self) -> Deviation {
        if self.low_deviation {
            Deviation::Low
        } else {
            Deviation::Normal
        }
    }

    /// Preamble length actually used by the sequencer.
    pub fn effective_preamble_len(&self) -> usize {
        self.preamble_len.min(MAX_PREAMBLE_LEN) as usize
    }

    pub fn preamble_duration(&self) -> Duration {
        byte_duration(self.effective_preamble_len() as u64)
    }

    pub fn hang_duration(&self) -> Duration {
        byte_duration(self.hang_steps as u64)
    }
}

fn byte_duration(bytes: u64) -> Duration {
    let symbols = bytes * SYMBOLS_PER_BYTE as u64;
    Duration::from_micros(symbols * 1_000_000 / SYMBOL_RATE as u64)
}
