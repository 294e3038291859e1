#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SYMBOLS_PER_BYTE;

/*
| dibit | normal | low   |
| ----- | ------ | ----- |
| 11    | +1893  | +948  |
| 10    | +631   | +316  |
| 00    | -631   | -316  |
| 01    | -1893  | -948  |
*/

const LEVELS_NORMAL: [i16; 4] = [1893, 631, -631, -1893];
const LEVELS_LOW: [i16; 4] = [948, 316, -316, -948];

/// Deviation level set used for the 4FSK symbol amplitudes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Deviation {
    #[default]
    Normal,
    Low,
}

impl Deviation {
    /// q15 amplitude for the low two bits of `dibit`.
    #[inline]
    pub fn level(self, dibit: u8) -> i16 {
        let levels = match self {
            Deviation::Normal => &LEVELS_NORMAL,
            Deviation::Low => &LEVELS_LOW,
        };

        match dibit & 0b11 {
            0b11 => levels[0],
            0b10 => levels[1],
            0b00 => levels[2],
            _ => levels[3],
        }
    }
}

/// Split a byte into four symbols, most significant dibit first.
#[inline]
pub fn map_byte(byte: u8, deviation: Deviation) -> [i16; SYMBOLS_PER_BYTE] {
    let mut symbols = [0i16; SYMBOLS_PER_BYTE];
    for (i, symbol) in symbols.iter_mut().enumerate() {
        let shift = 6 - 2 * i;
        *symbol = deviation.level(byte >> shift);
    }
    symbols
}
