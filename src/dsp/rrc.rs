use crate::{dsp::fir::FirInterpolator, BLOCK_LEN, SYMBOLS_PER_BYTE, SYMBOL_LENGTH};

/// Square-root raised cosine, roll-off 0.2, span 8 symbols, 10 samples per symbol.
///
/// q15, peak normalised to full scale. The leading nine zeros pad the 81-tap
/// design out to a whole number of polyphase branches.
pub const RRC_0_2_TAPS: [i16; 90] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 850, 592, 219, -234, -720, -1179, -1548, -1769, -1795, -1597,
    -1172, -544, 237, 1092, 1927, 2637, 3120, 3286, 3073, 2454, 1447, 116, -1431, -3043, -4544,
    -5739, -6442, -6483, -5735, -4121, -1633, 1669, 5651, 10118, 14822, 19484, 23810, 27520,
    30367, 32156, 32767, 32156, 30367, 27520, 23810, 19484, 14822, 10118, 5651, 1669, -1633,
    -4121, -5735, -6483, -6442, -5739, -4544, -3043, -1431, 116, 1447, 2454, 3073, 3286, 3120,
    2637, 1927, 1092, 237, -544, -1172, -1597, -1795, -1769, -1548, -1179, -720, -234, 219, 592,
    850,
];

/// Pulse-shaping filter for one byte (four symbols) at a time.
///
/// Filter memory lives for as long as the interpolator does. Silence goes through
/// the same path as data so the tail of the last symbols rings out instead of
/// being cut off.
pub struct RrcInterpolator {
    fir: FirInterpolator,
}

impl RrcInterpolator {
    pub fn new() -> Self {
        Self {
            fir: FirInterpolator::new(&RRC_0_2_TAPS, SYMBOL_LENGTH),
        }
    }

    pub fn interpolate(&mut self, symbols: &[i16; SYMBOLS_PER_BYTE]) -> [i16; BLOCK_LEN] {
        let mut out = [0i16; BLOCK_LEN];
        self.fir.process(symbols, &mut out);
        out
    }

    /// Shape four zero symbols.
    pub fn silence(&mut self) -> [i16; BLOCK_LEN] {
        self.interpolate(&[0; SYMBOLS_PER_BYTE])
    }
}

impl Default for RrcInterpolator {
    fn default() -> Self {
        Self::new()
    }
}
