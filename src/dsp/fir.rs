/// Polyphase FIR interpolator over q15 samples.
///
/// Each input sample produces `factor` output samples. The filter keeps the last
/// `taps / factor` inputs as history so consecutive calls continue the same
/// waveform: processing a block in one call or split across several calls gives
/// identical output.
///
/// Coefficients are q15 and laid out as a single prototype filter of
/// `phase_len * factor` taps. Products accumulate in 64 bits and are scaled back
/// with a saturating `>> 15`.
pub struct FirInterpolator {
    coeffs: Vec<i16>,
    factor: usize,
    phase_len: usize,
    history: Vec<i16>, // oldest first
}

impl FirInterpolator {
    /// # Panics
    /// Panics if `factor` is zero or `coeffs.len()` is not a non-zero multiple of `factor`.
    pub fn new(coeffs: &[i16], factor: usize) -> Self {
        assert!(factor > 0, "interpolation factor must be non-zero");
        assert!(
            !coeffs.is_empty() && coeffs.len() % factor == 0,
            "tap count {} must be a non-zero multiple of factor {}",
            coeffs.len(),
            factor
        );

        let phase_len = coeffs.len() / factor;

        Self {
            coeffs: coeffs.to_vec(),
            factor,
            phase_len,
            history: vec![0; phase_len],
        }
    }

    #[inline]
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Number of input samples remembered between calls.
    #[inline]
    pub fn phase_len(&self) -> usize {
        self.phase_len
    }

    /// Push one input sample and write its `factor` output samples into `out`.
    pub fn next_sample(&mut self, sample: i16, out: &mut [i16]) {
        debug_assert_eq!(out.len(), self.factor);

        self.history.copy_within(1.., 0);
        self.history[self.phase_len - 1] = sample;

        for (phase, slot) in out.iter_mut().enumerate() {
            let offset = self.factor - 1 - phase;
            let acc: i64 = self
                .history
                .iter()
                .zip(self.coeffs[offset..].iter().step_by(self.factor))
                .map(|(&x, &h)| x as i64 * h as i64)
                .sum();

            *slot = (acc >> 15).clamp(i16::MIN as i64, i16::MAX as i64) as i16;
        }
    }

    /// # Panics
    /// Panics if `output.len() != input.len() * factor`.
    pub fn process(&mut self, input: &[i16], output: &mut [i16]) {
        assert_eq!(
            output.len(),
            input.len() * self.factor,
            "output must hold factor x input samples"
        );

        for (&sample, out) in input.iter().zip(output.chunks_exact_mut(self.factor)) {
            self.next_sample(sample, out);
        }
    }
}
