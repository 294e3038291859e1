//! Spectrum analyzer widget
//!
//! FFT-based view of the shaped baseband. The 4FSK signal sits below 3 kHz,
//! so bins are spaced linearly up to [`MAX_FREQ`] instead of across the
//! audio range.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Number of frequency bins to display
const SPECTRUM_BINS: usize = 64;
/// Highest displayed frequency in Hz
const MAX_FREQ: f64 = 6_000.0;

/// Spectrum analyzer with FFT processing
pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f32>,
    /// FFT bin indices for each displayed frequency
    bin_indices: Vec<usize>,
    fft: Arc<dyn Fft<f32>>,
    /// Scratch buffer for FFT computation
    scratch: Vec<Complex<f32>>,
    /// Current spectrum data: (frequency_hz, magnitude_db)
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// # Arguments
    /// * `buffer_len` - FFT size (should match the scope buffer length)
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer_len);

        // Hann window - reduces spectral leakage
        let window: Vec<f32> = (0..buffer_len)
            .map(|i| {
                if buffer_len > 1 {
                    let denom = (buffer_len - 1) as f32;
                    0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / denom).cos())
                } else {
                    1.0
                }
            })
            .collect();

        let max_freq = MAX_FREQ.min(sample_rate as f64 / 2.0);
        let half = (buffer_len / 2).max(1);

        let mut bin_indices = Vec::with_capacity(SPECTRUM_BINS);
        let mut spectrum = Vec::with_capacity(SPECTRUM_BINS);
        for i in 0..SPECTRUM_BINS {
            let freq = max_freq * i as f64 / (SPECTRUM_BINS - 1) as f64;
            let index = ((freq * buffer_len as f64 / sample_rate as f64).round() as usize).min(half - 1);
            bin_indices.push(index);
            spectrum.push((freq, -120.0));
        }

        let scratch = vec![Complex::new(0.0, 0.0); buffer_len];

        Self {
            window,
            bin_indices,
            fft,
            scratch,
            spectrum,
        }
    }

    /// Update the spectrum from new samples
    ///
    /// Ignores buffers whose length does not match the FFT size.
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        // Apply window and prepare for FFT
        for ((bin, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            bin.re = sample * w;
            bin.im = 0.0;
        }

        self.fft.process(&mut self.scratch);

        for ((_, magnitude_db), &index) in self.spectrum.iter_mut().zip(&self.bin_indices) {
            let bin = self.scratch[index];
            let power = (bin.re * bin.re + bin.im * bin.im).max(1e-12);
            *magnitude_db = 10.0 * (power as f64).log10();
        }
    }

    /// Get the current spectrum data
    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

/// Render the spectrum analyzer widget
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default()
        .title(" Spectrum (0-6 kHz) ")
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let max_db = spectrum
        .iter()
        .map(|(_, db)| *db)
        .fold(-100.0, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, MAX_FREQ])
                .labels(vec!["0", "3k", "6k"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-100.0, max_db.max(0.0) + 10.0])
                .labels(vec!["-100", "-60", "-20", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
