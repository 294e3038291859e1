//! TUI module for ysftx
//!
//! Drives the modulator once per UI frame and shows its state next to a
//! scope and spectrum of the samples the audio callback is playing.

mod spectrum;
pub mod state;
mod status;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;
use ysf_tx::{io::RingSink, YsfTx, SAMPLE_RATE};

use crate::feeder::FrameFeeder;

pub use state::TxStatus;

use spectrum::{render_spectrum, SpectrumAnalyzer};
use status::{render_status, AudioStats};
use waveform::render_waveform;

/// Scope buffer size (also the FFT size)
const VIS_BUFFER_SIZE: usize = 1024;
/// One UI frame, and one modulator tick (~60 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// UI application state
pub struct UiApp {
    /// Ring buffer receiver for played samples
    scope_rx: Consumer<f32>,
    /// Sample buffer for visualization
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(scope_rx: Consumer<f32>) -> Self {
        Self {
            scope_rx,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, SAMPLE_RATE as f32),
            should_quit: false,
        }
    }

    /// Run the UI event loop, ticking the modulator once per frame
    pub fn run(
        &mut self,
        terminal: &mut DefaultTerminal,
        tx: &mut YsfTx<RingSink>,
        feeder: &mut FrameFeeder,
    ) -> EyreResult<()> {
        while !self.should_quit {
            feeder.feed(tx);
            tx.tick();

            self.poll_audio();
            self.spectrum.update(&self.audio_buffer);

            let status = TxStatus::capture(tx, feeder);
            terminal.draw(|frame| self.render(frame, &status))?;

            // Handle keyboard input (non-blocking)
            if event::poll(FRAME_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Poll for played samples, keeping the last VIS_BUFFER_SIZE
    fn poll_audio(&mut self) {
        let mut new_samples = Vec::new();
        while let Ok(sample) = self.scope_rx.pop() {
            new_samples.push(sample);
        }

        if !new_samples.is_empty() {
            self.audio_buffer.extend(new_samples);
            if self.audio_buffer.len() > VIS_BUFFER_SIZE {
                let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
                self.audio_buffer.drain(0..excess);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if let KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc = key {
            self.should_quit = true;
        }
    }

    fn render(&self, frame: &mut Frame, status: &TxStatus) {
        let area = frame.area();

        // Main layout: status, scope, spectrum, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(8),    // Scope
                Constraint::Length(10), // Spectrum
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_status(frame, chunks[0], status, &stats);
        render_waveform(frame, chunks[1], &self.audio_buffer, stats.peak);
        render_spectrum(frame, chunks[2], self.spectrum.data());

        let help = if status.is_finished() {
            " All frames sent  [Q] Quit"
        } else {
            " [Q] Quit"
        };
        let help = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
