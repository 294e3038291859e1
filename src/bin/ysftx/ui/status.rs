//! Status bar widget - shows phase, queue, hang timer and audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ysf_tx::{Deviation, TxPhase, SAMPLE_RATE};

use super::TxStatus;

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

fn phase_style(phase: TxPhase) -> (&'static str, Color) {
    match phase {
        TxPhase::Idle => ("IDLE", Color::DarkGray),
        TxPhase::Preamble => ("PREAMBLE", Color::Yellow),
        TxPhase::Data => ("DATA", Color::Green),
        TxPhase::Hang => ("HANG", Color::Cyan),
    }
}

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, status: &TxStatus, audio_stats: &AudioStats) {
    let block = Block::default().title(" ysftx ").borders(Borders::ALL);

    let (phase_label, phase_color) = phase_style(status.phase);
    let deviation = match status.deviation {
        Deviation::Normal => "normal",
        Deviation::Low => "low",
    };
    let mode = if status.duplex { "duplex" } else { "simplex" };
    let sample_rate_khz = SAMPLE_RATE as f32 / 1000.0;

    let line = Line::from(vec![
        Span::styled(
            format!(" {:<8} ", phase_label),
            Style::default().fg(phase_color),
        ),
        Span::styled(
            format!("Frames {}/{}  ", status.frames_sent, status.total),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Queue {} ({} free)  ", status.queued, status.queue_free),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Hang {}/{}  ", status.hang_remaining, status.hang_steps),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(
                "Ring {}/{}  ",
                status.ring_pending, status.ring_capacity
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(
                "{} {} pre={}  {:.1}kHz  ",
                mode, deviation, status.preamble_len, sample_rate_khz
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.3}  RMS: {:.3}", audio_stats.peak, audio_stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
