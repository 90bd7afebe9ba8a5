//! Transport bar widget - lane position, gain readout, and audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{UiStateInit, UiStateUpdate};

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

/// Render the transport bar
pub fn render_transport(
    frame: &mut Frame,
    area: Rect,
    static_state: &UiStateInit,
    dynamic_state: &UiStateUpdate,
    audio_stats: &AudioStats,
) {
    let block = Block::default()
        .title(" automator ")
        .borders(Borders::ALL);

    let lane_position = dynamic_state.position % static_state.lane_frames.max(1);
    let lane_seconds = lane_position as f32 / static_state.sample_rate;

    let (mode_symbol, mode_str, mode_color) = if dynamic_state.lane_active {
        ("▶", "Lane", Color::Green)
    } else {
        ("✎", "Manual", Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} {}  ", mode_symbol, mode_str),
            Style::default().fg(mode_color),
        ),
        Span::styled(
            format!("Gain: {:.3}  ", dynamic_state.gain),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{:.2}s ({} pts)  ", lane_seconds, static_state.lane_points),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(
                "{:.0}Hz tone  {} frames @ {:.1}kHz  ",
                static_state.frequency,
                static_state.block_size,
                static_state.sample_rate / 1000.0
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Dropped: {}  ", dynamic_state.dropped),
            Style::default().fg(if dynamic_state.dropped > 0 {
                Color::Red
            } else {
                Color::DarkGray
            }),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", audio_stats.peak, audio_stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
