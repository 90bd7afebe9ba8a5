//! Output scope: the processed tone with its peak envelope traced over it.
//!
//! The test tone has a fixed level, so the envelope is the gain curve the
//! processor applied, scaled by that level.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Frames per envelope point; a few tone periods at audio rates
const ENVELOPE_WINDOW: usize = 64;

/// Peak of each `window`-frame slice, placed at the slice centre on a 0..1 axis
fn peak_envelope(samples: &[f32], window: usize) -> Vec<(f64, f64)> {
    let len = samples.len() as f64;
    samples
        .chunks(window.max(1))
        .enumerate()
        .map(|(i, chunk)| {
            let peak = chunk.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));
            let centre = (i * window) as f64 + chunk.len() as f64 / 2.0;
            (centre / len, peak as f64)
        })
        .collect()
}

pub fn render_waveform(frame: &mut Frame, area: Rect, audio_buffer: &[f32]) {
    let block = Block::default()
        .title(" Output / envelope ")
        .borders(Borders::ALL);

    let len = audio_buffer.len().max(1) as f64;
    let signal: Vec<(f64, f64)> = audio_buffer
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64 / len, sample as f64))
        .collect();
    let envelope = peak_envelope(audio_buffer, ENVELOPE_WINDOW);

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&signal),
        Dataset::default()
            .name("peak")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&envelope),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(Axis::default().bounds([0.0, 1.0]))
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
