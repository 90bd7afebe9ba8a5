//! Gain history widget - one point per processed block

use std::collections::VecDeque;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Rolling window of block-end gain values
pub struct GainHistory {
    values: VecDeque<f32>,
    capacity: usize,
}

impl GainHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, gain: f32) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(gain);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &g)| (i as f64, g as f64))
            .collect()
    }
}

/// Render the gain curve, newest block on the right
pub fn render_gain_history(
    frame: &mut Frame,
    area: Rect,
    history: &GainHistory,
    lane_active: bool,
) {
    let title = if lane_active {
        " Gain (lane) "
    } else {
        " Gain (manual) "
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let color = if lane_active { Color::Green } else { Color::Yellow };
    let data = history.points();
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, history.capacity as f64])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .labels([Span::raw("0.0"), Span::raw("0.5"), Span::raw("1.0")])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_newest_values() {
        let mut history = GainHistory::new(3);
        for gain in [0.1, 0.2, 0.3, 0.4] {
            history.push(gain);
        }

        let expected = vec![
            (0.0, 0.2f32 as f64),
            (1.0, 0.3f32 as f64),
            (2.0, 0.4f32 as f64),
        ];
        assert_eq!(history.points(), expected);
    }
}
