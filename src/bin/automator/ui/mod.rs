//! TUI module for automator
//!
//! Shows the processed output, the gain curve per block, and lets the user
//! take over the gain from the lane.

pub mod state;
mod gain_history;
mod transport;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

use gain_automator::{automation::message::AutomationMessage, GAIN_PARAM_ID};

pub use state::{ControlMessage, UiStateInit, UiStateUpdate};

use gain_history::{render_gain_history, GainHistory};
use transport::{render_transport, AudioStats};
use waveform::render_waveform;

/// Audio visualization buffer size
const VIS_BUFFER_SIZE: usize = 1024;
/// Blocks kept in the gain chart
const GAIN_HISTORY_LEN: usize = 512;
/// Gain change per arrow key press
const GAIN_NUDGE: f32 = 0.05;

/// UI application state
pub struct UiApp {
    audio_rx: Consumer<f32>,
    state_rx: Consumer<UiStateUpdate>,
    control_tx: Producer<ControlMessage>,
    edit_tx: Producer<AutomationMessage>,
    static_state: UiStateInit,
    /// Latest update from the audio thread
    current_state: UiStateUpdate,
    audio_buffer: Vec<f32>,
    gain_history: GainHistory,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        audio_rx: Consumer<f32>,
        state_rx: Consumer<UiStateUpdate>,
        control_tx: Producer<ControlMessage>,
        edit_tx: Producer<AutomationMessage>,
        static_state: UiStateInit,
        initial_state: UiStateUpdate,
    ) -> Self {
        Self {
            audio_rx,
            state_rx,
            control_tx,
            edit_tx,
            static_state,
            current_state: initial_state,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            gain_history: GainHistory::new(GAIN_HISTORY_LEN),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.poll_state();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Read as many samples as available, keeping the last VIS_BUFFER_SIZE
    fn poll_audio(&mut self) {
        while let Ok(sample) = self.audio_rx.pop() {
            self.audio_buffer.push(sample);
        }

        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    /// Every update is one block, so each lands in the gain chart
    fn poll_state(&mut self) {
        while let Ok(state) = self.state_rx.pop() {
            if state.position < self.current_state.position {
                self.gain_history.clear();
            }
            self.gain_history.push(state.gain);
            self.current_state = state;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => self.nudge_gain(GAIN_NUDGE),
            KeyCode::Down => self.nudge_gain(-GAIN_NUDGE),
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let _ = self.control_tx.push(ControlMessage::ToggleLane);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let _ = self.control_tx.push(ControlMessage::Reset);
            }
            _ => {}
        }
    }

    /// Touching the gain takes it over from the lane
    fn nudge_gain(&mut self, delta: f32) {
        if self.current_state.lane_active {
            let _ = self.control_tx.push(ControlMessage::Touch);
        }

        let value = (self.current_state.gain + delta).clamp(0.0, 1.0);
        if self
            .edit_tx
            .push(AutomationMessage::SetValue {
                id: GAIN_PARAM_ID,
                value,
            })
            .is_ok()
        {
            self.current_state.gain = value;
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: transport, gain chart, waveform, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Transport bar
                Constraint::Min(8),     // Gain history
                Constraint::Length(8),  // Waveform
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_transport(frame, chunks[0], &self.static_state, &self.current_state, &stats);

        render_gain_history(
            frame,
            chunks[1],
            &self.gain_history,
            self.current_state.lane_active,
        );

        render_waveform(frame, chunks[2], &self.audio_buffer);

        let help = Paragraph::new(" [Q] Quit  [↑/↓] Gain  [A] Lane on/off  [R] Reset")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
