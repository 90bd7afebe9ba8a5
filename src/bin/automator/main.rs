//! automator - Terminal gain automation demo
//!
//! Plays a test tone whose gain follows a looping automation lane.
//! Run with: cargo run --bin automator

mod app;
mod lane;
mod tone;
mod ui;

use app::Automator;
use lane::AutomationLane;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Two seconds at 48 kHz: swell, hold, quick duck, slow release
    let lane = AutomationLane::new(96_000)
        .point(0, 0.1)
        .point(24_000, 0.9)
        .point(48_000, 0.9)
        .point(50_000, 0.2)
        .point(72_000, 0.2)
        .point(95_999, 0.1);

    Automator::new()
        .frequency(220.0)
        .block_size(256)
        .lane(lane)
        .run()
}
