//! Native Player Roster
//!
//! A desktop client for the 7-a-side roster: an infinitely scrolling
//! player list and the weekly draft countdown.

mod api;
mod app;
mod countdown;
mod error;
mod roster;
mod scroll;
mod settings;
mod theme;

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 900.0])
            .with_title("Player Roster"),
        persist_window: true, // Persist window state between sessions
        ..Default::default()
    };

    eframe::run_native(
        "Player Roster",
        options,
        Box::new(|cc| Ok(Box::new(app::RosterApp::new(cc)))),
    )
}
