use super::timer::CountdownTarget;
use crate::theme;
use chrono::NaiveDateTime;
use eframe::egui::{RichText, Ui};
use std::time::Duration;

/// Render the countdown and schedule the next once-per-second refresh.
///
/// Meant for a right-to-left layout: the time is added first.
pub fn render_countdown(ui: &mut Ui, target: &CountdownTarget, now: NaiveDateTime) {
    let countdown = target.at(now);
    match countdown.label() {
        Some(label) => {
            ui.label(
                RichText::new(countdown.to_string())
                    .monospace()
                    .strong()
                    .color(theme::accent::ORANGE),
            );
            ui.label(RichText::new(label).color(theme::text::SECONDARY));
        }
        None => {
            ui.label(
                RichText::new(countdown.to_string())
                    .strong()
                    .color(theme::state::SUCCESS),
            );
        }
    }

    ui.ctx().request_repaint_after(Duration::from_secs(1));
}
