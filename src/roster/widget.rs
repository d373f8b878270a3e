//! Player list widget.

use super::row::PlayerRow;
use crate::scroll::ScrollMetrics;
use crate::theme;
use eframe::egui::{self, RichText, ScrollArea, Ui};

/// What to show below the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFooter {
    None,
    /// A page request is in flight.
    Loading,
    /// Idle, but the server has more pages.
    More,
    Exhausted,
}

/// Render the scrolling player list and report its scroll geometry.
pub fn render_player_list(ui: &mut Ui, rows: &[PlayerRow], footer: ListFooter) -> ScrollMetrics {
    let output = ScrollArea::vertical()
        .id_salt("player_list_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if rows.is_empty() && footer != ListFooter::Loading {
                ui.label(
                    RichText::new("No players found")
                        .color(theme::text::MUTED)
                        .italics(),
                );
            }

            for row in rows {
                render_player_row(ui, row);
                ui.add_space(4.0);
            }

            match footer {
                ListFooter::Loading => {
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Loading players...").color(theme::text::MUTED));
                    });
                    ui.add_space(4.0);
                    let width = ui.available_width().min(320.0);
                    theme::skeleton_lines(ui, 2, width);
                }
                ListFooter::More => {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Scroll for more")
                            .small()
                            .color(theme::text::MUTED),
                    );
                }
                ListFooter::Exhausted if !rows.is_empty() => {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("All {} players loaded", rows.len()))
                            .small()
                            .color(theme::text::MUTED),
                    );
                }
                _ => {}
            }
        });

    ScrollMetrics {
        viewport_height: output.inner_rect.height(),
        scroll_offset: output.state.offset.y,
        content_height: output.content_size.y,
    }
}

/// Render a single player row.
fn render_player_row(ui: &mut Ui, row: &PlayerRow) {
    egui::Frame::none()
        .fill(theme::bg::SURFACE)
        .stroke(theme::stroke(theme::border::SUBTLE, 1.0))
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(&row.name).strong().color(theme::text::PRIMARY));
                ui.label(
                    RichText::new(format!("({})", row.position)).color(theme::text::SECONDARY),
                );
                if row.is_captain {
                    ui.label(
                        RichText::new(" Captain ")
                            .small()
                            .color(egui::Color32::WHITE)
                            .background_color(theme::accent::BLUE),
                    );
                }
            });

            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(&row.details)
                        .small()
                        .color(theme::text::SECONDARY),
                );
                let avail_color = if row.available {
                    theme::state::SUCCESS
                } else {
                    theme::text::MUTED
                };
                ui.label(
                    RichText::new(row.availability_label())
                        .small()
                        .strong()
                        .color(avail_color),
                );
            });

            ui.horizontal(|ui| {
                if ui.small_button("Profile").clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(&row.profile_url));
                }
                ui.menu_button("Share", |ui| {
                    ui.hyperlink_to("WhatsApp", &row.share.whatsapp);
                    ui.hyperlink_to("Email", &row.share.email);
                    ui.separator();
                    if ui.button("Copy").clicked() {
                        ui.ctx().copy_text(row.share.clipboard.clone());
                        tracing::info!("Copied login info for {}", row.name);
                        ui.close_menu();
                    }
                });
            });
        });
}
