//! Main application state and UI.

use crate::api::ApiClient;
use crate::countdown::{render_countdown, CountdownTarget, DraftWindow};
use crate::roster::{render_player_list, ListFooter, Player, PlayerRow, PlayerRowRenderer};
use crate::scroll::{LoaderConfig, PageOutcome, PagedListLoader, ScrollWatcher, Surface};
use crate::settings::Settings;
use crate::theme;
use chrono::{Local, NaiveDateTime};
use eframe::egui::{self, RichText};
use std::sync::Arc;

const PLAYER_LIST: &str = "playerList";
const LOADING: &str = "loading";

type PlayerLoader = PagedListLoader<Player, PlayerRowRenderer>;

/// Main roster application
pub struct RosterApp {
    settings: Settings,
    surface: Surface<PlayerRow>,
    /// Configuration errors are shown in place of the list.
    loader: Result<PlayerLoader, String>,
    scroll_watcher: ScrollWatcher,
    /// Draft window pinned in settings, if any
    fixed_draft: Option<CountdownTarget>,
}

impl RosterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(Settings::load())
    }

    fn with_settings(settings: Settings) -> Self {
        let surface = Surface::new()
            .with_container(PLAYER_LIST)
            .with_indicator(LOADING);

        let api = ApiClient::new(settings.api_base.as_str());
        let config = LoaderConfig::new(api.endpoint(&settings.players_path), PLAYER_LIST)
            .with_indicator(LOADING)
            .with_per_page(settings.per_page)
            .with_trigger_offset(settings.trigger_offset);
        let renderer = PlayerRowRenderer::new(api.base_url());

        let loader = PagedListLoader::initialize(config, Arc::new(api), renderer, &surface)
            .map_err(|e| {
                tracing::error!("Invalid player list configuration: {}", e);
                e.to_string()
            });

        let fixed_draft = fixed_draft_target(&settings);

        Self {
            settings,
            surface,
            loader,
            scroll_watcher: ScrollWatcher::new(),
            fixed_draft,
        }
    }

    fn countdown_target(&self, now: NaiveDateTime) -> CountdownTarget {
        self.fixed_draft.unwrap_or_else(|| {
            CountdownTarget::from_window(DraftWindow::upcoming(now), self.settings.draft_complete)
        })
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Players");
            let loaded = match self.surface.container(PLAYER_LIST) {
                Some(list) if !list.is_empty() => format!("{} loaded", list.len()),
                _ => "none loaded yet".to_string(),
            };
            ui.label(RichText::new(loaded).small().color(theme::text::MUTED));
            if let Ok(loader) = &self.loader {
                if loader.is_loading() {
                    ui.label(
                        RichText::new(format!("fetching page {}", loader.current_page()))
                            .small()
                            .color(theme::text::MUTED),
                    );
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let now = Local::now().naive_local();
                render_countdown(ui, &self.countdown_target(now), now);
            });
        });
    }

    fn render_list(&mut self, ui: &mut egui::Ui) {
        let loader = match &mut self.loader {
            Ok(loader) => loader,
            Err(e) => {
                ui.colored_label(theme::state::ERROR, format!("Cannot load players: {}", e));
                return;
            }
        };

        let footer = list_footer(
            self.surface.indicator_visible(LOADING),
            loader.is_loading(),
            loader.has_more(),
        );
        let rows = self
            .surface
            .container(PLAYER_LIST)
            .map_or(&[][..], |list| list.items());
        let metrics = render_player_list(ui, rows, footer);

        if let Some(metrics) = self.scroll_watcher.observe(metrics) {
            loader.on_scroll(metrics, &mut self.surface);
        }
    }
}

/// Parse the pinned draft window from settings. Bad timestamps are logged
/// once and the weekly schedule is used instead.
fn fixed_draft_target(settings: &Settings) -> Option<CountdownTarget> {
    let (Some(start), Some(end)) = (&settings.draft_start, &settings.draft_end) else {
        return None;
    };
    match CountdownTarget::parse(start, end, settings.draft_complete) {
        Ok(target) => Some(target),
        Err(e) => {
            tracing::warn!("Ignoring pinned draft window: {}", e);
            None
        }
    }
}

/// Footer under the list. The animated placeholder only runs while a
/// request is in flight; a visible indicator on an idle loader is static.
fn list_footer(indicator_visible: bool, loading: bool, has_more: bool) -> ListFooter {
    if loading {
        ListFooter::Loading
    } else if indicator_visible {
        ListFooter::More
    } else if !has_more {
        ListFooter::Exhausted
    } else {
        ListFooter::None
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(loader) = &mut self.loader {
            // First frame is the "ready" moment; later calls are no-ops.
            loader.on_ready(&mut self.surface);

            match loader.poll(&mut self.surface) {
                Some(PageOutcome::Appended { page, count, has_more }) => {
                    let tail = if has_more { "" } else { ", end of list" };
                    tracing::info!(
                        "Loaded page {} of {} ({} players{})",
                        page,
                        loader.config().endpoint,
                        count,
                        tail
                    );
                    ctx.request_repaint();
                }
                Some(PageOutcome::Failed { page, error }) => {
                    tracing::warn!("Page {} not loaded ({}), scroll to retry", page, error);
                    ctx.request_repaint();
                }
                None => {}
            }
            if loader.is_loading() {
                // Still loading, request repaint to check again
                ctx.request_repaint();
            }
        }

        // Dark theme
        ctx.set_visuals(egui::Visuals::dark());

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none()
                .fill(theme::bg::PANEL)
                .inner_margin(egui::Margin::symmetric(12.0, 8.0)))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none()
                .fill(theme::bg::WINDOW)
                .inner_margin(egui::Margin::same(12.0)))
            .show(ctx, |ui| {
                self.render_list(ui);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Ok(loader) = &mut self.loader {
            loader.detach(&mut self.surface);
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
