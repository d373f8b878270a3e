//! Color constants and loading placeholders for the roster UI.
//!
//! Widgets take their colors from here so the list, header and
//! countdown stay consistent.

use egui::Color32;

/// Background colors for different layers
pub mod bg {
    use super::*;

    /// Main window background - darkest layer
    pub const WINDOW: Color32 = Color32::from_rgb(14, 17, 23);

    /// Header panel background
    pub const PANEL: Color32 = Color32::from_rgb(20, 22, 28);

    /// Player row background
    pub const SURFACE: Color32 = Color32::from_rgb(28, 30, 38);
}

/// Accent colors
pub mod accent {
    use super::*;

    /// Countdown digits
    pub const ORANGE: Color32 = Color32::from_rgb(255, 149, 0);

    /// Availability and open draft
    pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);

    /// Captain badge
    pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);

    /// Errors
    pub const RED: Color32 = Color32::from_rgb(239, 68, 68);
}

/// Text colors at different emphasis levels
pub mod text {
    use super::*;

    /// Primary text - high contrast
    pub const PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);

    /// Secondary text - medium contrast
    pub const SECONDARY: Color32 = Color32::from_rgb(180, 180, 190);

    /// Muted text - low contrast for less important info
    pub const MUTED: Color32 = Color32::from_rgb(120, 125, 135);
}

/// Border colors
pub mod border {
    use super::*;

    /// Row outline
    pub const SUBTLE: Color32 = Color32::from_rgb(45, 48, 55);
}

/// State colors
pub mod state {
    /// Success indicator
    pub const SUCCESS: super::Color32 = super::accent::GREEN;

    /// Error indicator
    pub const ERROR: super::Color32 = super::accent::RED;
}

/// Skeleton loading placeholder colors
pub mod skeleton {
    use super::*;

    /// Base skeleton background
    pub const BASE: Color32 = Color32::from_rgb(35, 38, 48);

    /// Animated shimmer highlight
    pub const SHIMMER: Color32 = Color32::from_rgb(50, 53, 63);
}

/// Helper to create a stroke with consistent styling
pub fn stroke(color: Color32, width: f32) -> egui::Stroke {
    egui::Stroke::new(width, color)
}

/// Create a skeleton rectangle for loading placeholders
pub fn skeleton_rect(ui: &mut egui::Ui, width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::Vec2::new(width, height),
        egui::Sense::hover(),
    );

    // Animate the shimmer effect
    let time = ui.ctx().input(|i| i.time);
    let phase = (time * 2.0).sin() * 0.5 + 0.5; // 0 to 1 oscillation

    ui.painter().rect_filled(rect, 4.0, shimmer_color(phase as f32));
    ui.ctx().request_repaint(); // Keep animating
}

/// Create multiple skeleton lines (for row placeholders)
pub fn skeleton_lines(ui: &mut egui::Ui, count: usize, base_width: f32) {
    for i in 0..count {
        // Vary widths for visual interest
        let width_factor = match i % 3 {
            0 => 1.0,
            1 => 0.85,
            _ => 0.7,
        };
        skeleton_rect(ui, base_width * width_factor, 14.0);
        if i + 1 < count {
            ui.add_space(4.0);
        }
    }
}

/// Interpolate between the skeleton base and shimmer colors.
fn shimmer_color(phase: f32) -> Color32 {
    Color32::from_rgb(
        lerp_u8(skeleton::BASE.r(), skeleton::SHIMMER.r(), phase),
        lerp_u8(skeleton::BASE.g(), skeleton::SHIMMER.g(), phase),
        lerp_u8(skeleton::BASE.b(), skeleton::SHIMMER.b(), phase),
    )
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let result = a as f32 + (b as f32 - a as f32) * t;
    result.clamp(0.0, 255.0) as u8
}
