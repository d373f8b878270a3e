//! Viewport observation for infinite scrolling.

/// Scroll geometry of a list, in layout points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Height of the visible area.
    pub viewport_height: f32,
    /// Distance scrolled from the top.
    pub scroll_offset: f32,
    /// Total height of the scrollable content.
    pub content_height: f32,
}

impl ScrollMetrics {
    /// Whether the bottom of the viewport is within `trigger_offset` of the end.
    pub fn near_bottom(&self, trigger_offset: f32) -> bool {
        self.viewport_height + self.scroll_offset >= self.content_height - trigger_offset
    }
}

/// Turns per-frame scroll geometry into scroll events.
///
/// Immediate mode UIs report geometry every frame; an event is only
/// emitted when the vertical offset actually moved.
#[derive(Debug, Default)]
pub struct ScrollWatcher {
    last_offset: Option<f32>,
}

impl ScrollWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this frame's geometry, returning it when the user scrolled.
    pub fn observe(&mut self, metrics: ScrollMetrics) -> Option<ScrollMetrics> {
        let moved = match self.last_offset {
            Some(last) => (last - metrics.scroll_offset).abs() > f32::EPSILON,
            None => false,
        };
        self.last_offset = Some(metrics.scroll_offset);
        moved.then_some(metrics)
    }
}
