//! Loader configuration.

use crate::error::ConfigError;

/// Items requested per page unless configured otherwise.
pub const DEFAULT_PER_PAGE: u32 = 14;
/// Distance from the bottom of the content at which the next page is requested.
pub const DEFAULT_TRIGGER_OFFSET: f32 = 200.0;

/// Immutable settings captured when a loader is initialized.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    pub endpoint: String,
    pub container_id: String,
    pub indicator_id: Option<String>,
    pub per_page: u32,
    pub trigger_offset: f32,
}

impl LoaderConfig {
    pub fn new(endpoint: impl Into<String>, container_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            container_id: container_id.into(),
            indicator_id: None,
            per_page: DEFAULT_PER_PAGE,
            trigger_offset: DEFAULT_TRIGGER_OFFSET,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_trigger_offset(mut self, trigger_offset: f32) -> Self {
        self.trigger_offset = trigger_offset;
        self
    }

    pub fn with_indicator(mut self, indicator_id: impl Into<String>) -> Self {
        self.indicator_id = Some(indicator_id.into());
        self
    }

    /// Check the invariants the loader relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if !self.trigger_offset.is_finite() || self.trigger_offset < 0.0 {
            return Err(ConfigError::InvalidTriggerOffset(self.trigger_offset));
        }
        Ok(())
    }
}
