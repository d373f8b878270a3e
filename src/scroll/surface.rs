//! The host view the loader renders into.
//!
//! A surface holds named list containers and named loading indicators,
//! looked up by id the way a page looks up elements.

use std::collections::HashMap;

/// An append-only list of rendered units.
#[derive(Debug)]
pub struct ListContainer<U> {
    items: Vec<U>,
}

impl<U> Default for ListContainer<U> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<U> ListContainer<U> {
    pub fn append(&mut self, unit: U) {
        self.items.push(unit);
    }

    pub fn items(&self) -> &[U] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Named containers and indicators.
#[derive(Debug)]
pub struct Surface<U> {
    containers: HashMap<String, ListContainer<U>>,
    indicators: HashMap<String, bool>,
}

impl<U> Default for Surface<U> {
    fn default() -> Self {
        Self {
            containers: HashMap::new(),
            indicators: HashMap::new(),
        }
    }
}

impl<U> Surface<U> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty container under `id`.
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.insert(id.into(), ListContainer::default());
        self
    }

    /// Register a hidden indicator under `id`.
    pub fn with_indicator(mut self, id: impl Into<String>) -> Self {
        self.indicators.insert(id.into(), false);
        self
    }

    pub fn container(&self, id: &str) -> Option<&ListContainer<U>> {
        self.containers.get(id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut ListContainer<U>> {
        self.containers.get_mut(id)
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    pub fn has_indicator(&self, id: &str) -> bool {
        self.indicators.contains_key(id)
    }

    /// Visibility of an indicator; unknown ids read as hidden.
    pub fn indicator_visible(&self, id: &str) -> bool {
        self.indicators.get(id).copied().unwrap_or(false)
    }

    /// Set indicator visibility. Unknown ids are ignored.
    pub fn set_indicator(&mut self, id: &str, visible: bool) {
        if let Some(slot) = self.indicators.get_mut(id) {
            *slot = visible;
        }
    }
}
