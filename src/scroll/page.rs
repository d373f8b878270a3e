//! Page requests and responses for the listing endpoint.

use crate::error::LoadError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// One request against a paginated listing endpoint. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub endpoint: String,
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Full request URL, `<endpoint>?page=<n>&per_page=<m>`.
    pub fn url(&self) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}page={}&per_page={}",
            self.endpoint, separator, self.page, self.per_page
        )
    }
}

/// Body of a listing response as sent over the wire. Records stay raw so
/// one bad record cannot fail the page.
#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(alias = "players")]
    items: Option<Vec<serde_json::Value>>,
    has_more: Option<bool>,
}

/// One page of items plus the continuation flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T: DeserializeOwned> PageResponse<T> {
    /// Parse a response body.
    ///
    /// Missing `items` means an empty page and missing `has_more` means the
    /// listing is exhausted. Records that do not decode are skipped.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        let raw: RawPage = serde_json::from_str(body)?;

        let mut items = Vec::new();
        for (index, value) in raw.items.unwrap_or_default().into_iter().enumerate() {
            match serde_json::from_value(value) {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!("Skipping record {} of page: {}", index, e),
            }
        }

        Ok(Self {
            items,
            has_more: raw.has_more.unwrap_or(false),
        })
    }
}
