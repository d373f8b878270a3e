//! HTTP client for the roster API.

use crate::error::LoadError;
use crate::scroll::{PageRequest, PageResponse, PageSource};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/players`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch one page of a listing.
    pub fn get_page<T: DeserializeOwned>(
        &self,
        request: &PageRequest,
    ) -> Result<PageResponse<T>, LoadError> {
        let resp = self.client.get(request.url()).send()?;

        if !resp.status().is_success() {
            return Err(LoadError::Status(resp.status().as_u16()));
        }

        let body = resp.text()?;
        PageResponse::from_json(&body)
    }
}

impl<T: DeserializeOwned> PageSource<T> for ApiClient {
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<T>, LoadError> {
        self.get_page(request)
    }
}
