use super::page::{PageRequest, PageResponse};
use crate::error::LoadError;

/// Anything that can fetch one page of a listing.
///
/// The loader calls [`fetch_page`](PageSource::fetch_page) on a worker
/// thread, so implementations block freely but must be `Send + Sync`.
pub trait PageSource<T>: Send + Sync {
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<T>, LoadError>;
}
