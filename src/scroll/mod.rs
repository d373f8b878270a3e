//! Infinite scrolling over a paginated listing endpoint.
//!
//! - `loader`: page cursor, re-entrancy guard and result handling
//! - `surface`: named containers and loading indicators the loader writes to
//! - `viewport`: near-bottom detection and scroll events

pub mod config;
pub mod loader;
pub mod page;
pub mod source;
pub mod surface;
pub mod viewport;

pub use config::LoaderConfig;
pub use loader::{ItemRenderer, PageOutcome, PagedListLoader};
pub use page::{PageRequest, PageResponse};
pub use source::PageSource;
pub use surface::Surface;
pub use viewport::{ScrollMetrics, ScrollWatcher};
