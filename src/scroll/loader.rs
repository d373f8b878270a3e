//! Infinite scroll page loader.
//!
//! Requests pages of a listing one at a time and appends the rendered items
//! to a container on the [`Surface`]:
//! - Re-entrancy: a page request is never issued while another is in flight
//! - Termination: once the server reports `has_more = false` nothing else is fetched
//! - Failures are logged and leave the page counter untouched, so the next
//!   scroll event retries the same page

use super::config::LoaderConfig;
use super::page::{PageRequest, PageResponse};
use super::source::PageSource;
use super::surface::Surface;
use super::viewport::ScrollMetrics;
use crate::error::{ConfigError, LoadError};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;

/// Turns one listing record into something the surface can hold.
pub trait ItemRenderer<T> {
    type Unit;

    fn render(&self, item: &T) -> Self::Unit;
}

/// Pagination cursor and guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderState {
    /// Next page to request (1-based).
    pub current_page: u32,
    /// A page request is in flight.
    pub loading: bool,
    /// The server may have more pages.
    pub has_more: bool,
}

impl Default for LoaderState {
    fn default() -> Self {
        Self {
            current_page: 1,
            loading: false,
            has_more: true,
        }
    }
}

/// What happened to a completed page request.
#[derive(Debug)]
pub enum PageOutcome {
    Appended {
        page: u32,
        count: usize,
        has_more: bool,
    },
    Failed {
        page: u32,
        error: LoadError,
    },
}

type PageResult<T> = Result<PageResponse<T>, LoadError>;

/// Loads successive pages into a container as the user scrolls.
pub struct PagedListLoader<T, R: ItemRenderer<T>> {
    config: LoaderConfig,
    source: Arc<dyn PageSource<T>>,
    renderer: R,
    state: LoaderState,
    /// Container id, if it existed when the loader was initialized.
    container: Option<String>,
    /// Indicator id, if it existed when the loader was initialized.
    indicator: Option<String>,
    ready_fired: bool,
    detached: bool,
    receiver: Option<Receiver<PageResult<T>>>,
}

impl<T, R> PagedListLoader<T, R>
where
    T: Send + 'static,
    R: ItemRenderer<T>,
{
    /// Validate `config` and resolve its targets against `surface`.
    ///
    /// Missing targets are tolerated: without a container, non-empty pages
    /// fail; without an indicator, visibility updates are skipped.
    pub fn initialize(
        config: LoaderConfig,
        source: Arc<dyn PageSource<T>>,
        renderer: R,
        surface: &Surface<R::Unit>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let container = if surface.has_container(&config.container_id) {
            Some(config.container_id.clone())
        } else {
            tracing::warn!(
                "Container '{}' not found, items cannot be displayed",
                config.container_id
            );
            None
        };

        let indicator = match &config.indicator_id {
            Some(id) if surface.has_indicator(id) => Some(id.clone()),
            Some(id) => {
                tracing::debug!("Loading indicator '{}' not found", id);
                None
            }
            None => None,
        };

        tracing::info!(
            "Infinite scroll on {} ({} per page, trigger at {})",
            config.endpoint,
            config.per_page,
            config.trigger_offset
        );

        Ok(Self {
            config,
            source,
            renderer,
            state: LoaderState::default(),
            container,
            indicator,
            ready_fired: false,
            detached: false,
            receiver: None,
        })
    }

    /// One-time trigger for when the host view has finished loading.
    pub fn on_ready(&mut self, surface: &mut Surface<R::Unit>) -> bool {
        if self.ready_fired {
            return false;
        }
        self.ready_fired = true;
        self.load_more(surface)
    }

    /// Scroll event. Requests the next page when close to the bottom.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, surface: &mut Surface<R::Unit>) -> bool {
        if self.detached || !metrics.near_bottom(self.config.trigger_offset) {
            return false;
        }
        self.load_more(surface)
    }

    /// Start fetching the current page. Returns whether a request was issued.
    pub fn load_more(&mut self, surface: &mut Surface<R::Unit>) -> bool {
        if self.detached || self.state.loading || !self.state.has_more {
            return false;
        }

        // Set before the request leaves this thread.
        self.state.loading = true;
        if let Some(id) = &self.indicator {
            surface.set_indicator(id, true);
        }

        let request = PageRequest {
            endpoint: self.config.endpoint.clone(),
            page: self.state.current_page,
            per_page: self.config.per_page,
        };
        tracing::debug!("Requesting {}", request.url());

        let (tx, rx) = mpsc::channel();
        self.receiver = Some(rx);

        let source = Arc::clone(&self.source);
        std::thread::spawn(move || {
            let result = source.fetch_page(&request);
            let _ = tx.send(result);
        });

        true
    }

    /// Apply a finished page request, if there is one. Never blocks.
    pub fn poll(&mut self, surface: &mut Surface<R::Unit>) -> Option<PageOutcome> {
        let rx = self.receiver.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(LoadError::WorkerGone),
        };
        self.receiver = None;

        let page = self.state.current_page;
        let outcome = match result.and_then(|response| self.append_page(response, surface)) {
            Ok(count) => {
                tracing::debug!(
                    "Page {} appended {} items (has_more: {})",
                    page,
                    count,
                    self.state.has_more
                );
                PageOutcome::Appended {
                    page,
                    count,
                    has_more: self.state.has_more,
                }
            }
            Err(error) => {
                tracing::error!("Infinite scroll error on page {}: {}", page, error);
                PageOutcome::Failed { page, error }
            }
        };

        // Cleared on success and failure alike.
        self.state.loading = false;
        if let Some(id) = &self.indicator {
            surface.set_indicator(id, self.state.has_more);
        }

        Some(outcome)
    }

    fn append_page(
        &mut self,
        response: PageResponse<T>,
        surface: &mut Surface<R::Unit>,
    ) -> Result<usize, LoadError> {
        let count = response.items.len();
        if count > 0 {
            let container = self
                .container
                .as_deref()
                .and_then(|id| surface.container_mut(id))
                .ok_or_else(|| LoadError::MissingContainer(self.config.container_id.clone()))?;
            for item in &response.items {
                container.append(self.renderer.render(item));
            }
        }

        self.state.has_more = response.has_more;
        self.state.current_page += 1;
        Ok(count)
    }

    /// Stop reacting to triggers, drop any in-flight result and hide the
    /// indicator.
    pub fn detach(&mut self, surface: &mut Surface<R::Unit>) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.receiver = None;
        self.state.loading = false;
        if let Some(id) = &self.indicator {
            surface.set_indicator(id, false);
        }
        tracing::debug!("Detached loader for {}", self.config.endpoint);
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc::Sender;
    use std::sync::Mutex;
    use std::thread;
    use std::time::{Duration, Instant};

    const LIST: &str = "playerList";
    const LOADING: &str = "loading";

    struct ScriptedSource {
        responses: Mutex<VecDeque<PageResult<u32>>>,
        requests: Mutex<Vec<PageRequest>>,
        gate: Option<Mutex<Receiver<()>>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(responses: Vec<PageResult<u32>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
                gate: None,
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            })
        }

        /// Each request blocks until a unit is sent on the returned sender.
        fn gated(responses: Vec<PageResult<u32>>) -> (Arc<Self>, Sender<()>) {
            let (tx, rx) = mpsc::channel();
            let source = Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
                gate: Some(Mutex::new(rx)),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            });
            (source, tx)
        }

        fn requested_pages(&self) -> Vec<u32> {
            self.requests.lock().unwrap().iter().map(|r| r.page).collect()
        }
    }

    impl PageSource<u32> for ScriptedSource {
        fn fetch_page(&self, request: &PageRequest) -> PageResult<u32> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());

            if let Some(gate) = &self.gate {
                let _ = gate.lock().unwrap().recv();
            }

            let result = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(page(&[], false)));
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            result
        }
    }

    struct Label;

    impl ItemRenderer<u32> for Label {
        type Unit = String;

        fn render(&self, item: &u32) -> String {
            format!("item-{}", item)
        }
    }

    fn page(items: &[u32], has_more: bool) -> PageResponse<u32> {
        PageResponse {
            items: items.to_vec(),
            has_more,
        }
    }

    fn surface() -> Surface<String> {
        Surface::new().with_container(LIST).with_indicator(LOADING)
    }

    fn config() -> LoaderConfig {
        LoaderConfig::new("/api/players", LIST).with_indicator(LOADING)
    }

    fn at_bottom() -> ScrollMetrics {
        ScrollMetrics {
            viewport_height: 600.0,
            scroll_offset: 900.0,
            content_height: 1500.0,
        }
    }

    fn far_from_bottom() -> ScrollMetrics {
        ScrollMetrics {
            viewport_height: 600.0,
            scroll_offset: 0.0,
            content_height: 5000.0,
        }
    }

    fn loader(
        source: &Arc<ScriptedSource>,
        surface: &Surface<String>,
    ) -> PagedListLoader<u32, Label> {
        PagedListLoader::initialize(config(), source.clone(), Label, surface).unwrap()
    }

    fn settle(loader: &mut PagedListLoader<u32, Label>, surface: &mut Surface<String>) -> PageOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = loader.poll(surface) {
                return outcome;
            }
            assert!(Instant::now() < deadline, "page request never completed");
            thread::sleep(Duration::from_millis(2));
        }
    }

    fn rendered(surface: &Surface<String>) -> Vec<String> {
        surface.container(LIST).unwrap().items().to_vec()
    }

    #[test]
    fn test_initial_state() {
        let source = ScriptedSource::new(vec![]);
        let surface = surface();
        let loader = loader(&source, &surface);
        assert_eq!(loader.current_page(), 1);
        assert!(!loader.is_loading());
        assert!(loader.has_more());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let source = ScriptedSource::new(vec![]);
        let surface = surface();
        let result = PagedListLoader::<u32, Label>::initialize(
            config().with_per_page(0),
            source,
            Label,
            &surface,
        );
        assert!(matches!(result, Err(ConfigError::ZeroPageSize)));
    }

    #[test]
    fn test_single_request_in_flight() {
        let (source, release) = ScriptedSource::gated(vec![Ok(page(&[1, 2], true))]);
        let mut surface = surface();
        let mut loader = loader(&source, &surface);

        assert!(loader.on_ready(&mut surface));
        assert!(loader.is_loading());
        for _ in 0..10 {
            assert!(!loader.on_scroll(at_bottom(), &mut surface));
            assert!(!loader.load_more(&mut surface));
        }
        assert!(loader.poll(&mut surface).is_none());

        release.send(()).unwrap();
        settle(&mut loader, &mut surface);

        assert_eq!(source.requested_pages(), vec![1]);
        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
        assert!(!loader.is_loading());
        assert_eq!(loader.current_page(), 2);
    }

    #[test]
    fn test_pages_requested_in_order_until_exhausted() {
        let source = ScriptedSource::new(vec![
            Ok(page(&[1, 2], true)),
            Ok(page(&[3], true)),
            Ok(page(&[4, 5], false)),
        ]);
        let mut surface = surface();
        let mut loader = loader(&source, &surface);

        assert!(loader.on_ready(&mut surface));
        settle(&mut loader, &mut surface);
        assert!(loader.on_scroll(at_bottom(), &mut surface));
        settle(&mut loader, &mut surface);
        assert!(loader.on_scroll(at_bottom(), &mut surface));
        let last = settle(&mut loader, &mut surface);
        assert!(matches!(
            last,
            PageOutcome::Appended {
                page: 3,
                count: 2,
                has_more: false
            }
        ));

        for _ in 0..5 {
            assert!(!loader.on_scroll(at_bottom(), &mut surface));
        }
        assert!(!loader.on_ready(&mut surface));

        assert_eq!(source.requested_pages(), vec![1, 2, 3]);
        assert_eq!(
            rendered(&surface),
            vec!["item-1", "item-2", "item-3", "item-4", "item-5"]
        );
        assert!(!loader.has_more());
        assert_eq!(loader.current_page(), 4);
    }

    #[test]
    fn test_items_keep_response_order() {
        let source = ScriptedSource::new(vec![Ok(page(&[9, 3, 7, 1], true))]);
        let mut surface = surface();
        let mut loader = loader(&source, &surface);

        loader.on_ready(&mut surface);
        settle(&mut loader, &mut surface);
        assert_eq!(rendered(&surface), vec!["item-9", "item-3", "item-7", "item-1"]);
    }

    #[test]
    fn test_empty_terminal_page() {
        let source = ScriptedSource::new(vec![Ok(page(&[], false))]);
        let mut surface = surface();
        let mut loader = loader(&source, &surface);

        loader.on_ready(&mut surface);
        let outcome = settle(&mut loader, &mut surface);
        assert!(matches!(outcome, PageOutcome::Appended { count: 0, .. }));
        assert!(rendered(&surface).is_empty());
        assert!(!loader.on_scroll(at_bottom(), &mut surface));
        assert_eq!(source.requested_pages(), vec![1]);
    }

    #[test]
    fn test_failure_retries_same_page() {
        let source = ScriptedSource::new(vec![
            Ok(page(&[1], true)),
            Err(LoadError::Transport("connection refused".into())),
            Ok(page(&[2], false)),
        ]);
        let mut surface = surface();
        let mut loader = loader(&source, &surface);

        loader.on_ready(&mut surface);
        settle(&mut loader, &mut surface);
        loader.on_scroll(at_bottom(), &mut surface);
        let failed = settle(&mut loader, &mut surface);
        assert!(matches!(
            failed,
            PageOutcome::Failed {
                page: 2,
                error: LoadError::Transport(_)
            }
        ));
        assert_eq!(loader.current_page(), 2);
        assert!(!loader.is_loading());
        assert!(loader.has_more());

        assert!(loader.on_scroll(at_bottom(), &mut surface));
        settle(&mut loader, &mut surface);
        assert_eq!(source.requested_pages(), vec![1, 2, 2]);
        assert_eq!(rendered(&surface), vec!["item-1", "item-2"]);
        assert_eq!(loader.current_page(), 3);
    }

    #[test]
    fn test_scroll_far_from_bottom_does_nothing() {
        let source = ScriptedSource::new(vec![]);
        let mut surface = surface();
        let mut loader = loader(&source, &surface);

        assert!(!loader.on_scroll(far_from_bottom(), &mut surface));
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_indicator_visibility() {
        let (source, release) = ScriptedSource::gated(vec![
            Ok(page(&[1], true)),
            Ok(page(&[2], false)),
        ]);
        let mut surface = surface();
        let mut loader = loader(&source, &surface);
        assert!(!surface.indicator_visible(LOADING));

        loader.on_ready(&mut surface);
        assert!(surface.indicator_visible(LOADING));
        release.send(()).unwrap();
        settle(&mut loader, &mut surface);
        // More pages remain, so it stays up.
        assert!(surface.indicator_visible(LOADING));

        loader.on_scroll(at_bottom(), &mut surface);
        assert!(surface.indicator_visible(LOADING));
        release.send(()).unwrap();
        settle(&mut loader, &mut surface);
        assert!(!surface.indicator_visible(LOADING));
    }

    #[test]
    fn test_missing_container_fails_non_empty_page() {
        let source = ScriptedSource::new(vec![Ok(page(&[1, 2], true)), Ok(page(&[], false))]);
        let mut surface: Surface<String> = Surface::new();
        let mut loader = loader(&source, &surface);

        loader.on_ready(&mut surface);
        let outcome = settle(&mut loader, &mut surface);
        assert!(matches!(
            outcome,
            PageOutcome::Failed {
                error: LoadError::MissingContainer(_),
                ..
            }
        ));
        assert_eq!(loader.current_page(), 1);
        assert!(!loader.is_loading());

        // An empty page has nothing to append and still advances.
        loader.load_more(&mut surface);
        let outcome = settle(&mut loader, &mut surface);
        assert!(matches!(outcome, PageOutcome::Appended { count: 0, .. }));
        assert!(!loader.has_more());
    }

    #[test]
    fn test_detach_ignores_triggers_and_pending_result() {
        let (source, release) = ScriptedSource::gated(vec![Ok(page(&[1], true))]);
        let mut surface = surface();
        let mut loader = loader(&source, &surface);

        loader.on_ready(&mut surface);
        assert!(surface.indicator_visible(LOADING));
        loader.detach(&mut surface);
        assert!(!surface.indicator_visible(LOADING));
        assert!(!loader.is_loading());
        release.send(()).unwrap();

        assert!(loader.poll(&mut surface).is_none());
        assert!(!loader.on_scroll(at_bottom(), &mut surface));
        assert!(!loader.load_more(&mut surface));
        assert!(rendered(&surface).is_empty());
    }

    #[test]
    fn test_request_carries_page_size() {
        let source = ScriptedSource::new(vec![Ok(page(&[1], false))]);
        let mut surface = surface();
        let mut loader = PagedListLoader::<u32, Label>::initialize(
            config().with_per_page(5),
            source.clone(),
            Label,
            &surface,
        )
        .unwrap();

        loader.on_ready(&mut surface);
        settle(&mut loader, &mut surface);
        let requests = source.requests.lock().unwrap();
        assert_eq!(requests[0].url(), "/api/players?page=1&per_page=5");
    }
}
