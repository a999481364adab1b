//! Debounced, cancellable search view-model.
//!
//! [`SearchPipeline`] owns the search query and everything derived from it. Query
//! changes arrive synchronously from the UI; the actual directory call happens on
//! a tokio task once the query has been quiet for the debounce period. State is
//! published through a `watch` channel so the render loop can await updates.
//!
//! Only the most recently scheduled search may touch the state. Every query change
//! cancels the previous [`DebounceHandle`], and a finished request re-checks its
//! token while holding the channel's lock before writing its outcome, so a
//! response that completes after being superseded is discarded.

use super::debounce::{schedule, DebounceHandle};
use crate::directory::CountryDirectory;
use crate::domain::Country;
use crate::infrastructure::CancellationToken;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::Instrument;

/// Default quiet period before a query is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Snapshot of the search feature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// The query exactly as typed.
    pub query: String,
    /// Ranked results of the last completed search.
    pub results: Vec<Country>,
    /// `true` while a dispatched search has not completed.
    pub loading: bool,
    /// User-facing message for the last failed search.
    pub error: Option<String>,
}

impl SearchState {
    /// Returns `true` when the trimmed query is non-empty.
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

/// Search view-model.
pub struct SearchPipeline {
    directory: Arc<dyn CountryDirectory>,
    debounce: Duration,
    state: Arc<watch::Sender<SearchState>>,
    pending: Option<DebounceHandle>,
}

impl std::fmt::Debug for SearchPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPipeline")
            .field("debounce", &self.debounce)
            .field("state", &*self.state.borrow())
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

impl SearchPipeline {
    #[must_use]
    pub fn new(directory: Arc<dyn CountryDirectory>, debounce: Duration) -> Self {
        let (state, _rx) = watch::channel(SearchState::default());
        Self {
            directory,
            debounce,
            state: Arc::new(state),
            pending: None,
        }
    }

    /// Applies a query change.
    ///
    /// An unchanged query does nothing unless the last search for it failed,
    /// in which case it is sent again. A blank query clears results, error and
    /// the loading flag immediately and never reaches the directory. Any other
    /// query (re)starts the debounce timer; the directory sees the trimmed query.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        {
            let current = self.state.borrow();
            if current.query == query && current.error.is_none() {
                return;
            }
        }

        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }

        let trimmed = query.trim().to_string();
        if trimmed.is_empty() {
            tracing::debug!("query cleared");
            self.state.send_modify(|state| {
                state.query = query;
                state.results.clear();
                state.error = None;
                state.loading = false;
            });
            return;
        }

        self.state.send_modify(|state| state.query = query);

        let directory = Arc::clone(&self.directory);
        let state = Arc::clone(&self.state);
        self.pending = Some(schedule(self.debounce, move |token| {
            let span = tracing::debug_span!("search", query = %trimmed);
            run_search(directory, state, trimmed, token).instrument(span)
        }));
    }

    /// Returns a receiver that observes every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    /// Returns the result at `index`, if any.
    #[must_use]
    pub fn result(&self, index: usize) -> Option<Country> {
        self.state.borrow().results.get(index).cloned()
    }

    /// Returns `true` while a search is waiting out its debounce or in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(DebounceHandle::is_pending)
    }

    /// Cancels any pending timer or request.
    pub fn shutdown(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!("cancelling pending search");
            pending.cancel();
        }
    }
}

impl Drop for SearchPipeline {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_search(
    directory: Arc<dyn CountryDirectory>,
    state: Arc<watch::Sender<SearchState>>,
    query: String,
    token: CancellationToken,
) {
    let started = state.send_if_modified(|s| {
        if token.is_cancelled() {
            return false;
        }
        s.loading = true;
        s.error = None;
        true
    });
    if !started {
        return;
    }

    let outcome = directory.search_by_name(&query, &token).await;

    state.send_if_modified(|s| {
        if token.is_cancelled() {
            tracing::debug!("discarding superseded search response");
            return false;
        }
        match outcome {
            Ok(results) => {
                tracing::debug!(count = results.len(), "search results stored");
                s.results = results;
                s.error = None;
                s.loading = false;
                true
            }
            Err(e) if e.is_cancelled() => false,
            Err(e) => {
                tracing::debug!(error = %e, "search failed");
                s.results.clear();
                s.error = Some(e.user_message());
                s.loading = false;
                true
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::testing::FakeDirectory;
    use crate::domain::Operation;

    fn country(code: &str, name: &str) -> Country {
        Country::new(code, name, format!("https://flags.example/{code}.png"))
    }

    fn pipeline(directory: &Arc<FakeDirectory>) -> SearchPipeline {
        SearchPipeline::new(Arc::clone(directory) as Arc<dyn CountryDirectory>, DEFAULT_DEBOUNCE)
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_sends_one_search() {
        let directory = Arc::new(FakeDirectory::new().with_results("per", vec![country("PER", "Peru")]));
        let mut search = pipeline(&directory);

        search.set_query("p");
        advance(100).await;
        search.set_query("pe");
        advance(100).await;
        search.set_query("per");
        advance(299).await;
        assert!(directory.search_calls().is_empty());

        advance(10).await;
        assert_eq!(directory.search_calls(), vec!["per"]);
        let state = search.snapshot();
        assert_eq!(state.results, vec![country("PER", "Peru")]);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test(start_paused = true)]
    async fn directory_sees_trimmed_query() {
        let directory = Arc::new(FakeDirectory::new());
        let mut search = pipeline(&directory);

        search.set_query("  chile ");
        advance(350).await;

        assert_eq!(directory.search_calls(), vec!["chile"]);
        assert_eq!(search.query(), "  chile ");
    }

    #[tokio::test(start_paused = true)]
    async fn blank_query_clears_synchronously_without_a_call() {
        let directory = Arc::new(FakeDirectory::new().with_results("fr", vec![country("FRA", "France")]));
        let mut search = pipeline(&directory);

        search.set_query("fr");
        advance(350).await;
        assert_eq!(search.snapshot().results.len(), 1);

        search.set_query("   ");
        let state = search.snapshot();
        assert!(state.results.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert!(!search.is_pending());

        advance(1000).await;
        assert_eq!(directory.search_calls(), vec!["fr"]);
    }

    #[tokio::test(start_paused = true)]
    async fn loading_is_set_while_request_is_in_flight() {
        let directory = Arc::new(
            FakeDirectory::new()
                .with_results("japan", vec![country("JPN", "Japan")])
                .with_search_delay(Duration::from_millis(200)),
        );
        let mut search = pipeline(&directory);

        search.set_query("japan");
        advance(250).await;
        assert!(!search.snapshot().loading);

        advance(100).await;
        assert!(search.snapshot().loading);
        assert!(search.is_pending());

        advance(200).await;
        let state = search.snapshot();
        assert!(!state.loading);
        assert_eq!(state.results.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_clears_results_and_sets_error() {
        let directory = Arc::new(FakeDirectory::new().with_results("ke", vec![country("KEN", "Kenya")]));
        let mut search = pipeline(&directory);

        search.set_query("ke");
        advance(350).await;
        assert_eq!(search.snapshot().results.len(), 1);

        directory.fail(Operation::Search);
        search.set_query("kxq");
        advance(350).await;

        let state = search.snapshot();
        assert!(state.results.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("No matching results."));

        directory.recover(Operation::Search);
        search.set_query("ke");
        advance(350).await;
        let state = search.snapshot();
        assert_eq!(state.error, None);
        assert_eq!(state.results.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_in_flight_search_never_lands() {
        let directory = Arc::new(
            FakeDirectory::new()
                .with_results("a", vec![country("AAA", "Alpha")])
                .with_results("b", vec![country("BBB", "Bravo")])
                .with_search_delay(Duration::from_millis(1000)),
        );
        let mut search = pipeline(&directory);

        search.set_query("a");
        advance(500).await;
        search.set_query("b");
        advance(2000).await;

        assert_eq!(directory.search_calls(), vec!["a", "b"]);
        assert_eq!(search.snapshot().results, vec![country("BBB", "Bravo")]);
    }

    #[tokio::test(start_paused = true)]
    async fn late_response_after_clear_is_discarded() {
        let directory = Arc::new(
            FakeDirectory::new()
                .with_results("a", vec![country("AAA", "Alpha")])
                .with_search_delay(Duration::from_millis(200))
                .ignoring_cancel(),
        );
        let mut search = pipeline(&directory);

        search.set_query("a");
        advance(400).await;
        search.set_query("");
        advance(500).await;

        let state = search.snapshot();
        assert!(state.results.is_empty());
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn identical_query_does_not_restart_timer() {
        let directory = Arc::new(FakeDirectory::new());
        let mut search = pipeline(&directory);

        search.set_query("peru");
        advance(200).await;
        search.set_query("peru");
        advance(110).await;

        assert_eq!(directory.search_calls(), vec!["peru"]);
    }

    #[tokio::test(start_paused = true)]
    async fn reentering_a_failed_query_retries() {
        let directory = Arc::new(
            FakeDirectory::new()
                .with_results("peru", vec![country("PER", "Peru")])
                .failing(Operation::Search),
        );
        let mut search = pipeline(&directory);

        search.set_query("peru");
        advance(350).await;
        assert_eq!(search.snapshot().error.as_deref(), Some("No matching results."));

        directory.recover(Operation::Search);
        search.set_query("peru");
        advance(350).await;

        assert_eq!(directory.search_calls(), vec!["peru", "peru"]);
        let state = search.snapshot();
        assert_eq!(state.error, None);
        assert_eq!(state.results, vec![country("PER", "Peru")]);
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_before_the_timer_fires_sends_nothing() {
        let directory = Arc::new(FakeDirectory::new());
        let mut search = pipeline(&directory);

        search.set_query("a");
        search.set_query("");
        advance(1000).await;

        assert!(directory.search_calls().is_empty());
        assert!(!search.is_pending());
        assert!(!search.snapshot().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_pending_search() {
        let directory = Arc::new(FakeDirectory::new());
        let mut search = pipeline(&directory);

        search.set_query("oman");
        search.shutdown();
        advance(1000).await;

        assert!(directory.search_calls().is_empty());
        assert!(!search.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_observe_completion() {
        let directory = Arc::new(FakeDirectory::new().with_results("mali", vec![country("MLI", "Mali")]));
        let mut search = pipeline(&directory);
        let mut updates = search.subscribe();

        search.set_query("mali");
        let _ = updates.borrow_and_update();

        let completed = tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                updates.changed().await.unwrap();
                if !updates.borrow_and_update().results.is_empty() {
                    break;
                }
            }
        })
        .await;
        assert!(completed.is_ok());
    }
}
