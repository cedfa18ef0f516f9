use tracing::{debug, warn};

use crate::domain::filter::FilterConfig;
use crate::domain::models::{SearchStatus, SortOrder};
use crate::error::SourceError;
use crate::session::commands::Command;
use crate::session::events::Message;
use crate::session::history::QueryHistory;
use crate::session::options::SessionOptions;

/// Read-only view published to consumers on every state change.
#[derive(Clone, Debug)]
pub struct SessionSnapshot<T> {
    pub results: Vec<T>,
    pub status: SearchStatus,
    pub has_more: bool,
    pub error: Option<String>,
    /// Next page index the session would fetch, 1-based.
    pub page: u32,
    pub recent_queries: Vec<String>,
}

/// The session's state machine. Purely synchronous: every transition goes
/// through [`SessionState::update`], which returns the side effect the
/// driver must execute.
pub struct SessionState<T> {
    pub query: String,
    pub debounced_query: String,
    pub filters: FilterConfig,
    pub sort: SortOrder,
    pub results: Vec<T>,
    pub page: u32,
    pub has_more: bool,
    pub status: SearchStatus,
    pub error: Option<String>,
    /// Reset counter; completions carrying an older value are discarded.
    pub generation: u64,
    pub history: QueryHistory,
    debounce: std::time::Duration,
    page_size: usize,
}

impl<T: Clone> SessionState<T> {
    pub fn new(options: &SessionOptions) -> Self {
        Self {
            query: String::new(),
            debounced_query: String::new(),
            filters: FilterConfig::default(),
            sort: SortOrder::default(),
            results: Vec::new(),
            page: 1,
            has_more: true,
            status: SearchStatus::Idle,
            error: None,
            generation: 0,
            history: QueryHistory::new(options.history_limit),
            debounce: options.debounce,
            page_size: options.page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn snapshot(&self) -> SessionSnapshot<T> {
        SessionSnapshot {
            results: self.results.clone(),
            status: self.status,
            has_more: self.has_more,
            error: self.error.clone(),
            page: self.page,
            recent_queries: self.history.entries().to_vec(),
        }
    }

    pub fn update(&mut self, message: Message<T>) -> Command {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Command::ScheduleFetch(self.debounce)
            }
            Message::DebounceElapsed => {
                // Only a changed value commits; refresh() covers forced
                // re-fetch of an unchanged query.
                if self.query == self.debounced_query {
                    return Command::None;
                }
                self.debounced_query = self.query.clone();
                self.history.record(&self.debounced_query);
                self.reset_and_fetch()
            }
            Message::FilterCommitted(update) => {
                if !self.filters.apply(update) {
                    return Command::None;
                }
                self.reset_and_fetch()
            }
            Message::SortCommitted(sort) => {
                if self.sort == sort {
                    return Command::None;
                }
                self.sort = sort;
                self.reset_and_fetch()
            }
            Message::RefreshRequested => {
                self.debounced_query = self.query.clone();
                self.history.record(&self.debounced_query);
                self.reset_and_fetch()
            }
            Message::LoadMoreRequested => {
                if self.status != SearchStatus::Idle || !self.has_more {
                    return Command::None;
                }
                self.status = SearchStatus::LoadingMore;
                Command::Fetch {
                    generation: self.generation,
                    page: self.page,
                }
            }
            Message::FetchCompleted {
                generation,
                page,
                outcome,
            } => {
                if generation != self.generation {
                    debug!(
                        stale = generation,
                        current = self.generation,
                        "discarding stale fetch completion"
                    );
                    return Command::None;
                }
                self.apply_completion(page, outcome);
                Command::None
            }
        }
    }

    fn reset_and_fetch(&mut self) -> Command {
        self.results.clear();
        self.page = 1;
        self.has_more = true;
        self.status = SearchStatus::Loading;
        self.error = None;
        self.generation += 1;
        Command::Fetch {
            generation: self.generation,
            page: 1,
        }
    }

    fn apply_completion(&mut self, page: u32, outcome: Result<Vec<T>, SourceError>) {
        match outcome {
            Ok(items) => {
                let full_page = items.len() >= self.page_size;
                if self.status == SearchStatus::Loading {
                    // Initial fetch replaces the result set atomically.
                    self.results = items;
                } else {
                    self.results.extend(items);
                }
                if full_page {
                    self.page = page + 1;
                    self.has_more = true;
                } else {
                    // A short page is the exhaustion signal; the page
                    // index stays put so refresh semantics are unaffected.
                    self.has_more = false;
                }
                self.status = if self.results.is_empty() {
                    SearchStatus::Empty
                } else {
                    SearchStatus::Idle
                };
            }
            Err(error) => {
                warn!(%error, page, "fetch failed");
                self.has_more = false;
                self.status = SearchStatus::Error;
                self.error = Some(error.to_string());
            }
        }
    }
}
