use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};
use tracing::debug;

pub mod commands;
pub mod events;
pub mod history;
pub mod options;
pub mod state;


pub use history::QueryHistory;
pub use options::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_HISTORY_LIMIT, DEFAULT_PAGE_SIZE,
    SessionOptions,
};
pub use state::{SessionSnapshot, SessionState};

use self::commands::Command;
use self::events::Message;
use crate::domain::filter::FilterUpdate;
use crate::domain::models::SortOrder;
use crate::error::{FilterError, SourceError};
use crate::source::{DataSource, PageRequest};

/// Mutation entry points, delivered to the session task in order.
#[derive(Debug)]
enum Op {
    SetQuery(String),
    SetFilter(FilterUpdate),
    SetSort(SortOrder),
    LoadMore,
    Refresh,
}

/// Consumer-facing handle to a running session.
///
/// Cheap to clone; dropping every handle shuts the session down.
pub struct SessionHandle<T> {
    ops: mpsc::UnboundedSender<Op>,
    snapshot_rx: watch::Receiver<SessionSnapshot<T>>,
}

impl<T> Clone for SessionHandle<T> {
    fn clone(&self) -> Self {
        Self {
            ops: self.ops.clone(),
            snapshot_rx: self.snapshot_rx.clone(),
        }
    }
}

impl<T: Clone> SessionHandle<T> {
    /// Records a keystroke. The fetch happens only once the debounce quiet
    /// period elapses without another keystroke.
    pub fn set_query(&self, query: impl Into<String>) {
        let _ = self.ops.send(Op::SetQuery(query.into()));
    }

    /// Commits a filter change immediately (no debounce). Out-of-domain
    /// values are rejected here and never reach the session.
    pub fn set_filter(&self, update: FilterUpdate) -> Result<(), FilterError> {
        update.validate()?;
        let _ = self.ops.send(Op::SetFilter(update));
        Ok(())
    }

    /// Commits a sort change; treated exactly like a filter change.
    pub fn set_sort(&self, sort: SortOrder) {
        let _ = self.ops.send(Op::SetSort(sort));
    }

    /// Requests the next page. Ignored while a fetch is in flight, after
    /// exhaustion, and in the error state.
    pub fn load_more(&self) {
        let _ = self.ops.send(Op::LoadMore);
    }

    /// Unconditional reset-and-fetch (pull-to-refresh), even when query
    /// and filters are unchanged.
    pub fn refresh(&self) {
        let _ = self.ops.send(Op::Refresh);
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> SessionSnapshot<T> {
        self.snapshot_rx.borrow().clone()
    }

    /// Change-notified view of the session state.
    pub fn watch(&self) -> watch::Receiver<SessionSnapshot<T>> {
        self.snapshot_rx.clone()
    }

    /// Committed queries, most recent first.
    pub fn recent_queries(&self) -> Vec<String> {
        self.snapshot_rx.borrow().recent_queries.clone()
    }
}

/// Executes the state machine's commands: keeps the single pending debounce
/// deadline and spawns generation-tagged fetch tasks.
struct Driver<S: DataSource> {
    state: SessionState<S::Item>,
    source: Arc<S>,
    options: SessionOptions,
    outcome_tx: mpsc::UnboundedSender<Message<S::Item>>,
    snapshot_tx: watch::Sender<SessionSnapshot<S::Item>>,
    debounce_deadline: Option<Instant>,
}

impl<S: DataSource> Driver<S> {
    fn handle_op(&mut self, op: Op) {
        let message = match op {
            Op::SetQuery(query) => Message::QueryChanged(query),
            Op::SetFilter(update) => Message::FilterCommitted(update),
            Op::SetSort(sort) => Message::SortCommitted(sort),
            Op::LoadMore => Message::LoadMoreRequested,
            Op::Refresh => Message::RefreshRequested,
        };
        self.apply(message);
    }

    fn apply(&mut self, message: Message<S::Item>) {
        let command = self.state.update(message);
        match command {
            Command::None => {}
            Command::ScheduleFetch(delay) => {
                // Single pending timer: a new keystroke replaces the old
                // deadline, coalescing rapid input into one fetch.
                self.debounce_deadline = Some(Instant::now() + delay);
            }
            Command::Fetch { generation, page } => self.spawn_fetch(generation, page),
        }
        let _ = self.snapshot_tx.send(self.state.snapshot());
    }

    fn spawn_fetch(&mut self, generation: u64, page: u32) {
        let request = PageRequest {
            query: self.state.debounced_query.clone(),
            filters: self.state.filters.clone(),
            sort: self.state.sort,
            page,
            page_size: self.state.page_size(),
        };
        debug!(generation, page, query = %request.query, "starting fetch");

        let source = Arc::clone(&self.source);
        let fetch_timeout = self.options.fetch_timeout;
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = match time::timeout(fetch_timeout, source.fetch_page(&request)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(SourceError::Timeout(fetch_timeout)),
            };
            // The session may already be gone; superseded completions are
            // dropped by the generation check either way.
            let _ = outcome_tx.send(Message::FetchCompleted {
                generation,
                page,
                outcome,
            });
        });
    }
}

/// One screen's incremental search controller.
///
/// Owns the session state on its own task; consumers interact through a
/// [`SessionHandle`]. The data source is injected at construction.
pub struct SearchSession<S: DataSource> {
    driver: Driver<S>,
    ops_rx: mpsc::UnboundedReceiver<Op>,
    outcome_rx: mpsc::UnboundedReceiver<Message<S::Item>>,
}

impl<S: DataSource> SearchSession<S> {
    pub fn new(source: S, options: SessionOptions) -> (Self, SessionHandle<S::Item>) {
        let (ops_tx, ops_rx) = mpsc::unbounded_channel();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let state = SessionState::new(&options);
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        let driver = Driver {
            state,
            source: Arc::new(source),
            options,
            outcome_tx,
            snapshot_tx,
            debounce_deadline: None,
        };
        let session = Self {
            driver,
            ops_rx,
            outcome_rx,
        };
        let handle = SessionHandle {
            ops: ops_tx,
            snapshot_rx,
        };
        (session, handle)
    }

    /// Spawns the session on the current runtime and returns its handle.
    pub fn spawn(source: S, options: SessionOptions) -> SessionHandle<S::Item> {
        let (session, handle) = Self::new(source, options);
        tokio::spawn(session.run());
        handle
    }

    /// Runs until every handle is dropped.
    pub async fn run(self) {
        let Self {
            mut driver,
            mut ops_rx,
            mut outcome_rx,
        } = self;

        if driver.options.fetch_on_spawn {
            driver.apply(Message::RefreshRequested);
        }

        loop {
            tokio::select! {
                op = ops_rx.recv() => match op {
                    Some(op) => driver.handle_op(op),
                    None => break,
                },
                Some(completion) = outcome_rx.recv() => driver.apply(completion),
                _ = time::sleep_until(driver.debounce_deadline.unwrap_or_else(Instant::now)),
                    if driver.debounce_deadline.is_some() =>
                {
                    driver.debounce_deadline = None;
                    driver.apply(Message::DebounceElapsed);
                }
            }
        }
    }
}
