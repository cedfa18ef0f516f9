use crate::domain::filter::FilterUpdate;
use crate::domain::models::SortOrder;
use crate::error::SourceError;

/// Everything that can happen to a session, in the order the session's own
/// task observes it.
#[derive(Debug)]
pub enum Message<T> {
    // Input events
    QueryChanged(String),
    DebounceElapsed,
    FilterCommitted(FilterUpdate),
    SortCommitted(SortOrder),
    LoadMoreRequested,
    RefreshRequested,

    // Fetch lifecycle
    FetchCompleted {
        generation: u64,
        page: u32,
        outcome: Result<Vec<T>, SourceError>,
    },
}
