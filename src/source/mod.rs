pub mod place;


pub use place::PlaceSource;

use async_trait::async_trait;

use crate::domain::filter::FilterConfig;
use crate::domain::models::SortOrder;
use crate::error::SourceError;

/// One page worth of search input, handed verbatim to the data source.
#[derive(Clone, Debug, PartialEq)]
pub struct PageRequest {
    pub query: String,
    pub filters: FilterConfig,
    pub sort: SortOrder,
    /// 1-based page index.
    pub page: u32,
    pub page_size: usize,
}

/// Paginated, filterable search backend consumed by a session.
///
/// Contract: pagination must be deterministic for a fixed
/// `(query, filters, sort)` — the session accumulates pages and does not
/// deduplicate across them. A page shorter than `page_size` signals
/// exhaustion.
#[async_trait]
pub trait DataSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Self::Item>, SourceError>;
}
