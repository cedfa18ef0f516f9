use std::cmp::Ordering;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::models::{Place, SortOrder};
use crate::error::SourceError;
use crate::source::{DataSource, PageRequest};

/// In-memory place backend: filters, sorts and slices a seeded data set.
///
/// This is the reference [`DataSource`] used by tests and by screens that
/// run against downloaded regional data while offline. Latency can be
/// simulated to exercise loading states.
#[derive(Clone, Debug, Default)]
pub struct PlaceSource {
    places: Vec<Place>,
    latency: Option<Duration>,
}

impl PlaceSource {
    pub fn new(places: Vec<Place>) -> Self {
        Self {
            places,
            latency: None,
        }
    }

    /// Sleep this long before answering each request.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn matched(&self, request: &PageRequest) -> Vec<Place> {
        let needle = request.query.trim().to_lowercase();
        let mut matched: Vec<Place> = self
            .places
            .iter()
            .filter(|place| request.filters.matches(place))
            .filter(|place| {
                needle.is_empty()
                    || place.name.to_lowercase().contains(&needle)
                    || place.address.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        sort_places(&mut matched, request.sort);
        matched
    }
}

fn sort_places(places: &mut [Place], sort: SortOrder) {
    match sort {
        // Seed order is the relevance order for offline data.
        SortOrder::Relevance => {}
        SortOrder::Rating => places.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
        SortOrder::Distance => places.sort_by_key(|place| place.distance_m),
        SortOrder::Newest => places.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
}

#[async_trait]
impl DataSource for PlaceSource {
    type Item = Place;

    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Place>, SourceError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let matched = self.matched(request);
        let start = request.page.saturating_sub(1) as usize * request.page_size;
        Ok(matched
            .into_iter()
            .skip(start)
            .take(request.page_size)
            .collect())
    }
}
