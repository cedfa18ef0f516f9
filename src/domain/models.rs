use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fetch lifecycle of a search session, derived from the controller and
/// never set directly by the consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// No fetch in flight; results (possibly none yet) are settled.
    Idle,
    /// Initial fetch for the current generation is in flight.
    Loading,
    /// Pagination fetch is in flight; accumulated results stay visible.
    LoadingMore,
    /// The last fetch failed. Terminal until the next reset.
    Error,
    /// A completed generation matched nothing.
    Empty,
}

/// Result ordering requested from the data source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Source-defined relevance order.
    #[default]
    Relevance,
    /// Highest rating first.
    Rating,
    /// Nearest first.
    Distance,
    /// Most recently updated first.
    Newest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Charging,
    Fuel,
    Food,
    Cafe,
    Parking,
    Hotel,
    Landmark,
}

/// One row of the map/list screens: a charging station, fuel stop, cafe and
/// so on. Mirrors the backend payload shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub category: PlaceCategory,
    /// Community rating, 0.0..=5.0.
    pub rating: f32,
    /// Price indicator in the screen's unit (session cost, fuel price, ...).
    pub price: f64,
    /// Distance from the map viewport center.
    pub distance_m: u32,
    pub open_now: bool,
    pub updated_at: DateTime<Utc>,
}
