pub mod filter;
pub mod models;

#[cfg(test)]
mod models_test;

pub use filter::{FilterConfig, FilterUpdate};
pub use models::{Place, PlaceCategory, SearchStatus, SortOrder};
