use serde::{Deserialize, Serialize};

use crate::domain::models::{Place, PlaceCategory};
use crate::error::FilterError;

/// Filter constraints shared by the Navi list screens. Every field is a
/// discrete commit: screens mutate one axis at a time (toggle, picker,
/// slider on release) and each accepted mutation invalidates the current
/// result set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub category: Option<PlaceCategory>,
    pub min_rating: Option<f32>,
    pub max_price: Option<f64>,
    pub radius_m: Option<u32>,
    pub open_now: bool,
}

/// A single-axis mutation of [`FilterConfig`]. `None` clears the axis.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterUpdate {
    Category(Option<PlaceCategory>),
    MinRating(Option<f32>),
    MaxPrice(Option<f64>),
    Radius(Option<u32>),
    OpenNow(bool),
}

impl FilterUpdate {
    /// Domain check, performed synchronously before the update is allowed
    /// anywhere near a fetch.
    pub fn validate(&self) -> Result<(), FilterError> {
        match self {
            Self::MinRating(Some(rating)) if !(0.0..=5.0).contains(rating) => {
                Err(FilterError::RatingOutOfRange(*rating))
            }
            Self::MaxPrice(Some(price)) if !price.is_finite() || *price < 0.0 => {
                Err(FilterError::InvalidPrice(*price))
            }
            Self::Radius(Some(0)) => Err(FilterError::ZeroRadius),
            _ => Ok(()),
        }
    }
}

impl FilterConfig {
    /// Applies a validated update. Returns `false` when the update leaves
    /// the configuration unchanged, so callers can skip the reset.
    pub fn apply(&mut self, update: FilterUpdate) -> bool {
        match update {
            FilterUpdate::Category(category) => {
                if self.category == category {
                    return false;
                }
                self.category = category;
            }
            FilterUpdate::MinRating(min_rating) => {
                if self.min_rating == min_rating {
                    return false;
                }
                self.min_rating = min_rating;
            }
            FilterUpdate::MaxPrice(max_price) => {
                if self.max_price == max_price {
                    return false;
                }
                self.max_price = max_price;
            }
            FilterUpdate::Radius(radius_m) => {
                if self.radius_m == radius_m {
                    return false;
                }
                self.radius_m = radius_m;
            }
            FilterUpdate::OpenNow(open_now) => {
                if self.open_now == open_now {
                    return false;
                }
                self.open_now = open_now;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.min_rating.is_none()
            && self.max_price.is_none()
            && self.radius_m.is_none()
            && !self.open_now
    }

    /// Whether a place satisfies every active constraint.
    pub fn matches(&self, place: &Place) -> bool {
        if let Some(category) = self.category {
            if place.category != category {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if place.rating < min_rating {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if place.price > max_price {
                return false;
            }
        }
        if let Some(radius_m) = self.radius_m {
            if place.distance_m > radius_m {
                return false;
            }
        }
        if self.open_now && !place.open_now {
            return false;
        }
        true
    }
}
