//! Incremental search sessions for the Navi list screens: debounced query
//! input, immediate filter commits, generation-tagged fetches and
//! short-page pagination over an injected [`DataSource`].

pub mod domain;
pub mod error;
pub mod session;
pub mod source;

pub use domain::filter::{FilterConfig, FilterUpdate};
pub use domain::models::{Place, PlaceCategory, SearchStatus, SortOrder};
pub use error::{FilterError, SourceError};
pub use session::{SearchSession, SessionHandle, SessionOptions, SessionSnapshot};
pub use source::{DataSource, PageRequest, PlaceSource};
