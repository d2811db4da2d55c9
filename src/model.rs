pub mod country;
pub mod stats;

use serde::Serialize;

use crate::error::AppError;

pub use country::{CountryInfo, CountryRecord};
pub use stats::{AggregateStats, CaseCounts};

/// Outcome of one upstream fetch, as seen by the renderer.
///
/// `Loaded(vec![])` and `Failed(_)` are deliberately different states: an
/// empty answer is data, a failed request is not.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum FetchState<T> {
    #[default]
    Pending,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    #[must_use]
    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> From<Result<T, AppError>> for FetchState<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Initial view handed to the map widget.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    pub base_map: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: 38.9072,
            center_lng: -77.0369,
            zoom: 2,
            base_map: "OpenStreetMap".to_string(),
        }
    }
}
