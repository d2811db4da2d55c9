pub mod client;

use tracing::warn;

use crate::error::AppError;
use crate::model::FetchState;

pub use client::{DEFAULT_API_BASE_URL, TrackerClient};

/// Turns one fetch result into the state the renderer sees, logging failures.
pub fn load_state<T>(source: &str, result: Result<T, AppError>) -> FetchState<T> {
    if let Err(e) = &result {
        warn!(source, error = %e, "upstream fetch failed");
    }
    FetchState::from(result)
}
