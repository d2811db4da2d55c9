use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::error::AppError;
use crate::model::{AggregateStats, CountryRecord};

pub const DEFAULT_API_BASE_URL: &str = "https://disease.sh/v3/covid-19";

/// Thin client over the statistics API. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    client: Client,
    base_url: String,
}

impl TrackerClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, "fetching");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Per-country records, in the order the API returns them. A `null` body
    /// is treated as an empty list.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the request fails, the status is not 2xx, or the
    /// body does not decode
    pub async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, AppError> {
        let countries: Option<Vec<CountryRecord>> = self.get_json("countries").await?;
        Ok(countries.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Will return `Err` if the request fails, the status is not 2xx, or the
    /// body does not decode
    pub async fn fetch_stats(&self) -> Result<AggregateStats, AppError> {
        self.get_json("all").await
    }
}
