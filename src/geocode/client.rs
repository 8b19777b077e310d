//! HTTP client for api-adresse.data.gouv.fr
//!
//! Endpoints:
//! - `search/?q=..&limit=..[&lat=..&lon=..]` (forward search and suggestions)
//! - `reverse/?lat=..&lon=..`
//!
//! No retries and no timeout: a failed call surfaces as an error and a hung
//! call stalls only its own future.

use crate::constants::api::{ADRESSE_URL, REVERSE_PATH, SEARCH_PATH, USER_AGENT};
use crate::coord::Coordinate;
use crate::error::{Error, Result};
use crate::geocode::{encode_query_text, FeatureCollection, GeocodeBackend, RawFeature};
use reqwest::Url;
use tracing::debug;

/// Address API client
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: Url,
}

impl GeocodeClient {
    /// Create a client for the public API
    pub fn new() -> Result<Self> {
        Self::with_base_url(ADRESSE_URL)
    }

    /// Create a client for another deployment of the API
    ///
    /// A trailing slash is appended when missing so endpoint paths resolve
    /// under the base path.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&base)
            .map_err(|e| Error::Config(format!("Invalid API base URL '{}': {}", base_url, e)))?;

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL with an already-encoded query string
    fn endpoint(&self, path: &str, query: &str) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| Error::Config(format!("Invalid endpoint '{}': {}", path, e)))?;
        url.set_query(Some(query));
        Ok(url)
    }

    /// GET a URL and parse the FeatureCollection
    async fn fetch(&self, url: Url) -> Result<Vec<RawFeature>> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport {
                status: Some(status.as_u16()),
                message: format!("Address API returned status: {}", status),
            });
        }

        let body = response.bytes().await?;
        let collection = FeatureCollection::from_slice(&body)?;
        debug!("received {} features", collection.features.len());
        Ok(collection.features)
    }
}

impl GeocodeBackend for GeocodeClient {
    async fn fetch_suggestions(
        &self,
        text: &str,
        bias: Coordinate,
        limit: usize,
    ) -> Result<Vec<RawFeature>> {
        let query = format!(
            "q={}&limit={}&lat={}&lon={}",
            encode_query_text(text)?,
            limit,
            bias.latitude(),
            bias.longitude()
        );
        self.fetch(self.endpoint(SEARCH_PATH, &query)?).await
    }

    async fn search(&self, text: &str, limit: usize) -> Result<Vec<RawFeature>> {
        let query = format!("q={}&limit={}", encode_query_text(text)?, limit);
        self.fetch(self.endpoint(SEARCH_PATH, &query)?).await
    }

    async fn reverse(&self, location: Coordinate) -> Result<Vec<RawFeature>> {
        let query = format!("lat={}&lon={}", location.latitude(), location.longitude());
        self.fetch(self.endpoint(REVERSE_PATH, &query)?).await
    }
}
