//! Server shared state
//!
//! Holds configuration and the search source shared by all handlers.

use crate::config::Config;
use crate::coord::Coordinate;
use crate::error::Result;
use crate::geocode::{GeocodeBackend, GeocodeClient};
use crate::search::SearchSource;
use std::time::Instant;

/// Shared state for the HTTP server
pub struct AppState<B> {
    /// Configuration
    pub config: Config,

    /// Search source the handlers delegate to
    pub source: SearchSource<B>,

    /// Fallback suggestion bias when a request has no view center
    pub view_center: Coordinate,

    started: Instant,
}

impl AppState<GeocodeClient> {
    /// Create state backed by the configured address API
    pub fn new(config: Config) -> Result<Self> {
        let client = GeocodeClient::with_base_url(&config.api.base_url)?;
        Self::with_backend(config, client)
    }
}

impl<B: GeocodeBackend + Clone> AppState<B> {
    /// Create state around any backend
    pub fn with_backend(config: Config, backend: B) -> Result<Self> {
        let view_center = config.map.center()?;
        let source = SearchSource::new(backend, config.search.clone());
        Ok(Self {
            config,
            source,
            view_center,
            started: Instant::now(),
        })
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
