//! Resolving a picked suggestion or a location into map-ready results

use crate::config::SearchSettings;
use crate::coord::buffer::{BufferComputer, GeodesicBuffer};
use crate::error::Result;
use crate::geocode::{GeocodeBackend, RawFeature};
use crate::search::{ResultQuery, SearchResult};

/// Turns a result query into points, labels and zoom extents
pub struct ResultAdapter<B, C = GeodesicBuffer> {
    backend: B,
    buffer: C,
    settings: SearchSettings,
}

impl<B: GeocodeBackend> ResultAdapter<B> {
    pub fn new(backend: B, settings: SearchSettings) -> Self {
        Self::with_buffer(backend, GeodesicBuffer, settings)
    }
}

impl<B: GeocodeBackend, C: BufferComputer> ResultAdapter<B, C> {
    /// Use another buffer implementation for the zoom extent
    pub fn with_buffer(backend: B, buffer: C, settings: SearchSettings) -> Self {
        Self {
            backend,
            buffer,
            settings,
        }
    }

    /// Resolve a query: reverse geocoding for a location, forward search
    /// for text
    pub async fn resolve(&self, query: &ResultQuery) -> Result<Vec<SearchResult>> {
        let features = match query {
            ResultQuery::Reverse { location } => self.backend.reverse(*location).await?,
            ResultQuery::Forward { text, limit } => self.backend.search(text, *limit).await?,
        };

        features.into_iter().map(|f| self.to_result(f)).collect()
    }

    fn to_result(&self, feature: RawFeature) -> Result<SearchResult> {
        let point = feature.point()?;
        let label = feature.label()?.to_string();
        let extent = self.buffer.buffer_meters(point, self.settings.buffer_meters);

        Ok(SearchResult {
            point,
            label,
            attributes: feature.properties,
            extent,
        })
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}
