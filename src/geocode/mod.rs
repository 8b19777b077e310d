//! Address geocoding
//!
//! Talks to the Base Adresse Nationale search API. Responses are GeoJSON
//! FeatureCollections; this module exposes their features untouched and
//! leaves interpretation to the search adapters.

pub mod client;

#[cfg(test)]
pub(crate) mod mock;

use crate::coord::Coordinate;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use client::GeocodeClient;

/// GeoJSON geometry of a feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGeometry {
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Position in GeoJSON order: `[lon, lat]`
    pub coordinates: Vec<f64>,
}

/// One element of a FeatureCollection's `features`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFeature {
    pub geometry: RawGeometry,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl RawFeature {
    /// The provider's display label (`properties.label`)
    pub fn label(&self) -> Result<&str> {
        self.properties
            .get("label")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Decode("feature has no string properties.label".to_string()))
    }

    /// The feature's point, keeping GeoJSON (lon, lat) order
    pub fn point(&self) -> Result<Coordinate> {
        Coordinate::from_position(&self.geometry.coordinates)
            .map_err(|e| Error::Decode(format!("bad feature geometry: {}", e)))
    }
}

/// Top-level GeoJSON response body
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<RawFeature>,
}

impl FeatureCollection {
    /// Parse a response body, mapping failures to [`Error::Decode`]
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|e| Error::Decode(format!("invalid FeatureCollection: {}", e)))
    }
}

/// Trait for address search backends
pub trait GeocodeBackend: Send + Sync {
    /// Search used while the user types, biased toward `bias`
    fn fetch_suggestions(
        &self,
        text: &str,
        bias: Coordinate,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<RawFeature>>> + Send;

    /// Forward search (text to coordinates)
    fn search(
        &self,
        text: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<RawFeature>>> + Send;

    /// Reverse geocode a location to the nearest addresses
    fn reverse(
        &self,
        location: Coordinate,
    ) -> impl std::future::Future<Output = Result<Vec<RawFeature>>> + Send;
}

/// Collapse whitespace runs and trim; empty input is a validation error
pub fn normalize_text(text: &str) -> Result<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Err(Error::Validation("query text is empty".to_string()));
    }
    Ok(normalized)
}

/// Encode query text for the `q` parameter
///
/// The API expects spaces as literal `+`. Each word is percent-encoded on
/// its own so a `+` typed by the user is sent as `%2B`.
pub fn encode_query_text(text: &str) -> Result<String> {
    let normalized = normalize_text(text)?;
    Ok(normalized
        .split(' ')
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+"))
}
