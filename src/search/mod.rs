//! Search-source adapters
//!
//! Translate what the host search widget sends (keystrokes, a picked
//! suggestion, the user's location) into address API calls, and the API's
//! features back into what the widget displays.

pub mod binding;
pub mod results;
pub mod suggest;

use crate::config::SearchSettings;
use crate::coord::{Coordinate, Extent};
use crate::error::Result;
use crate::geocode::normalize_text;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use binding::SearchSource;
pub use results::ResultAdapter;
pub use suggest::SuggestionAdapter;

/// A suggestion request built from one keystroke event
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionQuery {
    /// Trimmed text with whitespace runs collapsed; never empty
    pub text: String,
    /// Proximity bias (the view center), not a filter
    pub bias: Coordinate,
    /// Maximum suggestions; set from [`SearchSettings::suggestion_limit`]
    pub limit: usize,
    pub source_index: usize,
}

impl SuggestionQuery {
    pub fn new(text: &str, bias: Coordinate, settings: &SearchSettings) -> Result<Self> {
        Ok(Self {
            text: normalize_text(text)?,
            bias,
            limit: settings.suggestion_limit,
            source_index: 0,
        })
    }

    pub fn with_source_index(mut self, source_index: usize) -> Self {
        self.source_index = source_index;
        self
    }
}

/// A displayable candidate shown while the user types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub source_index: usize,
    /// Position of the feature in the provider response
    pub key: usize,
}

/// What to resolve into full results
#[derive(Debug, Clone, PartialEq)]
pub enum ResultQuery {
    /// Text to coordinates
    Forward { text: String, limit: usize },
    /// Coordinates to nearest addresses
    Reverse { location: Coordinate },
}

impl ResultQuery {
    /// Forward query for a picked suggestion or typed text
    pub fn forward(text: &str, settings: &SearchSettings) -> Result<Self> {
        Ok(Self::Forward {
            text: normalize_text(text)?,
            limit: settings.result_limit,
        })
    }

    pub fn reverse(location: Coordinate) -> Self {
        Self::Reverse { location }
    }
}

/// A map-ready result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub point: Coordinate,
    pub label: String,
    /// Raw provider `properties`, label included
    pub attributes: Map<String, Value>,
    /// Zoom extent around `point`
    pub extent: Extent,
}
