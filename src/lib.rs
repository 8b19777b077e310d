//! adresse-search: address search for the French open address API
//!
//! A client for <https://api-adresse.data.gouv.fr/> shaped as a custom
//! source for map search widgets: suggestions while the user types, then
//! map-ready results (point, label, attributes, zoom extent) for a picked
//! suggestion or the user's location.
//!
//! ## Features
//!
//! - Suggestion, forward search and reverse geocoding requests
//! - Zoom extent from a 100 m geodesic buffer around each result
//! - Widget callback binding (`get_suggestions`, `get_results`)
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```no_run
//! use adresse_search::config::SearchSettings;
//! use adresse_search::geocode::GeocodeClient;
//! use adresse_search::search::SearchSource;
//! use adresse_search::search::binding::SuggestParams;
//! use adresse_search::Coordinate;
//!
//! # async fn demo() -> adresse_search::Result<()> {
//! let client = GeocodeClient::new()?;
//! let source = SearchSource::new(client, SearchSettings::default());
//!
//! let center = Coordinate::new(2.21, 46.22)?; // lon, lat
//! let params = SuggestParams { suggest_term: "8 Boulevard du Port".into(), source_index: 0 };
//! for suggestion in source.get_suggestions(&params, center).await? {
//!     println!("{}", suggestion.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geocode;
pub mod search;
pub mod server;

// Re-export commonly used types
pub use config::{Config, SearchSettings};
pub use coord::{Coordinate, Extent};
pub use error::{Error, Result};
pub use search::{ResultQuery, SearchResult, SearchSource, Suggestion, SuggestionQuery};
