//! Host search widget binding
//!
//! The widget calls `get_suggestions` as the user types and `get_results`
//! once per selection or location event. Field names follow the widget's
//! camelCase contract.

use crate::config::SearchSettings;
use crate::coord::buffer::{BufferComputer, GeodesicBuffer};
use crate::coord::{Coordinate, Extent};
use crate::error::{Error, Result};
use crate::geocode::GeocodeBackend;
use crate::search::{ResultAdapter, ResultQuery, SearchResult, Suggestion, SuggestionAdapter};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters of a suggestion callback
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestParams {
    pub suggest_term: String,
    #[serde(default)]
    pub source_index: usize,
}

/// A suggestion the user picked, echoed back by the widget
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResult {
    pub text: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub source_index: usize,
}

/// Parameters of a results callback
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultParams {
    #[serde(default)]
    pub suggest_result: Option<SuggestResult>,
    /// Set when the user searches around their own position
    #[serde(default)]
    pub location: Option<Coordinate>,
    #[serde(default)]
    pub source_index: usize,
}

/// Suggestion in the widget's shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSuggestion {
    pub key: String,
    pub text: String,
    pub source_index: usize,
}

impl From<Suggestion> for HostSuggestion {
    fn from(s: Suggestion) -> Self {
        Self {
            key: s.key.to_string(),
            text: s.label,
            source_index: s.source_index,
        }
    }
}

/// Displayable feature: point geometry plus raw attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    pub geometry: Coordinate,
    pub attributes: Map<String, Value>,
}

/// Result in the widget's shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostResult {
    pub extent: Extent,
    pub feature: Graphic,
    pub name: String,
}

impl From<SearchResult> for HostResult {
    fn from(r: SearchResult) -> Self {
        Self {
            extent: r.extent,
            feature: Graphic {
                geometry: r.point,
                attributes: r.attributes,
            },
            name: r.label,
        }
    }
}

/// Custom search source registered with the host widget
pub struct SearchSource<B, C = GeodesicBuffer> {
    placeholder: String,
    suggestions: SuggestionAdapter<B>,
    results: ResultAdapter<B, C>,
}

impl<B: GeocodeBackend + Clone> SearchSource<B> {
    pub fn new(backend: B, settings: SearchSettings) -> Self {
        Self::with_buffer(backend, GeodesicBuffer, settings)
    }
}

impl<B: GeocodeBackend + Clone, C: BufferComputer> SearchSource<B, C> {
    pub fn with_buffer(backend: B, buffer: C, settings: SearchSettings) -> Self {
        Self {
            placeholder: settings.placeholder.clone(),
            suggestions: SuggestionAdapter::new(backend.clone(), settings.clone()),
            results: ResultAdapter::with_buffer(backend, buffer, settings),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn settings(&self) -> &SearchSettings {
        self.results.settings()
    }

    /// Suggestion callback; `view_center` biases results toward the map view
    pub async fn get_suggestions(
        &self,
        params: &SuggestParams,
        view_center: Coordinate,
    ) -> Result<Vec<HostSuggestion>> {
        let query = self
            .suggestions
            .query(&params.suggest_term, view_center)?
            .with_source_index(params.source_index);

        let suggestions = self.suggestions.suggest(&query).await?;
        Ok(suggestions.into_iter().map(HostSuggestion::from).collect())
    }

    /// Results callback; a location wins over a picked suggestion
    pub async fn get_results(&self, params: &ResultParams) -> Result<Vec<HostResult>> {
        let query = Self::result_query(params, self.settings())?;
        let results = self.results.resolve(&query).await?;
        Ok(results.into_iter().map(HostResult::from).collect())
    }

    fn result_query(params: &ResultParams, settings: &SearchSettings) -> Result<ResultQuery> {
        match (&params.location, &params.suggest_result) {
            (Some(location), _) => Ok(ResultQuery::reverse(*location)),
            (None, Some(picked)) => ResultQuery::forward(&picked.text, settings),
            (None, None) => Err(Error::Validation(
                "results need a location or a suggestResult".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::mock::{raw_features, Call, MockBackend};

    fn center() -> Coordinate {
        Coordinate::new(2.21, 46.22).unwrap()
    }

    fn port_backend() -> MockBackend {
        MockBackend::returning(raw_features(&[("8 Boulevard du Port", [-1.15, 46.16])]))
    }

    #[tokio::test]
    async fn test_get_suggestions_shape() {
        let backend = port_backend();
        let source = SearchSource::new(backend.clone(), SearchSettings::default());

        let params = SuggestParams {
            suggest_term: "8 Boulevard du".to_string(),
            source_index: 1,
        };
        let suggestions = source.get_suggestions(&params, center()).await.unwrap();

        assert_eq!(
            suggestions,
            vec![HostSuggestion {
                key: "0".to_string(),
                text: "8 Boulevard du Port".to_string(),
                source_index: 1,
            }]
        );

        let json = serde_json::to_value(&suggestions[0]).unwrap();
        assert_eq!(json["sourceIndex"], 1);
    }

    #[tokio::test]
    async fn test_get_results_from_suggestion() {
        let backend = port_backend();
        let source = SearchSource::new(backend.clone(), SearchSettings::default());

        let params: ResultParams = serde_json::from_value(serde_json::json!({
            "suggestResult": {"text": "8 Boulevard du Port", "key": "0", "sourceIndex": 0},
            "sourceIndex": 0
        }))
        .unwrap();
        let results = source.get_results(&params).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "8 Boulevard du Port");
        assert_eq!(results[0].feature.geometry.longitude(), -1.15);
        assert!(results[0].extent.contains(results[0].feature.geometry));
        assert!(matches!(backend.calls()[0], Call::Search { .. }));
    }

    #[tokio::test]
    async fn test_get_results_location_wins() {
        let backend = port_backend();
        let source = SearchSource::new(backend.clone(), SearchSettings::default());

        let location = Coordinate::new(-1.15, 46.16).unwrap();
        let params = ResultParams {
            suggest_result: Some(SuggestResult {
                text: "ignored".to_string(),
                key: None,
                source_index: 0,
            }),
            location: Some(location),
            source_index: 0,
        };
        source.get_results(&params).await.unwrap();

        assert_eq!(backend.calls(), vec![Call::Reverse { location }]);
    }

    #[tokio::test]
    async fn test_get_results_needs_input() {
        let backend = port_backend();
        let source = SearchSource::new(backend.clone(), SearchSettings::default());

        let err = source.get_results(&ResultParams::default()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_errors_propagate_from_both_callbacks() {
        let source = SearchSource::new(MockBackend::failing(500), SearchSettings::default());

        let params = SuggestParams {
            suggest_term: "Paris".to_string(),
            source_index: 0,
        };
        assert!(source.get_suggestions(&params, center()).await.is_err());

        let params = ResultParams {
            location: Some(center()),
            ..ResultParams::default()
        };
        assert!(matches!(
            source.get_results(&params).await,
            Err(Error::Transport { status: Some(500), .. })
        ));
    }

    #[test]
    fn test_placeholder() {
        let source = SearchSource::new(MockBackend::returning(Vec::new()), SearchSettings::default());
        assert_eq!(source.placeholder(), "example: 8 Boulevard du Port");
    }
}
