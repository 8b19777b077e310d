//! Suggestions while the user types
//!
//! `suggest` mirrors the widget's contract exactly: every call resolves,
//! in whatever order the network returns them. `suggest_latest` adds a
//! sequence guard that drops responses overtaken by a newer keystroke.

use crate::config::SearchSettings;
use crate::coord::Coordinate;
use crate::error::Result;
use crate::geocode::GeocodeBackend;
use crate::search::{Suggestion, SuggestionQuery};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Turns keystrokes into suggestion lists
pub struct SuggestionAdapter<B> {
    backend: B,
    settings: SearchSettings,
    /// Ticket of the most recently issued `suggest_latest` call
    latest: AtomicU64,
}

impl<B: GeocodeBackend> SuggestionAdapter<B> {
    pub fn new(backend: B, settings: SearchSettings) -> Self {
        Self {
            backend,
            settings,
            latest: AtomicU64::new(0),
        }
    }

    /// Build a query from raw input and the current view center
    pub fn query(&self, text: &str, view_center: Coordinate) -> Result<SuggestionQuery> {
        SuggestionQuery::new(text, view_center, &self.settings)
    }

    /// Fetch suggestions for a query
    ///
    /// An empty provider response gives an empty list.
    pub async fn suggest(&self, query: &SuggestionQuery) -> Result<Vec<Suggestion>> {
        let features = self
            .backend
            .fetch_suggestions(&query.text, query.bias, query.limit)
            .await?;

        features
            .iter()
            .enumerate()
            .map(|(key, feature)| {
                Ok(Suggestion {
                    label: feature.label()?.to_string(),
                    source_index: query.source_index,
                    key,
                })
            })
            .collect()
    }

    /// Fetch suggestions, discarding the outcome if a newer call was issued
    ///
    /// Returns `Ok(None)` for a superseded call, whether it succeeded or
    /// failed. Only the latest call reports errors.
    pub async fn suggest_latest(&self, query: &SuggestionQuery) -> Result<Option<Vec<Suggestion>>> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.suggest(query).await;

        let latest = self.latest.load(Ordering::SeqCst);
        if latest != ticket {
            debug!(
                "dropping suggestions for '{}' (ticket {}, latest {})",
                query.text, ticket, latest
            );
            return Ok(None);
        }
        outcome.map(Some)
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geocode::mock::{raw_features, Call, MockBackend};
    use crate::geocode::{GeocodeBackend, RawFeature};
    use std::sync::Arc;
    use tokio::sync::Notify;

    fn center() -> Coordinate {
        Coordinate::new(2.21, 46.22).unwrap()
    }

    #[tokio::test]
    async fn test_suggest_maps_labels() {
        let backend = MockBackend::returning(raw_features(&[
            ("8 Boulevard du Port 17000 La Rochelle", [-1.15, 46.16]),
            ("8 Boulevard du Port 95000 Cergy", [2.06, 49.03]),
        ]));
        let adapter = SuggestionAdapter::new(backend.clone(), SearchSettings::default());

        let query = adapter
            .query("8 Boulevard du Port", center())
            .unwrap()
            .with_source_index(2);
        let suggestions = adapter.suggest(&query).await.unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].label, "8 Boulevard du Port 17000 La Rochelle");
        assert_eq!(suggestions[0].key, 0);
        assert_eq!(suggestions[1].key, 1);
        assert!(suggestions.iter().all(|s| s.source_index == 2));

        assert_eq!(
            backend.calls(),
            vec![Call::Suggestions {
                text: "8 Boulevard du Port".to_string(),
                bias: center(),
                limit: 6,
            }]
        );
    }

    #[tokio::test]
    async fn test_suggest_uses_configured_limit() {
        let backend = MockBackend::returning(Vec::new());
        let settings = SearchSettings {
            suggestion_limit: 2,
            ..SearchSettings::default()
        };
        let adapter = SuggestionAdapter::new(backend.clone(), settings);

        let query = adapter.query("Nantes", center()).unwrap();
        adapter.suggest(&query).await.unwrap();

        assert!(matches!(backend.calls()[0], Call::Suggestions { limit: 2, .. }));
    }

    #[tokio::test]
    async fn test_suggest_empty_features() {
        let adapter =
            SuggestionAdapter::new(MockBackend::returning(Vec::new()), SearchSettings::default());
        let query = adapter.query("zzzz", center()).unwrap();
        assert!(adapter.suggest(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_suggest_propagates_transport_error() {
        let adapter = SuggestionAdapter::new(MockBackend::failing(500), SearchSettings::default());
        let query = adapter.query("Paris", center()).unwrap();

        let err = adapter.suggest(&query).await.unwrap_err();
        assert!(matches!(err, Error::Transport { status: Some(500), .. }));
    }

    #[tokio::test]
    async fn test_suggest_latest_single_call() {
        let backend = MockBackend::returning(raw_features(&[("Paris", [2.35, 48.85])]));
        let adapter = SuggestionAdapter::new(backend, SearchSettings::default());
        let query = adapter.query("Paris", center()).unwrap();

        let suggestions = adapter.suggest_latest(&query).await.unwrap().unwrap();
        assert_eq!(suggestions.len(), 1);
    }

    #[tokio::test]
    async fn test_suggest_latest_reports_error_when_latest() {
        let adapter = SuggestionAdapter::new(MockBackend::failing(503), SearchSettings::default());
        let query = adapter.query("Paris", center()).unwrap();
        assert!(adapter.suggest_latest(&query).await.is_err());
    }

    /// Backend whose first call blocks until released
    struct GatedBackend {
        gate: Arc<Notify>,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl GeocodeBackend for GatedBackend {
        async fn fetch_suggestions(
            &self,
            text: &str,
            _bias: Coordinate,
            _limit: usize,
        ) -> Result<Vec<RawFeature>> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.gate.notified().await;
            }
            Ok(raw_features(&[(text, [2.35, 48.85])]))
        }

        async fn search(&self, _text: &str, _limit: usize) -> Result<Vec<RawFeature>> {
            Err(Error::transport("unused"))
        }

        async fn reverse(&self, _location: Coordinate) -> Result<Vec<RawFeature>> {
            Err(Error::transport("unused"))
        }
    }

    #[tokio::test]
    async fn test_suggest_latest_drops_overtaken_response() {
        let gate = Arc::new(Notify::new());
        let backend = GatedBackend {
            gate: gate.clone(),
            calls: std::sync::atomic::AtomicUsize::new(0),
        };
        let adapter = Arc::new(SuggestionAdapter::new(backend, SearchSettings::default()));

        let slow_query = adapter.query("8 Bou", center()).unwrap();
        let slow = {
            let adapter = adapter.clone();
            tokio::spawn(async move { adapter.suggest_latest(&slow_query).await })
        };
        // Let the slow call take its ticket and park on the gate
        while adapter.latest.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        let fast_query = adapter.query("8 Boulevard", center()).unwrap();
        let fast = adapter.suggest_latest(&fast_query).await.unwrap();
        gate.notify_one();
        let slow = slow.await.unwrap().unwrap();

        assert_eq!(fast.unwrap()[0].label, "8 Boulevard");
        assert!(slow.is_none());
    }
}
