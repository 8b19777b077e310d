//! Test doubles for the address API
//!
//! - [`spawn_provider`] runs an in-process HTTP server that answers every
//!   request with a fixed status and body and records what it received.
//! - [`MockBackend`] implements [`GeocodeBackend`] in memory and records
//!   which operation the adapters invoked.

use crate::coord::Coordinate;
use crate::error::{Error, Result};
use crate::geocode::{GeocodeBackend, RawFeature};
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Router;
use std::sync::{Arc, Mutex};

/// A request seen by the mock provider
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    /// Raw query string, exactly as sent
    pub query: String,
}

#[derive(Clone)]
struct ProviderState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Handle on a running mock provider
pub struct MockProvider {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockProvider {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(State(state): State<ProviderState>, uri: Uri) -> (StatusCode, String) {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().unwrap_or_default().to_string(),
    });
    (state.status, state.body.clone())
}

/// Start a mock provider on an ephemeral local port
pub async fn spawn_provider(status: StatusCode, body: String) -> MockProvider {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = ProviderState {
        status,
        body,
        requests: requests.clone(),
    };
    let app = Router::new().fallback(respond).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockProvider {
        base_url: format!("http://{}/", addr),
        requests,
    }
}

/// Build a FeatureCollection body from (label, [lon, lat]) pairs
pub fn feature_collection(features: &[(&str, [f64; 2])]) -> String {
    let features: Vec<serde_json::Value> = features
        .iter()
        .map(|(label, coords)| {
            serde_json::json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": coords},
                "properties": {"label": label, "score": 0.9, "type": "housenumber"}
            })
        })
        .collect();
    serde_json::json!({"type": "FeatureCollection", "features": features}).to_string()
}

/// Parse features built by [`feature_collection`]
pub fn raw_features(features: &[(&str, [f64; 2])]) -> Vec<RawFeature> {
    crate::geocode::FeatureCollection::from_slice(feature_collection(features).as_bytes())
        .unwrap()
        .features
}

/// Operation invoked on a [`MockBackend`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Suggestions {
        text: String,
        bias: Coordinate,
        limit: usize,
    },
    Search {
        text: String,
        limit: usize,
    },
    Reverse {
        location: Coordinate,
    },
}

/// In-memory backend with a scripted outcome
#[derive(Clone)]
pub struct MockBackend {
    features: Vec<RawFeature>,
    fail_status: Option<u16>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockBackend {
    /// Backend that answers every call with these features
    pub fn returning(features: Vec<RawFeature>) -> Self {
        Self {
            features,
            fail_status: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Backend that fails every call with an HTTP status
    pub fn failing(status: u16) -> Self {
        Self {
            features: Vec::new(),
            fail_status: Some(status),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> Result<Vec<RawFeature>> {
        self.calls.lock().unwrap().push(call);
        match self.fail_status {
            Some(status) => Err(Error::Transport {
                status: Some(status),
                message: "mock failure".to_string(),
            }),
            None => Ok(self.features.clone()),
        }
    }
}

impl GeocodeBackend for MockBackend {
    async fn fetch_suggestions(
        &self,
        text: &str,
        bias: Coordinate,
        limit: usize,
    ) -> Result<Vec<RawFeature>> {
        self.answer(Call::Suggestions {
            text: text.to_string(),
            bias,
            limit,
        })
    }

    async fn search(&self, text: &str, limit: usize) -> Result<Vec<RawFeature>> {
        self.answer(Call::Search {
            text: text.to_string(),
            limit,
        })
    }

    async fn reverse(&self, location: Coordinate) -> Result<Vec<RawFeature>> {
        self.answer(Call::Reverse { location })
    }
}
