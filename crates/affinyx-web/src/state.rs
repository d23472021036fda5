//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use affinyx_predict::Predictor;

/// Shared state injected into every Axum handler.
///
/// Built once at startup and passed by `Arc`; holds no mutable state, so
/// concurrent requests never contend.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
    /// Hard upper bound on a single prediction run.
    pub prediction_timeout: Duration,
}

impl AppState {
    pub fn new(predictor: Predictor, prediction_timeout: Duration) -> Self {
        Self {
            predictor,
            prediction_timeout,
        }
    }
}

pub type SharedState = Arc<AppState>;
