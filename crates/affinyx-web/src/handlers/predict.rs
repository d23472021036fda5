//! Binding prediction endpoint.

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{info, warn};
use uuid::Uuid;

use affinyx_common::ApiError;
use affinyx_predict::{ChemicalProperties, Prediction, PredictionInput};

use crate::state::SharedState;

/// Shortest sequence the model accepts, in characters.
const MIN_SEQUENCE_CHARS: usize = 10;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub amino_acid_sequence: String,
    pub pdb_data: Option<String>,
    pub chemical_properties: Option<ChemicalProperties>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub prediction: Prediction,
}

/// POST /predict - Predict binding affinity for an amino-acid sequence.
///
/// The orchestrator runs under the configured time budget; on expiry the
/// in-flight run is dropped and the caller gets a timeout error, never a
/// partial result.
pub async fn predict_binding(
    State(state): State<SharedState>,
    Json(request): Json<PredictRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let sequence_chars = request.amino_acid_sequence.chars().count();

    if sequence_chars < MIN_SEQUENCE_CHARS {
        return Err(ApiError::InvalidSequence);
    }

    let input = PredictionInput {
        sequence: request.amino_acid_sequence,
        structure_data: request.pdb_data,
        chemical_properties: request.chemical_properties,
    };

    info!(%request_id, sequence_chars, "running binding prediction");

    let prediction = match timeout(state.prediction_timeout, state.predictor.run(&input)).await {
        Ok(result) => result?,
        Err(_) => {
            warn!(%request_id, "prediction exceeded its time budget");
            return Err(ApiError::Timeout);
        }
    };

    info!(
        %request_id,
        binding_affinity = prediction.binding_affinity,
        confidence_score = prediction.confidence_score,
        "prediction complete"
    );

    Ok(Json(PredictResponse {
        success: true,
        prediction,
    }))
}
