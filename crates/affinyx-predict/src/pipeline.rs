//! Orchestrator for the prediction pipeline.
//!
//! Assembles a full prediction from the derivation functions behind a
//! simulated inference delay.

use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::affinity::binding_affinity;
use crate::confidence::confidence_score;
use crate::interaction::interaction_type;
use crate::sites::{binding_sites, BindingSite};

/// Optional chemistry metadata a caller can attach to a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChemicalProperties {
    pub molecular_weight: Option<f64>,
    pub isoelectric_point: Option<f64>,
    pub hydrophobicity: Option<f64>,
}

/// Validated input to a prediction run.
#[derive(Debug, Clone)]
pub struct PredictionInput {
    pub sequence: String,
    pub structure_data: Option<String>,
    pub chemical_properties: Option<ChemicalProperties>,
}

/// A fully assembled prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub binding_affinity: f64,
    pub unit: String,
    pub confidence_score: f64,
    pub interaction_type: String,
    pub binding_sites: Vec<BindingSite>,
}

/// Configuration for the simulated inference stage.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Lower bound of the simulated inference latency.
    pub min_latency: Duration,
    /// Upper bound of the simulated inference latency.
    pub max_latency: Duration,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            min_latency: Duration::from_secs(1),
            max_latency: Duration::from_secs(3),
        }
    }
}

/// Stand-in for a real inference backend.
///
/// Holds no cross-request state; one instance is built at startup and shared
/// by every handler.
#[derive(Debug, Clone)]
pub struct Predictor {
    config: PredictorConfig,
}

impl Predictor {
    /// Create a Predictor with the default 1–3 s simulated latency.
    pub fn new() -> Self {
        Self::with_config(PredictorConfig::default())
    }

    pub fn with_config(config: PredictorConfig) -> Self {
        Self { config }
    }

    /// Run the mock model over a validated input.
    ///
    /// Sleeps for a latency sampled from the configured range before
    /// assembling the result. This await is the only suspension point in a
    /// request; dropping the future (e.g. when the caller's timeout fires)
    /// abandons the run cleanly, since nothing is held across it.
    pub async fn run(&self, input: &PredictionInput) -> Result<Prediction> {
        let latency = self.sample_latency();
        debug!(latency_ms = latency.as_millis() as u64, "simulating inference latency");
        tokio::time::sleep(latency).await;

        Ok(Prediction {
            binding_affinity: binding_affinity(&input.sequence),
            unit: "kcal/mol".to_string(),
            confidence_score: confidence_score(
                &input.sequence,
                input.structure_data.is_some(),
                input.chemical_properties.is_some(),
            ),
            interaction_type: interaction_type(&input.sequence).to_string(),
            binding_sites: binding_sites(&input.sequence),
        })
    }

    fn sample_latency(&self) -> Duration {
        let lo = self.config.min_latency.as_secs_f64();
        let hi = self.config.max_latency.as_secs_f64();
        if hi <= lo {
            return self.config.min_latency;
        }
        Duration::from_secs_f64(rand::thread_rng().gen_range(lo..=hi))
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ: &str = "MVLSPADKTNVKAAWGKVGAHAGEYGAEALERMFLSFPTTKTYFPHFDLSH";

    fn instant_predictor() -> Predictor {
        Predictor::with_config(PredictorConfig {
            min_latency: Duration::ZERO,
            max_latency: Duration::ZERO,
        })
    }

    fn input(sequence: &str) -> PredictionInput {
        PredictionInput {
            sequence: sequence.to_string(),
            structure_data: None,
            chemical_properties: None,
        }
    }

    #[tokio::test]
    async fn test_run_assembles_a_full_prediction() {
        let prediction = instant_predictor().run(&input(SEQ)).await.unwrap();

        assert_eq!(prediction.unit, "kcal/mol");
        assert!((-12.0..=-4.0).contains(&prediction.binding_affinity));
        assert!((0.0..=0.98).contains(&prediction.confidence_score));
        assert!((2..=5).contains(&prediction.binding_sites.len()));
    }

    #[tokio::test]
    async fn test_deterministic_fields_repeat() {
        let predictor = instant_predictor();
        let a = predictor.run(&input(SEQ)).await.unwrap();
        let b = predictor.run(&input(SEQ)).await.unwrap();

        assert_eq!(a.binding_affinity, b.binding_affinity);
        assert_eq!(a.confidence_score, b.confidence_score);
        assert_eq!(a.interaction_type, b.interaction_type);
        // binding_sites contributions are jittered per run; labels must
        // still agree.
        let labels = |p: &Prediction| {
            p.binding_sites
                .iter()
                .map(|s| s.residue.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(labels(&a), labels(&b));
    }

    #[tokio::test]
    async fn test_optional_inputs_feed_confidence() {
        let predictor = instant_predictor();

        let bare = predictor.run(&input(SEQ)).await.unwrap();

        let mut with_structure = input(SEQ);
        with_structure.structure_data = Some("HEADER    OXYGEN TRANSPORT".to_string());
        let enriched = predictor.run(&with_structure).await.unwrap();

        assert!(enriched.confidence_score > bare.confidence_score);
    }

    #[test]
    fn test_latency_sample_respects_bounds() {
        let predictor = Predictor::with_config(PredictorConfig {
            min_latency: Duration::from_millis(10),
            max_latency: Duration::from_millis(20),
        });
        for _ in 0..100 {
            let latency = predictor.sample_latency();
            assert!(latency >= Duration::from_millis(10));
            assert!(latency <= Duration::from_millis(20));
        }
    }

    #[test]
    fn test_degenerate_latency_range_uses_lower_bound() {
        let predictor = Predictor::with_config(PredictorConfig {
            min_latency: Duration::from_millis(7),
            max_latency: Duration::from_millis(7),
        });
        assert_eq!(predictor.sample_latency(), Duration::from_millis(7));
    }
}
