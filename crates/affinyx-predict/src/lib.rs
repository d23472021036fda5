//! affinyx-predict — Mock binding-affinity model for the Affinyx service.
//!
//! There is no trained model behind this crate: every output is derived from
//! the input sequence by cheap, mostly deterministic transforms:
//! 1. Binding affinity from a sequence digest
//! 2. Confidence score from the amount of input data supplied
//! 3. Interaction type from the sequence length
//! 4. Binding sites from length-based residue positions
//!
//! The [`pipeline::Predictor`] ties these together behind a simulated
//! inference delay.

pub mod affinity;
pub mod confidence;
pub mod interaction;
pub mod pipeline;
pub mod sites;

pub use pipeline::{ChemicalProperties, Prediction, PredictionInput, Predictor, PredictorConfig};
pub use sites::BindingSite;

pub type Result<T> = anyhow::Result<T>;

/// Round to two decimal places, the precision every derived value is
/// reported at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sequence length in characters, not bytes. Every derivation indexes off
/// this, so non-ASCII input behaves consistently across the crate.
pub(crate) fn sequence_len(sequence: &str) -> usize {
    sequence.chars().count()
}
