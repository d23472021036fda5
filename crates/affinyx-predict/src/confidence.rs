//! Confidence scoring for a prediction.

use crate::{round2, sequence_len};

const BASE_CONFIDENCE: f64 = 0.65;
const STRUCTURE_BONUS: f64 = 0.15;
const PROPERTIES_BONUS: f64 = 0.10;
const MAX_CONFIDENCE: f64 = 0.98;

/// Compute the confidence score in [0, 0.98].
///
/// More input data raises the score: structural data and chemical properties
/// each add a fixed bonus, and longer sequences add up to 0.10 on top. The
/// final value is capped at 0.98 and rounded to two decimals.
pub fn confidence_score(sequence: &str, has_structure: bool, has_properties: bool) -> f64 {
    let mut confidence = BASE_CONFIDENCE;
    if has_structure {
        confidence += STRUCTURE_BONUS;
    }
    if has_properties {
        confidence += PROPERTIES_BONUS;
    }

    let length_bonus = (sequence_len(sequence) as f64 / 1000.0).min(0.10);
    round2((confidence + length_bonus).min(MAX_CONFIDENCE))
}
