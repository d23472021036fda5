//! Binding site generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{round2, sequence_len};

/// Residue codes cycled through when labelling sites.
const RESIDUE_CODES: [&str; 10] = [
    "arg", "lys", "glu", "asp", "his", "ser", "thr", "asn", "gln", "cys",
];

/// Smallest contribution a site can be reported with.
const MIN_CONTRIBUTION: f64 = 0.05;

/// A single predicted residue contact and its contribution to binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingSite {
    pub residue: String,
    pub contribution: f64,
}

/// Generate between 2 and 5 binding sites for a sequence.
///
/// Sites are ordered by descending nominal contribution (index 0 carries the
/// highest base value). Each contribution is jittered by a uniform ±0.05 per
/// call, so repeat calls for the same sequence agree on count, residues and
/// ordering but not on exact contributions — unlike the other derivations,
/// which are fully deterministic. Callers must not compare contributions
/// across calls.
pub fn binding_sites(sequence: &str) -> Vec<BindingSite> {
    let len = sequence_len(sequence);
    let num_sites = (len / 50).clamp(2, 5);
    let mut rng = rand::thread_rng();

    (0..num_sites)
        .map(|i| {
            let position = (i + 1) * 15 + len % 20;
            let code = RESIDUE_CODES[i % RESIDUE_CODES.len()];
            let jitter = rng.gen_range(-0.05..=0.05);
            let contribution = round2(0.30 - i as f64 * 0.05 + jitter).max(MIN_CONTRIBUTION);

            BindingSite {
                residue: format!("{}-{}", code, position),
                contribution,
            }
        })
        .collect()
}
