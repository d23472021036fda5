//! Binding affinity derivation from the sequence digest.

use sha2::{Digest, Sha256};

use crate::round2;

/// Base affinity in kcal/mol that the digest variation is applied to.
const BASE_AFFINITY: f64 = -8.0;

/// Derive a binding affinity in kcal/mol for a sequence.
///
/// The first eight bytes of the sequence's SHA-256 digest are folded into one
/// of 80 buckets and scaled onto [-4.0, +3.9], giving a final value in
/// [-12.0, -4.0]. Identical input always yields the identical affinity.
pub fn binding_affinity(sequence: &str) -> f64 {
    let digest = Sha256::digest(sequence.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let bucket = u64::from_be_bytes(head) % 80;

    let variation = bucket as f64 / 10.0 - 4.0;
    round2(BASE_AFFINITY + variation)
}
