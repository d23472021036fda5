//! Interaction type assignment.

use crate::sequence_len;

/// The fixed set of interaction categories the mock model can emit.
pub const INTERACTION_TYPES: [&str; 5] = [
    "hydrogen bonding",
    "hydrophobic interaction",
    "ionic bonding",
    "van der waals forces",
    "pi-pi stacking",
];

/// Pick the interaction type for a sequence.
///
/// Selection is sequence length modulo the table size, so it is stable for
/// identical input.
pub fn interaction_type(sequence: &str) -> &'static str {
    INTERACTION_TYPES[sequence_len(sequence) % INTERACTION_TYPES.len()]
}
