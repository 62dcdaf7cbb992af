use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::LineSequence;

const DOMAIN: &[u8] = b"linedelta-pair-v1:";

/// Content fingerprint of a (source, target) input pair.
///
/// Two comparisons with equal fingerprints have identical inputs and hence
/// identical deltas. Every line is length-prefixed, so different line splits
/// of the same bytes hash differently.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint an input pair. Order matters: `(a, b)` and `(b, a)` differ.
    pub fn of_pair(source: &LineSequence, target: &LineSequence) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN);
        hash_side(&mut hasher, source);
        hash_side(&mut hasher, target);
        Self(*hasher.finalize().as_bytes())
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

fn hash_side(hasher: &mut blake3::Hasher, lines: &LineSequence) {
    hasher.update(&(lines.len() as u64).to_le_bytes());
    for line in lines.iter() {
        hasher.update(&(line.len() as u64).to_le_bytes());
        hasher.update(line.as_bytes());
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.short_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
