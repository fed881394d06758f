//! Ordered trigger code sequences.

use serde::{Deserialize, Serialize};

/// The classic 10-step sequence: up, up, down, down, left, right,
/// left, right, b, a.
pub const KONAMI_CODE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// An ordered sequence of key codes, fixed at configuration time.
///
/// An empty sequence disables matching entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSpec {
    codes: Vec<u32>,
}

impl SequenceSpec {
    /// Create a sequence from an ordered code list.
    pub fn new(codes: Vec<u32>) -> Self {
        Self { codes }
    }

    /// The default Konami-style sequence.
    pub fn konami() -> Self {
        Self {
            codes: KONAMI_CODE.to_vec(),
        }
    }

    /// A sequence that never matches (disables the matcher).
    pub fn disabled() -> Self {
        Self { codes: Vec::new() }
    }

    /// Number of steps in the sequence.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the sequence is empty (matching disabled).
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The expected code at a cursor position, if in range.
    pub fn code_at(&self, cursor: usize) -> Option<u32> {
        self.codes.get(cursor).copied()
    }

    /// The full ordered code list.
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }
}

impl Default for SequenceSpec {
    fn default() -> Self {
        Self::konami()
    }
}

impl From<Vec<u32>> for SequenceSpec {
    fn from(codes: Vec<u32>) -> Self {
        Self::new(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_konami_is_ten_steps() {
        let spec = SequenceSpec::konami();
        assert_eq!(spec.len(), 10);
        assert_eq!(spec.code_at(0), Some(38));
        assert_eq!(spec.code_at(9), Some(65));
        assert_eq!(spec.code_at(10), None);
    }

    #[test]
    fn test_empty_is_disabled() {
        let spec = SequenceSpec::disabled();
        assert!(spec.is_empty());
        assert_eq!(spec.code_at(0), None);
    }

    #[test]
    fn test_roundtrip() {
        let spec = SequenceSpec::new(vec![1, 2, 3]);
        let json = serde_json::to_string(&spec).unwrap();
        let parsed: SequenceSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, parsed);
    }
}
