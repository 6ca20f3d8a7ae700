use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PERSONALIZATION, DEFAULT_PREIMAGE_BYTES};

/// Construction parameters of a [`crate::PedersenHasher`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PedersenParams {
    /// Domain-separation string, at most 28 bytes.
    pub personalization: String,
    /// Exact preimage size in bytes.
    pub preimage_bytes: usize,
}

impl Default for PedersenParams {
    fn default() -> Self {
        Self {
            personalization: DEFAULT_PERSONALIZATION.to_owned(),
            preimage_bytes: DEFAULT_PREIMAGE_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PedersenParams::default();
        assert_eq!(params.personalization, "test");
        assert_eq!(params.preimage_bytes, 64);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let params: PedersenParams = serde_json::from_str(r#"{"preimage_bytes": 32}"#).unwrap();
        assert_eq!(params.personalization, "test");
        assert_eq!(params.preimage_bytes, 32);

        let json = serde_json::to_string(&params).unwrap();
        let back: PedersenParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
