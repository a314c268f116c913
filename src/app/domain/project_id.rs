use std::fmt::Write as _;

use rand_core::{OsRng, RngCore};

/// Project ID domain type. 24 lowercase hex characters (12 random bytes),
/// assigned by the service at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId(String);

/// Parse error for anything that is not 24 hex characters.
#[derive(Debug, thiserror::Error)]
#[error("project id must be 24 hex characters")]
pub struct ParseProjectIdError;

impl ProjectId {
    pub const LEN: usize = 24;

    /// Generate a new random identifier.
    pub fn new() -> Self {
        let mut bytes = [0u8; Self::LEN / 2];
        OsRng.fill_bytes(&mut bytes);
        let mut id = String::with_capacity(Self::LEN);
        for b in bytes {
            let _ = write!(id, "{:02x}", b);
        }
        Self(id)
    }

    /// Get as string slice for storage/display.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse from string. Hex digits of either case are accepted and
    /// normalised to lowercase.
    pub fn from_string(s: &str) -> Result<Self, ParseProjectIdError> {
        if s.len() != Self::LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseProjectIdError);
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_new_id() {
        let id1 = ProjectId::new();
        let id2 = ProjectId::new();
        assert_ne!(id1.as_str(), id2.as_str());
        assert_eq!(id1.as_str().len(), ProjectId::LEN);
        assert!(id1.as_str().bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn parse_valid_id() {
        let original = ProjectId::new();
        let parsed = ProjectId::from_string(original.as_str()).unwrap();
        assert_eq!(original.as_str(), parsed.as_str());
    }

    #[test]
    fn parse_normalises_case() {
        let parsed = ProjectId::from_string("64F1A2B3C4D5E6F708192A3B").unwrap();
        assert_eq!(parsed.as_str(), "64f1a2b3c4d5e6f708192a3b");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(ProjectId::from_string("abc123").is_err());
        assert!(ProjectId::from_string("64f1a2b3c4d5e6f708192a3b0").is_err());
        assert!(ProjectId::from_string("").is_err());
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(ProjectId::from_string("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }
}
