use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A newtype that ensures sail numbers are stored in a normalized, consistent form
/// so that "usa 101" and "USA 101" resolve to the same rating record.
///
/// Matching is exact on the normalized string: "USA 123" and "USA123" remain
/// distinct sail numbers. Deduplicating formatting variants is a data-entry
/// problem, not a matching problem, and fuzzy matching is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct SailNumber(String);

impl SailNumber {
    /// Creates a normalized sail number: trimmed and uppercased.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SailNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SailNumber {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_uppercases() {
        let sail = SailNumber::new("usa 101");
        assert_eq!(sail.as_str(), "USA 101");
    }

    #[test]
    fn test_normalization_trims_whitespace() {
        let sail = SailNumber::new("  GBR 42  ");
        assert_eq!(sail.as_str(), "GBR 42");
    }

    #[test]
    fn test_equality_regardless_of_input_case() {
        assert_eq!(SailNumber::new("ita 7"), SailNumber::new("ITA 7"));
    }

    #[test]
    fn test_spacing_variants_stay_distinct() {
        assert_ne!(SailNumber::new("USA 123"), SailNumber::new("USA123"));
    }
}
