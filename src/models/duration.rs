//! Processing duration table and fallback resolution.
//!
//! Maps product types to processing minutes. Resolution is a total
//! function: exact key, else the `"Default"` entry, else the engine
//! fallback constant — the calculator never stalls on an unmapped
//! product.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Conventional key for the table-level default duration.
pub const DEFAULT_KEY: &str = "Default";

/// Engine-level fallback (minutes) when a table has neither an exact
/// match nor a `"Default"` entry. Positive by construction.
pub const FALLBACK_MINUTES: i64 = 240;

/// Product type → processing minutes.
///
/// Supplied as a whole by the duration source and replaceable as a
/// whole; the engine never mutates it. Entries are expected to be
/// positive — `validation::validate_input` flags non-positive ones,
/// but [`DurationTable::resolve`] itself performs no checking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationTable {
    entries: HashMap<String, i64>,
}

impl DurationTable {
    /// Creates an empty table (all lookups resolve to [`FALLBACK_MINUTES`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry.
    pub fn with_entry(mut self, product_type: impl Into<String>, minutes: i64) -> Self {
        self.entries.insert(product_type.into(), minutes);
        self
    }

    /// Sets the `"Default"` entry.
    pub fn with_default(self, minutes: i64) -> Self {
        self.with_entry(DEFAULT_KEY, minutes)
    }

    /// Exact lookup, no fallback.
    pub fn get(&self, product_type: &str) -> Option<i64> {
        self.entries.get(product_type).copied()
    }

    /// Whether the table carries a `"Default"` entry.
    pub fn has_default(&self) -> bool {
        self.entries.contains_key(DEFAULT_KEY)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(product_type, minutes)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Resolves the processing duration for a product type (minutes).
    ///
    /// Resolution chain: exact match → `"Default"` entry →
    /// [`FALLBACK_MINUTES`]. Total: never fails, never returns a
    /// non-positive value for a well-formed table.
    pub fn resolve(&self, product_type: &str) -> i64 {
        self.entries
            .get(product_type)
            .or_else(|| self.entries.get(DEFAULT_KEY))
            .copied()
            .unwrap_or(FALLBACK_MINUTES)
    }
}

impl FromIterator<(String, i64)> for DurationTable {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DurationTable {
        DurationTable::new()
            .with_entry("HydraulicPump", 105)
            .with_entry("BrakeDisc", 25)
            .with_default(60)
    }

    #[test]
    fn test_resolve_exact_match() {
        let table = sample_table();
        assert_eq!(table.resolve("HydraulicPump"), 105);
        assert_eq!(table.resolve("BrakeDisc"), 25);
    }

    #[test]
    fn test_resolve_falls_back_to_default_entry() {
        let table = sample_table();
        assert_eq!(table.resolve("Turbocharger"), 60);
    }

    #[test]
    fn test_resolve_empty_table_uses_fallback_constant() {
        let table = DurationTable::new();
        assert_eq!(table.resolve("Z"), FALLBACK_MINUTES);
        assert_eq!(table.resolve(DEFAULT_KEY), FALLBACK_MINUTES);
    }

    #[test]
    fn test_resolve_no_default_entry_uses_fallback_constant() {
        let table = DurationTable::new().with_entry("Axle", 75);
        assert_eq!(table.resolve("Axle"), 75);
        assert_eq!(table.resolve("Unknown"), FALLBACK_MINUTES);
    }

    #[test]
    fn test_fallback_constant_is_positive() {
        assert!(FALLBACK_MINUTES > 0);
    }

    #[test]
    fn test_deserialize_from_source_payload() {
        // Shape of the duration source's JSON payload.
        let table: DurationTable =
            serde_json::from_str(r#"{"HydraulicPump":105,"Exhaust":20,"Default":60}"#).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.has_default());
        assert_eq!(table.resolve("Exhaust"), 20);
    }

    #[test]
    fn test_from_iterator() {
        let table: DurationTable = vec![("A".to_string(), 10), ("Default".to_string(), 5)]
            .into_iter()
            .collect();
        assert_eq!(table.resolve("A"), 10);
        assert_eq!(table.resolve("B"), 5);
    }
}
