//! Protocol-number reference table.
//!
//! Maps decimal IP protocol numbers (as text, the way the IANA table keys
//! them) to their keyword (`6` -> `TCP`). The table is read-only shared input
//! across all applications and rules within one run; it is passed into the
//! aggregator explicitly, never held as process-wide state.

use std::collections::HashMap;

/// One row of the protocol reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolEntry {
    /// Decimal protocol number as text, e.g. `"6"`.
    pub decimal: String,
    /// Protocol keyword, e.g. `"TCP"`.
    pub keyword: String,
}

/// Read-only lookup table from decimal protocol number to keyword.
#[derive(Debug, Clone, Default)]
pub struct ProtocolTable {
    entries: HashMap<String, ProtocolEntry>,
}

impl ProtocolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from entries. Later entries with the same decimal key
    /// replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = ProtocolEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    pub fn insert(&mut self, entry: ProtocolEntry) {
        self.entries.insert(entry.decimal.clone(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the keyword for a protocol number.
    pub fn keyword(&self, proto: i64) -> Option<&str> {
        self.entries
            .get(proto.to_string().as_str())
            .map(|e| e.keyword.as_str())
    }

    /// Look up the label key for a protocol number: the keyword when the
    /// table knows it, otherwise the literal fallback `PROTO-<n>`.
    ///
    /// The fallback key carries the protocol number itself, so two distinct
    /// unknown protocols never collapse into one key.
    pub fn key_for(&self, proto: i64) -> String {
        match self.keyword(proto) {
            Some(keyword) if !keyword.is_empty() => keyword.to_string(),
            _ => format!("PROTO-{proto}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> ProtocolTable {
        ProtocolTable::from_entries([
            ProtocolEntry {
                decimal: "6".to_string(),
                keyword: "TCP".to_string(),
            },
            ProtocolEntry {
                decimal: "17".to_string(),
                keyword: "UDP".to_string(),
            },
        ])
    }

    #[test]
    fn test_keyword_lookup() {
        let table = table();
        assert_eq!(table.keyword(6), Some("TCP"));
        assert_eq!(table.keyword(17), Some("UDP"));
        assert_eq!(table.keyword(146), None);
    }

    #[test]
    fn test_key_for_known_protocol() {
        assert_eq!(table().key_for(6), "TCP");
    }

    #[test]
    fn test_key_for_miss_uses_literal_fallback() {
        let table = table();
        assert_eq!(table.key_for(99), "PROTO-99");
        assert_eq!(table.key_for(146), "PROTO-146");
    }

    #[test]
    fn test_empty_keyword_is_a_miss() {
        let table = ProtocolTable::from_entries([ProtocolEntry {
            decimal: "63".to_string(),
            keyword: String::new(),
        }]);
        assert_eq!(table.key_for(63), "PROTO-63");
    }

    #[test]
    fn test_duplicate_decimal_last_wins() {
        let table = ProtocolTable::from_entries([
            ProtocolEntry {
                decimal: "6".to_string(),
                keyword: "OLD".to_string(),
            },
            ProtocolEntry {
                decimal: "6".to_string(),
                keyword: "TCP".to_string(),
            },
        ]);
        assert_eq!(table.key_for(6), "TCP");
        assert_eq!(table.len(), 1);
    }
}
