//! Bounded, newest-first history of drawn values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed-capacity record of produced values, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct HistoryLedger {
    entries: Vec<i64>,
}

/// Error returned when restoring a ledger with more entries than it can hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("history holds at most {} entries, got {len}", HistoryLedger::CAPACITY)]
pub struct LedgerOverflow {
    /// Number of entries supplied.
    pub len: usize,
}

impl TryFrom<Vec<i64>> for HistoryLedger {
    type Error = LedgerOverflow;

    fn try_from(entries: Vec<i64>) -> Result<Self, Self::Error> {
        if entries.len() > Self::CAPACITY {
            return Err(LedgerOverflow { len: entries.len() });
        }
        Ok(Self { entries })
    }
}

impl From<HistoryLedger> for Vec<i64> {
    fn from(ledger: HistoryLedger) -> Self {
        ledger.entries
    }
}

impl HistoryLedger {
    /// Maximum number of entries kept.
    pub const CAPACITY: usize = 10;

    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::CAPACITY + 1),
        }
    }

    /// Inserts `value` at the front, evicting the oldest entry when full.
    pub fn record(&mut self, value: i64) {
        self.entries.insert(0, value);
        self.entries.truncate(Self::CAPACITY);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Current contents, newest first.
    #[must_use]
    pub fn snapshot(&self) -> &[i64] {
        &self.entries
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = HistoryLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.snapshot().is_empty());
    }

    #[test]
    fn test_record_inserts_newest_first() {
        let mut ledger = HistoryLedger::new();
        ledger.record(1);
        ledger.record(2);
        ledger.record(3);
        assert_eq!(ledger.snapshot(), &[3, 2, 1]);
    }

    #[test]
    fn test_record_fifteen_keeps_last_ten_newest_first() {
        let mut ledger = HistoryLedger::new();
        for value in 1..=15 {
            ledger.record(value);
        }

        assert_eq!(ledger.len(), HistoryLedger::CAPACITY);
        assert_eq!(ledger.snapshot(), &[15, 14, 13, 12, 11, 10, 9, 8, 7, 6]);
    }

    #[test]
    fn test_record_exactly_capacity_evicts_nothing() {
        let mut ledger = HistoryLedger::new();
        for value in 0..10 {
            ledger.record(value);
        }
        assert_eq!(ledger.len(), 10);
        assert_eq!(ledger.snapshot().last(), Some(&0));
    }

    #[test]
    fn test_record_allows_duplicate_values() {
        let mut ledger = HistoryLedger::new();
        ledger.record(4);
        ledger.record(9);
        ledger.record(4);
        assert_eq!(ledger.snapshot(), &[4, 9, 4]);
    }

    #[test]
    fn test_clear_empties_and_is_idempotent() {
        let mut ledger = HistoryLedger::new();
        ledger.record(7);
        ledger.clear();
        assert!(ledger.is_empty());
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_restoring_a_full_ledger_keeps_order() {
        let ledger: HistoryLedger = serde_json::from_str("[10,9,8,7,6,5,4,3,2,1]").unwrap();

        assert_eq!(ledger.len(), HistoryLedger::CAPACITY);
        assert_eq!(ledger.snapshot().first(), Some(&10));
        assert_eq!(serde_json::to_string(&ledger).unwrap(), "[10,9,8,7,6,5,4,3,2,1]");
    }

    #[test]
    fn test_restoring_an_oversized_ledger_fails() {
        let result = serde_json::from_str::<HistoryLedger>("[11,10,9,8,7,6,5,4,3,2,1]");
        assert!(result.is_err());

        assert_eq!(
            HistoryLedger::try_from(vec![0; 11]),
            Err(LedgerOverflow { len: 11 })
        );
    }
}
