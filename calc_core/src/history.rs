//! # Calculation History
//!
//! A bounded, in-memory log of `"<expression> = <result>"` entries, oldest
//! first. Once [`HISTORY_CAPACITY`] entries are stored, each append evicts
//! the oldest one. Nothing is persisted.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::history::History;
//!
//! let mut history = History::new();
//! history.append("2 + 3", "5");
//! assert_eq!(history.list(), vec!["2 + 3 = 5"]);
//!
//! history.clear();
//! assert!(history.is_empty());
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept
pub const HISTORY_CAPACITY: usize = 10;

/// FIFO log of rendered calculations.
///
/// Deserializing keeps only the newest [`HISTORY_CAPACITY`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Record a calculation, evicting the oldest entry when full.
    pub fn append(&mut self, expression: &str, formatted_result: &str) {
        self.entries
            .push_back(format!("{expression} = {formatted_result}"));
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// All entries, oldest first.
    pub fn list(&self) -> Vec<&str> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for History {
    fn from(entries: Vec<String>) -> Self {
        let skip = entries.len().saturating_sub(HISTORY_CAPACITY);
        History {
            entries: entries.into_iter().skip(skip).collect(),
        }
    }
}

impl From<History> for Vec<String> {
    fn from(history: History) -> Self {
        history.entries.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_list() {
        let mut history = History::new();
        assert!(history.list().is_empty());

        history.append("10 / 2", "5");
        history.append("sqrt(-1)", "Error: Cannot calculate square root of negative number");
        assert_eq!(
            history.list(),
            vec![
                "10 / 2 = 5",
                "sqrt(-1) = Error: Cannot calculate square root of negative number"
            ]
        );
    }

    #[test]
    fn test_eviction() {
        let mut history = History::new();
        for i in 1..=11 {
            history.append(&format!("{i} + 0"), &i.to_string());
        }

        let entries = history.list();
        assert_eq!(entries.len(), HISTORY_CAPACITY);
        assert!(!entries.contains(&"1 + 0 = 1"));
        assert_eq!(entries.first(), Some(&"2 + 0 = 2"));
        assert_eq!(entries.last(), Some(&"11 + 0 = 11"));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.append("1 + 1", "2");
        history.clear();
        assert!(history.is_empty());
        assert!(history.list().is_empty());

        // still usable after clearing
        history.append("2 * 2", "4");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_serialization() {
        let mut history = History::new();
        history.append("2 ^ 3", "8");
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, "[\"2 ^ 3 = 8\"]");
    }

    #[test]
    fn test_deserialize_keeps_newest_entries() {
        let entries: Vec<String> = (1..=15).map(|i| format!("{i} + 0 = {i}")).collect();
        let json = serde_json::to_string(&entries).unwrap();

        let mut history: History = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.list().first(), Some(&"6 + 0 = 6"));
        assert_eq!(history.list().last(), Some(&"15 + 0 = 15"));

        history.append("x", "y");
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.list().last(), Some(&"x = y"));
    }
}
