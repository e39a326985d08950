use serde::{Deserialize, Serialize};

/// Label of the entry a new history is seeded with
pub const INITIAL_LABEL: &str = "Initial state";

/// Label of the single entry left after a reset
pub const RESET_LABEL: &str = "Reset Draft";

/// One recorded snapshot plus a human-readable description of the edit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry<T> {
    pub value: T,
    pub label: String,
}

/// Linear, snapshot-based undo/redo history
///
/// Invariants:
/// - the log is never empty
/// - `pointer` is always a valid index into the log
/// - no two consecutive entries hold equal values
/// - recording a new value discards everything after the pointer
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "RawHistory<T>",
    bound(deserialize = "T: Deserialize<'de> + PartialEq")
)]
pub struct HistoryStore<T> {
    entries: Vec<HistoryEntry<T>>,
    pointer: usize,
}

/// Unchecked wire form of a [`HistoryStore`]
#[derive(Deserialize)]
struct RawHistory<T> {
    entries: Vec<HistoryEntry<T>>,
    pointer: usize,
}

impl<T: PartialEq> TryFrom<RawHistory<T>> for HistoryStore<T> {
    type Error = String;

    fn try_from(raw: RawHistory<T>) -> Result<Self, Self::Error> {
        if raw.entries.is_empty() {
            return Err("history log is empty".to_string());
        }
        if raw.pointer >= raw.entries.len() {
            return Err(format!(
                "history pointer {} out of range for {} entries",
                raw.pointer,
                raw.entries.len()
            ));
        }
        if let Some(i) = raw.entries.windows(2).position(|w| w[0].value == w[1].value) {
            return Err(format!("history entries {} and {} hold equal values", i, i + 1));
        }
        Ok(Self {
            entries: raw.entries,
            pointer: raw.pointer,
        })
    }
}

impl<T: Clone + PartialEq> HistoryStore<T> {
    /// Create a history seeded with `initial`
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![HistoryEntry {
                value: initial,
                label: INITIAL_LABEL.to_string(),
            }],
            pointer: 0,
        }
    }

    /// Create a history whose initial value is produced lazily (called exactly once)
    pub fn new_with<F>(producer: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::new(producer())
    }

    /// Value at the current pointer
    pub fn current(&self) -> &T {
        &self.entries[self.pointer].value
    }

    /// Record `value` as a new step unless it equals the current value
    ///
    /// Returns true if a step was recorded.
    pub fn apply(&mut self, value: T, label: impl Into<String>) -> bool {
        if value == *self.current() {
            return false;
        }

        // Truncate any redo history when a new step is added
        self.entries.truncate(self.pointer + 1);
        self.entries.push(HistoryEntry {
            value,
            label: label.into(),
        });
        self.pointer = self.entries.len() - 1;
        true
    }

    /// Record the result of `updater(current)` (see [`HistoryStore::apply`])
    pub fn apply_with<F>(&mut self, updater: F, label: impl Into<String>) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let candidate = updater(self.current());
        self.apply(candidate, label)
    }

    /// Step back one entry. No-op at the start of history.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.pointer -= 1;
        true
    }

    /// Step forward one entry. No-op at the end of history.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.pointer += 1;
        true
    }

    /// Replace the whole log with a single "Reset Draft" entry
    pub fn reset(&mut self, value: T) {
        self.entries = vec![HistoryEntry {
            value,
            label: RESET_LABEL.to_string(),
        }];
        self.pointer = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    /// Label of the step `undo()` would revert
    ///
    /// This is the current entry's label, not the label of the entry undo
    /// lands on, so the toolbar can read "Undo: <what was just done>".
    pub fn undo_label(&self) -> Option<&str> {
        if self.can_undo() {
            Some(self.entries[self.pointer].label.as_str())
        } else {
            None
        }
    }

    /// Label of the entry `redo()` would move to
    pub fn redo_label(&self) -> Option<&str> {
        if self.can_redo() {
            Some(self.entries[self.pointer + 1].label.as_str())
        } else {
            None
        }
    }

    /// Number of entries in the log
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the log is seeded at construction
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn entries(&self) -> &[HistoryEntry<T>] {
        &self.entries
    }

    /// Label of the entry at the pointer
    pub fn current_label(&self) -> &str {
        &self.entries[self.pointer].label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn labels<T: Clone + PartialEq>(store: &HistoryStore<T>) -> Vec<&str> {
        store.entries().iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_new_seeds_initial_entry() {
        let store = HistoryStore::new(1);
        assert_eq!(*store.current(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.current_label(), INITIAL_LABEL);
        assert!(!store.can_undo());
        assert!(!store.can_redo());
        assert_eq!(store.undo_label(), None);
        assert_eq!(store.redo_label(), None);
    }

    #[test]
    fn test_new_with_calls_producer_once() {
        let calls = Cell::new(0);
        let store = HistoryStore::new_with(|| {
            calls.set(calls.get() + 1);
            "draft".to_string()
        });
        assert_eq!(store.current(), "draft");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_apply_records_distinct_values() {
        let mut store = HistoryStore::new(0);
        assert!(store.apply(1, "one"));
        assert!(store.apply_with(|v| v + 1, "two"));
        assert_eq!(*store.current(), 2);
        assert_eq!(store.len(), 3);
        assert_eq!(store.pointer(), 2);
        assert!(store.can_undo());
    }

    #[test]
    fn test_apply_equal_value_is_noop() {
        let mut store = HistoryStore::new(vec!["a".to_string()]);
        store.apply(vec!["b".to_string()], "edit");

        assert!(!store.apply(vec!["b".to_string()], "same again"));
        assert!(!store.apply_with(|v| v.clone(), "clone"));
        assert_eq!(store.len(), 2);
        assert!(store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn test_undo_walks_back_k_steps() {
        let mut store = HistoryStore::new(0);
        for i in 1..=5 {
            store.apply(i, format!("set {}", i));
        }
        for k in 1..=5 {
            assert!(store.undo());
            assert_eq!(*store.current(), 5 - k);
        }
        assert!(!store.undo());
        assert_eq!(*store.current(), 0);
    }

    #[test]
    fn test_apply_after_undo_discards_redo_branch() {
        let mut store = HistoryStore::new('A');
        store.apply('B', "b");
        store.apply('C', "c");
        store.undo();
        assert_eq!(*store.current(), 'B');
        assert!(store.can_redo());

        store.apply('D', "d");
        let values: Vec<char> = store.entries().iter().map(|e| e.value).collect();
        assert_eq!(values, vec!['A', 'B', 'D']);
        assert!(!store.can_redo());
        assert_eq!(labels(&store), vec![INITIAL_LABEL, "b", "d"]);
    }

    #[test]
    fn test_redo_restores_value_and_label() {
        let mut store = HistoryStore::new(10);
        store.apply(20, "Edit Title");
        store.undo();
        assert_eq!(store.redo_label(), Some("Edit Title"));
        assert!(store.redo());
        assert_eq!(*store.current(), 20);
        assert_eq!(store.current_label(), "Edit Title");
        assert!(!store.redo());
    }

    #[test]
    fn test_pending_labels() {
        let mut store = HistoryStore::new(0);
        store.apply(1, "Add Section");
        store.apply(2, "Delete Verse");
        assert_eq!(store.undo_label(), Some("Delete Verse"));
        assert_eq!(store.redo_label(), None);

        store.undo();
        assert_eq!(store.undo_label(), Some("Add Section"));
        assert_eq!(store.redo_label(), Some("Delete Verse"));
    }

    #[test]
    fn test_reset_collapses_history() {
        let mut store = HistoryStore::new(0);
        for i in 1..10 {
            store.apply(i, "step");
        }
        store.undo();
        store.reset(42);
        assert_eq!(store.len(), 1);
        assert_eq!(store.pointer(), 0);
        assert_eq!(*store.current(), 42);
        assert_eq!(store.current_label(), RESET_LABEL);
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn test_boundary_calls_are_noops() {
        let mut store = HistoryStore::new("x");
        assert!(!store.undo());
        assert!(!store.redo());
        assert_eq!(store.pointer(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_deserialize_keeps_valid_history() {
        let mut store = HistoryStore::new(1u32);
        store.apply(2, "Edit Title");
        store.undo();

        let json = serde_json::to_string(&store).unwrap();
        let restored: HistoryStore<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(*restored.current(), 1);
        assert_eq!(restored.redo_label(), Some("Edit Title"));
    }

    #[test]
    fn test_deserialize_rejects_broken_history() {
        let empty = serde_json::from_str::<HistoryStore<u32>>(r#"{"entries":[],"pointer":0}"#);
        assert!(empty.unwrap_err().to_string().contains("history log is empty"));

        let past_end = serde_json::from_str::<HistoryStore<u32>>(
            r#"{"entries":[{"value":1,"label":"Initial state"}],"pointer":5}"#,
        );
        assert!(past_end.unwrap_err().to_string().contains("out of range"));

        let duplicate = serde_json::from_str::<HistoryStore<u32>>(
            r#"{"entries":[{"value":1,"label":"a"},{"value":1,"label":"b"}],"pointer":0}"#,
        );
        assert!(duplicate.is_err());
    }
}
