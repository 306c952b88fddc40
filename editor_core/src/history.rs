//! Undo/redo history
//!
//! History is an append-only timeline of immutable snapshots plus the index
//! of the entry currently shown in the buffer. Everything before the index is
//! the undo path, everything after it is the redo path. Recording a fresh
//! change cuts the timeline at the index, so a stale redo path can never be
//! resurrected after a new edit.

use crate::Snapshot;
use alloc::vec;
use alloc::vec::Vec;

/// Default number of undo checkpoints kept
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    position: usize,
    /// Maximum undo depth, 0 for unbounded
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: vec![Snapshot::default()],
            position: 0,
            limit,
        }
    }

    /// Forget every checkpoint and start over from `initial`
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.entries.push(initial);
        self.position = 0;
    }

    pub fn current(&self) -> &Snapshot {
        &self.entries[self.position]
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.enforce_limit();
    }

    /// Record a user change from `previous` to `current`, keeping `previous`
    /// as an undo checkpoint
    pub fn record(&mut self, previous: Snapshot, current: Snapshot) {
        self.entries.truncate(self.position + 1);
        self.entries[self.position] = previous;
        self.entries.push(current);
        self.position += 1;
        self.enforce_limit();
    }

    /// Replace the current entry without leaving a checkpoint
    pub fn amend(&mut self, current: Snapshot) {
        self.entries.truncate(self.position + 1);
        self.entries[self.position] = current;
    }

    /// Step back one entry, returning the snapshot to restore
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(&self.entries[self.position])
    }

    /// Step forward one entry, returning the snapshot to restore
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        Some(&self.entries[self.position])
    }

    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.position
    }

    pub fn redo_depth(&self) -> usize {
        self.entries.len() - 1 - self.position
    }

    fn enforce_limit(&mut self) {
        if self.limit == 0 {
            return;
        }
        let excess = self.position.saturating_sub(self.limit);
        if excess > 0 {
            self.entries.drain(..excess);
            self.position -= excess;
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(text: &str) -> Snapshot {
        Snapshot::new(text)
    }

    #[test]
    fn test_new_history_is_empty() {
        let mut history = History::default();
        assert_eq!(history.current().text(), "");
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_record_then_undo_redo() {
        let mut history = History::default();
        history.reset(snap("hello"));
        history.record(snap("hello"), snap("hello world"));

        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.undo().map(Snapshot::text), Some("hello"));
        assert_eq!(history.redo_depth(), 1);
        assert_eq!(history.redo().map(Snapshot::text), Some("hello world"));
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_record_after_undo_discards_redo_path() {
        let mut history = History::default();
        history.record(snap(""), snap("a"));
        history.record(snap("a"), snap("ab"));
        history.undo();
        assert!(history.can_redo());

        history.record(snap("a"), snap("ac"));
        assert!(!history.can_redo());
        assert_eq!(history.current().text(), "ac");
        assert_eq!(history.undo().map(Snapshot::text), Some("a"));
        assert_eq!(history.undo().map(Snapshot::text), Some(""));
    }

    #[test]
    fn test_amend_leaves_no_checkpoint() {
        let mut history = History::default();
        history.reset(snap("saved"));
        history.amend(snap("saved"));
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.current().text(), "saved");
    }

    #[test]
    fn test_undo_limit() {
        let mut history = History::new(3);
        let texts = ["", "a", "ab", "abc", "abcd", "abcde"];
        for pair in texts.windows(2) {
            history.record(snap(pair[0]), snap(pair[1]));
        }

        assert_eq!(history.undo_depth(), 3);
        assert_eq!(history.undo().map(Snapshot::text), Some("abcd"));
        assert_eq!(history.undo().map(Snapshot::text), Some("abc"));
        assert_eq!(history.undo().map(Snapshot::text), Some("ab"));
        assert!(history.undo().is_none());
        assert_eq!(history.redo_depth(), 3);
    }

    #[test]
    fn test_zero_limit_is_unbounded() {
        let mut history = History::new(0);
        for i in 0..250 {
            history.record(snap(""), Snapshot::new(alloc::format!("{}", i)));
        }
        assert_eq!(history.undo_depth(), 250);
    }

    #[test]
    fn test_lowering_limit_trims_oldest() {
        let mut history = History::new(0);
        history.record(snap("0"), snap("1"));
        history.record(snap("1"), snap("2"));
        history.record(snap("2"), snap("3"));

        history.set_limit(1);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.undo().map(Snapshot::text), Some("2"));
    }
}
