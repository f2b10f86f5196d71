//! Bounded undo/redo history of whole-state snapshots.
//!
//! Snapshots are stored as values. Callers keep them cheap by sharing
//! unchanged data behind `Arc`.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Default number of undo steps kept
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

#[derive(Debug, Clone)]
pub struct HistoryEntry<T> {
    /// Operation that produced the state following this snapshot
    pub label: String,
    pub snapshot: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> HistoryEntry<T> {
    fn new(label: String, snapshot: T) -> Self {
        Self {
            label,
            snapshot,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SnapshotHistory<T> {
    undo_stack: VecDeque<HistoryEntry<T>>,
    redo_stack: Vec<HistoryEntry<T>>,
    max_depth: usize,
}

impl<T> Default for SnapshotHistory<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl<T> SnapshotHistory<T> {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Records the state before `label` was applied. Clears the redo stack
    /// and drops the oldest entry beyond the depth limit.
    pub fn record(&mut self, label: impl Into<String>, snapshot: T) {
        self.undo_stack
            .push_back(HistoryEntry::new(label.into(), snapshot));
        self.trim();
        self.redo_stack.clear();
    }

    /// Steps back. `current` is kept for redo; the returned entry holds the
    /// state to restore.
    pub fn undo(&mut self, current: T) -> Option<HistoryEntry<T>> {
        let entry = self.undo_stack.pop_back()?;
        self.redo_stack
            .push(HistoryEntry::new(entry.label.clone(), current));
        Some(entry)
    }

    /// Steps forward. `current` is kept for undo; the returned entry holds
    /// the state to restore.
    pub fn redo(&mut self, current: T) -> Option<HistoryEntry<T>> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack
            .push_back(HistoryEntry::new(entry.label.clone(), current));
        self.trim();
        Some(entry)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Label of the operation `undo` would revert
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.back().map(|e| e.label.as_str())
    }

    /// Label of the operation `redo` would re-apply
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.label.as_str())
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        self.trim();
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn trim(&mut self) {
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }
}
