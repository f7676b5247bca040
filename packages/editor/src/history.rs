//! # Edit History
//!
//! Linear undo/redo over full layout snapshots.
//!
//! ## Design
//!
//! - Every mutating layout operation commits a complete snapshot
//! - A cursor points at the entry matching the current layout
//! - Undo/redo only move the cursor; they never add or remove entries
//! - Committing from a non-tip cursor truncates the redo future first
//!   (no branching history)
//! - Depth is bounded; the oldest entry falls off when the bound is hit
//!
//! The pre-session layout is never committed, so the very first edit of a
//! session cannot be undone: after one commit the history holds one entry
//! and the cursor sits at 0.

use storefront_blocks::Layout;

/// Default maximum number of retained snapshots.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Linear snapshot history with a cursor.
///
/// Invariant: `cursor < entries.len()` whenever `entries` is non-empty.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Layout>,
    cursor: usize,
    max_depth: usize,
}

impl History {
    /// History bounded at [`DEFAULT_MAX_DEPTH`] snapshots.
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// History with a custom depth bound (0 = unbounded).
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_depth,
        }
    }

    /// Record a snapshot as the new tip.
    ///
    /// Entries past the cursor (the redo future) are discarded first.
    pub fn commit(&mut self, snapshot: Layout) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snapshot);

        if self.max_depth > 0 && self.entries.len() > self.max_depth {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back and return the entry now pointed to.
    ///
    /// No-op (returns `None`) when the cursor is already at the oldest entry.
    pub fn undo(&mut self) -> Option<&Layout> {
        if self.entries.is_empty() || self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step the cursor forward and return the entry now pointed to.
    pub fn redo(&mut self) -> Option<&Layout> {
        if self.entries.is_empty() || self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position (only meaningful when non-empty).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_blocks::{default_props, Block, BlockType, Layout};

    fn layout_of(ids: &[&str]) -> Layout {
        ids.iter()
            .map(|id| Block::new(*id, default_props(BlockType::TextBlock)))
            .collect()
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_first_commit_cannot_be_undone() {
        let mut history = History::new();
        history.commit(layout_of(&["a"]));

        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new();
        let l0 = layout_of(&["a"]);
        let l1 = layout_of(&["a", "b"]);
        history.commit(l0.clone());
        history.commit(l1.clone());

        assert_eq!(history.undo(), Some(&l0));
        assert_eq!(history.redo(), Some(&l1));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_commit_after_undo_discards_redo_future() {
        let mut history = History::new();
        let l2 = layout_of(&["a", "b", "c"]);
        history.commit(layout_of(&["a"]));
        history.commit(layout_of(&["a", "b"]));
        history.commit(l2.clone());

        history.undo();
        history.undo();
        assert_eq!(history.cursor(), 0);

        history.commit(layout_of(&["a", "x"]));
        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_max_depth_enforced() {
        let mut history = History::with_max_depth(2);
        history.commit(layout_of(&["a"]));
        history.commit(layout_of(&["b"]));
        history.commit(layout_of(&["c"]));

        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 1);
        // The oldest snapshot is gone; one undo step remains.
        assert_eq!(history.undo(), Some(&layout_of(&["b"])));
        assert!(!history.can_undo());
    }
}
