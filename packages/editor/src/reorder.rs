//! # Reorder Engine
//!
//! Stable array move used by the drag gesture: the dragged block is removed
//! from its slot and reinserted at the target block's slot, shifting every
//! block between the two positions by one. Not a swap.
//!
//! The engine runs on the drop event only. Intermediate hover updates the
//! transient drag indicator and never touches the committed layout.
//!
//! Drag session state machine:
//!
//! ```text
//! Idle → Dragging { active_id } → (drop | cancel) → Idle
//! ```

use storefront_blocks::Block;

/// Compute the layout after moving `from_id` to `to_id`'s position.
///
/// Returns `None` when nothing changes: either id absent, or `from == to`.
/// Callers must not commit a history entry in that case.
pub fn move_by_id(blocks: &[Block], from_id: &str, to_id: &str) -> Option<Vec<Block>> {
    let from = blocks.iter().position(|b| b.id == from_id)?;
    let to = blocks.iter().position(|b| b.id == to_id)?;
    if from == to {
        return None;
    }

    let mut next = blocks.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Some(next)
}

/// Transient drag indicator. Exactly one block may be active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        active_id: String,
    },
}

impl DragState {
    pub fn active_id(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { active_id } => Some(active_id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_blocks::{default_props, BlockType};

    fn blocks(ids: &[&str]) -> Vec<Block> {
        ids.iter()
            .map(|id| Block::new(*id, default_props(BlockType::TextBlock)))
            .collect()
    }

    fn ids(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_move_forward_shifts_intermediates() {
        let seq = blocks(&["A", "B", "C", "D"]);
        let moved = move_by_id(&seq, "B", "D").unwrap();
        assert_eq!(ids(&moved), ["A", "C", "D", "B"]);
    }

    #[test]
    fn test_move_backward_shifts_intermediates() {
        let seq = blocks(&["A", "B", "C", "D"]);
        let moved = move_by_id(&seq, "D", "A").unwrap();
        assert_eq!(ids(&moved), ["D", "A", "B", "C"]);
    }

    #[test]
    fn test_move_onto_itself_is_noop() {
        let seq = blocks(&["A", "B"]);
        assert!(move_by_id(&seq, "A", "A").is_none());
    }

    #[test]
    fn test_missing_id_is_noop() {
        let seq = blocks(&["A", "B"]);
        assert!(move_by_id(&seq, "A", "ghost").is_none());
        assert!(move_by_id(&seq, "ghost", "B").is_none());
    }
}
