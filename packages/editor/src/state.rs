//! # Editor State
//!
//! Single owned aggregate for one editing session: the layout, the theme,
//! the selection, the view mode, the transient drag indicator, the history
//! and the id generator. Every user action funnels through a method here;
//! each mutating operation completes (mutation + history commit) before the
//! next can begin — the editor is single-threaded and synchronous.
//!
//! Lookup misses on stale ids are benign no-ops, not errors. `update_prop`
//! and `delete_block` still commit on a miss (they mirror the permissive
//! filter/map-update semantics of the original surface); `duplicate_block`
//! commits nothing on a miss.

use tracing::{debug, warn};

use serde::{Deserialize, Serialize};
use storefront_blocks::{
    default_props, Block, BlockType, IdGenerator, Layout, ListEdit, PropValue, ThemeSettings,
    FONT_OPTIONS,
};

use crate::errors::EditorError;
use crate::history::History;
use crate::reorder::{move_by_id, DragState};

/// Whether the surface renders the editing chrome or the plain preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Edit,
    Preview,
}

/// One editing session's complete state.
#[derive(Debug)]
pub struct EditorState {
    store_name: String,
    layout: Layout,
    theme: ThemeSettings,
    selection: Option<String>,
    view_mode: ViewMode,
    drag: DragState,
    history: History,
    ids: IdGenerator,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            store_name: "My Store".to_string(),
            layout: Vec::new(),
            theme: ThemeSettings::default(),
            selection: None,
            view_mode: ViewMode::Edit,
            drag: DragState::Idle,
            history: History::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Session with a fixed id seed, for deterministic tests.
    pub fn with_id_seed(seed: &str) -> Self {
        let mut state = Self::new();
        state.ids = IdGenerator::from_seed(seed);
        state
    }

    // --- Layout operations -------------------------------------------------

    /// Append a new block of `block_type` with registry defaults, select it,
    /// and commit. Returns the new block's id.
    pub fn add_block(&mut self, block_type: BlockType) -> String {
        let id = self.fresh_id();
        self.layout.push(Block::new(id.clone(), default_props(block_type)));
        self.selection = Some(id.clone());

        debug!("add_block: type={} id={}", block_type, id);
        self.commit();
        id
    }

    /// Replace one field on one block's props.
    ///
    /// Unknown id: no-op, still commits. Unknown field or wrong value shape
    /// for the block's type: error, nothing committed.
    pub fn update_prop(
        &mut self,
        id: &str,
        field: &str,
        value: PropValue,
    ) -> Result<(), EditorError> {
        match self.layout.iter_mut().find(|b| b.id == id) {
            Some(block) => {
                block.kind.set_field(field, value)?;
                debug!("update_prop: id={} field={}", id, field);
            }
            None => warn!("update_prop: no block with id={}, committing unchanged", id),
        }

        self.commit();
        Ok(())
    }

    /// Apply a structural edit to a list-valued field.
    ///
    /// Same miss policy as [`update_prop`](Self::update_prop).
    pub fn apply_list_edit(
        &mut self,
        id: &str,
        field: &str,
        edit: ListEdit,
    ) -> Result<(), EditorError> {
        match self.layout.iter_mut().find(|b| b.id == id) {
            Some(block) => {
                block.kind.edit_list(field, edit)?;
                debug!("apply_list_edit: id={} field={}", id, field);
            }
            None => warn!("apply_list_edit: no block with id={}, committing unchanged", id),
        }

        self.commit();
        Ok(())
    }

    /// Remove the block with `id`; selection is cleared only if it pointed
    /// at the removed block. Commits even when nothing was removed.
    pub fn delete_block(&mut self, id: &str) {
        let before = self.layout.len();
        self.layout.retain(|b| b.id != id);

        if self.layout.len() == before {
            warn!("delete_block: no block with id={}, committing unchanged", id);
        } else if self.selection.as_deref() == Some(id) {
            self.selection = None;
        }

        debug!("delete_block: id={}", id);
        self.commit();
    }

    /// Deep-clone the block with `id` under a fresh id, inserted immediately
    /// after the original. Selection does not move to the copy.
    ///
    /// Unknown id is an idempotent no-op: no commit.
    pub fn duplicate_block(&mut self, id: &str) -> Option<String> {
        let index = match self.layout.iter().position(|b| b.id == id) {
            Some(index) => index,
            None => {
                warn!("duplicate_block: no block with id={}", id);
                return None;
            }
        };

        let new_id = self.fresh_id();
        let copy = Block::new(new_id.clone(), self.layout[index].kind.clone());
        self.layout.insert(index + 1, copy);

        debug!("duplicate_block: id={} copy={}", id, new_id);
        self.commit();
        Some(new_id)
    }

    /// Move `from_id` to `to_id`'s slot (stable shift). Commits one entry
    /// only when the engine actually moved something.
    pub fn reorder(&mut self, from_id: &str, to_id: &str) -> bool {
        match move_by_id(&self.layout, from_id, to_id) {
            Some(next) => {
                self.layout = next;
                debug!("reorder: from={} to={}", from_id, to_id);
                self.commit();
                true
            }
            None => false,
        }
    }

    // --- Drag session ------------------------------------------------------

    /// Enter the dragging state for an existing block. Returns false when a
    /// drag is already active or the id is unknown.
    pub fn begin_drag(&mut self, id: &str) -> bool {
        if self.drag.is_dragging() || !self.layout.iter().any(|b| b.id == id) {
            return false;
        }
        self.drag = DragState::Dragging {
            active_id: id.to_string(),
        };
        true
    }

    /// Drop the active block onto `target_id`, triggering a reorder.
    /// Always returns to idle; returns whether the layout changed.
    pub fn drop_on(&mut self, target_id: &str) -> bool {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging { active_id } => self.reorder(&active_id, target_id),
            DragState::Idle => false,
        }
    }

    /// Abandon the drag with the layout untouched.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn dragging_id(&self) -> Option<&str> {
        self.drag.active_id()
    }

    // --- History -----------------------------------------------------------

    /// Restore the previous snapshot. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let restored = match self.history.undo() {
            Some(snapshot) => snapshot.clone(),
            None => return false,
        };
        self.layout = restored;
        self.prune_selection();
        debug!("undo: cursor={}", self.history.cursor());
        true
    }

    /// Restore the next snapshot. Returns false at the tip.
    pub fn redo(&mut self) -> bool {
        let restored = match self.history.redo() {
            Some(snapshot) => snapshot.clone(),
            None => return false,
        };
        self.layout = restored;
        self.prune_selection();
        debug!("redo: cursor={}", self.history.cursor());
        true
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // --- Selection / view / theme -------------------------------------------

    /// Select a block. Selecting an unknown id clears the selection.
    pub fn select(&mut self, id: &str) {
        self.selection = self
            .layout
            .iter()
            .any(|b| b.id == id)
            .then(|| id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        let id = self.selection.as_deref()?;
        self.block(id)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Set the global theme font, restricted to the offered option set.
    pub fn set_theme_font(&mut self, font: &str) -> Result<(), EditorError> {
        if !FONT_OPTIONS.contains(&font) {
            return Err(storefront_blocks::FieldError::InvalidOption {
                value: font.to_string(),
            }
            .into());
        }
        self.theme.font = font.to_string();
        Ok(())
    }

    /// Font write for imported documents: older documents may carry fonts
    /// the current selector no longer offers.
    pub(crate) fn set_theme_font_lenient(&mut self, font: &str) {
        self.theme.font = font.to_string();
    }

    pub fn set_store_name(&mut self, name: impl Into<String>) {
        self.store_name = name.into();
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    // --- Reads ---------------------------------------------------------------

    pub fn layout(&self) -> &[Block] {
        &self.layout
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.layout.iter().find(|b| b.id == id)
    }

    // --- Internals -----------------------------------------------------------

    /// Wholesale layout replacement (document import). Clears the selection,
    /// abandons any drag, and commits one entry.
    pub(crate) fn replace_layout(&mut self, blocks: Layout) {
        self.layout = blocks;
        self.selection = None;
        self.drag = DragState::Idle;
        debug!("replace_layout: {} blocks", self.layout.len());
        self.commit();
    }

    fn commit(&mut self) {
        self.history.commit(self.layout.clone());
    }

    /// A generated id has never existed in this session, but assert against
    /// the current layout rather than trusting the generator.
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.layout.iter().any(|b| b.id == id) {
                return id;
            }
        }
    }

    fn prune_selection(&mut self) {
        if let Some(id) = self.selection.as_deref() {
            if !self.layout.iter().any(|b| b.id == id) {
                self.selection = None;
            }
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
