//! # Storefront Editor
//!
//! Core editing engine of the storefront page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ blocks: typed variants + schemas + defaults │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorState + operations            │
//! │  - add / patch / delete / duplicate blocks  │
//! │  - drag reorder (stable array move)         │
//! │  - snapshot history (undo/redo)             │
//! │  - export/import portable documents         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderers: (Block, theme font) → visuals    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **One aggregate**: all session state lives in [`EditorState`] and every
//!    user action funnels through it
//! 2. **Snapshot history**: each mutating operation commits a full layout
//!    snapshot; undo/redo only move a cursor
//! 3. **Pure helpers**: the reorder engine and field clamping compute the
//!    next document from the current one, with no hidden state
//! 4. **Resilient persistence**: import merges leniently at the top level and
//!    drops (never trips over) individual malformed blocks
//!
//! ## Usage
//!
//! ```rust
//! use storefront_blocks::BlockType;
//! use storefront_editor::{fields, EditorState};
//!
//! let mut state = EditorState::new();
//! let hero = state.add_block(BlockType::HeroBanner);
//!
//! fields::set_field(&mut state, &hero, "heading", "Big Sale".into()).unwrap();
//!
//! state.undo();
//! state.redo();
//!
//! let blob = storefront_editor::document::to_json(
//!     &storefront_editor::document::export(&state),
//! ).unwrap();
//! # let _ = blob;
//! ```

pub mod document;
pub mod errors;
pub mod fields;
pub mod history;
pub mod reorder;
pub mod state;

pub use document::{export, export_file_name, import, to_json, ImportReport, ImportWarning, StoreDocument};
pub use errors::EditorError;
pub use fields::{domain_warnings, DomainWarning};
pub use history::{History, DEFAULT_MAX_DEPTH};
pub use reorder::{move_by_id, DragState};
pub use state::{EditorState, ViewMode};

// Re-export the data layer for convenience
pub use storefront_blocks::{Block, BlockKind, BlockType, Layout, ListEdit, ThemeSettings};
