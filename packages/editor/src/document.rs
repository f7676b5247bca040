//! # Serialization Gateway
//!
//! Converts the editor state to and from the portable JSON document:
//!
//! ```json
//! {
//!   "storeName": "My Store",
//!   "blocks": [ { "id", "type", "props" }, ... ],
//!   "theme": { "font": "Inter" },
//!   "timestamp": "2025-06-01T12:00:00Z"
//! }
//! ```
//!
//! Import is deliberately lenient at the top level — unrecognized or missing
//! fields are ignored or defaulted so partially-malformed and older-schema
//! documents still load — but strict per block: an element that does not
//! decode as a registered block type is dropped (and reported) rather than
//! aborting the whole import. A blob that is not valid JSON fails before any
//! state is touched.

use std::collections::HashSet;

use tracing::warn;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_blocks::{Block, Layout, ThemeSettings};
use thiserror::Error;

use crate::errors::EditorError;
use crate::state::EditorState;

/// Persisted form of a composition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreDocument {
    pub store_name: String,
    pub blocks: Layout,
    pub theme: ThemeSettings,
    pub timestamp: DateTime<Utc>,
}

/// Per-block finding produced during import. Never fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportWarning {
    #[error("Dropped block at index {index}: {reason}")]
    DroppedBlock { index: usize, reason: String },

    #[error("Dropped block `{id}`: duplicate id")]
    DuplicateId { id: String },
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Blocks that made it into the layout.
    pub blocks_loaded: usize,
    /// Whether the `blocks` field was an array and replaced the layout.
    pub layout_replaced: bool,
    pub warnings: Vec<ImportWarning>,
}

/// Snapshot the current state as a portable document.
pub fn export(state: &EditorState) -> StoreDocument {
    StoreDocument {
        store_name: state.store_name().to_string(),
        blocks: state.layout().to_vec(),
        theme: state.theme().clone(),
        timestamp: Utc::now(),
    }
}

/// Serialize a document to the exported JSON blob.
pub fn to_json(document: &StoreDocument) -> Result<String, EditorError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Download filename for a store: lowercased, spaces to hyphens.
pub fn export_file_name(store_name: &str) -> String {
    format!(
        "{}-layout.json",
        store_name.to_lowercase().replace(' ', "-")
    )
}

/// Merge a document blob into the editor state.
///
/// Top-level policy per field:
/// - `storeName`: overwritten only when present and non-empty
/// - `theme.font`: overwritten only when present (older documents may carry
///   fonts the current selector no longer offers; they are kept as-is)
/// - `blocks`: replaces the layout only when the field is an array; each
///   element is validated against the closed block-type set, and offenders
///   or duplicate ids are dropped with a warning
///
/// A replaced layout clears the selection and commits one history entry.
pub fn import(state: &mut EditorState, blob: &str) -> Result<ImportReport, EditorError> {
    let value: serde_json::Value = serde_json::from_str(blob)?;

    if let Some(name) = value.get("storeName").and_then(|v| v.as_str()) {
        if !name.is_empty() {
            state.set_store_name(name);
        }
    }

    if let Some(font) = value
        .get("theme")
        .and_then(|t| t.get("font"))
        .and_then(|v| v.as_str())
    {
        state.set_theme_font_lenient(font);
    }

    let mut report = ImportReport::default();

    if let Some(items) = value.get("blocks").and_then(|v| v.as_array()) {
        let mut blocks: Layout = Vec::with_capacity(items.len());
        let mut seen: HashSet<String> = HashSet::new();

        for (index, item) in items.iter().enumerate() {
            match serde_json::from_value::<Block>(item.clone()) {
                Ok(block) => {
                    if seen.insert(block.id.clone()) {
                        blocks.push(block);
                    } else {
                        warn!("import: dropping block with duplicate id={}", block.id);
                        report
                            .warnings
                            .push(ImportWarning::DuplicateId { id: block.id });
                    }
                }
                Err(e) => {
                    warn!("import: dropping malformed block at index {}: {}", index, e);
                    report.warnings.push(ImportWarning::DroppedBlock {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        report.blocks_loaded = blocks.len();
        report.layout_replaced = true;
        state.replace_layout(blocks);
    }

    Ok(report)
}
