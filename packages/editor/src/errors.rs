//! Error types for the editor

use storefront_blocks::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}
