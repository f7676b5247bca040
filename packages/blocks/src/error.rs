//! Error types for block property editing

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Unknown field `{field}` for block type `{block_type}`")]
    UnknownField { block_type: String, field: String },

    #[error("`{value}` is not one of the allowed options")]
    InvalidOption { value: String },

    #[error("Field `{field}` expects {expected}")]
    WrongShape { field: String, expected: &'static str },

    #[error("Index {index} out of range for list `{field}` (length {len})")]
    IndexOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },
}

impl FieldError {
    pub fn unknown_field(block_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            block_type: block_type.into(),
            field: field.into(),
        }
    }

    pub fn wrong_shape(field: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongShape {
            field: field.into(),
            expected,
        }
    }
}
