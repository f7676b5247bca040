//! # Property Editor Controller
//!
//! The live-binding form layer: one "set field" entry point that resolves
//! the selected block's schema, clamps or validates the incoming value, and
//! immediately patches the document — there is no separate apply step.
//!
//! Clamping policy: numeric ranges clamp to the nearest bound rather than
//! rejecting; fixed option sets reject values outside the set; list fields
//! take structural edits with per-item validation. Domain-level
//! inconsistencies (a sale price at or above the regular price) are computed
//! as warnings and never block a write.

use tracing::warn;

use serde_json::json;
use storefront_blocks::{
    field_schema, Block, BlockKind, FieldError, FieldKind, FieldSchema, FooterLink, ListEdit,
    PropValue, Testimonial, RATING_MAX, RATING_MIN,
};
use thiserror::Error;

use crate::errors::EditorError;
use crate::state::EditorState;

/// Clamp/validate `value` for the block's field, then patch it in place.
///
/// Stale ids fall through to the document model's permissive no-op path.
/// Cross-type patches (a field not in the block's schema) are rejected.
pub fn set_field(
    state: &mut EditorState,
    id: &str,
    field: &str,
    value: PropValue,
) -> Result<(), EditorError> {
    let block = match state.block(id) {
        Some(block) => block,
        None => {
            warn!("set_field: no block with id={}", id);
            return state.update_prop(id, field, value);
        }
    };

    let block_type = block.block_type();
    let schema = field_schema(block_type, field)
        .ok_or_else(|| FieldError::unknown_field(block_type.tag(), field))?;

    let value = clamp_value(schema, value)?;
    state.update_prop(id, field, value)
}

/// Apply a structural list edit with per-item validation.
pub fn edit_list(
    state: &mut EditorState,
    id: &str,
    field: &str,
    edit: ListEdit,
) -> Result<(), EditorError> {
    let block = match state.block(id) {
        Some(block) => block,
        None => {
            warn!("edit_list: no block with id={}", id);
            return state.apply_list_edit(id, field, edit);
        }
    };

    let block_type = block.block_type();
    let schema = field_schema(block_type, field)
        .ok_or_else(|| FieldError::unknown_field(block_type.tag(), field))?;

    let edit = match edit {
        ListEdit::Append(value) => ListEdit::Append(normalize_item(schema, value)?),
        ListEdit::ReplaceAt(index, value) => {
            ListEdit::ReplaceAt(index, normalize_item(schema, value)?)
        }
        ListEdit::RemoveAt(index) => ListEdit::RemoveAt(index),
    };

    state.apply_list_edit(id, field, edit)
}

fn clamp_value(schema: &FieldSchema, value: PropValue) -> Result<PropValue, FieldError> {
    match schema.kind {
        FieldKind::Text => match value {
            PropValue::String(_) => Ok(value),
            _ => Err(FieldError::wrong_shape(schema.name, "a string")),
        },
        FieldKind::Flag => match value {
            PropValue::Bool(_) => Ok(value),
            _ => Err(FieldError::wrong_shape(schema.name, "a boolean")),
        },
        FieldKind::Integer { min, max } => {
            let n = value
                .as_i64()
                .ok_or_else(|| FieldError::wrong_shape(schema.name, "an integer"))?;
            Ok(json!(n.clamp(min, max)))
        }
        FieldKind::Price { min } => {
            let n = value
                .as_f64()
                .ok_or_else(|| FieldError::wrong_shape(schema.name, "a number"))?;
            Ok(json!(n.max(min)))
        }
        FieldKind::Choice { options } => match value {
            // Null clears an optional choice (text block font override).
            PropValue::Null => Ok(PropValue::Null),
            PropValue::String(s) if options.contains(&s.as_str()) => Ok(PropValue::String(s)),
            PropValue::String(s) => Err(FieldError::InvalidOption { value: s }),
            _ => Err(FieldError::wrong_shape(schema.name, "an option string")),
        },
        FieldKind::StringList => match &value {
            PropValue::Array(items) if items.iter().all(PropValue::is_string) => Ok(value),
            _ => Err(FieldError::wrong_shape(schema.name, "an array of strings")),
        },
        FieldKind::TestimonialList => {
            let mut entries: Vec<Testimonial> = serde_json::from_value(value)
                .map_err(|_| FieldError::wrong_shape(schema.name, "an array of testimonials"))?;
            for entry in &mut entries {
                entry.rating = entry.rating.clamp(RATING_MIN, RATING_MAX);
            }
            Ok(json!(entries))
        }
        FieldKind::LinkList => {
            let links: Vec<FooterLink> = serde_json::from_value(value)
                .map_err(|_| FieldError::wrong_shape(schema.name, "an array of links"))?;
            Ok(json!(links))
        }
    }
}

fn normalize_item(schema: &FieldSchema, value: PropValue) -> Result<PropValue, FieldError> {
    match schema.kind {
        FieldKind::StringList => match value {
            PropValue::String(_) => Ok(value),
            _ => Err(FieldError::wrong_shape(schema.name, "a string item")),
        },
        FieldKind::TestimonialList => {
            let mut entry: Testimonial = serde_json::from_value(value)
                .map_err(|_| FieldError::wrong_shape(schema.name, "a testimonial"))?;
            entry.rating = entry.rating.clamp(RATING_MIN, RATING_MAX);
            Ok(json!(entry))
        }
        FieldKind::LinkList => {
            let link: FooterLink = serde_json::from_value(value)
                .map_err(|_| FieldError::wrong_shape(schema.name, "a link"))?;
            Ok(json!(link))
        }
        _ => Err(FieldError::wrong_shape(schema.name, "a list field")),
    }
}

/// Non-blocking consistency findings for one block. Shown next to the
/// property panel; saving proceeds regardless.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainWarning {
    #[error("Sale price {sale} is not below the regular price {regular}")]
    SaleNotBelowRegular { regular: f64, sale: f64 },

    #[error("Link `{label}` has no URL")]
    LinkMissingUrl { label: String },
}

pub fn domain_warnings(block: &Block) -> Vec<DomainWarning> {
    let mut warnings = Vec::new();

    match &block.kind {
        BlockKind::ProductGrid(p) => {
            if p.sale_price >= p.regular_price {
                warnings.push(DomainWarning::SaleNotBelowRegular {
                    regular: p.regular_price,
                    sale: p.sale_price,
                });
            }
        }
        BlockKind::Footer(p) => {
            for link in &p.links {
                if link.url.is_empty() {
                    warnings.push(DomainWarning::LinkMissingUrl {
                        label: link.label.clone(),
                    });
                }
            }
        }
        _ => {}
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_blocks::BlockType;

    fn grid_props(state: &EditorState, id: &str) -> storefront_blocks::ProductGridProps {
        match &state.block(id).unwrap().kind {
            BlockKind::ProductGrid(p) => p.clone(),
            _ => panic!("expected product grid"),
        }
    }

    fn text_props(state: &EditorState, id: &str) -> storefront_blocks::TextBlockProps {
        match &state.block(id).unwrap().kind {
            BlockKind::TextBlock(p) => p.clone(),
            _ => panic!("expected text block"),
        }
    }

    #[test]
    fn test_integer_fields_clamp_to_range() {
        let mut state = EditorState::with_id_seed("f1");
        let grid = state.add_block(BlockType::ProductGrid);
        let text = state.add_block(BlockType::TextBlock);

        set_field(&mut state, &grid, "columnsLg", json!(7)).unwrap();
        assert_eq!(grid_props(&state, &grid).columns_lg, 4);

        set_field(&mut state, &text, "fontSize", json!(5)).unwrap();
        assert_eq!(text_props(&state, &text).font_size, 10);
    }

    #[test]
    fn test_price_floors_at_zero() {
        let mut state = EditorState::with_id_seed("f2");
        let grid = state.add_block(BlockType::ProductGrid);

        set_field(&mut state, &grid, "salePrice", json!(-3.5)).unwrap();
        assert_eq!(grid_props(&state, &grid).sale_price, 0.0);
    }

    #[test]
    fn test_choice_rejects_unknown_option() {
        let mut state = EditorState::with_id_seed("f3");
        let text = state.add_block(BlockType::TextBlock);
        let history_len = state.history().len();

        let err = set_field(&mut state, &text, "align", json!("justified")).unwrap_err();
        assert!(matches!(
            err,
            EditorError::Field(FieldError::InvalidOption { .. })
        ));
        // Rejected writes commit nothing.
        assert_eq!(state.history().len(), history_len);
    }

    #[test]
    fn test_null_clears_font_override() {
        let mut state = EditorState::with_id_seed("f4");
        let text = state.add_block(BlockType::TextBlock);

        set_field(&mut state, &text, "font", json!("Georgia")).unwrap();
        assert_eq!(text_props(&state, &text).font.as_deref(), Some("Georgia"));

        set_field(&mut state, &text, "font", PropValue::Null).unwrap();
        assert_eq!(text_props(&state, &text).font, None);
    }

    #[test]
    fn test_cross_type_patch_rejected() {
        let mut state = EditorState::with_id_seed("f5");
        let newsletter = state.add_block(BlockType::Newsletter);

        let err = set_field(&mut state, &newsletter, "columnsLg", json!(2)).unwrap_err();
        assert!(matches!(
            err,
            EditorError::Field(FieldError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_testimonial_rating_clamped_on_list_edits() {
        let mut state = EditorState::with_id_seed("f6");
        let block = state.add_block(BlockType::Testimonials);

        edit_list(
            &mut state,
            &block,
            "entries",
            ListEdit::Append(json!({ "author": "Sam", "quote": "!", "rating": 11 })),
        )
        .unwrap();

        edit_list(
            &mut state,
            &block,
            "entries",
            ListEdit::ReplaceAt(0, json!({ "author": "Kim", "quote": "?", "rating": 0 })),
        )
        .unwrap();

        let entries = match &state.block(&block).unwrap().kind {
            BlockKind::Testimonials(p) => p.entries.clone(),
            _ => panic!("expected testimonials"),
        };
        assert_eq!(entries.last().unwrap().rating, 5);
        assert_eq!(entries[0].rating, 1);
    }

    #[test]
    fn test_stale_id_falls_through_permissively() {
        let mut state = EditorState::with_id_seed("f7");
        state.add_block(BlockType::HeroBanner);
        let history_len = state.history().len();

        set_field(&mut state, "ghost", "heading", json!("x")).unwrap();
        assert_eq!(state.history().len(), history_len + 1);
    }

    #[test]
    fn test_domain_warnings_do_not_block() {
        let mut state = EditorState::with_id_seed("f8");
        let grid = state.add_block(BlockType::ProductGrid);

        set_field(&mut state, &grid, "salePrice", json!(99.0)).unwrap();

        let warnings = domain_warnings(state.block(&grid).unwrap());
        assert!(matches!(
            warnings.as_slice(),
            [DomainWarning::SaleNotBelowRegular { .. }]
        ));
        // The write itself landed.
        assert_eq!(grid_props(&state, &grid).sale_price, 99.0);
    }
}
