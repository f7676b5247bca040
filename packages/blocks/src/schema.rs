//! # Property Schemas
//!
//! One static schema descriptor per block type: field name (wire spelling),
//! human label, and the constraint kind a generic property panel needs to
//! render and validate the field. This is a closed dispatch table over the
//! block variant set — adding a variant without a schema is a compile-time
//! hole in the `match`, not a silent gap.

use crate::registry::BlockType;
use crate::theme::FONT_OPTIONS;

pub const COLUMNS_MIN: i64 = 1;
pub const COLUMNS_MAX: i64 = 4;
pub const FONT_SIZE_MIN: i64 = 10;
pub const FONT_SIZE_MAX: i64 = 72;
pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// Text alignment options for text blocks.
pub const ALIGN_OPTIONS: &[&str] = &["left", "center", "right"];

/// Constraint kind of one editable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free-form string.
    Text,
    /// Boolean toggle.
    Flag,
    /// Whole number, clamped into the closed range on write.
    Integer { min: i64, max: i64 },
    /// Non-negative money amount.
    Price { min: f64 },
    /// String restricted to a fixed option set.
    Choice { options: &'static [&'static str] },
    /// List of plain strings (tags, image urls).
    StringList,
    /// List of testimonial entries; each entry's rating is clamped.
    TestimonialList,
    /// List of label/url link records.
    LinkList,
}

/// One editable field of a block variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSchema {
    /// Wire name, matching the serialized props key.
    pub name: &'static str,
    /// Label shown in the property panel.
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSchema {
    FieldSchema { name, label, kind }
}

const HERO_BANNER: &[FieldSchema] = &[
    field("heading", "Heading", FieldKind::Text),
    field("subheading", "Subheading", FieldKind::Text),
    field("imageUrl", "Image URL", FieldKind::Text),
    field("buttonLabel", "Button label", FieldKind::Text),
];

const PRODUCT_GRID: &[FieldSchema] = &[
    field("title", "Title", FieldKind::Text),
    field(
        "columnsLg",
        "Columns (large screens)",
        FieldKind::Integer {
            min: COLUMNS_MIN,
            max: COLUMNS_MAX,
        },
    ),
    field("showPrices", "Show prices", FieldKind::Flag),
    field("regularPrice", "Regular price", FieldKind::Price { min: 0.0 }),
    field("salePrice", "Sale price", FieldKind::Price { min: 0.0 }),
    field("tags", "Tags", FieldKind::StringList),
];

const CTA_BANNER: &[FieldSchema] = &[
    field("text", "Text", FieldKind::Text),
    field("buttonLabel", "Button label", FieldKind::Text),
    field("buttonUrl", "Button URL", FieldKind::Text),
    field("background", "Background color", FieldKind::Text),
];

const NEWSLETTER: &[FieldSchema] = &[
    field("heading", "Heading", FieldKind::Text),
    field("placeholder", "Input placeholder", FieldKind::Text),
    field("buttonLabel", "Button label", FieldKind::Text),
];

const TESTIMONIALS: &[FieldSchema] = &[
    field("heading", "Heading", FieldKind::Text),
    field("entries", "Testimonials", FieldKind::TestimonialList),
];

const TEXT_BLOCK: &[FieldSchema] = &[
    field("content", "Content", FieldKind::Text),
    field(
        "fontSize",
        "Font size (px)",
        FieldKind::Integer {
            min: FONT_SIZE_MIN,
            max: FONT_SIZE_MAX,
        },
    ),
    field(
        "align",
        "Alignment",
        FieldKind::Choice {
            options: ALIGN_OPTIONS,
        },
    ),
    field(
        "font",
        "Font override",
        FieldKind::Choice {
            options: FONT_OPTIONS,
        },
    ),
];

const IMAGE_GALLERY: &[FieldSchema] = &[
    field("title", "Title", FieldKind::Text),
    field("images", "Images", FieldKind::StringList),
    field(
        "columns",
        "Columns",
        FieldKind::Integer {
            min: COLUMNS_MIN,
            max: COLUMNS_MAX,
        },
    ),
];

const FOOTER: &[FieldSchema] = &[
    field("copyright", "Copyright line", FieldKind::Text),
    field("showSocial", "Show social icons", FieldKind::Flag),
    field("links", "Links", FieldKind::LinkList),
];

/// Schema descriptor for every editable field of the given block type.
pub fn schema_for(block_type: BlockType) -> &'static [FieldSchema] {
    match block_type {
        BlockType::HeroBanner => HERO_BANNER,
        BlockType::ProductGrid => PRODUCT_GRID,
        BlockType::CtaBanner => CTA_BANNER,
        BlockType::Newsletter => NEWSLETTER,
        BlockType::Testimonials => TESTIMONIALS,
        BlockType::TextBlock => TEXT_BLOCK,
        BlockType::ImageGallery => IMAGE_GALLERY,
        BlockType::Footer => FOOTER,
    }
}

/// Look up one field's schema by wire name.
pub fn field_schema(block_type: BlockType, name: &str) -> Option<&'static FieldSchema> {
    schema_for(block_type).iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ListEdit;
    use crate::registry::default_props;
    use serde_json::json;

    fn sample_value(kind: &FieldKind) -> serde_json::Value {
        match kind {
            FieldKind::Text => json!("sample"),
            FieldKind::Flag => json!(true),
            FieldKind::Integer { min, .. } => json!(min),
            FieldKind::Price { min } => json!(min),
            FieldKind::Choice { options } => json!(options[0]),
            FieldKind::StringList => json!(["one", "two"]),
            FieldKind::TestimonialList => {
                json!([{ "author": "A", "quote": "Q", "rating": 4 }])
            }
            FieldKind::LinkList => json!([{ "label": "Home", "url": "/" }]),
        }
    }

    /// Every schema field must be settable on its own variant's defaults.
    /// Catches schema/props drift in both directions.
    #[test]
    fn test_every_schema_field_is_patchable() {
        for ty in BlockType::ALL {
            let mut kind = default_props(ty);
            for fs in schema_for(ty) {
                kind.set_field(fs.name, sample_value(&fs.kind))
                    .unwrap_or_else(|e| panic!("{}.{}: {}", ty, fs.name, e));
            }
        }
    }

    #[test]
    fn test_list_fields_accept_structural_edits() {
        for ty in BlockType::ALL {
            let mut kind = default_props(ty);
            for fs in schema_for(ty) {
                let item = match fs.kind {
                    FieldKind::StringList => json!("item"),
                    FieldKind::TestimonialList => {
                        json!({ "author": "A", "quote": "Q", "rating": 3 })
                    }
                    FieldKind::LinkList => json!({ "label": "L", "url": "/l" }),
                    _ => continue,
                };
                kind.edit_list(fs.name, ListEdit::Append(item))
                    .unwrap_or_else(|e| panic!("{}.{}: {}", ty, fs.name, e));
            }
        }

        // And the inverse: scalar fields reject structural edits.
        let mut hero = default_props(BlockType::HeroBanner);
        assert!(hero
            .edit_list("heading", ListEdit::Append(json!("x")))
            .is_err());
    }

    #[test]
    fn test_field_lookup() {
        let fs = field_schema(BlockType::ProductGrid, "columnsLg").unwrap();
        assert_eq!(
            fs.kind,
            FieldKind::Integer {
                min: COLUMNS_MIN,
                max: COLUMNS_MAX
            }
        );

        assert!(field_schema(BlockType::ProductGrid, "fontSize").is_none());
    }
}
