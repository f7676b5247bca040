//! # Block Data Model
//!
//! A storefront page is an ordered list of typed content blocks. Each block
//! carries an opaque unique `id` and a variant-specific `props` record whose
//! shape is fixed by its `type` tag. The variant set is closed: renderers and
//! property panels can match on it exhaustively.
//!
//! Wire shape (one block):
//!
//! ```json
//! { "id": "blk-1a2b3c-4", "type": "hero-banner", "props": { ... } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::registry::BlockType;

/// JSON-typed property value, as delivered by the editor surface.
pub type PropValue = serde_json::Value;

/// Ordered sequence of blocks forming the page. Order is vertical render
/// order. Ids are pairwise unique; the sequence may be empty.
pub type Layout = Vec<Block>;

/// One content unit on the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Block {
    /// Opaque unique id. Generated at creation, never reused or mutated.
    pub id: String,

    /// Typed payload. The tag fixes the legal shape of the props.
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.kind.block_type()
    }
}

/// Variant-specific props, tagged by block type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "props", rename_all = "kebab-case")]
pub enum BlockKind {
    HeroBanner(HeroBannerProps),
    ProductGrid(ProductGridProps),
    CtaBanner(CtaBannerProps),
    Newsletter(NewsletterProps),
    Testimonials(TestimonialsProps),
    TextBlock(TextBlockProps),
    ImageGallery(ImageGalleryProps),
    Footer(FooterProps),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroBannerProps {
    pub heading: String,
    pub subheading: String,
    pub image_url: String,
    pub button_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductGridProps {
    pub title: String,
    /// Column count at the large breakpoint (1..=4).
    pub columns_lg: i64,
    pub show_prices: bool,
    /// Placeholder pricing for the featured product slot.
    pub regular_price: f64,
    pub sale_price: f64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CtaBannerProps {
    pub text: String,
    pub button_label: String,
    pub button_url: String,
    pub background: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterProps {
    pub heading: String,
    pub placeholder: String,
    pub button_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsProps {
    pub heading: String,
    pub entries: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
    /// Star rating (1..=5).
    pub rating: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextBlockProps {
    pub content: String,
    /// Pixel size (10..=72).
    pub font_size: i64,
    /// One of `left`, `center`, `right`.
    pub align: String,
    /// Local font override. `None` falls back to the global theme font.
    #[serde(default)]
    pub font: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageGalleryProps {
    pub title: String,
    pub images: Vec<String>,
    /// Column count (1..=4).
    pub columns: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterProps {
    pub copyright: String,
    pub show_social: bool,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

/// Structural edit on a list-valued field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ListEdit {
    Append(PropValue),
    RemoveAt(usize),
    ReplaceAt(usize, PropValue),
}

impl BlockKind {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockKind::HeroBanner(_) => BlockType::HeroBanner,
            BlockKind::ProductGrid(_) => BlockType::ProductGrid,
            BlockKind::CtaBanner(_) => BlockType::CtaBanner,
            BlockKind::Newsletter(_) => BlockType::Newsletter,
            BlockKind::Testimonials(_) => BlockType::Testimonials,
            BlockKind::TextBlock(_) => BlockType::TextBlock,
            BlockKind::ImageGallery(_) => BlockType::ImageGallery,
            BlockKind::Footer(_) => BlockType::Footer,
        }
    }

    /// Replace exactly one field on this variant's props.
    ///
    /// Shape is enforced here (a string field only accepts a JSON string and
    /// so on); range/option constraints are the editor controller's job and
    /// happen before the value arrives. A field name that does not belong to
    /// this variant is rejected — cross-type patches never land.
    pub fn set_field(&mut self, field: &str, value: PropValue) -> Result<(), FieldError> {
        match self {
            BlockKind::HeroBanner(p) => match field {
                "heading" => p.heading = expect_string(field, value)?,
                "subheading" => p.subheading = expect_string(field, value)?,
                "imageUrl" => p.image_url = expect_string(field, value)?,
                "buttonLabel" => p.button_label = expect_string(field, value)?,
                _ => return Err(self.unknown_field(field)),
            },
            BlockKind::ProductGrid(p) => match field {
                "title" => p.title = expect_string(field, value)?,
                "columnsLg" => p.columns_lg = expect_integer(field, value)?,
                "showPrices" => p.show_prices = expect_bool(field, value)?,
                "regularPrice" => p.regular_price = expect_number(field, value)?,
                "salePrice" => p.sale_price = expect_number(field, value)?,
                "tags" => p.tags = decode_list(field, value, "an array of strings")?,
                _ => return Err(self.unknown_field(field)),
            },
            BlockKind::CtaBanner(p) => match field {
                "text" => p.text = expect_string(field, value)?,
                "buttonLabel" => p.button_label = expect_string(field, value)?,
                "buttonUrl" => p.button_url = expect_string(field, value)?,
                "background" => p.background = expect_string(field, value)?,
                _ => return Err(self.unknown_field(field)),
            },
            BlockKind::Newsletter(p) => match field {
                "heading" => p.heading = expect_string(field, value)?,
                "placeholder" => p.placeholder = expect_string(field, value)?,
                "buttonLabel" => p.button_label = expect_string(field, value)?,
                _ => return Err(self.unknown_field(field)),
            },
            BlockKind::Testimonials(p) => match field {
                "heading" => p.heading = expect_string(field, value)?,
                "entries" => p.entries = decode_list(field, value, "an array of testimonials")?,
                _ => return Err(self.unknown_field(field)),
            },
            BlockKind::TextBlock(p) => match field {
                "content" => p.content = expect_string(field, value)?,
                "fontSize" => p.font_size = expect_integer(field, value)?,
                "align" => p.align = expect_string(field, value)?,
                // Null clears the override and falls back to the theme font.
                "font" => {
                    p.font = match value {
                        PropValue::Null => None,
                        other => Some(expect_string(field, other)?),
                    }
                }
                _ => return Err(self.unknown_field(field)),
            },
            BlockKind::ImageGallery(p) => match field {
                "title" => p.title = expect_string(field, value)?,
                "images" => p.images = decode_list(field, value, "an array of image urls")?,
                "columns" => p.columns = expect_integer(field, value)?,
                _ => return Err(self.unknown_field(field)),
            },
            BlockKind::Footer(p) => match field {
                "copyright" => p.copyright = expect_string(field, value)?,
                "showSocial" => p.show_social = expect_bool(field, value)?,
                "links" => p.links = decode_list(field, value, "an array of links")?,
                _ => return Err(self.unknown_field(field)),
            },
        }

        Ok(())
    }

    /// Apply a structural edit to a list-valued field.
    pub fn edit_list(&mut self, field: &str, edit: ListEdit) -> Result<(), FieldError> {
        match self {
            BlockKind::ProductGrid(p) if field == "tags" => apply_list_edit(field, &mut p.tags, edit),
            BlockKind::Testimonials(p) if field == "entries" => {
                apply_list_edit(field, &mut p.entries, edit)
            }
            BlockKind::ImageGallery(p) if field == "images" => {
                apply_list_edit(field, &mut p.images, edit)
            }
            BlockKind::Footer(p) if field == "links" => apply_list_edit(field, &mut p.links, edit),
            _ => Err(self.unknown_field(field)),
        }
    }

    fn unknown_field(&self, field: &str) -> FieldError {
        FieldError::unknown_field(self.block_type().tag(), field)
    }
}

fn expect_string(field: &str, value: PropValue) -> Result<String, FieldError> {
    match value {
        PropValue::String(s) => Ok(s),
        _ => Err(FieldError::wrong_shape(field, "a string")),
    }
}

fn expect_bool(field: &str, value: PropValue) -> Result<bool, FieldError> {
    match value {
        PropValue::Bool(b) => Ok(b),
        _ => Err(FieldError::wrong_shape(field, "a boolean")),
    }
}

fn expect_integer(field: &str, value: PropValue) -> Result<i64, FieldError> {
    value
        .as_i64()
        .ok_or_else(|| FieldError::wrong_shape(field, "an integer"))
}

fn expect_number(field: &str, value: PropValue) -> Result<f64, FieldError> {
    value
        .as_f64()
        .ok_or_else(|| FieldError::wrong_shape(field, "a number"))
}

fn decode_list<T: serde::de::DeserializeOwned>(
    field: &str,
    value: PropValue,
    expected: &'static str,
) -> Result<Vec<T>, FieldError> {
    serde_json::from_value(value).map_err(|_| FieldError::wrong_shape(field, expected))
}

fn decode_item<T: serde::de::DeserializeOwned>(
    field: &str,
    value: PropValue,
) -> Result<T, FieldError> {
    serde_json::from_value(value).map_err(|_| FieldError::wrong_shape(field, "a valid list item"))
}

fn apply_list_edit<T: serde::de::DeserializeOwned>(
    field: &str,
    list: &mut Vec<T>,
    edit: ListEdit,
) -> Result<(), FieldError> {
    match edit {
        ListEdit::Append(value) => {
            list.push(decode_item(field, value)?);
            Ok(())
        }
        ListEdit::RemoveAt(index) => {
            if index >= list.len() {
                return Err(FieldError::IndexOutOfRange {
                    field: field.to_string(),
                    index,
                    len: list.len(),
                });
            }
            list.remove(index);
            Ok(())
        }
        ListEdit::ReplaceAt(index, value) => {
            if index >= list.len() {
                return Err(FieldError::IndexOutOfRange {
                    field: field.to_string(),
                    index,
                    len: list.len(),
                });
            }
            list[index] = decode_item(field, value)?;
            Ok(())
        }
    }
}
