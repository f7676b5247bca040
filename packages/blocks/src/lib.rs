//! # Storefront Blocks
//!
//! Pure data layer of the storefront page builder: the closed set of typed
//! content blocks, the registry of per-type defaults, the static property
//! schemas a generic editor panel walks, global theme settings, and the
//! session-scoped id generator.
//!
//! Everything in this crate is value-oriented and side-effect free; the
//! stateful editing machinery lives in `storefront-editor`.

pub mod block;
pub mod error;
pub mod id_generator;
pub mod registry;
pub mod schema;
pub mod theme;

pub use block::{
    Block, BlockKind, CtaBannerProps, FooterLink, FooterProps, HeroBannerProps, ImageGalleryProps,
    Layout, ListEdit, NewsletterProps, ProductGridProps, PropValue, Testimonial,
    TestimonialsProps, TextBlockProps,
};
pub use error::FieldError;
pub use id_generator::IdGenerator;
pub use registry::{default_props, BlockType};
pub use schema::{
    field_schema, schema_for, FieldKind, FieldSchema, ALIGN_OPTIONS, COLUMNS_MAX, COLUMNS_MIN,
    FONT_SIZE_MAX, FONT_SIZE_MIN, RATING_MAX, RATING_MIN,
};
pub use theme::{ThemeSettings, FONT_OPTIONS};
