//! # Block Type Registry
//!
//! Static catalog over the closed block-type set: the palette label and
//! glyph for each type, plus the default props a freshly added block starts
//! with. `default_props` builds a new owned value on every call, so two
//! blocks of the same type never share list or record sub-objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block::{
    BlockKind, CtaBannerProps, FooterLink, FooterProps, HeroBannerProps, ImageGalleryProps,
    NewsletterProps, ProductGridProps, Testimonial, TestimonialsProps, TextBlockProps,
};

/// Discriminator over the closed set of block variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    HeroBanner,
    ProductGrid,
    CtaBanner,
    Newsletter,
    Testimonials,
    TextBlock,
    ImageGallery,
    Footer,
}

impl BlockType {
    /// Every registered type, in palette order.
    pub const ALL: [BlockType; 8] = [
        BlockType::HeroBanner,
        BlockType::ProductGrid,
        BlockType::CtaBanner,
        BlockType::Newsletter,
        BlockType::Testimonials,
        BlockType::TextBlock,
        BlockType::ImageGallery,
        BlockType::Footer,
    ];

    /// The wire tag, as it appears in a serialized block's `type` field.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockType::HeroBanner => "hero-banner",
            BlockType::ProductGrid => "product-grid",
            BlockType::CtaBanner => "cta-banner",
            BlockType::Newsletter => "newsletter",
            BlockType::Testimonials => "testimonials",
            BlockType::TextBlock => "text-block",
            BlockType::ImageGallery => "image-gallery",
            BlockType::Footer => "footer",
        }
    }

    /// Human label for the block palette.
    pub fn label(&self) -> &'static str {
        match self {
            BlockType::HeroBanner => "Hero Banner",
            BlockType::ProductGrid => "Product Grid",
            BlockType::CtaBanner => "CTA Banner",
            BlockType::Newsletter => "Newsletter",
            BlockType::Testimonials => "Testimonials",
            BlockType::TextBlock => "Text Block",
            BlockType::ImageGallery => "Image Gallery",
            BlockType::Footer => "Footer",
        }
    }

    /// Palette glyph.
    pub fn icon(&self) -> &'static str {
        match self {
            BlockType::HeroBanner => "🖼",
            BlockType::ProductGrid => "🛍",
            BlockType::CtaBanner => "📣",
            BlockType::Newsletter => "✉",
            BlockType::Testimonials => "💬",
            BlockType::TextBlock => "📝",
            BlockType::ImageGallery => "🎞",
            BlockType::Footer => "⬛",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Default props for a newly added block of the given type.
///
/// Returns a fresh owned value each call.
pub fn default_props(block_type: BlockType) -> BlockKind {
    match block_type {
        BlockType::HeroBanner => BlockKind::HeroBanner(HeroBannerProps {
            heading: "Welcome to our store".to_string(),
            subheading: "Quality products, fair prices".to_string(),
            image_url: "/images/hero.jpg".to_string(),
            button_label: "Shop now".to_string(),
        }),
        BlockType::ProductGrid => BlockKind::ProductGrid(ProductGridProps {
            title: "Featured products".to_string(),
            columns_lg: 3,
            show_prices: true,
            regular_price: 29.99,
            sale_price: 19.99,
            tags: vec!["new".to_string(), "featured".to_string()],
        }),
        BlockType::CtaBanner => BlockKind::CtaBanner(CtaBannerProps {
            text: "Free shipping on orders over $50".to_string(),
            button_label: "Learn more".to_string(),
            button_url: "/shipping".to_string(),
            background: "#1f2937".to_string(),
        }),
        BlockType::Newsletter => BlockKind::Newsletter(NewsletterProps {
            heading: "Stay in the loop".to_string(),
            placeholder: "you@example.com".to_string(),
            button_label: "Subscribe".to_string(),
        }),
        BlockType::Testimonials => BlockKind::Testimonials(TestimonialsProps {
            heading: "What our customers say".to_string(),
            entries: vec![Testimonial {
                author: "Alex P.".to_string(),
                quote: "Fast delivery and great quality.".to_string(),
                rating: 5,
            }],
        }),
        BlockType::TextBlock => BlockKind::TextBlock(TextBlockProps {
            content: "Tell your story here.".to_string(),
            font_size: 16,
            align: "left".to_string(),
            font: None,
        }),
        BlockType::ImageGallery => BlockKind::ImageGallery(ImageGalleryProps {
            title: "Gallery".to_string(),
            images: vec![
                "/images/gallery-1.jpg".to_string(),
                "/images/gallery-2.jpg".to_string(),
            ],
            columns: 3,
        }),
        BlockType::Footer => BlockKind::Footer(FooterProps {
            copyright: "© 2025 My Store. All rights reserved.".to_string(),
            show_social: true,
            links: vec![
                FooterLink {
                    label: "About".to_string(),
                    url: "/about".to_string(),
                },
                FooterLink {
                    label: "Contact".to_string(),
                    url: "/contact".to_string(),
                },
            ],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for ty in BlockType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.tag()));

            let back: BlockType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn test_defaults_match_their_type() {
        for ty in BlockType::ALL {
            assert_eq!(default_props(ty).block_type(), ty);
            assert!(!ty.label().is_empty());
            assert!(!ty.icon().is_empty());
        }
    }

    #[test]
    fn test_defaults_are_independent_copies() {
        let mut first = default_props(BlockType::Testimonials);
        let second = default_props(BlockType::Testimonials);

        if let BlockKind::Testimonials(p) = &mut first {
            p.entries.clear();
        }

        match second {
            BlockKind::Testimonials(p) => assert_eq!(p.entries.len(), 1),
            _ => panic!("expected testimonials"),
        }
    }
}
