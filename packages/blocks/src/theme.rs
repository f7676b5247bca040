//! Global theme settings applied to every block unless overridden locally
//! (a text block's own `font` wins over the theme font).

use serde::{Deserialize, Serialize};

/// Fonts offered by the theme selector.
pub const FONT_OPTIONS: &[&str] = &[
    "Inter",
    "Georgia",
    "Playfair Display",
    "Courier New",
    "Arial",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Global font family.
    pub font: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            font: FONT_OPTIONS[0].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_is_offered() {
        let theme = ThemeSettings::default();
        assert!(FONT_OPTIONS.contains(&theme.font.as_str()));
    }
}
