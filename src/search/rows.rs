//! @acp:module "Search Rows"
//! @acp:summary "Generic result rows and typed per-domain views"
//! @acp:domain search
//! @acp:layer types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One result row: column name to cell text.
///
/// Columns are keyed in sorted order so the same row always serializes
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchRow {
    columns: BTreeMap<String, String>,
}

impl SearchRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell text for `column`, empty when the column is absent
    pub fn get(&self, column: &str) -> &str {
        self.columns.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Lowercased `column: value` text of the whole row
    pub fn serialized(&self) -> String {
        self.columns
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
            .to_lowercase()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Product table row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRow {
    pub product_type: String,
    pub keywords: String,
    pub primary_style: String,
    pub secondary_styles: String,
    pub landing_pattern: String,
    pub color_focus: String,
}

impl ProductRow {
    pub const PRODUCT_TYPE: &'static str = "Product Type";
    pub const KEYWORDS: &'static str = "Keywords";
    pub const PRIMARY_STYLE: &'static str = "Primary Style Recommendation";
    pub const SECONDARY_STYLES: &'static str = "Secondary Styles";
    pub const LANDING_PATTERN: &'static str = "Landing Page Pattern";
    pub const COLOR_FOCUS: &'static str = "Color Palette Focus";
}

impl From<&SearchRow> for ProductRow {
    fn from(row: &SearchRow) -> Self {
        Self {
            product_type: row.get(Self::PRODUCT_TYPE).to_string(),
            keywords: row.get(Self::KEYWORDS).to_string(),
            primary_style: row.get(Self::PRIMARY_STYLE).to_string(),
            secondary_styles: row.get(Self::SECONDARY_STYLES).to_string(),
            landing_pattern: row.get(Self::LANDING_PATTERN).to_string(),
            color_focus: row.get(Self::COLOR_FOCUS).to_string(),
        }
    }
}

/// Style table row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRow {
    pub category: String,
    pub style_type: String,
    pub keywords: String,
    pub effects: String,
    pub best_for: String,
    pub performance: String,
    pub accessibility: String,
}

impl StyleRow {
    pub const CATEGORY: &'static str = "Style Category";
    pub const TYPE: &'static str = "Type";
    pub const KEYWORDS: &'static str = "Keywords";
    pub const EFFECTS: &'static str = "Effects & Animation";
    pub const BEST_FOR: &'static str = "Best For";
    pub const PERFORMANCE: &'static str = "Performance";
    pub const ACCESSIBILITY: &'static str = "Accessibility";
}

impl From<&SearchRow> for StyleRow {
    fn from(row: &SearchRow) -> Self {
        Self {
            category: row.get(Self::CATEGORY).to_string(),
            style_type: row.get(Self::TYPE).to_string(),
            keywords: row.get(Self::KEYWORDS).to_string(),
            effects: row.get(Self::EFFECTS).to_string(),
            best_for: row.get(Self::BEST_FOR).to_string(),
            performance: row.get(Self::PERFORMANCE).to_string(),
            accessibility: row.get(Self::ACCESSIBILITY).to_string(),
        }
    }
}

/// Color palette row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRow {
    pub primary: String,
    pub secondary: String,
    pub cta: String,
    pub background: String,
    pub text: String,
    pub notes: String,
}

impl ColorRow {
    pub const PRIMARY: &'static str = "Primary (Hex)";
    pub const SECONDARY: &'static str = "Secondary (Hex)";
    pub const CTA: &'static str = "CTA (Hex)";
    pub const BACKGROUND: &'static str = "Background (Hex)";
    pub const TEXT: &'static str = "Text (Hex)";
    pub const NOTES: &'static str = "Notes";
}

impl From<&SearchRow> for ColorRow {
    fn from(row: &SearchRow) -> Self {
        Self {
            primary: row.get(Self::PRIMARY).to_string(),
            secondary: row.get(Self::SECONDARY).to_string(),
            cta: row.get(Self::CTA).to_string(),
            background: row.get(Self::BACKGROUND).to_string(),
            text: row.get(Self::TEXT).to_string(),
            notes: row.get(Self::NOTES).to_string(),
        }
    }
}

/// Landing page pattern row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingRow {
    pub pattern_name: String,
    pub section_order: String,
    pub cta_placement: String,
    pub color_strategy: String,
    pub conversion: String,
}

impl LandingRow {
    pub const PATTERN_NAME: &'static str = "Pattern Name";
    pub const SECTION_ORDER: &'static str = "Section Order";
    pub const CTA_PLACEMENT: &'static str = "Primary CTA Placement";
    pub const COLOR_STRATEGY: &'static str = "Color Strategy";
    pub const CONVERSION: &'static str = "Conversion Optimization";
}

impl From<&SearchRow> for LandingRow {
    fn from(row: &SearchRow) -> Self {
        Self {
            pattern_name: row.get(Self::PATTERN_NAME).to_string(),
            section_order: row.get(Self::SECTION_ORDER).to_string(),
            cta_placement: row.get(Self::CTA_PLACEMENT).to_string(),
            color_strategy: row.get(Self::COLOR_STRATEGY).to_string(),
            conversion: row.get(Self::CONVERSION).to_string(),
        }
    }
}

/// Font pairing row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypographyRow {
    pub heading: String,
    pub body: String,
    pub mood: String,
    pub best_for: String,
    pub google_fonts_url: String,
    pub css_import: String,
}

impl TypographyRow {
    pub const HEADING: &'static str = "Heading Font";
    pub const BODY: &'static str = "Body Font";
    pub const MOOD: &'static str = "Mood/Style Keywords";
    pub const BEST_FOR: &'static str = "Best For";
    pub const GOOGLE_FONTS_URL: &'static str = "Google Fonts URL";
    pub const CSS_IMPORT: &'static str = "CSS Import";
}

impl From<&SearchRow> for TypographyRow {
    fn from(row: &SearchRow) -> Self {
        Self {
            heading: row.get(Self::HEADING).to_string(),
            body: row.get(Self::BODY).to_string(),
            mood: row.get(Self::MOOD).to_string(),
            best_for: row.get(Self::BEST_FOR).to_string(),
            google_fonts_url: row.get(Self::GOOGLE_FONTS_URL).to_string(),
            css_import: row.get(Self::CSS_IMPORT).to_string(),
        }
    }
}
