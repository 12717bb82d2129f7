//! @acp:module "Search Domains"
//! @acp:summary "Searchable domains and stacks with their table layouts"
//! @acp:domain search
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UiProError;

/// Table layout for one searchable source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpec {
    /// File name relative to the data directory
    pub file: &'static str,
    /// Columns concatenated into the BM25 document
    pub search_cols: &'static [&'static str],
    /// Columns copied into result rows
    pub output_cols: &'static [&'static str],
}

/// Named category of searchable content
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Product,
    Style,
    Color,
    Landing,
    Typography,
    Prompt,
    Chart,
    Ux,
}

impl Domain {
    pub const ALL: [Domain; 8] = [
        Domain::Product,
        Domain::Style,
        Domain::Color,
        Domain::Landing,
        Domain::Typography,
        Domain::Prompt,
        Domain::Chart,
        Domain::Ux,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Product => "product",
            Domain::Style => "style",
            Domain::Color => "color",
            Domain::Landing => "landing",
            Domain::Typography => "typography",
            Domain::Prompt => "prompt",
            Domain::Chart => "chart",
            Domain::Ux => "ux",
        }
    }

    pub fn source(&self) -> &'static SourceSpec {
        match self {
            Domain::Product => &PRODUCT,
            Domain::Style => &STYLE,
            Domain::Color => &COLOR,
            Domain::Landing => &LANDING,
            Domain::Typography => &TYPOGRAPHY,
            Domain::Prompt => &PROMPT,
            Domain::Chart => &CHART,
            Domain::Ux => &UX,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = UiProError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == name)
            .ok_or_else(|| UiProError::UnknownDomain(s.to_string()))
    }
}

/// Framework whose implementation guidelines can be searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stack {
    HtmlTailwind,
    React,
    Nextjs,
}

impl Stack {
    pub const ALL: [Stack; 3] = [Stack::HtmlTailwind, Stack::React, Stack::Nextjs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::HtmlTailwind => "html-tailwind",
            Stack::React => "react",
            Stack::Nextjs => "nextjs",
        }
    }

    pub fn source(&self) -> &'static SourceSpec {
        match self {
            Stack::HtmlTailwind => &STACK_HTML_TAILWIND,
            Stack::React => &STACK_REACT,
            Stack::Nextjs => &STACK_NEXTJS,
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stack {
    type Err = UiProError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Stack::ALL
            .into_iter()
            .find(|st| st.as_str() == name)
            .ok_or_else(|| UiProError::UnknownStack(s.to_string()))
    }
}

static PRODUCT: SourceSpec = SourceSpec {
    file: "products.csv",
    search_cols: &[
        "Product Type",
        "Keywords",
        "Primary Style Recommendation",
        "Key Considerations",
    ],
    output_cols: &[
        "Product Type",
        "Keywords",
        "Primary Style Recommendation",
        "Secondary Styles",
        "Landing Page Pattern",
        "Dashboard Style (if applicable)",
        "Color Palette Focus",
    ],
};

static STYLE: SourceSpec = SourceSpec {
    file: "styles.csv",
    search_cols: &["Style Category", "Keywords", "Best For", "Type"],
    output_cols: &[
        "Style Category",
        "Type",
        "Keywords",
        "Primary Colors",
        "Effects & Animation",
        "Best For",
        "Performance",
        "Accessibility",
        "Framework Compatibility",
        "Complexity",
    ],
};

static COLOR: SourceSpec = SourceSpec {
    file: "colors.csv",
    search_cols: &["Product Type", "Keywords", "Notes"],
    output_cols: &[
        "Product Type",
        "Keywords",
        "Primary (Hex)",
        "Secondary (Hex)",
        "CTA (Hex)",
        "Background (Hex)",
        "Text (Hex)",
        "Border (Hex)",
        "Notes",
    ],
};

static LANDING: SourceSpec = SourceSpec {
    file: "landing.csv",
    search_cols: &[
        "Pattern Name",
        "Keywords",
        "Conversion Optimization",
        "Section Order",
    ],
    output_cols: &[
        "Pattern Name",
        "Keywords",
        "Section Order",
        "Primary CTA Placement",
        "Color Strategy",
        "Conversion Optimization",
    ],
};

static TYPOGRAPHY: SourceSpec = SourceSpec {
    file: "typography.csv",
    search_cols: &[
        "Font Pairing Name",
        "Category",
        "Mood/Style Keywords",
        "Best For",
        "Heading Font",
        "Body Font",
    ],
    output_cols: &[
        "Font Pairing Name",
        "Category",
        "Heading Font",
        "Body Font",
        "Mood/Style Keywords",
        "Best For",
        "Google Fonts URL",
        "CSS Import",
        "Tailwind Config",
        "Notes",
    ],
};

static PROMPT: SourceSpec = SourceSpec {
    file: "prompts.csv",
    search_cols: &[
        "Style Category",
        "AI Prompt Keywords (Copy-Paste Ready)",
        "CSS/Technical Keywords",
    ],
    output_cols: &[
        "Style Category",
        "AI Prompt Keywords (Copy-Paste Ready)",
        "CSS/Technical Keywords",
        "Implementation Checklist",
    ],
};

static CHART: SourceSpec = SourceSpec {
    file: "charts.csv",
    search_cols: &[
        "Data Type",
        "Keywords",
        "Best Chart Type",
        "Accessibility Notes",
    ],
    output_cols: &[
        "Data Type",
        "Keywords",
        "Best Chart Type",
        "Secondary Options",
        "Color Guidance",
        "Accessibility Notes",
        "Library Recommendation",
        "Interactive Level",
    ],
};

static UX: SourceSpec = SourceSpec {
    file: "ux-guidelines.csv",
    search_cols: &["Category", "Issue", "Description", "Platform"],
    output_cols: &[
        "Category",
        "Issue",
        "Platform",
        "Description",
        "Do",
        "Don't",
        "Code Example Good",
        "Code Example Bad",
        "Severity",
    ],
};

const STACK_SEARCH_COLS: &[&str] = &["Category", "Guideline", "Description", "Do", "Don't"];
const STACK_OUTPUT_COLS: &[&str] = &[
    "Category",
    "Guideline",
    "Description",
    "Do",
    "Don't",
    "Code Good",
    "Code Bad",
    "Severity",
    "Docs URL",
];

static STACK_HTML_TAILWIND: SourceSpec = SourceSpec {
    file: "stacks/html-tailwind.csv",
    search_cols: STACK_SEARCH_COLS,
    output_cols: STACK_OUTPUT_COLS,
};

static STACK_REACT: SourceSpec = SourceSpec {
    file: "stacks/react.csv",
    search_cols: STACK_SEARCH_COLS,
    output_cols: STACK_OUTPUT_COLS,
};

static STACK_NEXTJS: SourceSpec = SourceSpec {
    file: "stacks/nextjs.csv",
    search_cols: STACK_SEARCH_COLS,
    output_cols: STACK_OUTPUT_COLS,
};

/// Keyword hints per domain, in tie-break order
const DOMAIN_HINTS: &[(Domain, &[&str])] = &[
    (Domain::Color, &["color", "palette", "hex", "#", "rgb"]),
    (
        Domain::Chart,
        &[
            "chart", "graph", "visualization", "trend", "bar", "pie", "scatter", "heatmap",
            "funnel",
        ],
    ),
    (
        Domain::Landing,
        &[
            "landing", "page", "cta", "conversion", "hero", "testimonial", "pricing", "section",
        ],
    ),
    (
        Domain::Product,
        &[
            "saas", "ecommerce", "e-commerce", "fintech", "healthcare", "gaming", "portfolio",
            "crypto", "dashboard",
        ],
    ),
    (
        Domain::Prompt,
        &["prompt", "css", "implementation", "variable", "checklist", "tailwind"],
    ),
    (
        Domain::Style,
        &[
            "style", "design", "ui", "minimalism", "glassmorphism", "neumorphism", "brutalism",
            "dark mode", "flat", "aurora",
        ],
    ),
    (
        Domain::Ux,
        &[
            "ux", "usability", "accessibility", "wcag", "touch", "scroll", "animation",
            "keyboard", "navigation", "mobile",
        ],
    ),
    (
        Domain::Typography,
        &["font", "typography", "heading", "serif", "sans"],
    ),
];

/// Guess the domain a free-text query is about.
///
/// The domain with the most hint hits wins; earlier entries win ties.
/// Falls back to [`Domain::Style`] when no hint matches.
pub fn detect_domain(query: &str) -> Domain {
    let query = query.to_lowercase();
    let mut best = (Domain::Style, 0usize);
    for (domain, hints) in DOMAIN_HINTS {
        let hits = hints.iter().filter(|h| query.contains(*h)).count();
        if hits > best.1 {
            best = (*domain, hits);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_parse_roundtrip() {
        for domain in Domain::ALL {
            assert_eq!(domain.as_str().parse::<Domain>().unwrap(), domain);
        }
        assert_eq!("  Typography ".parse::<Domain>().unwrap(), Domain::Typography);
        assert!(matches!(
            "fonts".parse::<Domain>(),
            Err(UiProError::UnknownDomain(_))
        ));
    }

    #[test]
    fn test_stack_parse() {
        assert_eq!("html-tailwind".parse::<Stack>().unwrap(), Stack::HtmlTailwind);
        assert_eq!("NextJS".parse::<Stack>().unwrap(), Stack::Nextjs);
        assert!("vue".parse::<Stack>().is_err());
    }

    #[test]
    fn test_detect_domain() {
        assert_eq!(detect_domain("color palette for a bakery"), Domain::Color);
        assert_eq!(detect_domain("heading font pairing"), Domain::Typography);
        assert_eq!(detect_domain("pie chart of sales"), Domain::Chart);
        assert_eq!(detect_domain("something entirely different"), Domain::Style);
    }

    #[test]
    fn test_detect_domain_tie_prefers_earlier_hint() {
        // one color hit, one chart hit
        assert_eq!(detect_domain("palette graph"), Domain::Color);
    }
}
