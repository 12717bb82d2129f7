//! @acp:module "Design Types"
//! @acp:summary "Reasoning rules, scoring weights and the recommendation record"
//! @acp:domain design
//! @acp:layer types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::defaults::Field;

/// Arbitrary-depth value parsed from a rule's embedded decision-rule JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Sequence(Vec<RuleValue>),
    Mapping(BTreeMap<String, RuleValue>),
}

/// Top-level decision-rule mapping of a reasoning rule
pub type DecisionRules = BTreeMap<String, RuleValue>;

/// Rule severity; free text in the table, `MEDIUM` when blank
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    /// Any other label, kept verbatim
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Other(label) => label,
        }
    }
}

impl From<&str> for Severity {
    fn from(label: &str) -> Self {
        let label = label.trim();
        match label.to_uppercase().as_str() {
            "" | "MEDIUM" => Severity::Medium,
            "LOW" => Severity::Low,
            "HIGH" => Severity::High,
            _ => Severity::Other(label.to_string()),
        }
    }
}

impl From<String> for Severity {
    fn from(label: String) -> Self {
        Severity::from(label.as_str())
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_str().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the reasoning rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningRule {
    /// Lookup key, matched case-insensitively
    pub category: String,
    pub pattern: String,
    /// Preferred style names, most preferred first
    pub style_priority: Vec<String>,
    pub color_mood: String,
    pub typography_mood: String,
    pub key_effects: String,
    pub anti_patterns: String,
    pub decision_rules: DecisionRules,
    pub severity: Severity,
}

impl ReasoningRule {
    /// Rule used when nothing in the table matches
    pub fn builtin_default() -> Self {
        Self {
            category: String::new(),
            pattern: Field::PatternName.default_value().to_string(),
            style_priority: vec!["Minimalism".to_string(), "Flat Design".to_string()],
            color_mood: "Professional".to_string(),
            typography_mood: Field::TypographyMood.default_value().to_string(),
            key_effects: Field::KeyEffects.default_value().to_string(),
            anti_patterns: String::new(),
            decision_rules: DecisionRules::new(),
            severity: Severity::Medium,
        }
    }
}

/// Points awarded per priority keyword during weighted best-match scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Keyword found in the identity column (e.g. "Style Category")
    pub identity: u32,
    /// Keyword found in the "Keywords" column
    pub keywords: u32,
    /// Keyword found anywhere else in the row
    pub other: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            identity: 10,
            keywords: 3,
            other: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecommendation {
    pub name: String,
    pub sections: Vec<String>,
    pub cta_placement: String,
    pub color_strategy: String,
    pub conversion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecommendation {
    pub name: String,
    #[serde(rename = "type")]
    pub style_type: String,
    pub effects: String,
    pub keywords: String,
    pub best_for: String,
    pub performance: String,
    pub accessibility: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub cta: String,
    pub background: String,
    pub text: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyRecommendation {
    pub heading: String,
    pub body: String,
    pub mood: String,
    pub best_for: String,
    pub google_fonts_url: String,
    pub css_import: String,
}

/// Complete design system recommendation.
///
/// Every leaf is always present; see [`Field`] for the fallback of each one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub project_name: String,
    pub category: String,
    pub pattern: PatternRecommendation,
    pub style: StyleRecommendation,
    pub colors: ColorPalette,
    pub typography: TypographyRecommendation,
    pub key_effects: String,
    pub anti_patterns: String,
    pub decision_rules: DecisionRules,
    pub severity: Severity,
}
