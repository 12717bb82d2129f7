//! @acp:module "Rule Table Loader"
//! @acp:summary "Load category reasoning rules from ui-reasoning.csv"
//! @acp:domain design
//! @acp:layer io

use std::path::Path;

use crate::error::UiProError;
use crate::search::table::read_rows;
use crate::search::SearchRow;

use super::types::{DecisionRules, ReasoningRule, Severity};

/// Rule table file name inside the data directory
pub const REASONING_FILE: &str = "ui-reasoning.csv";

const UI_CATEGORY: &str = "UI_Category";
const RECOMMENDED_PATTERN: &str = "Recommended_Pattern";
const STYLE_PRIORITY: &str = "Style_Priority";
const COLOR_MOOD: &str = "Color_Mood";
const TYPOGRAPHY_MOOD: &str = "Typography_Mood";
const KEY_EFFECTS: &str = "Key_Effects";
const ANTI_PATTERNS: &str = "Anti_Patterns";
const DECISION_RULES: &str = "Decision_Rules";
const SEVERITY: &str = "Severity";

/// Load every reasoning rule from `<data_dir>/ui-reasoning.csv`.
///
/// A missing or unreadable table yields no rules; callers fall back to
/// [`ReasoningRule::builtin_default`].
pub fn load_rules(data_dir: &Path) -> Vec<ReasoningRule> {
    let path = data_dir.join(REASONING_FILE);
    match read_rows(&path) {
        Ok(rows) => {
            let rules: Vec<ReasoningRule> = rows.iter().map(rule_from_row).collect();
            tracing::debug!("Loaded {} reasoning rules from {:?}", rules.len(), path);
            rules
        }
        Err(UiProError::DataFileMissing { path }) => {
            tracing::debug!("No reasoning table at {:?}, using built-in default rule", path);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("Failed to read reasoning table {:?}: {}", path, e);
            Vec::new()
        }
    }
}

/// Build a rule from one table row
pub fn rule_from_row(row: &SearchRow) -> ReasoningRule {
    let category = row.get(UI_CATEGORY).trim().to_string();
    ReasoningRule {
        pattern: row.get(RECOMMENDED_PATTERN).to_string(),
        style_priority: parse_style_priority(row.get(STYLE_PRIORITY)),
        color_mood: row.get(COLOR_MOOD).to_string(),
        typography_mood: row.get(TYPOGRAPHY_MOOD).to_string(),
        key_effects: row.get(KEY_EFFECTS).to_string(),
        anti_patterns: row.get(ANTI_PATTERNS).to_string(),
        decision_rules: parse_decision_rules(&category, row.get(DECISION_RULES)),
        severity: Severity::from(row.get(SEVERITY)),
        category,
    }
}

/// Split a `+`-delimited style list, dropping blank entries
pub fn parse_style_priority(field: &str) -> Vec<String> {
    field
        .split('+')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the embedded decision-rule JSON object.
///
/// Anything that is not a JSON object comes back as an empty mapping.
pub fn parse_decision_rules(category: &str, field: &str) -> DecisionRules {
    let field = field.trim();
    if field.is_empty() {
        return DecisionRules::new();
    }
    serde_json::from_str(field).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed Decision_Rules for {:?}: {}", category, e);
        DecisionRules::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::types::RuleValue;

    #[test]
    fn test_style_priority_split() {
        assert_eq!(
            parse_style_priority("Glassmorphism + Minimalism+ Flat Design"),
            vec!["Glassmorphism", "Minimalism", "Flat Design"]
        );
        assert!(parse_style_priority("  ").is_empty());
    }

    #[test]
    fn test_decision_rules_parse() {
        let rules = parse_decision_rules("SaaS", r#"{"if_dark_mode": "boost contrast"}"#);
        assert_eq!(
            rules["if_dark_mode"],
            RuleValue::String("boost contrast".to_string())
        );
    }

    #[test]
    fn test_malformed_decision_rules_become_empty() {
        assert!(parse_decision_rules("SaaS", "{not json").is_empty());
        assert!(parse_decision_rules("SaaS", "[1, 2]").is_empty());
        assert!(parse_decision_rules("SaaS", "").is_empty());
    }

    #[test]
    fn test_rule_from_row() {
        let row: SearchRow = [
            (UI_CATEGORY, " Fintech "),
            (RECOMMENDED_PATTERN, "Trust + Proof"),
            (STYLE_PRIORITY, "Minimalism + Glassmorphism"),
            (SEVERITY, "high"),
            (DECISION_RULES, "oops"),
        ]
        .into_iter()
        .collect();

        let rule = rule_from_row(&row);
        assert_eq!(rule.category, "Fintech");
        assert_eq!(rule.pattern, "Trust + Proof");
        assert_eq!(rule.style_priority, vec!["Minimalism", "Glassmorphism"]);
        assert_eq!(rule.severity, Severity::High);
        assert!(rule.decision_rules.is_empty());
        assert!(rule.anti_patterns.is_empty());
    }

    #[test]
    fn test_missing_table_loads_no_rules() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_rules(dir.path()).is_empty());
    }
}
