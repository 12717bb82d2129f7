//! @acp:module "Rule Matcher"
//! @acp:summary "Resolve a category to a reasoning rule via exact, substring and keyword tiers"
//! @acp:domain design
//! @acp:layer logic

use serde::Serialize;
use std::fmt;

use super::types::ReasoningRule;

/// Which tier resolved a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Exact,
    Substring,
    Keyword,
    Default,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchTier::Exact => "exact",
            MatchTier::Substring => "substring",
            MatchTier::Keyword => "keyword",
            MatchTier::Default => "default",
        };
        f.write_str(name)
    }
}

/// Resolved rule plus the tier that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleMatch {
    pub tier: MatchTier,
    pub rule: ReasoningRule,
}

/// Tier predicate over (lowercased input, lowercased rule category)
type TierPredicate = fn(&str, &str) -> bool;

/// Tiers in priority order; the first tier with any hit wins
const TIERS: [(MatchTier, TierPredicate); 3] = [
    (MatchTier::Exact, exact_match),
    (MatchTier::Substring, substring_match),
    (MatchTier::Keyword, keyword_match),
];

fn exact_match(input: &str, category: &str) -> bool {
    input == category
}

fn substring_match(input: &str, category: &str) -> bool {
    category.contains(input) || input.contains(category)
}

/// Category split into word tokens on `/`, `-` and whitespace
fn keyword_match(input: &str, category: &str) -> bool {
    category
        .split(|c: char| c == '/' || c == '-' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .any(|token| input.contains(token))
}

/// Matcher over an immutable rule table
#[derive(Debug, Clone, Default)]
pub struct RuleMatcher {
    rules: Vec<ReasoningRule>,
}

impl RuleMatcher {
    pub fn new(rules: Vec<ReasoningRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ReasoningRule] {
        &self.rules
    }

    /// Resolve `category` and report the tier that fired.
    ///
    /// Rules with a blank category never match; a blank input resolves to
    /// the built-in default.
    pub fn explain(&self, category: &str) -> RuleMatch {
        let input = category.trim().to_lowercase();
        if !input.is_empty() {
            let candidates: Vec<(String, &ReasoningRule)> = self
                .rules
                .iter()
                .map(|rule| (rule.category.trim().to_lowercase(), rule))
                .filter(|(key, _)| !key.is_empty())
                .collect();

            for (tier, predicate) in TIERS {
                if let Some((_, rule)) = candidates.iter().find(|(key, _)| predicate(&input, key)) {
                    tracing::debug!("Category {:?} matched rule {:?} ({})", category, rule.category, tier);
                    return RuleMatch {
                        tier,
                        rule: (*rule).clone(),
                    };
                }
            }
        }

        tracing::debug!("No rule for category {:?}, using default", category);
        RuleMatch {
            tier: MatchTier::Default,
            rule: ReasoningRule::builtin_default(),
        }
    }

    /// Resolve `category` to a single rule
    pub fn resolve(&self, category: &str) -> ReasoningRule {
        self.explain(category).rule
    }
}

/// Resolve `category` against `rules`, falling back to the built-in default
pub fn match_rule(category: &str, rules: &[ReasoningRule]) -> ReasoningRule {
    RuleMatcher::new(rules.to_vec()).resolve(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(category: &str) -> ReasoningRule {
        ReasoningRule {
            category: category.to_string(),
            pattern: format!("{} pattern", category),
            ..ReasoningRule::builtin_default()
        }
    }

    #[test]
    fn test_tier_predicates_independently() {
        assert!(exact_match("landing", "landing"));
        assert!(!exact_match("landing", "landing page"));

        assert!(substring_match("landing", "landing page"));
        assert!(substring_match("saas landing page", "landing page"));
        assert!(!substring_match("fintech", "landing page"));

        assert!(keyword_match("crypto exchange", "fintech/crypto"));
        assert!(keyword_match("online commerce", "e-commerce"));
        assert!(keyword_match("page builder", "landing page"));
        assert!(!keyword_match("bakery", "fintech/crypto"));
    }

    #[test]
    fn test_exact_beats_earlier_substring() {
        let matcher = RuleMatcher::new(vec![rule("Landing Page"), rule("Landing")]);
        let found = matcher.explain("landing");
        assert_eq!(found.tier, MatchTier::Exact);
        assert_eq!(found.rule.category, "Landing");
    }

    #[test]
    fn test_substring_before_keyword() {
        let matcher = RuleMatcher::new(vec![rule("Fintech/Crypto"), rule("Crypto Wallet")]);
        // "crypto" would hit the first rule at keyword tier
        let found = matcher.explain("crypto wallet app");
        assert_eq!(found.tier, MatchTier::Substring);
        assert_eq!(found.rule.category, "Crypto Wallet");
    }

    #[test]
    fn test_keyword_tier() {
        let matcher = RuleMatcher::new(vec![rule("Healthcare"), rule("Fintech/Crypto")]);
        let found = matcher.explain("Crypto Exchange Platform");
        assert_eq!(found.tier, MatchTier::Keyword);
        assert_eq!(found.rule.category, "Fintech/Crypto");
    }

    #[test]
    fn test_multiword_category_keyword_tier() {
        let matcher = RuleMatcher::new(vec![rule("Landing Page"), rule("Healthcare App")]);

        let found = matcher.explain("page builder");
        assert_eq!(found.tier, MatchTier::Keyword);
        assert_eq!(found.rule.category, "Landing Page");

        let found = matcher.explain("mobile app");
        assert_eq!(found.tier, MatchTier::Keyword);
        assert_eq!(found.rule.category, "Healthcare App");
    }

    #[test]
    fn test_empty_table_always_default() {
        for category in ["SaaS", "", "Landing", "General"] {
            assert_eq!(match_rule(category, &[]), ReasoningRule::builtin_default());
        }
    }

    #[test]
    fn test_blank_categories_never_match() {
        let matcher = RuleMatcher::new(vec![rule(""), rule("Gaming")]);
        assert_eq!(matcher.explain("Bakery").tier, MatchTier::Default);
        assert_eq!(matcher.explain("   ").tier, MatchTier::Default);
    }
}
