//! @acp:module "Design System Generator"
//! @acp:summary "Assemble a recommendation from rule lookup and per-domain best matches"
//! @acp:domain design
//! @acp:layer service

use crate::config::Config;
use crate::search::{
    ColorRow, Domain, LandingRow, ProductRow, SearchProvider, StyleRow, TypographyRow,
};

use super::defaults::{split_sections, Field};
use super::matcher::{RuleMatch, RuleMatcher};
use super::orchestrator::SearchOrchestrator;
use super::rules::load_rules;
use super::selector::{select_top, BestMatchSelector};
use super::types::*;

/// Turns a product description into a [`Recommendation`].
///
/// The rule table is loaded once at construction and never mutated.
pub struct DesignSystemGenerator<P: SearchProvider> {
    matcher: RuleMatcher,
    provider: P,
    weights: ScoringWeights,
    parallel: bool,
}

impl<P: SearchProvider> DesignSystemGenerator<P> {
    /// Load the rule table from the configured data directory
    pub fn new(config: &Config, provider: P) -> Self {
        let rules = load_rules(&config.resolved_data_dir());
        Self {
            matcher: RuleMatcher::new(rules),
            provider,
            weights: config.scoring,
            parallel: config.parallel_search,
        }
    }

    /// Build from an in-memory rule table
    pub fn with_rules(rules: Vec<ReasoningRule>, provider: P, weights: ScoringWeights) -> Self {
        Self {
            matcher: RuleMatcher::new(rules),
            provider,
            weights,
            parallel: false,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn rules(&self) -> &[ReasoningRule] {
        self.matcher.rules()
    }

    /// Which rule (and tier) a category resolves to
    pub fn explain_category(&self, category: &str) -> RuleMatch {
        self.matcher.explain(category)
    }

    /// Generate a fully populated recommendation; never fails
    pub fn generate(&self, query: &str, project_name: Option<&str>) -> Recommendation {
        let orchestrator = SearchOrchestrator::new(&self.provider).parallel(self.parallel);

        let product_response = orchestrator.search_product(query);
        let product = product_response
            .top()
            .map(ProductRow::from)
            .unwrap_or_default();
        let category = Field::Category.resolve([product.product_type.as_str()]);

        let rule = self.matcher.resolve(&category);
        tracing::debug!(
            "Query {:?} -> category {:?}, style priority {:?}",
            query,
            category,
            rule.style_priority
        );

        let results = orchestrator.run_with_product(query, &rule.style_priority, product_response);

        let best_style = BestMatchSelector::for_style(self.weights)
            .select(results.rows(Domain::Style), &rule.style_priority);
        let style = StyleRow::from(&best_style);
        let colors = ColorRow::from(&select_top(results.rows(Domain::Color)));
        let typography = TypographyRow::from(&select_top(results.rows(Domain::Typography)));
        let landing = LandingRow::from(&select_top(results.rows(Domain::Landing)));

        let upper_query = query.trim().to_uppercase();
        let project_name =
            Field::ProjectName.resolve([project_name.unwrap_or(""), upper_query.as_str()]);

        let mut sections =
            split_sections(&Field::PatternSections.resolve([landing.section_order.as_str()]));
        if sections.is_empty() {
            sections = split_sections(Field::PatternSections.default_value());
        }

        Recommendation {
            project_name,
            category,
            pattern: PatternRecommendation {
                name: Field::PatternName
                    .resolve([landing.pattern_name.as_str(), rule.pattern.as_str()]),
                sections,
                cta_placement: Field::CtaPlacement.resolve([landing.cta_placement.as_str()]),
                color_strategy: Field::ColorStrategy.resolve([landing.color_strategy.as_str()]),
                conversion: Field::Conversion.resolve([landing.conversion.as_str()]),
            },
            style: StyleRecommendation {
                name: Field::StyleName.resolve([style.category.as_str()]),
                style_type: Field::StyleType.resolve([style.style_type.as_str()]),
                effects: Field::StyleEffects.resolve([style.effects.as_str()]),
                keywords: Field::StyleKeywords.resolve([style.keywords.as_str()]),
                best_for: Field::StyleBestFor.resolve([style.best_for.as_str()]),
                performance: Field::StylePerformance.resolve([style.performance.as_str()]),
                accessibility: Field::StyleAccessibility.resolve([style.accessibility.as_str()]),
            },
            colors: ColorPalette {
                primary: Field::ColorPrimary.resolve([colors.primary.as_str()]),
                secondary: Field::ColorSecondary.resolve([colors.secondary.as_str()]),
                cta: Field::ColorCta.resolve([colors.cta.as_str()]),
                background: Field::ColorBackground.resolve([colors.background.as_str()]),
                text: Field::ColorText.resolve([colors.text.as_str()]),
                notes: Field::ColorNotes.resolve([colors.notes.as_str()]),
            },
            typography: TypographyRecommendation {
                heading: Field::TypographyHeading.resolve([typography.heading.as_str()]),
                body: Field::TypographyBody.resolve([typography.body.as_str()]),
                mood: Field::TypographyMood
                    .resolve([typography.mood.as_str(), rule.typography_mood.as_str()]),
                best_for: Field::TypographyBestFor.resolve([typography.best_for.as_str()]),
                google_fonts_url: Field::GoogleFontsUrl
                    .resolve([typography.google_fonts_url.as_str()]),
                css_import: Field::CssImport.resolve([typography.css_import.as_str()]),
            },
            // search-sourced effects win over the rule's generic text
            key_effects: Field::KeyEffects
                .resolve([style.effects.as_str(), rule.key_effects.as_str()]),
            anti_patterns: Field::AntiPatterns.resolve([rule.anti_patterns.as_str()]),
            decision_rules: rule.decision_rules,
            severity: rule.severity,
        }
    }
}
