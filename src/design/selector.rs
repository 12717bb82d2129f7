//! @acp:module "Best-Match Selector"
//! @acp:summary "Two-pass identity/weighted selection of one row per domain"
//! @acp:domain design
//! @acp:layer logic

use crate::search::{SearchRow, StyleRow};

use super::types::ScoringWeights;

/// Picks exactly one row out of a ranked result list.
///
/// 1. Identity pass: keywords in priority order, each scanned across all
///    rows; the first row whose identity column contains the keyword (or is
///    contained by it) wins.
/// 2. Weighted pass: per keyword, `identity` points for an identity-column
///    hit, else `keywords` points for a keywords-column hit, else `other`
///    points for a hit anywhere in the row. The highest total wins when it
///    is above zero; equal totals keep search rank.
/// 3. Otherwise the search engine's top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatchSelector {
    identity_column: &'static str,
    keywords_column: &'static str,
    weights: ScoringWeights,
}

impl BestMatchSelector {
    pub fn new(
        identity_column: &'static str,
        keywords_column: &'static str,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            identity_column,
            keywords_column,
            weights,
        }
    }

    /// Selector keyed on the style table's "Style Category" column
    pub fn for_style(weights: ScoringWeights) -> Self {
        Self::new(StyleRow::CATEGORY, StyleRow::KEYWORDS, weights)
    }

    /// Select a row; an empty result list gives an empty row
    pub fn select(&self, results: &[SearchRow], priority_keywords: &[String]) -> SearchRow {
        let Some(first) = results.first() else {
            return SearchRow::new();
        };

        let keywords = normalize_keywords(priority_keywords);
        if keywords.is_empty() {
            return first.clone();
        }

        self.identity_pass(results, &keywords)
            .or_else(|| self.weighted_pass(results, &keywords))
            .unwrap_or(first)
            .clone()
    }

    fn identity_pass<'r>(&self, results: &'r [SearchRow], keywords: &[String]) -> Option<&'r SearchRow> {
        keywords.iter().find_map(|keyword| {
            results.iter().find(|row| {
                let identity = row.get(self.identity_column).trim().to_lowercase();
                !identity.is_empty()
                    && (identity.contains(keyword.as_str()) || keyword.contains(identity.as_str()))
            })
        })
    }

    fn weighted_pass<'r>(&self, results: &'r [SearchRow], keywords: &[String]) -> Option<&'r SearchRow> {
        let mut best: Option<(&SearchRow, u32)> = None;
        for row in results {
            let score = self.score_normalized(row, keywords);
            tracing::debug!("{:?} scored {}", row.get(self.identity_column), score);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((row, score));
            }
        }
        best.filter(|(_, score)| *score > 0).map(|(row, _)| row)
    }

    /// Weighted score of one row for the given priority keywords
    pub fn score(&self, row: &SearchRow, priority_keywords: &[String]) -> u32 {
        self.score_normalized(row, &normalize_keywords(priority_keywords))
    }

    fn score_normalized(&self, row: &SearchRow, keywords: &[String]) -> u32 {
        let identity = row.get(self.identity_column).to_lowercase();
        let row_keywords = row.get(self.keywords_column).to_lowercase();
        let whole_row = row.serialized();

        keywords
            .iter()
            .map(|keyword| {
                if identity.contains(keyword.as_str()) {
                    self.weights.identity
                } else if row_keywords.contains(keyword.as_str()) {
                    self.weights.keywords
                } else if whole_row.contains(keyword.as_str()) {
                    self.weights.other
                } else {
                    0
                }
            })
            .sum()
    }
}

/// Lowercase and trim keywords, dropping blanks
fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Select the best style-like row with the given weights
pub fn select_best_match(
    results: &[SearchRow],
    priority_keywords: &[String],
    weights: ScoringWeights,
) -> SearchRow {
    BestMatchSelector::for_style(weights).select(results, priority_keywords)
}

/// Top-ranked row, or an empty row
pub fn select_top(results: &[SearchRow]) -> SearchRow {
    results.first().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(category: &str, keywords: &str) -> SearchRow {
        [(StyleRow::CATEGORY, category), (StyleRow::KEYWORDS, keywords)]
            .into_iter()
            .collect()
    }

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_results_give_empty_row() {
        let selected = select_best_match(&[], &kws(&["minimalism"]), ScoringWeights::default());
        assert!(selected.is_empty());
    }

    #[test]
    fn test_no_keywords_trusts_search_rank() {
        let results = vec![style("Brutalism", "bold"), style("Minimalism", "clean")];
        let selected = select_best_match(&results, &[], ScoringWeights::default());
        assert_eq!(selected.get(StyleRow::CATEGORY), "Brutalism");
        let selected = select_best_match(&results, &kws(&["  "]), ScoringWeights::default());
        assert_eq!(selected.get(StyleRow::CATEGORY), "Brutalism");
    }

    #[test]
    fn test_identity_pass_beats_rank() {
        let results = vec![style("Brutalism", "bold"), style("Minimalism", "clean")];
        let selected = select_best_match(&results, &kws(&["minimalism"]), ScoringWeights::default());
        assert_eq!(selected.get(StyleRow::CATEGORY), "Minimalism");
    }

    #[test]
    fn test_identity_pass_follows_keyword_priority() {
        let results = vec![style("Brutalism", "bold"), style("Minimalism", "clean")];
        let selected = select_best_match(
            &results,
            &kws(&["Minimalism", "Brutalism"]),
            ScoringWeights::default(),
        );
        assert_eq!(selected.get(StyleRow::CATEGORY), "Minimalism");
    }

    #[test]
    fn test_identity_contained_in_keyword() {
        let results = vec![style("Flat", "simple"), style("Aurora", "gradient")];
        let selected =
            select_best_match(&results, &kws(&["aurora ui"]), ScoringWeights::default());
        assert_eq!(selected.get(StyleRow::CATEGORY), "Aurora");
    }

    #[test]
    fn test_weighted_fallback_keywords_column() {
        let results = vec![style("Neumorphism", "soft"), style("Swiss", "bold, grid")];
        let selector = BestMatchSelector::for_style(ScoringWeights::default());
        assert_eq!(selector.score(&results[0], &kws(&["bold"])), 0);
        assert_eq!(selector.score(&results[1], &kws(&["bold"])), 3);
        assert_eq!(
            selector.select(&results, &kws(&["bold"])).get(StyleRow::CATEGORY),
            "Swiss"
        );
    }

    #[test]
    fn test_other_column_scores_one() {
        let mut row = style("Claymorphism", "soft");
        row.insert("Best For", "Playful kids apps");
        let selector = BestMatchSelector::for_style(ScoringWeights::default());
        assert_eq!(selector.score(&row, &kws(&["playful"])), 1);
    }

    #[test]
    fn test_all_zero_falls_back_to_first() {
        let results = vec![style("Neumorphism", "soft"), style("Swiss", "grid")];
        let selected = select_best_match(&results, &kws(&["retro"]), ScoringWeights::default());
        assert_eq!(selected.get(StyleRow::CATEGORY), "Neumorphism");
    }

    #[test]
    fn test_weighted_ties_keep_rank() {
        let results = vec![style("One", "bold"), style("Two", "bold")];
        let selected = select_best_match(&results, &kws(&["bold"]), ScoringWeights::default());
        assert_eq!(selected.get(StyleRow::CATEGORY), "One");
    }

    #[test]
    fn test_custom_weights_change_winner() {
        let mut first = style("Retro", "neon");
        first.insert("Best For", "bold gaming");
        let second = style("Swiss", "bold");
        let weights = ScoringWeights {
            identity: 10,
            keywords: 1,
            other: 5,
        };
        // keyword-column hit is worth less than a hit elsewhere under these weights
        let selected = select_best_match(&[second, first], &kws(&["bold"]), weights);
        assert_eq!(selected.get(StyleRow::CATEGORY), "Retro");
    }

    #[test]
    fn test_blank_identity_not_matched_in_pass_one() {
        let results = vec![style("", "minimal"), style("Minimalism", "clean")];
        let selected = select_best_match(&results, &kws(&["minimalism"]), ScoringWeights::default());
        assert_eq!(selected.get(StyleRow::CATEGORY), "Minimalism");
    }
}
