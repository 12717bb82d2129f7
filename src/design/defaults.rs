//! @acp:module "Recommendation Defaults"
//! @acp:summary "Single table of literal fallbacks for every recommendation leaf"
//! @acp:domain design
//! @acp:layer config
//!
//! Each leaf of a [`Recommendation`](super::Recommendation) resolves through
//! [`Field::resolve`]: the first non-blank candidate wins, otherwise the
//! field's literal default.

use super::types::Recommendation;

/// Leaf fields of a recommendation, keyed by their path in the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProjectName,
    Category,
    PatternName,
    PatternSections,
    CtaPlacement,
    ColorStrategy,
    Conversion,
    StyleName,
    StyleType,
    StyleEffects,
    StyleKeywords,
    StyleBestFor,
    StylePerformance,
    StyleAccessibility,
    ColorPrimary,
    ColorSecondary,
    ColorCta,
    ColorBackground,
    ColorText,
    ColorNotes,
    TypographyHeading,
    TypographyBody,
    TypographyMood,
    TypographyBestFor,
    GoogleFontsUrl,
    CssImport,
    KeyEffects,
    AntiPatterns,
}

impl Field {
    pub const ALL: [Field; 28] = [
        Field::ProjectName,
        Field::Category,
        Field::PatternName,
        Field::PatternSections,
        Field::CtaPlacement,
        Field::ColorStrategy,
        Field::Conversion,
        Field::StyleName,
        Field::StyleType,
        Field::StyleEffects,
        Field::StyleKeywords,
        Field::StyleBestFor,
        Field::StylePerformance,
        Field::StyleAccessibility,
        Field::ColorPrimary,
        Field::ColorSecondary,
        Field::ColorCta,
        Field::ColorBackground,
        Field::ColorText,
        Field::ColorNotes,
        Field::TypographyHeading,
        Field::TypographyBody,
        Field::TypographyMood,
        Field::TypographyBestFor,
        Field::GoogleFontsUrl,
        Field::CssImport,
        Field::KeyEffects,
        Field::AntiPatterns,
    ];

    /// Dotted path of the field in the serialized record
    pub fn path(&self) -> &'static str {
        match self {
            Field::ProjectName => "project_name",
            Field::Category => "category",
            Field::PatternName => "pattern.name",
            Field::PatternSections => "pattern.sections",
            Field::CtaPlacement => "pattern.cta_placement",
            Field::ColorStrategy => "pattern.color_strategy",
            Field::Conversion => "pattern.conversion",
            Field::StyleName => "style.name",
            Field::StyleType => "style.type",
            Field::StyleEffects => "style.effects",
            Field::StyleKeywords => "style.keywords",
            Field::StyleBestFor => "style.best_for",
            Field::StylePerformance => "style.performance",
            Field::StyleAccessibility => "style.accessibility",
            Field::ColorPrimary => "colors.primary",
            Field::ColorSecondary => "colors.secondary",
            Field::ColorCta => "colors.cta",
            Field::ColorBackground => "colors.background",
            Field::ColorText => "colors.text",
            Field::ColorNotes => "colors.notes",
            Field::TypographyHeading => "typography.heading",
            Field::TypographyBody => "typography.body",
            Field::TypographyMood => "typography.mood",
            Field::TypographyBestFor => "typography.best_for",
            Field::GoogleFontsUrl => "typography.google_fonts_url",
            Field::CssImport => "typography.css_import",
            Field::KeyEffects => "key_effects",
            Field::AntiPatterns => "anti_patterns",
        }
    }

    /// Literal used when no upstream source supplies a value.
    ///
    /// Descriptive annotations default to the empty string so presenters
    /// can drop them; identity fields always have a non-empty literal.
    pub fn default_value(&self) -> &'static str {
        match self {
            Field::ProjectName => "PROJECT",
            Field::Category => "General",
            Field::PatternName => "Hero + Features + CTA",
            Field::PatternSections => "Hero > Features > CTA",
            Field::CtaPlacement => "Above fold",
            Field::StyleName => "Minimalism",
            Field::StyleType => "General",
            Field::ColorPrimary => "#2563EB",
            Field::ColorSecondary => "#3B82F6",
            Field::ColorCta => "#F97316",
            Field::ColorBackground => "#F8FAFC",
            Field::ColorText => "#1E293B",
            Field::TypographyHeading => "Inter",
            Field::TypographyBody => "Inter",
            Field::TypographyMood => "Clean",
            Field::KeyEffects => "Subtle hover transitions",
            Field::ColorStrategy
            | Field::Conversion
            | Field::StyleEffects
            | Field::StyleKeywords
            | Field::StyleBestFor
            | Field::StylePerformance
            | Field::StyleAccessibility
            | Field::ColorNotes
            | Field::TypographyBestFor
            | Field::GoogleFontsUrl
            | Field::CssImport
            | Field::AntiPatterns => "",
        }
    }

    /// Whether the field is guaranteed non-empty in every recommendation
    pub fn is_required(&self) -> bool {
        !self.default_value().is_empty()
    }

    /// Current value of this leaf in `rec`; sections are joined with ` > `
    pub fn value(&self, rec: &Recommendation) -> String {
        let text = match self {
            Field::ProjectName => &rec.project_name,
            Field::Category => &rec.category,
            Field::PatternName => &rec.pattern.name,
            Field::PatternSections => return rec.pattern.sections.join(" > "),
            Field::CtaPlacement => &rec.pattern.cta_placement,
            Field::ColorStrategy => &rec.pattern.color_strategy,
            Field::Conversion => &rec.pattern.conversion,
            Field::StyleName => &rec.style.name,
            Field::StyleType => &rec.style.style_type,
            Field::StyleEffects => &rec.style.effects,
            Field::StyleKeywords => &rec.style.keywords,
            Field::StyleBestFor => &rec.style.best_for,
            Field::StylePerformance => &rec.style.performance,
            Field::StyleAccessibility => &rec.style.accessibility,
            Field::ColorPrimary => &rec.colors.primary,
            Field::ColorSecondary => &rec.colors.secondary,
            Field::ColorCta => &rec.colors.cta,
            Field::ColorBackground => &rec.colors.background,
            Field::ColorText => &rec.colors.text,
            Field::ColorNotes => &rec.colors.notes,
            Field::TypographyHeading => &rec.typography.heading,
            Field::TypographyBody => &rec.typography.body,
            Field::TypographyMood => &rec.typography.mood,
            Field::TypographyBestFor => &rec.typography.best_for,
            Field::GoogleFontsUrl => &rec.typography.google_fonts_url,
            Field::CssImport => &rec.typography.css_import,
            Field::KeyEffects => &rec.key_effects,
            Field::AntiPatterns => &rec.anti_patterns,
        };
        text.clone()
    }

    /// Required leaves of `rec` that are blank, by path
    pub fn blank_required(rec: &Recommendation) -> Vec<&'static str> {
        Field::ALL
            .iter()
            .filter(|field| field.is_required() && field.value(rec).trim().is_empty())
            .map(Field::path)
            .collect()
    }

    /// First non-blank candidate (trimmed), or the field default
    pub fn resolve<'a, I>(&self, candidates: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| self.default_value())
            .to_string()
    }
}

/// Split an ordered `A > B > C` section list, dropping blank entries
pub fn split_sections(order: &str) -> Vec<String> {
    order
        .split('>')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_first_non_blank() {
        assert_eq!(Field::ColorPrimary.resolve(["", "  ", "#000000"]), "#000000");
        assert_eq!(Field::ColorPrimary.resolve(["#111111", "#000000"]), "#111111");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Field::ColorPrimary.resolve([""]), "#2563EB");
        assert_eq!(Field::TypographyHeading.resolve(std::iter::empty()), "Inter");
        assert_eq!(Field::AntiPatterns.resolve(["   "]), "");
    }

    #[test]
    fn test_default_sections_are_non_empty() {
        let sections = split_sections(Field::PatternSections.default_value());
        assert_eq!(sections, vec!["Hero", "Features", "CTA"]);
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Field::ALL.iter().map(Field::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Field::ALL.len());
    }

    #[test]
    fn test_value_reads_record_leaves() {
        let mut rec = crate::design::DesignSystemGenerator::with_rules(
            vec![],
            crate::search::CsvSearchEngine::new("/nonexistent"),
            Default::default(),
        )
        .generate("shop", None);
        assert_eq!(Field::ColorCta.value(&rec), "#F97316");
        assert_eq!(Field::PatternSections.value(&rec), "Hero > Features > CTA");
        assert!(Field::blank_required(&rec).is_empty());

        rec.colors.secondary = " ".to_string();
        rec.pattern.sections.clear();
        assert_eq!(
            Field::blank_required(&rec),
            vec!["pattern.sections", "colors.secondary"]
        );
    }

    #[test]
    fn test_split_sections_drops_blanks() {
        assert_eq!(split_sections(" Hero >> Pricing > "), vec!["Hero", "Pricing"]);
    }
}
