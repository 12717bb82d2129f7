//! @acp:module "Recommendation Presenter"
//! @acp:summary "Render a recommendation as a box report, Markdown or JSON"
//! @acp:domain design
//! @acp:layer output

use console::{measure_text_width, pad_str, Alignment};

use crate::error::{Result, UiProError};

use super::types::Recommendation;

/// Default column width of the box report
pub const BOX_WIDTH: usize = 90;

const CSS_IMPORT_PREVIEW: usize = 70;

/// Pre-delivery reminders, rendered verbatim in every report
pub const CHECKLIST: [&str; 7] = [
    "No emojis as icons (use SVG: Heroicons/Lucide)",
    "cursor-pointer on all clickable elements",
    "Hover states with smooth transitions (150-300ms)",
    "Light mode: text contrast 4.5:1 minimum",
    "Focus states visible for keyboard nav",
    "prefers-reduced-motion respected",
    "Responsive: 375px, 768px, 1024px, 1440px",
];

/// Output format for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Ascii,
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = UiProError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" | "box" | "text" => Ok(OutputFormat::Ascii),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UiProError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render in the requested format
pub fn render(rec: &Recommendation, format: OutputFormat, width: usize) -> Result<String> {
    match format {
        OutputFormat::Ascii => Ok(to_box_report(rec, width)),
        OutputFormat::Markdown => Ok(to_markdown(rec)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rec)?),
    }
}

/// Greedy word wrap; each line starts with `prefix` and stays within
/// `width - 2` columns unless a single word is longer.
pub fn wrap_text(text: &str, prefix: &str, width: usize) -> Vec<String> {
    let limit = width.saturating_sub(2);
    let mut lines = Vec::new();
    let mut current = prefix.to_string();

    for word in text.split_whitespace() {
        let fits = measure_text_width(&current) + measure_text_width(word) + 1 <= limit;
        if fits || current == prefix {
            if current != prefix {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, format!("{}{}", prefix, word)));
        }
    }
    if current != prefix {
        lines.push(current);
    }
    lines
}

/// Box report writer: every content line is padded to `width` and closed with `|`
struct BoxWriter {
    width: usize,
    lines: Vec<String>,
}

impl BoxWriter {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
        }
    }

    fn border(&mut self) {
        self.lines
            .push(format!("+{}+", "-".repeat(self.width.saturating_sub(1))));
    }

    fn line(&mut self, content: &str) {
        let padded = pad_str(content, self.width, Alignment::Left, None);
        self.lines.push(format!("{}|", padded));
    }

    fn blank(&mut self) {
        self.line("|");
    }

    fn wrapped(&mut self, text: &str) {
        for line in wrap_text(text, "|     ", self.width) {
            self.line(&line);
        }
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Fixed-width plain text report
pub fn to_box_report(rec: &Recommendation, width: usize) -> String {
    let mut out = BoxWriter::new(width);
    let pattern = &rec.pattern;
    let style = &rec.style;
    let colors = &rec.colors;
    let typography = &rec.typography;

    out.border();
    out.line(&format!(
        "|  TARGET: {} - RECOMMENDED DESIGN SYSTEM",
        rec.project_name
    ));
    out.border();
    out.blank();

    out.line(&format!("|  PATTERN: {}", pattern.name));
    if !pattern.conversion.is_empty() {
        out.line(&format!("|     Conversion: {}", pattern.conversion));
    }
    if !pattern.cta_placement.is_empty() {
        out.line(&format!("|     CTA: {}", pattern.cta_placement));
    }
    out.line("|     Sections:");
    for (i, section) in pattern.sections.iter().enumerate() {
        out.line(&format!("|       {}. {}", i + 1, section));
    }
    out.blank();

    out.line(&format!("|  STYLE: {}", style.name));
    if !style.keywords.is_empty() {
        out.wrapped(&format!("Keywords: {}", style.keywords));
    }
    if !style.best_for.is_empty() {
        out.wrapped(&format!("Best For: {}", style.best_for));
    }
    if !style.performance.is_empty() || !style.accessibility.is_empty() {
        out.line(&format!(
            "|     Performance: {} | Accessibility: {}",
            style.performance, style.accessibility
        ));
    }
    out.blank();

    out.line("|  COLORS:");
    out.line(&format!("|     Primary:    {}", colors.primary));
    out.line(&format!("|     Secondary:  {}", colors.secondary));
    out.line(&format!("|     CTA:        {}", colors.cta));
    out.line(&format!("|     Background: {}", colors.background));
    out.line(&format!("|     Text:       {}", colors.text));
    if !colors.notes.is_empty() {
        out.wrapped(&format!("Notes: {}", colors.notes));
    }
    out.blank();

    out.line(&format!(
        "|  TYPOGRAPHY: {} / {}",
        typography.heading, typography.body
    ));
    if !typography.mood.is_empty() {
        out.wrapped(&format!("Mood: {}", typography.mood));
    }
    if !typography.best_for.is_empty() {
        out.wrapped(&format!("Best For: {}", typography.best_for));
    }
    if !typography.google_fonts_url.is_empty() {
        out.line(&format!("|     Google Fonts: {}", typography.google_fonts_url));
    }
    if !typography.css_import.is_empty() {
        let preview: String = typography.css_import.chars().take(CSS_IMPORT_PREVIEW).collect();
        out.line(&format!("|     CSS Import: {}...", preview));
    }
    out.blank();

    if !rec.key_effects.is_empty() {
        out.line("|  KEY EFFECTS:");
        out.wrapped(&rec.key_effects);
        out.blank();
    }

    if !rec.anti_patterns.is_empty() {
        out.line("|  AVOID (Anti-patterns):");
        out.wrapped(&rec.anti_patterns);
        out.blank();
    }

    out.line("|  PRE-DELIVERY CHECKLIST:");
    for item in CHECKLIST {
        out.line(&format!("|     [ ] {}", item));
    }
    out.blank();
    out.border();

    out.finish()
}

/// Markdown report
pub fn to_markdown(rec: &Recommendation) -> String {
    let pattern = &rec.pattern;
    let style = &rec.style;
    let colors = &rec.colors;
    let typography = &rec.typography;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## Design System: {}", rec.project_name));
    lines.push(String::new());

    lines.push("### Pattern".to_string());
    lines.push(format!("- **Name:** {}", pattern.name));
    if !pattern.conversion.is_empty() {
        lines.push(format!("- **Conversion Focus:** {}", pattern.conversion));
    }
    if !pattern.cta_placement.is_empty() {
        lines.push(format!("- **CTA Placement:** {}", pattern.cta_placement));
    }
    if !pattern.color_strategy.is_empty() {
        lines.push(format!("- **Color Strategy:** {}", pattern.color_strategy));
    }
    lines.push(format!("- **Sections:** {}", pattern.sections.join(" > ")));
    lines.push(String::new());

    lines.push("### Style".to_string());
    lines.push(format!("- **Name:** {}", style.name));
    if !style.keywords.is_empty() {
        lines.push(format!("- **Keywords:** {}", style.keywords));
    }
    if !style.best_for.is_empty() {
        lines.push(format!("- **Best For:** {}", style.best_for));
    }
    if !style.performance.is_empty() || !style.accessibility.is_empty() {
        lines.push(format!(
            "- **Performance:** {} | **Accessibility:** {}",
            style.performance, style.accessibility
        ));
    }
    lines.push(String::new());

    lines.push("### Colors".to_string());
    lines.push("| Role | Hex |".to_string());
    lines.push("|------|-----|".to_string());
    for (role, hex) in [
        ("Primary", &colors.primary),
        ("Secondary", &colors.secondary),
        ("CTA", &colors.cta),
        ("Background", &colors.background),
        ("Text", &colors.text),
    ] {
        lines.push(format!("| {} | {} |", role, hex));
    }
    if !colors.notes.is_empty() {
        lines.push(String::new());
        lines.push(format!("*Notes: {}*", colors.notes));
    }
    lines.push(String::new());

    lines.push("### Typography".to_string());
    lines.push(format!("- **Heading:** {}", typography.heading));
    lines.push(format!("- **Body:** {}", typography.body));
    if !typography.mood.is_empty() {
        lines.push(format!("- **Mood:** {}", typography.mood));
    }
    if !typography.best_for.is_empty() {
        lines.push(format!("- **Best For:** {}", typography.best_for));
    }
    if !typography.google_fonts_url.is_empty() {
        lines.push(format!("- **Google Fonts:** {}", typography.google_fonts_url));
    }
    if !typography.css_import.is_empty() {
        lines.push("- **CSS Import:**".to_string());
        lines.push("```css".to_string());
        lines.push(typography.css_import.clone());
        lines.push("```".to_string());
    }
    lines.push(String::new());

    if !rec.key_effects.is_empty() {
        lines.push("### Key Effects".to_string());
        lines.push(rec.key_effects.clone());
        lines.push(String::new());
    }

    if !rec.anti_patterns.is_empty() {
        lines.push("### Avoid (Anti-patterns)".to_string());
        for item in rec.anti_patterns.split(" + ") {
            lines.push(format!("- {}", item.trim()));
        }
        lines.push(String::new());
    }

    lines.push("### Pre-Delivery Checklist".to_string());
    for item in CHECKLIST {
        lines.push(format!("- [ ] {}", item));
    }
    lines.push(String::new());

    lines.join("\n")
}
