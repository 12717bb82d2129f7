//! @acp:module "Rules Command"
//! @acp:summary "List the reasoning rule table or explain which rule a category resolves to"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::design::{load_rules, RuleMatcher};

/// Options for the rules command
#[derive(Debug, Clone, Default)]
pub struct RulesOptions {
    /// Category to resolve instead of listing the table
    pub category: Option<String>,
    pub json: bool,
}

/// Execute the rules command
pub fn execute_rules(options: RulesOptions, config: &Config) -> Result<()> {
    let matcher = RuleMatcher::new(load_rules(&config.resolved_data_dir()));

    if let Some(category) = options.category {
        let found = matcher.explain(&category);
        if options.json {
            println!("{}", serde_json::to_string_pretty(&found)?);
        } else {
            let name = if found.rule.category.is_empty() {
                "(built-in default)"
            } else {
                found.rule.category.as_str()
            };
            println!(
                "{} {} -> {} [{}]",
                style("→").cyan(),
                category,
                style(name).bold(),
                found.tier
            );
            println!("  Pattern:        {}", found.rule.pattern);
            println!("  Style priority: {}", found.rule.style_priority.join(" + "));
            println!("  Severity:       {}", found.rule.severity);
        }
        return Ok(());
    }

    let rules = matcher.rules();
    if options.json {
        println!("{}", serde_json::to_string_pretty(rules)?);
        return Ok(());
    }

    if rules.is_empty() {
        println!("{} No reasoning rules loaded", style("!").yellow());
        return Ok(());
    }

    println!("Reasoning rules ({}):\n", rules.len());
    for rule in rules {
        println!(
            "  {:30} {:10} {}",
            style(&rule.category).bold(),
            rule.severity,
            rule.style_priority.join(" + ")
        );
    }
    Ok(())
}
