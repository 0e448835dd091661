//! Implementation of the `ideaforge rules` command.
//!
//! Prints the classification and recommendation registry so users can see
//! which keywords and patterns drive a blueprint.

use ideaforge_core::domain::Domain;
use ideaforge_core::domain::rules::{
    DOMAIN_RULES, FEATURE_RULES, STACK_RULES, domain_modules, find_domain_rule,
};

use crate::{
    cli::{RulesArgs, RulesFormat},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `ideaforge rules` command.
pub fn execute(args: RulesArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        RulesFormat::Table => print_table(&output),
        RulesFormat::Json => {
            // Serialised straight to stdout (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes and under
            // --quiet).
            let json =
                serde_json::to_string_pretty(&registry_json()).expect("registry serializes");
            println!("{json}");
            Ok(())
        }
    }
}

fn print_table(output: &OutputManager) -> CliResult<()> {
    output.header("Domains:")?;
    for rule in DOMAIN_RULES {
        output.print(&format!(
            "  {:<16} {}",
            rule.domain.as_str(),
            rule.keywords.join(", ")
        ))?;
    }
    for domain in Domain::all().iter().filter(|d| d.is_fallback()) {
        output.print(&format!("  {:<16} (fallback)", domain.as_str()))?;
    }

    output.print("")?;
    output.header("Stack rules:")?;
    for rule in STACK_RULES {
        output.print(&format!("  {:<16} {}", rule.name, rule.pattern))?;
        for (category, entry) in rule.additions {
            output.print(&format!("    {:<10} {entry}", category.as_str()))?;
        }
    }

    output.print("")?;
    output.header("Feature rules:")?;
    for rule in FEATURE_RULES {
        output.print(&format!("  {:<16} {}", rule.name, rule.pattern))?;
        for module in rule.modules {
            output.print(&format!("    adds: {module}"))?;
        }
    }

    output.print("")?;
    output.header("Module blocks:")?;
    for domain in Domain::all() {
        output.print(&format!(
            "  {:<16} {}",
            domain.as_str(),
            domain_modules(*domain).join(", ")
        ))?;
    }

    Ok(())
}

/// The whole registry as one JSON object.
fn registry_json() -> serde_json::Value {
    let domains: Vec<_> = Domain::all()
        .iter()
        .map(|domain| {
            let keywords = find_domain_rule(*domain)
                .map(|rule| rule.keywords)
                .unwrap_or(&[]);
            serde_json::json!({
                "domain": domain.as_str(),
                "keywords": keywords,
                "fallback": domain.is_fallback(),
                "modules": domain_modules(*domain),
            })
        })
        .collect();

    let stack_rules: Vec<_> = STACK_RULES
        .iter()
        .map(|rule| {
            let additions: Vec<_> = rule
                .additions
                .iter()
                .map(|(category, entry)| {
                    serde_json::json!({ "category": category.as_str(), "entry": entry })
                })
                .collect();
            serde_json::json!({
                "name": rule.name,
                "pattern": rule.pattern,
                "additions": additions,
            })
        })
        .collect();

    let feature_rules: Vec<_> = FEATURE_RULES
        .iter()
        .map(|rule| {
            serde_json::json!({
                "name": rule.name,
                "pattern": rule.pattern,
                "modules": rule.modules,
            })
        })
        .collect();

    serde_json::json!({
        "domains": domains,
        "stack_rules": stack_rules,
        "feature_rules": feature_rules,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_listing_covers_every_domain() {
        let value = registry_json();
        let domains = value["domains"].as_array().unwrap();
        assert_eq!(domains.len(), Domain::all().len());

        let education = &domains[0];
        assert_eq!(education["domain"], "Education");
        assert!(education["keywords"]
            .as_array()
            .unwrap()
            .iter()
            .any(|k| k == "student"));
    }

    #[test]
    fn json_listing_marks_the_fallback() {
        let value = registry_json();
        let fallbacks: Vec<_> = value["domains"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|d| d["fallback"] == true)
            .collect();
        assert_eq!(fallbacks.len(), 1);
        assert_eq!(fallbacks[0]["domain"], "Web Application");
        assert!(fallbacks[0]["keywords"].as_array().unwrap().is_empty());
    }

    #[test]
    fn json_listing_carries_the_rule_patterns() {
        let value = registry_json();
        let stack_rules = value["stack_rules"].as_array().unwrap();
        assert_eq!(stack_rules.len(), STACK_RULES.len());
        assert!(stack_rules.iter().any(|r| r["name"] == "ml-workload"));

        let feature_rules = value["feature_rules"].as_array().unwrap();
        assert_eq!(feature_rules.len(), FEATURE_RULES.len());
    }
}
