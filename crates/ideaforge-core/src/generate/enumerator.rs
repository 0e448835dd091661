//! Module enumeration from idea text and classified domain.

use crate::domain::rules::{domain_modules, CORE_MODULES, FEATURE_RULES, TRAILING_MODULES};
use crate::domain::value_objects::Domain;

/// Enumerate the modules a project built from `idea` should include.
///
/// Output shape is fixed: the three core modules, then the block for
/// `domain` (exactly one block, domains are exclusive), then one entry
/// group per feature rule whose pattern hits (rules are independent,
/// order follows the table), then the two trailing modules. No
/// deduplication; the tables share no wording, so repeats cannot arise.
pub fn enumerate(idea: &str, domain: Domain) -> Vec<String> {
    let lowered = idea.to_lowercase();
    let mut modules: Vec<String> = Vec::new();

    modules.extend(CORE_MODULES.iter().map(|m| m.to_string()));
    modules.extend(domain_modules(domain).iter().map(|m| m.to_string()));

    for rule in FEATURE_RULES {
        if rule.matches(&lowered) {
            tracing::debug!(rule = rule.name, "feature rule fired");
            modules.extend(rule.modules.iter().map(|m| m.to_string()));
        }
    }

    modules.extend(TRAILING_MODULES.iter().map(|m| m.to_string()));
    modules
}
