//! Technology stack recommendation from idea text.

use crate::domain::rules::{STACK_BASELINE, STACK_DEFAULTS, STACK_RULES};
use crate::domain::tech_stack::TechStack;

/// Recommend a technology stack for `idea`.
///
/// The stack starts from the frontend/styling baseline, every workload
/// rule whose pattern hits appends its entries, and categories still
/// empty afterwards receive one fixed default. Rules are independent;
/// any subset may fire. The ordered-set categories drop repeated
/// entries, keeping first position. Total: no input fails.
pub fn recommend(idea: &str) -> TechStack {
    let lowered = idea.to_lowercase();
    let mut stack = TechStack::default();

    for (category, entry) in STACK_BASELINE {
        stack.category_mut(*category).push(*entry);
    }

    for rule in STACK_RULES {
        if rule.matches(&lowered) {
            tracing::debug!(rule = rule.name, "stack rule fired");
            for (category, entry) in rule.additions {
                stack.category_mut(*category).push(*entry);
            }
        }
    }

    for (category, entry) in STACK_DEFAULTS {
        if stack.category(*category).is_empty() {
            stack.category_mut(*category).push(*entry);
        }
    }

    stack
}
