//! Domain classification from free-form idea text.

use crate::domain::rules::DOMAIN_RULES;
use crate::domain::value_objects::Domain;

/// Classify `idea` into its product domain.
///
/// Case-insensitive substring containment against the priority-ordered
/// keyword table; the first group with any hit wins. An idea matching
/// multiple groups takes the earliest group's label, and an idea
/// matching none falls back to [`Domain::WebApplication`]. Total: every
/// string classifies, including the empty one.
pub fn classify(idea: &str) -> Domain {
    let lowered = idea.to_lowercase();
    for rule in DOMAIN_RULES {
        if rule.matches(&lowered) {
            tracing::debug!(domain = %rule.domain, "idea classified");
            return rule.domain;
        }
    }
    tracing::debug!(domain = %Domain::WebApplication, "no keyword hit, using fallback");
    Domain::WebApplication
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_select_their_domain() {
        assert_eq!(classify("an education portal"), Domain::Education);
        assert_eq!(classify("clinic booking tool"), Domain::Healthcare);
        assert_eq!(classify("a plant shop"), Domain::Ecommerce);
        assert_eq!(classify("group messaging"), Domain::SocialChat);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("LEARN TO COOK"), Domain::Education);
        assert_eq!(classify("Social network for dogs"), Domain::SocialChat);
    }

    #[test]
    fn substrings_match_inside_words() {
        // Containment, not word boundaries: "healthy" carries "health".
        assert_eq!(classify("healthy meal planner"), Domain::Healthcare);
        assert_eq!(classify("unlearnable facts feed"), Domain::Education);
    }

    #[test]
    fn earlier_group_wins_on_overlap() {
        // "student" (Education) outranks "shop" (E-commerce).
        assert_eq!(classify("a shop for students"), Domain::Education);
        // "health" outranks "chat".
        assert_eq!(classify("health chat line"), Domain::Healthcare);
    }

    #[test]
    fn unmatched_ideas_fall_back() {
        assert_eq!(classify("a recipe box"), Domain::WebApplication);
        assert_eq!(classify(""), Domain::WebApplication);
    }
}
