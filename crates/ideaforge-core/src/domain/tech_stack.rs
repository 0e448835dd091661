//! The recommended tech stack.

use serde::Serialize;

use super::ordered_set::OrderedSet;
use super::value_objects::StackCategory;

/// Technology recommendations grouped into the six stack categories.
///
/// Each category is an insertion-ordered set: the recommender appends
/// entries in rule order, and duplicates collapse to their first position.
/// Category access goes through [`StackCategory`] so callers can iterate
/// all six uniformly (see [`TechStack::flattened`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechStack {
    pub frontend: OrderedSet,
    pub styling: OrderedSet,
    pub backend: OrderedSet,
    pub database: OrderedSet,
    pub auth: OrderedSet,
    pub hosting: OrderedSet,
}

impl TechStack {
    /// An entirely empty stack. The recommender seeds the baseline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, category: StackCategory) -> &OrderedSet {
        match category {
            StackCategory::Frontend => &self.frontend,
            StackCategory::Styling => &self.styling,
            StackCategory::Backend => &self.backend,
            StackCategory::Database => &self.database,
            StackCategory::Auth => &self.auth,
            StackCategory::Hosting => &self.hosting,
        }
    }

    pub fn category_mut(&mut self, category: StackCategory) -> &mut OrderedSet {
        match category {
            StackCategory::Frontend => &mut self.frontend,
            StackCategory::Styling => &mut self.styling,
            StackCategory::Backend => &mut self.backend,
            StackCategory::Database => &mut self.database,
            StackCategory::Auth => &mut self.auth,
            StackCategory::Hosting => &mut self.hosting,
        }
    }

    /// Single flat list in category order: frontend, styling, backend,
    /// database, auth, hosting. This is the `tech_stack` field consumers
    /// receive in the blueprint.
    pub fn flattened(&self) -> Vec<String> {
        StackCategory::ALL
            .iter()
            .flat_map(|category| self.category(*category).iter())
            .map(str::to_string)
            .collect()
    }
}
