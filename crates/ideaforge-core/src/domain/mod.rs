//! Core domain layer for IdeaForge.
//!
//! Pure values and rule tables with no I/O. Everything here is
//! deterministic: the same idea text always produces the same
//! classification, stack, and modules. Filesystem concerns live behind
//! ports in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or clock access
//! - **Immutable values**: domain objects are `Clone + PartialEq`
//! - **Tables over code**: rules live in [`rules`], stages interpret them

pub mod blueprint;
pub mod file_set;
pub mod ordered_set;
pub mod rules;
pub mod tech_stack;
pub mod value_objects;

// Re-exports for convenience
pub use blueprint::{Blueprint, GenerateRequest};
pub use file_set::FileSet;
pub use ordered_set::OrderedSet;
pub use tech_stack::TechStack;
pub use value_objects::{Domain, ParseDomainError, StackCategory};
