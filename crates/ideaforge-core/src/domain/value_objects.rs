//! Domain value objects: Domain and StackCategory.
//!
//! # Design
//!
//! These are pure value types: `Copy`, compared by value, no identity.
//! They hold NO classification logic. The keyword tables that decide which
//! domain an idea belongs to live in `rules.rs`. This file's only job is to
//! define the types, their display labels, and their `FromStr` parsers.
//!
//! The display labels are part of the output contract: they appear verbatim
//! in blueprint titles and logic narratives, so changing one changes every
//! generated artifact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ── Domain ───────────────────────────────────────────────────────────────────

/// The application category an idea is classified into.
///
/// To add a new domain: add a variant here, then add a `DomainRule` and a
/// module block in `rules.rs`. No other files change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Education,
    Healthcare,
    #[serde(rename = "E-commerce")]
    Ecommerce,
    #[serde(rename = "Social/Chat")]
    SocialChat,
    #[serde(rename = "Web Application")]
    WebApplication,
}

impl Domain {
    /// The label used in titles, narratives, and serialized output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Healthcare => "Healthcare",
            Self::Ecommerce => "E-commerce",
            Self::SocialChat => "Social/Chat",
            Self::WebApplication => "Web Application",
        }
    }

    /// All domains, fallback last.
    pub const fn all() -> &'static [Domain] {
        &[
            Self::Education,
            Self::Healthcare,
            Self::Ecommerce,
            Self::SocialChat,
            Self::WebApplication,
        ]
    }

    /// `true` for the catch-all domain that ideas fall back to when no
    /// keyword group matches.
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::WebApplication)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown domain: {0}")]
pub struct ParseDomainError(pub String);

impl FromStr for Domain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "education" => Ok(Self::Education),
            "healthcare" | "health" => Ok(Self::Healthcare),
            "e-commerce" | "ecommerce" | "commerce" => Ok(Self::Ecommerce),
            "social/chat" | "social" | "chat" | "socialchat" => Ok(Self::SocialChat),
            "web application" | "web" | "webapp" | "generic" => Ok(Self::WebApplication),
            other => Err(ParseDomainError(other.to_string())),
        }
    }
}

// ── StackCategory ────────────────────────────────────────────────────────────

/// One of the six tech stack categories.
///
/// `ALL` fixes the order used when flattening a stack into a single list,
/// and the order of the architecture overview lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackCategory {
    Frontend,
    Styling,
    Backend,
    Database,
    Auth,
    Hosting,
}

impl StackCategory {
    /// All categories in flatten order.
    pub const ALL: &'static [StackCategory] = &[
        Self::Frontend,
        Self::Styling,
        Self::Backend,
        Self::Database,
        Self::Auth,
        Self::Hosting,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Styling => "styling",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Auth => "auth",
            Self::Hosting => "hosting",
        }
    }
}

impl fmt::Display for StackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
