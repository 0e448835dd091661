//! Classification and recommendation rule registry.
//!
//! # Design Rationale
//!
//! Every keyword, pattern, and recommendation string the pipeline uses is
//! declared exactly once in this module, as `&'static` tables. The pipeline
//! stages (classifier, recommender, enumerator) are pure interpreters of
//! these tables; they contain no literals of their own. All checks are O(n)
//! scans over tiny tables.
//!
//! # Matching semantics
//!
//! Two different matching modes are in play, and the distinction is
//! deliberate:
//!
//! - [`DOMAIN_RULES`] keywords match by **substring containment** on the
//!   lowercased idea. "learning platform" hits `learn`; "healthy meals"
//!   hits `health`.
//! - [`STACK_RULES`] and [`FEATURE_RULES`] patterns are **word-boundary**
//!   regexes. "email" must NOT trigger the AI rule through its `ai`
//!   substring, so those use `\b(...)\b` alternations.
//!
//! # Adding a New Domain
//!
//! 1. Add a variant to `Domain` in `value_objects.rs`
//! 2. Add a [`DomainRule`] entry at the right priority position
//! 3. Add a `domain_modules` arm
//! 4. Done; classification and enumeration derive from the tables
//!
//! # Adding a New Stack or Feature Rule
//!
//! Add one entry to [`STACK_RULES`] or [`FEATURE_RULES`]. Rule order is
//! semantic: it fixes the order of stack entries and module names in the
//! output.

use regex::Regex;

use crate::domain::value_objects::{Domain, StackCategory};

// ── Domain classification ────────────────────────────────────────────────────

/// A keyword group that classifies an idea into one domain.
#[derive(Debug, Clone, Copy)]
pub struct DomainRule {
    /// The domain this group selects.
    pub domain: Domain,

    /// Lowercase substrings tested against the lowercased idea.
    ///
    /// Stems are intentional: `messag` covers "message", "messaging",
    /// "messages" without regex machinery.
    pub keywords: &'static [&'static str],
}

impl DomainRule {
    /// True when any keyword occurs in `idea`.
    ///
    /// `idea` must already be lowercased; the table itself is never
    /// case-folded.
    pub fn matches(&self, idea: &str) -> bool {
        self.keywords.iter().any(|keyword| idea.contains(keyword))
    }
}

/// Priority-ordered classification table.
///
/// The first rule with any keyword hit wins, so overlapping ideas resolve
/// top to bottom ("a shop for students" is Education, not E-commerce).
/// Ideas matching no rule fall back to [`Domain::WebApplication`]; the
/// fallback carries no keywords and is absent from this table.
pub static DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        domain: Domain::Education,
        keywords: &["education", "student", "learn"],
    },
    DomainRule {
        domain: Domain::Healthcare,
        keywords: &["health", "clinic"],
    },
    DomainRule {
        domain: Domain::Ecommerce,
        keywords: &["shop", "ecom", "commerce"],
    },
    DomainRule {
        domain: Domain::SocialChat,
        keywords: &["chat", "messag", "social"],
    },
];

// ── Stack recommendation ─────────────────────────────────────────────────────

/// Stack entries appended when a workload pattern matches the idea.
#[derive(Debug, Clone, Copy)]
pub struct StackRule {
    /// Short identifier for listings and log events.
    pub name: &'static str,

    /// Word-boundary regex tested against the lowercased idea.
    pub pattern: &'static str,

    /// `(category, entry)` pairs appended in order on a match.
    ///
    /// Per-category order across all matching rules is the order entries
    /// appear in the blueprint; duplicates collapse to first position.
    pub additions: &'static [(StackCategory, &'static str)],
}

impl StackRule {
    /// True when the workload pattern occurs in `idea` (lowercased).
    pub fn matches(&self, idea: &str) -> bool {
        Regex::new(self.pattern).expect("valid regex").is_match(idea)
    }
}

/// Additive stack rules, each tested independently.
///
/// A single idea can trigger several rules; both the AI and the commerce
/// rule recommend Postgres, which the ordered-set dedupe collapses.
pub static STACK_RULES: &[StackRule] = &[
    StackRule {
        name: "ml-workload",
        pattern: r"\b(ai|ml|model|predict)\b",
        additions: &[
            (
                StackCategory::Backend,
                "Python (FastAPI) for ML-heavy components",
            ),
            (StackCategory::Backend, "Node.js as API gateway"),
            (StackCategory::Database, "Postgres"),
            (StackCategory::Auth, "Supabase/Auth0 (optional)"),
        ],
    },
    StackRule {
        name: "commerce",
        pattern: r"\b(ecom|payment|checkout|cart)\b",
        additions: &[
            (
                StackCategory::Backend,
                "Node.js (Express) or Next.js API routes",
            ),
            (StackCategory::Database, "Postgres"),
            (StackCategory::Auth, "Stripe + Auth0 / Supabase"),
            (StackCategory::Hosting, "Vercel + Render"),
        ],
    },
    StackRule {
        name: "realtime",
        pattern: r"\b(chat|realtime|socket)\b",
        additions: &[
            (StackCategory::Backend, "Node.js + Socket.IO (real-time)"),
            (StackCategory::Database, "Redis (pub/sub) + Postgres"),
        ],
    },
];

/// Entries every stack starts from, before any rule runs.
pub static STACK_BASELINE: &[(StackCategory, &str)] = &[
    (StackCategory::Frontend, "Next.js (React)"),
    (StackCategory::Styling, "Tailwind CSS"),
];

/// Fallbacks applied after the rules, only to categories still empty.
///
/// Frontend and styling are always filled by the baseline, so they need no
/// default here.
pub static STACK_DEFAULTS: &[(StackCategory, &str)] = &[
    (StackCategory::Backend, "Node.js (Next.js API routes)"),
    (StackCategory::Database, "SQLite (dev) / Postgres (prod)"),
    (StackCategory::Auth, "JWT-based auth / Supabase"),
    (StackCategory::Hosting, "Vercel (frontend) and serverless APIs"),
];

// ── Module enumeration ───────────────────────────────────────────────────────

/// Modules appended when a feature pattern matches the idea.
#[derive(Debug, Clone, Copy)]
pub struct FeatureRule {
    /// Short identifier for listings and log events.
    pub name: &'static str,

    /// Word-boundary regex tested against the lowercased idea.
    pub pattern: &'static str,

    /// Module names appended in order on a match.
    pub modules: &'static [&'static str],
}

impl FeatureRule {
    /// True when the feature pattern occurs in `idea` (lowercased).
    pub fn matches(&self, idea: &str) -> bool {
        Regex::new(self.pattern).expect("valid regex").is_match(idea)
    }
}

/// Feature rules, each tested independently, in output order.
pub static FEATURE_RULES: &[FeatureRule] = &[
    FeatureRule {
        name: "auth",
        pattern: r"\b(auth|login|signup|register)\b",
        modules: &["Authentication & Authorization"],
    },
    FeatureRule {
        name: "ai",
        pattern: r"\b(ai|ml|model|predict)\b",
        modules: &["AI/ML Integration", "Data Processing Pipeline"],
    },
    FeatureRule {
        name: "notifications",
        pattern: r"\b(notification|email|sms)\b",
        modules: &["Notification Service"],
    },
    FeatureRule {
        name: "search",
        pattern: r"\b(search|filter|sort)\b",
        modules: &["Search & Filtering"],
    },
    FeatureRule {
        name: "uploads",
        pattern: r"\b(upload|file|image)\b",
        modules: &["File Upload & Management"],
    },
    FeatureRule {
        name: "payments",
        pattern: r"\b(payment|stripe|checkout)\b",
        modules: &["Payment Gateway Integration"],
    },
    FeatureRule {
        name: "analytics",
        pattern: r"\b(report|analytics|dashboard)\b",
        modules: &["Analytics & Reporting"],
    },
];

/// Modules every blueprint opens with, in order.
pub static CORE_MODULES: &[&str] = &[
    "User Interface (Frontend)",
    "API Routes & Backend Logic",
    "Database Schema & Models",
];

/// Modules every blueprint closes with, in order.
pub static TRAILING_MODULES: &[&str] = &["Security & Validation", "Deployment Configuration"];

/// The exclusive module block for a classified domain.
///
/// Exactly one block appears per blueprint, directly after
/// [`CORE_MODULES`].
pub const fn domain_modules(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Education => &[
            "Assignment Management",
            "Student Dashboard",
            "Teacher Portal",
            "Progress Tracking",
            "Feedback System",
        ],
        Domain::Ecommerce => &[
            "Product Catalog",
            "Shopping Cart",
            "Payment Processing",
            "Order Management",
            "User Profiles",
        ],
        Domain::Healthcare => &[
            "Patient Management",
            "Appointment Scheduling",
            "Medical Records",
            "Doctor Dashboard",
        ],
        Domain::SocialChat => &[
            "Real-time Messaging",
            "User Profiles",
            "Friend/Connection System",
            "Notification System",
        ],
        Domain::WebApplication => &[
            "User Management",
            "Content Management",
            "Settings & Configuration",
        ],
    }
}

// ── Lookup helpers ───────────────────────────────────────────────────────────

/// Find the classification rule for a domain, if it has one.
///
/// The fallback domain has no rule; everything else does.
pub fn find_domain_rule(domain: Domain) -> Option<&'static DomainRule> {
    DOMAIN_RULES.iter().find(|rule| rule.domain == domain)
}

// ── tests ─────────────────────────────────────────────────────────────────────
