//! The idea-to-blueprint pipeline.
//!
//! Stages, leaf first: [`classifier`] picks the domain, [`recommender`]
//! assembles the stack, [`enumerator`] lists modules, [`report`] renders
//! the display texts, [`scaffolder`] emits the starter files,
//! [`samples`] adds the optional non-JS material, and [`sanitizer`]
//! filters the merged set. [`Generator`] sequences them.
//!
//! Every stage is a pure function of its inputs; the whole pipeline is
//! total and deterministic, so generation returns a [`Blueprint`]
//! directly rather than a `Result`.

pub mod classifier;
pub mod enumerator;
pub mod recommender;
pub mod report;
pub mod samples;
pub mod sanitizer;
pub mod scaffolder;

use tracing::instrument;

use crate::domain::blueprint::{Blueprint, GenerateRequest};
use crate::domain::value_objects::Domain;

// ── Generator ────────────────────────────────────────────────────────────────

/// Sequences the pipeline stages into one blueprint per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline for `request`.
    ///
    /// The idea is trimmed once here; every stage receives the trimmed
    /// text. Identical requests produce byte-identical blueprints.
    #[instrument(
        skip(self, request),
        fields(idea_len = request.idea.trim().len(), include_non_js = request.include_non_js)
    )]
    pub fn generate(&self, request: &GenerateRequest) -> Blueprint {
        let idea = request.idea.trim();

        let domain = classifier::classify(idea);
        let stack = recommender::recommend(idea);
        let modules = enumerator::enumerate(idea, domain);
        let title = compose_title(domain, idea);
        let summary = compose_summary(idea);

        let mut files = scaffolder::scaffold(&title, &summary, true);
        if request.include_non_js {
            files.merge(samples::sample_files());
        }
        let files = sanitizer::sanitize(files, request.include_non_js);

        tracing::info!(
            %domain,
            modules = modules.len(),
            files = files.len(),
            "blueprint assembled"
        );

        Blueprint {
            title,
            summary,
            logic: report::logic_narrative(domain),
            tech_stack: stack.flattened(),
            modules,
            folder_structure: report::folder_tree().to_string(),
            dfd: report::data_flow().to_string(),
            architecture: report::architecture(&stack),
            files,
        }
    }
}

// ── Title and summary ────────────────────────────────────────────────────────

/// `"{domain} — {excerpt}"` where the excerpt is the idea up to its
/// first period, capped at 48 characters.
fn compose_title(domain: Domain, idea: &str) -> String {
    let first_sentence = idea.split('.').next().unwrap_or("");
    let excerpt: String = first_sentence.chars().take(48).collect();
    format!("{domain} — {excerpt}")
}

fn compose_summary(idea: &str) -> String {
    format!("Generated from: \"{idea}\"")
}
