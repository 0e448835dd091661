//! Implementation of the `ideaforge generate` command.
//!
//! Responsibility: run the pipeline and present the blueprint. No
//! generation logic lives here.

use tracing::{debug, instrument};

use ideaforge_core::domain::Blueprint;
use ideaforge_core::generate::Generator;

use crate::{
    cli::{GenerateArgs, ReportFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `ideaforge generate` command.
#[instrument(skip_all, fields(idea_len = args.idea.trim().len(), format = ?args.format))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = super::request_from_idea(&args.idea, args.samples, &config)?;
    let blueprint = Generator::new().generate(&request);

    debug!(
        title = %blueprint.title,
        modules = blueprint.modules.len(),
        files = blueprint.files.len(),
        "blueprint generated"
    );

    match args.format {
        ReportFormat::Json => {
            // Serialised straight to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY
            // pipes and under --quiet).
            let json =
                serde_json::to_string_pretty(&blueprint).expect("blueprint serializes to JSON");
            println!("{json}");
        }
        ReportFormat::Report => print_report(&blueprint, &output)?,
    }

    Ok(())
}

/// Render the human-readable blueprint report.
///
/// The architecture, data-flow, and folder-tree fields carry their own
/// heading lines, so they print verbatim.
fn print_report(blueprint: &Blueprint, output: &OutputManager) -> CliResult<()> {
    output.header(&blueprint.title)?;
    output.print(&blueprint.summary)?;
    output.print("")?;

    output.header("Tech stack")?;
    for entry in &blueprint.tech_stack {
        output.print(&format!("  • {entry}"))?;
    }
    output.print("")?;

    output.header("Modules")?;
    for (index, module) in blueprint.modules.iter().enumerate() {
        output.print(&format!("  {:>2}. {module}", index + 1))?;
    }
    output.print("")?;

    output.header("Logic")?;
    for line in blueprint.logic.lines() {
        output.print(&format!("  {line}"))?;
    }
    output.print("")?;

    for line in blueprint.architecture.lines() {
        output.print(line)?;
    }
    output.print("")?;

    for line in blueprint.dfd.lines() {
        output.print(line)?;
    }
    output.print("")?;

    output.header("Folder structure")?;
    for line in blueprint.folder_structure.trim_matches('\n').lines() {
        output.print(line)?;
    }
    output.print("")?;

    output.info(&format!(
        "{} starter files (run `ideaforge new` to write them)",
        blueprint.files.len()
    ))?;

    Ok(())
}
