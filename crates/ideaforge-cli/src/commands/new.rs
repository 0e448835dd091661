//! Implementation of the `ideaforge new` command.
//!
//! Responsibility: run the pipeline, resolve the target directory, and
//! hand the file set to the export service. No blueprint logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use ideaforge_adapters::LocalFilesystem;
use ideaforge_core::application::{ExportOptions, ExportService, default_export_dir};
use ideaforge_core::domain::Blueprint;
use ideaforge_core::generate::Generator;

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `ideaforge new` command.
///
/// Dispatch sequence:
/// 1. Validate the idea and run the pipeline
/// 2. Resolve the target directory (flag, then config, then derived)
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Export via `ExportService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(idea_len = args.idea.trim().len()))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Generate
    let request = super::request_from_idea(&args.idea, args.samples, &config)?;
    let blueprint = Generator::new().generate(&request);

    // 2. Resolve target directory
    let target = resolve_target(&args, &config, &blueprint);

    debug!(
        title = %blueprint.title,
        files = blueprint.files.len(),
        target = %target.display(),
        "blueprint ready"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&blueprint, &target, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Check for existing directory
    if target.exists() && !args.force {
        return Err(CliError::ProjectExists { path: target });
    }

    // 5. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would write {} files to {}",
            blueprint.files.len(),
            target.display(),
        ))?;
        for path in blueprint.files.paths() {
            output.print(&format!("  {path}"))?;
        }
        return Ok(());
    }

    // 6. Export
    let service = ExportService::new(Box::new(LocalFilesystem::new()));
    let options = ExportOptions {
        overwrite: args.force,
    };

    output.header(&format!("Creating '{}'...", target.display()))?;
    info!(target = %target.display(), "export started");

    let report = service
        .export(&blueprint.files, &target, &options)
        .map_err(CliError::Core)?;

    info!(files = report.files_written, "export completed");

    // 7. Success + next steps
    output.success(&format!(
        "{} files written to {}",
        report.files_written,
        target.display(),
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", target.display()))?;
        output.print("  npm install")?;
        output.print("  npm run dev")?;
    }

    Ok(())
}

// ── Target resolution ─────────────────────────────────────────────────────────

/// `--out` beats the configured export directory, which beats the name
/// derived from the blueprint title.
fn resolve_target(args: &NewArgs, config: &AppConfig, blueprint: &Blueprint) -> PathBuf {
    if let Some(out) = &args.out {
        return out.clone();
    }
    if let Some(dir) = &config.defaults.export_dir {
        return PathBuf::from(dir);
    }
    PathBuf::from(default_export_dir(&blueprint.title))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(blueprint: &Blueprint, target: &Path, out: &OutputManager) -> CliResult<()> {
    out.header("Blueprint")?;
    out.key_value("Title:", &blueprint.title)?;
    out.key_value("Modules:", &blueprint.modules.len().to_string())?;
    out.key_value("Files:", &blueprint.files.len().to_string())?;
    out.key_value("Location:", &target.display().to_string())?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ideaforge_core::domain::GenerateRequest;

    fn blueprint_for(idea: &str) -> Blueprint {
        Generator::new().generate(&GenerateRequest::new(idea))
    }

    fn args_for(idea: &str) -> NewArgs {
        NewArgs {
            idea: idea.into(),
            out: None,
            samples: false,
            yes: true,
            force: false,
            dry_run: false,
        }
    }

    #[test]
    fn explicit_out_wins() {
        let mut args = args_for("notes");
        args.out = Some(PathBuf::from("elsewhere"));
        let mut config = AppConfig::default();
        config.defaults.export_dir = Some("configured".into());

        let target = resolve_target(&args, &config, &blueprint_for("notes"));
        assert_eq!(target, PathBuf::from("elsewhere"));
    }

    #[test]
    fn config_export_dir_beats_the_derived_name() {
        let args = args_for("notes");
        let mut config = AppConfig::default();
        config.defaults.export_dir = Some("configured".into());

        let target = resolve_target(&args, &config, &blueprint_for("notes"));
        assert_eq!(target, PathBuf::from("configured"));
    }

    #[test]
    fn default_target_derives_from_the_title() {
        let args = args_for("notes");
        let config = AppConfig::default();

        let target = resolve_target(&args, &config, &blueprint_for("notes"));
        assert_eq!(target, PathBuf::from("Web_Application_—_notes_mvp"));
    }
}
