//! Command implementations.
//!
//! Each submodule owns one subcommand; shared request plumbing lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod new;
pub mod rules;

use ideaforge_core::domain::GenerateRequest;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Build the generation request shared by `generate` and `new`.
///
/// An idea that trims to nothing is refused at the CLI boundary; the core
/// itself accepts it and would fall back to the generic blueprint.
pub(crate) fn request_from_idea(
    idea: &str,
    samples_flag: bool,
    config: &AppConfig,
) -> CliResult<GenerateRequest> {
    let request = GenerateRequest::new(idea).with_samples(samples_flag || config.defaults.samples);
    if request.is_blank() {
        return Err(CliError::InvalidInput {
            message: "the idea is empty".into(),
            source: None,
        });
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_idea_is_rejected() {
        let config = AppConfig::default();
        assert!(matches!(
            request_from_idea("   \n ", false, &config),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn samples_flag_wins_over_config() {
        let config = AppConfig::default();
        let request = request_from_idea("a chat app", true, &config).unwrap();
        assert!(request.include_non_js);
    }

    #[test]
    fn config_default_enables_samples() {
        let mut config = AppConfig::default();
        config.defaults.samples = true;
        let request = request_from_idea("a chat app", false, &config).unwrap();
        assert!(request.include_non_js);
    }

    #[test]
    fn samples_stay_off_without_either_source() {
        let config = AppConfig::default();
        let request = request_from_idea("a chat app", false, &config).unwrap();
        assert!(!request.include_non_js);
    }
}
