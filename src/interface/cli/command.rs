//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::migration::{FailureMode, RunOptions};

#[derive(Debug, Parser)]
#[command(name = "envpilot")]
#[command(about = "Migrate filtered .env variables into deployment platform environments")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source env file (default: .env.local or config defaults.source_path)
    source: Option<PathBuf>,

    /// Print what would be provisioned, do not invoke the platform CLI
    #[arg(long)]
    dry_run: bool,

    /// How provisioning failures are handled: ignore, best-effort, fail-fast
    #[arg(long, value_name = "MODE")]
    failure_mode: Option<String>,

    /// Allowed key prefix (repeatable, replaces configured list)
    #[arg(long = "allow", value_name = "PREFIX")]
    allow_prefixes: Vec<String>,

    /// Blocked key substring (repeatable, replaces configured list)
    #[arg(long = "block", value_name = "SUBSTRING")]
    block_substrings: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and provisioner command availability
    Config,
}

#[derive(Debug)]
pub enum CliAction {
    InspectConfig,
    Migrate(RunOptions),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        if let Some(Commands::Config) = self.command {
            return Ok(CliAction::InspectConfig);
        }

        let failure_mode = match self.failure_mode.as_deref() {
            None => None,
            Some(raw) => Some(FailureMode::parse(raw).ok_or_else(|| {
                format!("unknown failure mode '{raw}' (expected ignore, best-effort, fail-fast)")
            })?),
        };

        Ok(CliAction::Migrate(RunOptions {
            source_path: self.source,
            dry_run: self.dry_run,
            failure_mode,
            allow_prefixes: self.allow_prefixes,
            block_substrings: self.block_substrings,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> Result<CliAction, String> {
        Cli::try_parse_from(args).unwrap().into_action()
    }

    #[test]
    fn bare_invocation_uses_configured_defaults() {
        let Ok(CliAction::Migrate(options)) = action(&["envpilot"]) else {
            panic!("expected migrate action");
        };
        assert!(options.source_path.is_none());
        assert!(!options.dry_run);
        assert!(options.failure_mode.is_none());
        assert!(options.allow_prefixes.is_empty());
        assert!(options.block_substrings.is_empty());
    }

    #[test]
    fn flags_map_onto_run_options() {
        let Ok(CliAction::Migrate(options)) = action(&[
            "envpilot",
            ".env.production",
            "--dry-run",
            "--failure-mode",
            "fail-fast",
            "--allow",
            "APP_",
            "--allow",
            "STRIPE",
            "--block",
            "TEST",
        ]) else {
            panic!("expected migrate action");
        };
        assert_eq!(options.source_path, Some(PathBuf::from(".env.production")));
        assert!(options.dry_run);
        assert_eq!(options.failure_mode, Some(FailureMode::FailFast));
        assert_eq!(options.allow_prefixes, ["APP_", "STRIPE"]);
        assert_eq!(options.block_substrings, ["TEST"]);
    }

    #[test]
    fn config_subcommand_selects_inspection() {
        assert!(matches!(
            action(&["envpilot", "config"]),
            Ok(CliAction::InspectConfig)
        ));
    }

    #[test]
    fn unknown_failure_mode_is_rejected() {
        let err = action(&["envpilot", "--failure-mode", "retry"]).unwrap_err();
        assert!(err.contains("unknown failure mode 'retry'"));
    }
}
