use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Parser, Subcommand, ValueEnum};
use crm_access_core::{ObjectType, PermissionAction};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn log_level_parser() -> impl TypedValueParser<Value = LevelFilter> {
    PossibleValuesParser::new(LOG_LEVELS).try_map(|level| level.parse::<LevelFilter>())
}

/// Output format for matrix and level reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Output format for the effective configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConfigFormat {
    /// TOML, as written in the config file
    #[default]
    Toml,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser)]
#[command(name = "crm-access")]
#[command(about = "crm-access - inspect the signed-in user's CRM permission matrix")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level for crm-access itself; overrides `logging.level` from config
    #[arg(short = 'l', long, global = true, value_parser = log_level_parser())]
    pub log_level: Option<LevelFilter>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/crm-access/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// CRM web app origin (overrides config file and environment)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and print the full permission matrix
    Matrix {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Check one (object, action) pair; exits 1 when denied
    Check {
        /// accounts, contacts, opportunities or activities
        object: ObjectType,

        /// create, read, edit or delete
        action: PermissionAction,
    },

    /// Print the permission level badge and accessible objects
    Level {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the effective configuration
    Config {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: ConfigFormat,
    },
}

impl Cli {
    /// Log level requested on the command line, if any.
    pub fn requested_level(&self) -> Option<LevelFilter> {
        if self.verbose {
            Some(LevelFilter::DEBUG)
        } else {
            self.log_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_arguments() {
        let cli = Cli::parse_from(["crm-access", "check", "opportunity", "view"]);
        match cli.command {
            Commands::Check { object, action } => {
                assert_eq!(object, ObjectType::Opportunities);
                assert_eq!(action, PermissionAction::Read);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn rejects_unknown_object() {
        assert!(Cli::try_parse_from(["crm-access", "check", "leads", "read"]).is_err());
    }

    #[test]
    fn parses_log_level() {
        let cli = Cli::parse_from(["crm-access", "--log-level", "trace", "config"]);
        assert_eq!(cli.requested_level(), Some(LevelFilter::TRACE));

        let cli = Cli::parse_from(["crm-access", "config"]);
        assert_eq!(cli.requested_level(), None);
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["crm-access", "--log-level", "loud", "config"]).is_err());
    }

    #[test]
    fn verbose_wins_over_log_level() {
        let cli = Cli::parse_from(["crm-access", "-v", "--log-level", "error", "level"]);
        assert_eq!(cli.requested_level(), Some(LevelFilter::DEBUG));
    }
}
