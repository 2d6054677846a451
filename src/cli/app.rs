use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::catalog::DEFAULT_CATALOG_PATH;

/// Team Builder: browse the creature catalog and assemble a team of six
#[derive(Parser, Debug)]
#[command(name = "team-builder")]
#[command(version = "0.1.0")]
#[command(about = "Browse a creature catalog with type/generation filters and build a team")]
#[command(
    long_about = "Interactive menu over a creature catalog. Filter the catalog by type and generation, page through what is visible, and keep a team of up to six members."
)]
pub struct Cli {
    /// Catalog CSV file (columns: name, type1, type2, generation, pokedex_number)
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Log level for diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["team-builder"]).unwrap();
        assert_eq!(cli.catalog, PathBuf::from("pokemon.csv"));
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "team-builder",
            "--catalog",
            "data/dex.csv",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.catalog, PathBuf::from("data/dex.csv"));
        assert_eq!(cli.log_level.to_filter_directive(), "debug");
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["team-builder", "--log-level", "loud"]).is_err());
    }
}
