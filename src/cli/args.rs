use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Default record file, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "bank_db.json";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "bank_logs.log";

/// Manage bank accounts from an interactive menu
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Manage bank accounts from an interactive menu", long_about = None)]
pub struct CliArgs {
    /// JSON file holding the account records
    #[arg(
        long = "db-file",
        value_name = "PATH",
        default_value = DEFAULT_DB_FILE,
        help = "JSON file holding the account records"
    )]
    pub db_file: PathBuf,

    /// File receiving log output
    #[arg(
        long = "log-file",
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE,
        help = "File receiving log output"
    )]
    pub log_file: PathBuf,

    /// Minimum level written to the log file
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "debug",
        help = "Log level: off, error, warn, info, debug or trace (RUST_LOG overrides)"
    )]
    pub log_level: LevelFilter,

    /// Read plain lines from stdin instead of interactive prompts
    #[arg(long = "plain", help = "Use line-oriented input, e.g. for piped input")]
    pub plain: bool,
}

/// Runtime configuration of the ledger binary
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub log_level: LevelFilter,
    pub plain_console: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: LevelFilter::Debug,
            plain_console: false,
        }
    }
}

impl CliArgs {
    /// Create a LedgerConfig from CLI arguments
    pub fn to_ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            db_path: self.db_file.clone(),
            log_path: self.log_file.clone(),
            log_level: self.log_level,
            plain_console: self.plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();

        assert_eq!(parsed.db_file, PathBuf::from("bank_db.json"));
        assert_eq!(parsed.log_file, PathBuf::from("bank_logs.log"));
        assert_eq!(parsed.log_level, LevelFilter::Debug);
        assert!(!parsed.plain);
    }

    #[rstest]
    #[case::db_file(&["program", "--db-file", "/tmp/accounts.json"], "/tmp/accounts.json", "bank_logs.log")]
    #[case::log_file(&["program", "--log-file", "run.log"], "bank_db.json", "run.log")]
    #[case::both(
        &["program", "--db-file", "a.json", "--log-file", "b.log"],
        "a.json",
        "b.log"
    )]
    fn test_paths(#[case] args: &[&str], #[case] db_file: &str, #[case] log_file: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.db_file, PathBuf::from(db_file));
        assert_eq!(parsed.log_file, PathBuf::from(log_file));
    }

    #[rstest]
    #[case::info("info", LevelFilter::Info)]
    #[case::warn("warn", LevelFilter::Warn)]
    #[case::off("off", LevelFilter::Off)]
    #[case::uppercase("TRACE", LevelFilter::Trace)]
    fn test_log_level(#[case] level: &str, #[case] expected: LevelFilter) {
        let parsed = CliArgs::try_parse_from(["program", "--log-level", level]).unwrap();
        assert_eq!(parsed.log_level, expected);
    }

    #[test]
    fn test_plain_flag_forces_plain_console() {
        let parsed = CliArgs::try_parse_from(["program", "--plain"]).unwrap();
        let config = parsed.to_ledger_config();

        assert!(config.plain_console);
        assert_eq!(config.db_path, LedgerConfig::default().db_path);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[rstest]
    #[case::bad_level(&["program", "--log-level", "loud"])]
    #[case::unknown_flag(&["program", "--strategy", "sync"])]
    #[case::positional(&["program", "extra"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
