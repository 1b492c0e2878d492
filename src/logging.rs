//! Log file setup
//!
//! Log records go to a file rather than the terminal so they do not mix
//! with the interactive menu. Each line reads
//! `timestamp | LEVEL | module | message`.

use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Install the global logger writing to `path`
///
/// `level` is the default filter; `RUST_LOG` still overrides it. The file is
/// appended to across runs.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened. Installing a logger
/// twice is ignored.
pub fn init(path: &Path, level: LevelFilter) -> io::Result<()> {
    let file = open_log_file(path)?;

    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} | {} | {} | {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();

    if result.is_err() {
        log::debug!("Logger already installed");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
