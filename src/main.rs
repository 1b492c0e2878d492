//! Bank Ledger CLI
//!
//! Interactive menu for managing bank accounts stored in a JSON file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --db-file accounts.json --log-file ledger.log
//! cargo run -- --plain < scripted_input.txt
//! ```
//!
//! # Exit Codes
//!
//! - 0: The operator chose Exit
//! - 1: Start-up failure (log file, unreadable or mismatched record file) or
//!   closed input

use bank_ledger::cli;
use bank_ledger::logging;
use bank_ledger::session::{Console, LineConsole, Session, TerminalConsole};
use bank_ledger::{JsonFileStore, Ledger};
use std::io::{self, IsTerminal};
use std::process;

fn main() {
    let config = cli::parse_args().to_ledger_config();

    if let Err(e) = logging::init(&config.log_path, config.log_level) {
        eprintln!(
            "Error: cannot open log file '{}': {}",
            config.log_path.display(),
            e
        );
        process::exit(1);
    }

    let ledger = match Ledger::open(JsonFileStore::new(&config.db_path)) {
        Ok(ledger) => ledger,
        Err(e) => {
            log::error!("Failed to open ledger: {e}");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Interactive prompts need a terminal on stdin
    let result = if config.plain_console || !io::stdin().is_terminal() {
        run(ledger, LineConsole::new(io::stdin().lock(), io::stdout()))
    } else {
        run(ledger, TerminalConsole::new())
    };

    if let Err(e) = result {
        log::error!("Session ended: {e}");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(ledger: Ledger<JsonFileStore>, console: impl Console) -> io::Result<()> {
    Session::new(ledger, console).run()
}
