//! crm entry point
//!
//! Parses arguments, runs the command, prints errors to stderr and exits
//! non-zero on failure. Everything else lives in the `cli` module.

use crm::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
