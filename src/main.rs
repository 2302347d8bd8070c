//! mudctl binary entry point.
//!
//! Exit codes are part of the CLI contract: 0 on success (including
//! `--help` and `--version`), 1 on usage errors, precondition failures,
//! and delegated-command failures.

use std::process;

use clap::error::ErrorKind;

use mudctl::cli::{self, Cli};
use mudctl::ui::output;

fn main() {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version surface as clap "errors"; they keep
            // their zero status. Everything else is a usage error.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = cli::run(cli) {
        output::error(format!("{err:#}"));
        process::exit(1);
    }
}
