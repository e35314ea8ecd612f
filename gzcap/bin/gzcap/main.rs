//! Size-capped gzip utility
//!
//! Compresses or decompresses individual files with a cap on the number of
//! bytes copied per file.

use std::process;

mod opts;

use opts::GzcapOpts;

use gzcap::{format_error_for_stderr, run_cli};

const PROGRAM_NAME: &str = "gzcap";

fn main() -> std::io::Result<()> {
    let opts = GzcapOpts::parse();
    let config = opts.config();

    if let Err(err) = run_cli(opts.files(), &config, PROGRAM_NAME) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }

    Ok(())
}
