//! Store-level compatibility check: can the root node be opened at all?
//!
//! Thinner than `dataset-compat`; no consolidated-metadata concept
//! applies. Exits 0 on success and 0xFF on any open failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use zarrs_compat::check;

/// Check that a Zarr store's root node opens, group or array.
#[derive(Parser)]
#[command(name = "store-compat", version)]
struct Cli {
    /// Path to the store.
    file_path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let outcome = check::check_store_open(&cli.file_path);
    outcome.report();
    outcome.into()
}
