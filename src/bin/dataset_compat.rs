//! Dataset-level compatibility check.
//!
//! Exits 0 when the store opens, 0xFF when it does not, and 0xFD when the
//! binary was built without the `zarrs` feature (the CI analogue of the
//! array library being absent from the environment).

use std::process::ExitCode;

#[cfg(feature = "zarrs")]
mod run {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;
    use zarrs_compat::check;

    /// Check that a Zarr store opens as a dataset.
    #[derive(Parser)]
    #[command(name = "dataset-compat", version)]
    struct Cli {
        /// Path to the store.
        file_path: PathBuf,
        /// Whether to require consolidated metadata; only the exact string
        /// "True" enables it.
        consolidated_metadata: String,
    }

    pub fn main() -> ExitCode {
        env_logger::init();
        let cli = Cli::parse();
        let consolidated = check::consolidated_flag_from_arg(&cli.consolidated_metadata);
        let outcome = check::check_dataset_open(&cli.file_path, consolidated);
        outcome.report();
        outcome.into()
    }
}

#[cfg(feature = "zarrs")]
fn main() -> ExitCode {
    run::main()
}

// Without the array library there is nothing to check; exit before any
// argument parsing.
#[cfg(not(feature = "zarrs"))]
fn main() -> ExitCode {
    ExitCode::from(zarrs_compat::outcome::EXIT_MISSING_DEPENDENCY)
}
