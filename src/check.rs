//! The compatibility-check contract.
//!
//! Each check attempts one open and maps the result to a [`CheckOutcome`];
//! no error escapes, nothing is retried, and the store is never mutated.

use std::path::Path;

use crate::dataset::{self, Dataset, OpenOptions};
use crate::outcome::CheckOutcome;

/// Parse the CLI `consolidated_metadata` argument.
///
/// Only the exact string `"True"` enables consolidated metadata; every
/// other value, including `"true"`, disables it. Downstream CI passes the
/// string form, so the comparison is deliberately not case-insensitive.
pub fn consolidated_flag_from_arg(arg: &str) -> bool {
    arg == "True"
}

/// Check that the store at `path` opens as a dataset.
pub fn check_dataset_open(path: &Path, consolidated_metadata: bool) -> CheckOutcome {
    let options = OpenOptions {
        consolidated_metadata,
    };
    match Dataset::open(path, &options) {
        Ok(dataset) => {
            log::debug!(
                "dataset check passed: {} ({} nodes)",
                path.display(),
                dataset.node_paths().len()
            );
            CheckOutcome::Passed
        }
        Err(error) => CheckOutcome::failed(&error),
    }
}

/// Check that the root node of the store at `path` opens, group or array.
pub fn check_store_open(path: &Path) -> CheckOutcome {
    match dataset::open_root_node(path) {
        Ok(_) => {
            log::debug!("store check passed: {}", path.display());
            CheckOutcome::Passed
        }
        Err(error) => CheckOutcome::failed(&error),
    }
}

#[cfg(test)]
mod tests {
    use super::consolidated_flag_from_arg;

    #[test]
    fn flag_requires_exact_match() {
        assert!(consolidated_flag_from_arg("True"));
        // lowercase does not count
        assert!(!consolidated_flag_from_arg("true"));
        assert!(!consolidated_flag_from_arg("TRUE"));
        assert!(!consolidated_flag_from_arg("False"));
        assert!(!consolidated_flag_from_arg("1"));
        assert!(!consolidated_flag_from_arg(""));
    }
}
