//! The result of a compatibility check and its process exit-code mapping.
//!
//! Checks report outcomes through exit codes so CI can run them across
//! library versions without parsing output. The mapping lives here, apart
//! from any process-exit side effects, so it can be tested in isolation.

use std::process;

/// The store opened and every node's metadata decoded.
pub const EXIT_SUCCESS: u8 = 0;
/// The open failed for any reason; the diagnostic names the error kind.
pub const EXIT_OPEN_FAILURE: u8 = 0xFF;
/// The binary was built without the array library (`zarrs` feature off).
pub const EXIT_MISSING_DEPENDENCY: u8 = 0xFD;

/// Outcome of a single check invocation.
///
/// Exactly one outcome is produced per invocation; the open either fully
/// succeeds or fails before anything else happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed {
        /// Human-readable error message.
        message: String,
        /// Categorical error name, see [`crate::Error::kind`].
        kind: String,
    },
}

impl CheckOutcome {
    pub fn failed(error: &crate::Error) -> Self {
        Self::Failed {
            message: error.to_string(),
            kind: error.kind().to_owned(),
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Passed => EXIT_SUCCESS,
            Self::Failed { .. } => EXIT_OPEN_FAILURE,
        }
    }

    /// Print the failure diagnostic to stdout. Success prints nothing.
    pub fn report(&self) {
        if let Self::Failed { message, kind } = self {
            println!("Failed to open dataset: {message}");
            println!("Error type: {kind}");
        }
    }
}

impl From<CheckOutcome> for process::ExitCode {
    fn from(outcome: CheckOutcome) -> Self {
        Self::from(outcome.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CheckOutcome::Passed.exit_code(), EXIT_SUCCESS);
        let failed = CheckOutcome::failed(&crate::Error::general("nope"));
        assert_eq!(failed.exit_code(), EXIT_OPEN_FAILURE);
    }

    #[test]
    fn failed_carries_kind() {
        let failed = CheckOutcome::failed(&crate::Error::general("nope"));
        let CheckOutcome::Failed { message, kind } = failed else {
            panic!("expected a failure");
        };
        assert_eq!(message, "nope");
        assert_eq!(kind, "General");
    }
}
