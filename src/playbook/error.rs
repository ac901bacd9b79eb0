//! Playbook engine error types.

use thiserror::Error;

use super::StepOutcome;

/// Result type for playbook operations.
pub type PlaybookResult<T> = Result<T, PlaybookError>;

/// Errors that can occur while running a playbook.
#[derive(Debug, Error)]
pub enum PlaybookError {
    /// Requested playbook id is not in the registry.
    #[error("Unknown playbook: {0}")]
    UnknownPlaybook(String),

    /// A step's backend call failed; the remaining sequence was aborted.
    #[error("Step {index} ({step}) of playbook '{playbook}' failed: {source}")]
    StepFailed {
        playbook: String,
        step: String,
        index: usize,
        /// Outcomes accumulated before the failing step
        results: Vec<StepOutcome>,
        #[source]
        source: anyhow::Error,
    },
}
