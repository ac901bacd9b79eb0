//! Remediation playbooks.
//!
//! A playbook is a short, flat, pre-defined sequence of steps run in
//! response to a detected condition (node offline, playback stuck, service
//! down). The runner walks the sequence, dispatching backend work through
//! the action-handler seam, pausing at confirm gates, and handing terminal
//! suggestions back to a human.

mod error;
mod parser;
mod registry;
mod runner;
mod schema;

pub use error::{PlaybookError, PlaybookResult};
pub use parser::{discover_playbooks, parse_playbook, parse_playbook_str};
pub use registry::PlaybookRegistry;
pub use runner::PlaybookRunner;
pub use schema::{Action, ExecutionContext, Playbook, Risk, RunOutcome, Step, StepOutcome};
