//! # aether-remedy
//!
//! Automated remediation playbooks for the AETHER lighting control backend.
//!
//! When diagnostics detect a condition (a node drops off the network,
//! playback wedges, a service dies), the matching playbook walks a short,
//! ordered sequence of remediation steps: waits, rescans, status checks,
//! service restarts. Risky steps pause behind a confirmation gate until a
//! human approves; terminal suggestion steps hand control back to the
//! operator with a message.
//!
//! ## Quick start
//!
//! ```no_run
//! use aether_remedy::{
//!     ExecutionContext, HttpActionHandler, PlaybookRegistry, PlaybookRunner,
//! };
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let handler = HttpActionHandler::new("http://localhost:9000");
//! let runner = PlaybookRunner::new(PlaybookRegistry::builtin(), handler);
//!
//! let outcome = runner.run("node_recovery", &ExecutionContext::default()).await?;
//! println!("{}", serde_json::to_string_pretty(&outcome)?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]

pub mod handler;
pub mod playbook;

pub use handler::{ActionHandler, HttpActionHandler};
pub use playbook::{
    Action, ExecutionContext, Playbook, PlaybookError, PlaybookRegistry, PlaybookResult,
    PlaybookRunner, Risk, RunOutcome, Step, StepOutcome,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "aether-remedy";
