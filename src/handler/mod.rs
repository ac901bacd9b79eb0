//! Action handlers.
//!
//! The runner performs no backend work itself; every non-terminal step is
//! dispatched through the [`ActionHandler`] seam. The host application
//! supplies the implementation - in production an HTTP client against the
//! AETHER backend, in tests a recording stub.

use async_trait::async_trait;

mod http;

pub use http::HttpActionHandler;

/// Backend operations a playbook step can invoke.
///
/// Every call is fallible; a failed call aborts the remaining sequence.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Trigger device discovery.
    async fn rescan_nodes(&self) -> anyhow::Result<()>;

    /// Query node state. Returns the backend's reported status string
    /// (e.g. "online"); the runner compares it against the step's
    /// `verify` value for logging only.
    async fn check_node(&self, verify: &str) -> anyhow::Result<String>;

    /// Fetch a snapshot of backend state.
    async fn get_status(&self) -> anyhow::Result<serde_json::Value>;

    /// Force-stop playback.
    async fn stop_playback(&self) -> anyhow::Result<()>;

    /// Restart a named backend service.
    async fn restart_service(&self, service: &str) -> anyhow::Result<()>;
}
