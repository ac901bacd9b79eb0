//! Playbook execution engine.
//!
//! Walks a playbook's step sequence against one execution context and
//! produces exactly one [`RunOutcome`]. The runner holds no per-run state:
//! a paused run is resumed by calling [`PlaybookRunner::run`] again with a
//! confirmed context carrying the resume cursor from the previous outcome.

use std::time::Duration;

use crate::handler::ActionHandler;

use super::{
    Action, ExecutionContext, PlaybookError, PlaybookRegistry, PlaybookResult, RunOutcome,
    StepOutcome,
};

/// Executes playbooks from a registry through an action handler.
pub struct PlaybookRunner<H> {
    registry: PlaybookRegistry,
    handler: H,
}

impl<H: ActionHandler> PlaybookRunner<H> {
    /// Create a runner over a registry and a backend handler.
    pub fn new(registry: PlaybookRegistry, handler: H) -> Self {
        Self { registry, handler }
    }

    /// The registry this runner executes from.
    pub fn registry(&self) -> &PlaybookRegistry {
        &self.registry
    }

    /// Run one playbook invocation.
    ///
    /// Steps execute strictly in declaration order starting at
    /// `ctx.resume_from`. Per step:
    /// 1. a confirm-gated step with no confirmation pauses the run,
    /// 2. a wait step suspends for its duration, then records an outcome,
    /// 3. a suggest step ends the run with its message,
    /// 4. anything else is dispatched to the handler and recorded.
    ///
    /// A failed handler call aborts the remaining sequence.
    pub async fn run(
        &self,
        playbook_id: &str,
        ctx: &ExecutionContext,
    ) -> PlaybookResult<RunOutcome> {
        let playbook = self
            .registry
            .lookup(playbook_id)
            .ok_or_else(|| PlaybookError::UnknownPlaybook(playbook_id.to_string()))?;

        tracing::info!(
            playbook = playbook.id,
            trigger = playbook.trigger,
            resume_from = ctx.resume_from,
            "Running playbook"
        );

        let mut results: Vec<StepOutcome> = Vec::new();

        for (index, step) in playbook.steps.iter().enumerate().skip(ctx.resume_from) {
            if step.confirm && !ctx.confirmed {
                tracing::info!(playbook = playbook.id, index, "Pausing for confirmation");
                return Ok(RunOutcome::NeedsConfirm {
                    step: step.clone(),
                    resume_index: index,
                    results,
                });
            }

            tracing::info!(playbook = playbook.id, step = step.action.name(), index, "Executing step");

            match &step.action {
                Action::Wait { seconds } => {
                    tokio::time::sleep(Duration::from_secs(*seconds)).await;
                    results.push(StepOutcome::done(&step.action));
                }
                Action::Suggest { message } => {
                    return Ok(RunOutcome::Suggestion { message: message.clone(), results });
                }
                action => {
                    if let Err(source) = self.dispatch(action).await {
                        tracing::error!(
                            playbook = playbook.id,
                            step = action.name(),
                            index,
                            error = %source,
                            "Step failed; aborting playbook"
                        );
                        return Err(PlaybookError::StepFailed {
                            playbook: playbook.id.clone(),
                            step: action.name().to_string(),
                            index,
                            results,
                            source,
                        });
                    }
                    results.push(StepOutcome::done(action));
                }
            }
        }

        Ok(RunOutcome::Completed { results })
    }

    /// Dispatch one handler-backed action.
    async fn dispatch(&self, action: &Action) -> anyhow::Result<()> {
        match action {
            Action::RescanNodes => self.handler.rescan_nodes().await,
            Action::CheckNode { verify } => {
                let status = self.handler.check_node(verify).await?;
                // Display-only verification: the sequence stays linear
                // regardless of what the node reports.
                if status != *verify {
                    tracing::warn!(expected = %verify, reported = %status, "Node status mismatch");
                }
                Ok(())
            }
            Action::GetStatus => self.handler.get_status().await.map(|_| ()),
            Action::StopPlayback => self.handler.stop_playback().await,
            Action::RestartService { service } => self.handler.restart_service(service).await,
            Action::Wait { .. } | Action::Suggest { .. } => {
                // Handled inline by the run loop
                Ok(())
            }
        }
    }
}
