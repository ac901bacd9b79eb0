//! Playbook schema definitions.
//!
//! Defines the playbook structure shared by the builtin registry and
//! operator-authored YAML files.

use serde::{Deserialize, Serialize};

/// A remediation playbook definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playbook {
    /// Unique identifier (registry key)
    pub id: String,

    /// Symbolic event name that selects this playbook
    pub trigger: String,

    /// Risk level (descriptive only; does not alter execution)
    #[serde(default)]
    pub risk: Risk,

    /// Steps to execute, strictly in order
    pub steps: Vec<Step>,
}

/// Risk classification for a playbook.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    #[default]
    Low,
    High,
}

impl std::fmt::Display for Risk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => f.pad("low"),
            Self::High => f.pad("high"),
        }
    }
}

/// A step in a playbook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// What this step does
    #[serde(flatten)]
    pub action: Action,

    /// Whether the caller must have confirmed before this step executes
    #[serde(default)]
    pub confirm: bool,

    /// Human-readable label (display only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl Step {
    /// Create a step from an action, unconfirmed and unlabeled.
    pub fn new(action: Action) -> Self {
        Self { action, confirm: false, desc: None }
    }

    /// Require confirmation before this step executes.
    pub fn with_confirm(mut self) -> Self {
        self.confirm = true;
        self
    }

    /// Attach a display label.
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }
}

fn default_wait_seconds() -> u64 {
    5
}

/// The closed set of recognized step actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Suspend execution for the given duration
    Wait {
        #[serde(default = "default_wait_seconds")]
        seconds: u64,
    },

    /// Trigger device discovery on the backend
    RescanNodes,

    /// Query node state; `verify` is the status the author expects
    CheckNode { verify: String },

    /// Fetch backend state
    GetStatus,

    /// Force-stop playback
    StopPlayback,

    /// Restart a named backend service
    RestartService { service: String },

    /// Terminal: hand a suggestion back to a human
    Suggest { message: String },
}

impl Action {
    /// The action's wire name, as recorded in step outcomes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wait { .. } => "wait",
            Self::RescanNodes => "rescan_nodes",
            Self::CheckNode { .. } => "check_node",
            Self::GetStatus => "get_status",
            Self::StopPlayback => "stop_playback",
            Self::RestartService { .. } => "restart_service",
            Self::Suggest { .. } => "suggest",
        }
    }
}

/// Outcome recorded for each completed step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepOutcome {
    /// Action name of the completed step
    pub step: String,

    /// Always true; failed steps abort the run instead of being recorded
    pub done: bool,
}

impl StepOutcome {
    pub fn done(action: &Action) -> Self {
        Self { step: action.name().to_string(), done: true }
    }
}

/// Caller-supplied state for one run invocation.
///
/// The runner itself is stateless between invocations; the caller carries
/// the confirmation flag and the resume cursor from one call to the next.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Affirmative consent for confirm-gated steps
    #[serde(default)]
    pub confirmed: bool,

    /// Step index to resume from (from a previous NeedsConfirm outcome)
    #[serde(default)]
    pub resume_from: usize,
}

impl ExecutionContext {
    /// Context for a confirmed re-invocation resuming at the gated step.
    pub fn confirmed_at(resume_from: usize) -> Self {
        Self { confirmed: true, resume_from }
    }
}

/// Result of one run invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Paused at a confirm-gated step; re-invoke with
    /// `ExecutionContext::confirmed_at(resume_index)` to resume
    NeedsConfirm { step: Step, resume_index: usize, results: Vec<StepOutcome> },

    /// Halted at a suggest step with a message for a human
    Suggestion { message: String, results: Vec<StepOutcome> },

    /// Every step completed
    Completed { results: Vec<StepOutcome> },
}

impl RunOutcome {
    /// Step outcomes accumulated before the run ended.
    pub fn results(&self) -> &[StepOutcome] {
        match self {
            Self::NeedsConfirm { results, .. }
            | Self::Suggestion { results, .. }
            | Self::Completed { results } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_playbook_yaml() {
        let yaml = r#"
id: strand_recovery
trigger: strand_offline
risk: high
steps:
  - action: wait
    seconds: 10
    desc: Give the strand time to reconnect

  - action: rescan_nodes

  - action: suggest
    message: "Strand still dark."
    confirm: true
"#;

        let playbook: Playbook = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(playbook.id, "strand_recovery");
        assert_eq!(playbook.trigger, "strand_offline");
        assert_eq!(playbook.risk, Risk::High);
        assert_eq!(playbook.steps.len(), 3);

        assert_eq!(playbook.steps[0].action, Action::Wait { seconds: 10 });
        assert!(!playbook.steps[0].confirm);
        assert_eq!(playbook.steps[1].action, Action::RescanNodes);
        assert!(playbook.steps[2].confirm);
    }

    #[test]
    fn test_wait_seconds_defaults_to_five() {
        let yaml = "action: wait";
        let step: Step = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(step.action, Action::Wait { seconds: 5 });
    }

    #[test]
    fn test_risk_defaults_to_low() {
        let yaml = r"
id: p
trigger: t
steps:
  - action: get_status
";
        let playbook: Playbook = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(playbook.risk, Risk::Low);
    }

    #[test]
    fn test_unrecognized_action_fails() {
        let yaml = "action: reboot_everything";
        let result: Result<Step, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Action::Wait { seconds: 5 }.name(), "wait");
        assert_eq!(Action::RescanNodes.name(), "rescan_nodes");
        assert_eq!(Action::CheckNode { verify: "online".into() }.name(), "check_node");
        assert_eq!(Action::GetStatus.name(), "get_status");
        assert_eq!(Action::StopPlayback.name(), "stop_playback");
        assert_eq!(Action::RestartService { service: "engine".into() }.name(), "restart_service");
        assert_eq!(Action::Suggest { message: "m".into() }.name(), "suggest");
    }

    #[test]
    fn test_step_with_all_fields() {
        let yaml = r#"
action: restart_service
service: aether-engine
confirm: true
desc: Restart the playback engine
"#;

        let step: Step = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(step.action, Action::RestartService { service: "aether-engine".to_string() });
        assert!(step.confirm);
        assert_eq!(step.desc.as_deref(), Some("Restart the playback engine"));
    }
}
