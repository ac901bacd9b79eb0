//! Playbook registry.
//!
//! Holds the canonical, immutable set of playbook definitions keyed by id.
//! The registry is constructed once at startup and handed to the runner;
//! there is no runtime mutation.

use std::collections::HashMap;

use super::{Action, Playbook, Risk, Step};

/// Immutable id -> playbook map.
#[derive(Debug, Clone)]
pub struct PlaybookRegistry {
    playbooks: HashMap<String, Playbook>,
}

impl PlaybookRegistry {
    /// Build a registry from a set of playbooks.
    ///
    /// Rejects duplicate ids; the map key is always the playbook's own id.
    pub fn from_playbooks(playbooks: impl IntoIterator<Item = Playbook>) -> anyhow::Result<Self> {
        let mut map = HashMap::new();
        for playbook in playbooks {
            if playbook.id.is_empty() {
                anyhow::bail!("Playbook id cannot be empty");
            }
            if map.contains_key(&playbook.id) {
                anyhow::bail!("Duplicate playbook id: {}", playbook.id);
            }
            map.insert(playbook.id.clone(), playbook);
        }
        Ok(Self { playbooks: map })
    }

    /// The builtin remediation playbooks shipped with AETHER.
    pub fn builtin() -> Self {
        let playbooks = vec![
            Playbook {
                id: "node_recovery".to_string(),
                trigger: "node_offline".to_string(),
                risk: Risk::Low,
                steps: vec![
                    Step::new(Action::Wait { seconds: 5 })
                        .with_desc("Give the node time to auto-reconnect"),
                    Step::new(Action::RescanNodes).with_desc("Trigger device discovery"),
                    Step::new(Action::CheckNode { verify: "online".to_string() })
                        .with_desc("Query the node's reported state"),
                    Step::new(Action::Suggest {
                        message: "Node still offline. Check power/wiring?".to_string(),
                    })
                    .with_confirm(),
                ],
            },
            Playbook {
                id: "playback_stuck".to_string(),
                trigger: "playback_stuck".to_string(),
                risk: Risk::Low,
                steps: vec![
                    Step::new(Action::GetStatus).with_desc("Snapshot backend state"),
                    Step::new(Action::StopPlayback).with_desc("Force-stop the stuck playback"),
                    Step::new(Action::Suggest {
                        message: "Playback was stuck. Cleared.".to_string(),
                    }),
                ],
            },
            Playbook {
                id: "service_restart".to_string(),
                trigger: "service_down".to_string(),
                risk: Risk::High,
                steps: vec![
                    Step::new(Action::Suggest {
                        message: "Service appears down. Restart?".to_string(),
                    })
                    .with_confirm(),
                    Step::new(Action::RestartService { service: "aether-engine".to_string() })
                        .with_desc("Restart the playback engine"),
                ],
            },
        ];

        // Builtin ids are fixed and distinct
        Self::from_playbooks(playbooks).expect("builtin playbook ids are distinct")
    }

    /// Look up a playbook by id.
    pub fn lookup(&self, id: &str) -> Option<&Playbook> {
        self.playbooks.get(id)
    }

    /// Merge additional playbooks into this registry.
    ///
    /// Ids must not collide with already-registered playbooks.
    pub fn extend(&mut self, playbooks: impl IntoIterator<Item = Playbook>) -> anyhow::Result<()> {
        for playbook in playbooks {
            if playbook.id.is_empty() {
                anyhow::bail!("Playbook id cannot be empty");
            }
            if self.playbooks.contains_key(&playbook.id) {
                anyhow::bail!("Duplicate playbook id: {}", playbook.id);
            }
            self.playbooks.insert(playbook.id.clone(), playbook);
        }
        Ok(())
    }

    /// Iterate registered playbooks (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Playbook> {
        self.playbooks.values()
    }

    /// Number of registered playbooks.
    pub fn len(&self) -> usize {
        self.playbooks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.playbooks.is_empty()
    }
}
