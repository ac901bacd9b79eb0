//! Playbook file parser.
//!
//! Parses operator-authored YAML playbook files into Playbook structs.

use std::path::Path;

use anyhow::Context;

use super::{Action, Playbook};

/// Parse a playbook from a file.
pub fn parse_playbook(path: &Path) -> anyhow::Result<Playbook> {
    let content = std::fs::read_to_string(path)?;
    parse_playbook_str(&content)
}

/// Parse a playbook from a string.
pub fn parse_playbook_str(content: &str) -> anyhow::Result<Playbook> {
    let playbook: Playbook = serde_yaml::from_str(content)?;
    validate_playbook(&playbook)?;
    Ok(playbook)
}

/// Validate a playbook for common authoring errors.
fn validate_playbook(playbook: &Playbook) -> anyhow::Result<()> {
    if playbook.id.is_empty() {
        anyhow::bail!("Playbook id cannot be empty");
    }

    if playbook.trigger.is_empty() {
        anyhow::bail!("Playbook '{}' has no trigger", playbook.id);
    }

    if playbook.steps.is_empty() {
        anyhow::bail!("Playbook '{}' must have at least one step", playbook.id);
    }

    for (i, step) in playbook.steps.iter().enumerate() {
        match &step.action {
            Action::Suggest { message } if message.is_empty() => {
                anyhow::bail!("Step {} of '{}' has an empty suggestion", i + 1, playbook.id);
            }
            Action::RestartService { service } if service.is_empty() => {
                anyhow::bail!("Step {} of '{}' names no service", i + 1, playbook.id);
            }
            Action::CheckNode { verify } if verify.is_empty() => {
                anyhow::bail!("Step {} of '{}' verifies an empty status", i + 1, playbook.id);
            }
            _ => {}
        }
    }

    Ok(())
}

/// Discover playbook files in a directory.
///
/// The directory itself must be readable; a missing directory is an error,
/// not an empty result. Unparsable files are skipped with a warning so one
/// bad file does not take every custom playbook down with it.
pub fn discover_playbooks(dir: &Path) -> anyhow::Result<Vec<Playbook>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read playbook directory {}", dir.display()))?;

    let mut playbooks = Vec::new();

    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.extension().map_or(false, |e| e == "yaml" || e == "yml") {
            match parse_playbook(&path) {
                Ok(playbook) => playbooks.push(playbook),
                Err(e) => {
                    tracing::warn!(path = ?path, error = %e, "Failed to parse playbook");
                }
            }
        }
    }

    Ok(playbooks)
}
