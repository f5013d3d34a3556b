use std::path::Path;

use anyhow::Context;
use gallery_domain::{EventPayload, PullRequestContext, Repository, input_env_name, required_input};
use tracing::debug;

/// Reads action inputs from the `INPUT_*` variables the runner exports.
pub struct ActionInputs<F = fn(&str) -> Option<String>> {
    lookup: F,
}

impl ActionInputs {
    pub fn from_env() -> Self {
        Self { lookup: |key| std::env::var(key).ok() }
    }
}

impl<F: Fn(&str) -> Option<String>> ActionInputs<F> {
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// The trimmed input value, or `None` when it is unset or blank.
    pub fn get(&self, name: &str) -> Option<String> {
        required_input(name, (self.lookup)(&input_env_name(name))).ok()
    }

    pub fn required(&self, name: &str) -> Result<String, gallery_domain::Error> {
        required_input(name, (self.lookup)(&input_env_name(name)))
    }
}

/// Loads the trigger event written by the runner and resolves the pull request
/// it refers to.
pub async fn load_pull_request_context(
    event_path: &Path,
    event_name: &str,
    repository: Repository,
) -> anyhow::Result<PullRequestContext> {
    let raw = tokio::fs::read_to_string(event_path)
        .await
        .with_context(|| format!("Failed to read event payload {}", event_path.display()))?;
    let payload: EventPayload = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse event payload {}", event_path.display()))?;

    let context = PullRequestContext::from_event(repository, event_name, payload)?;
    debug!(
        repository = %context.repository,
        number = context.number,
        head_repo = ?context.head_repo,
        base_repo = ?context.base_repo,
        fork = context.is_fork(),
        "Resolved pull request context"
    );
    Ok(context)
}
