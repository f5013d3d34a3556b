use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::Error;

/// Repository coordinates, parsed from `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub repo: String,
}

impl FromStr for Repository {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self { owner: owner.to_string(), repo: repo.to_string() })
            }
            _ => Err(Error::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// The parts of a webhook event payload the pipeline reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
    #[serde(default)]
    pub head: Option<BranchPayload>,
    #[serde(default)]
    pub base: Option<BranchPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchPayload {
    #[serde(default)]
    pub repo: Option<RepoPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoPayload {
    pub full_name: String,
}

/// Where the run reports to: the repository the workflow runs in and the
/// pull request that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    pub repository: Repository,
    pub number: u64,
    /// `owner/repo` the changes come from; differs from `base_repo` for forks.
    pub head_repo: Option<String>,
    pub base_repo: Option<String>,
}

impl PullRequestContext {
    /// Builds the context from a trigger event, failing when the event carries
    /// no pull request.
    pub fn from_event(
        repository: Repository,
        event_name: &str,
        payload: EventPayload,
    ) -> Result<Self, Error> {
        let pull_request = payload
            .pull_request
            .ok_or_else(|| Error::NotPullRequest { event_name: event_name.to_string() })?;

        let full_name = |branch: Option<BranchPayload>| {
            branch.and_then(|branch| branch.repo).map(|repo| repo.full_name)
        };

        Ok(Self {
            repository,
            number: pull_request.number,
            head_repo: full_name(pull_request.head),
            base_repo: full_name(pull_request.base),
        })
    }

    pub fn is_fork(&self) -> bool {
        matches!((&self.head_repo, &self.base_repo), (Some(head), Some(base)) if head != base)
    }
}
