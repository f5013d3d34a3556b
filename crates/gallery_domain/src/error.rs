use thiserror::Error;

/// Configuration problems detected before any network call is made.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error("{0} is not set; run inside a workflow or pass the matching flag")]
    MissingVariable(&'static str),

    #[error("Invalid repository '{0}', expected 'owner/repo'")]
    InvalidRepository(String),

    #[error(
        "Event '{event_name}' has no pull request in its payload; validation only runs on pull request events"
    )]
    NotPullRequest { event_name: String },
}
