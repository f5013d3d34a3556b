use crate::{ChangedFile, PullRequestContext, ValidationResult};

/// Read and comment access to the pull request that triggered the run.
#[async_trait::async_trait]
pub trait PullRequestService: Send + Sync {
    /// Every file changed by the pull request, across all result pages.
    async fn list_files(&self, context: &PullRequestContext) -> anyhow::Result<Vec<ChangedFile>>;

    /// The decoded text of a changed file.
    async fn fetch_content(&self, file: &ChangedFile) -> anyhow::Result<String>;

    async fn create_comment(&self, context: &PullRequestContext, body: &str) -> anyhow::Result<()>;
}

/// Remote service that checks a sample's content.
#[async_trait::async_trait]
pub trait ValidatorService: Send + Sync {
    async fn validate(&self, content: &str) -> anyhow::Result<ValidationResult>;
}
