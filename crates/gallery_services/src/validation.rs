use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::join_all;
use gallery_domain::{
    ChangedFile, FailureRecord, FileOutcome, INVALID_SAMPLES_MESSAGE, PullRequestContext,
    PullRequestService, RunOutcome, SAMPLE_SUFFIX, ValidationResult, ValidatorService,
    filter_by_suffix,
};
use tracing::{debug, info, warn};

use crate::report::{CommentStatus, PullRequestCommentator};

/// Per-file outcomes of one run, partitioned after every file has finished,
/// together with what became of the failure comment.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub valid: Vec<String>,
    pub failures: Vec<FailureRecord>,
    pub errors: Vec<(String, anyhow::Error)>,
    pub comment: CommentStatus,
}

impl RunSummary {
    /// The first transport error wins; otherwise any reported failure fails
    /// the run.
    pub fn into_outcome(self) -> Result<RunOutcome> {
        if let Some((_, error)) = self.errors.into_iter().next() {
            return Err(error);
        }
        Ok(match self.comment {
            CommentStatus::NotNeeded => RunOutcome::Passed,
            CommentStatus::Posted | CommentStatus::Logged => {
                RunOutcome::failed(INVALID_SAMPLES_MESSAGE)
            }
        })
    }
}

impl From<Vec<FileOutcome>> for RunSummary {
    fn from(outcomes: Vec<FileOutcome>) -> Self {
        outcomes.into_iter().fold(Self::default(), |mut summary, outcome| {
            match outcome {
                FileOutcome::Valid { filename } => summary.valid.push(filename),
                FileOutcome::Invalid(record) => summary.failures.push(record),
                FileOutcome::Errored { filename, error } => summary.errors.push((filename, error)),
            }
            summary
        })
    }
}

/// Validates the samples changed by a pull request and reports the rejected
/// ones back on it.
pub struct ValidationRun<P, V> {
    pull_requests: Arc<P>,
    validator: Arc<V>,
    suffix: String,
}

impl<P: PullRequestService, V: ValidatorService> ValidationRun<P, V> {
    pub fn new(pull_requests: Arc<P>, validator: Arc<V>) -> Self {
        Self { pull_requests, validator, suffix: SAMPLE_SUFFIX.to_string() }
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub async fn validate_file(&self, file: &ChangedFile) -> Result<ValidationResult> {
        let content = self
            .pull_requests
            .fetch_content(file)
            .await
            .with_context(|| format!("Failed to fetch {}", file.filename))?;
        self.validator
            .validate(&content)
            .await
            .with_context(|| format!("Failed to validate {}", file.filename))
    }

    async fn check_file(&self, file: ChangedFile) -> FileOutcome {
        match self.validate_file(&file).await {
            Ok(result) => {
                debug!(file = %file.filename, valid = result.is_valid, "Validated sample");
                FileOutcome::from_result(file.filename, &file.blob_url, result)
            }
            Err(error) => {
                warn!(file = %file.filename, "{error:#}");
                FileOutcome::Errored { filename: file.filename, error }
            }
        }
    }

    /// Fetches and validates every file concurrently. A failing file does not
    /// stop the others.
    pub async fn validate_files(&self, files: Vec<ChangedFile>) -> RunSummary {
        join_all(files.into_iter().map(|file| self.check_file(file)))
            .await
            .into()
    }

    /// Lists, validates and reports, keeping every per-file outcome.
    pub async fn check(&self, context: &PullRequestContext) -> Result<RunSummary> {
        let files = self
            .pull_requests
            .list_files(context)
            .await
            .context("Failed to list pull request files")?;
        let total = files.len();
        let samples = filter_by_suffix(files, &self.suffix);
        info!(total, samples = samples.len(), suffix = %self.suffix, "Listed changed files");

        let mut summary = self.validate_files(samples).await;
        info!(
            valid = summary.valid.len(),
            invalid = summary.failures.len(),
            errored = summary.errors.len(),
            "Validation finished"
        );

        let commentator = PullRequestCommentator::new(self.pull_requests.clone());
        summary.comment = commentator.report(context, &summary.failures).await;
        debug!(status = ?summary.comment, "Reported failures");
        Ok(summary)
    }

    pub async fn run(&self, context: &PullRequestContext) -> Result<RunOutcome> {
        self.check(context).await?.into_outcome()
    }
}
