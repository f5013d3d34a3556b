use std::sync::Arc;

use gallery_domain::{FailureRecord, PullRequestContext, PullRequestService, failure_comment};
use tracing::{info, warn};

/// What became of the failure comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommentStatus {
    /// Nothing failed, so nothing was posted.
    #[default]
    NotNeeded,
    Posted,
    /// Posting failed; the body went to standard output instead.
    Logged,
}

/// Posts validation failures as a single comment on the pull request.
pub struct PullRequestCommentator<P> {
    pull_requests: Arc<P>,
}

impl<P: PullRequestService> PullRequestCommentator<P> {
    pub fn new(pull_requests: Arc<P>) -> Self {
        Self { pull_requests }
    }

    /// Never fails: a rejected comment is logged and its body printed so the
    /// failures still show up in the job log.
    pub async fn report(
        &self,
        context: &PullRequestContext,
        failures: &[FailureRecord],
    ) -> CommentStatus {
        if failures.is_empty() {
            return CommentStatus::NotNeeded;
        }

        let body = failure_comment(failures);
        match self.pull_requests.create_comment(context, &body).await {
            Ok(()) => {
                info!(number = context.number, failures = failures.len(), "Posted failure comment");
                CommentStatus::Posted
            }
            Err(error) => {
                warn!("Failed to post failure comment: {error:#}");
                println!("{body}");
                CommentStatus::Logged
            }
        }
    }
}
