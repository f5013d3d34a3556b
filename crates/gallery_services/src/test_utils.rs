use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::anyhow;
use gallery_domain::{
    ChangedFile, PullRequestContext, PullRequestService, Repository, ValidationResult,
    ValidatorService,
};

pub fn context() -> PullRequestContext {
    PullRequestContext {
        repository: Repository { owner: "pnp".to_string(), repo: "samples".to_string() },
        number: 7,
        head_repo: Some("contributor/samples".to_string()),
        base_repo: Some("pnp/samples".to_string()),
    }
}

/// In-memory pull request whose file contents are keyed by filename.
#[derive(Default)]
pub struct FakePullRequests {
    files: Vec<(ChangedFile, String)>,
    list_fails: bool,
    comment_fails: bool,
    comments: Mutex<Vec<String>>,
}

impl FakePullRequests {
    pub fn file(mut self, filename: &str, content: &str) -> Self {
        let file = ChangedFile {
            filename: filename.to_string(),
            blob_url: format!("https://github.com/pnp/samples/blob/main/{filename}"),
            contents_url: format!("https://api.github.com/repos/pnp/samples/contents/{filename}"),
            raw_url: format!("https://github.com/pnp/samples/raw/main/{filename}"),
        };
        self.files.push((file, content.to_string()));
        self
    }

    pub fn list_fails(mut self, fails: bool) -> Self {
        self.list_fails = fails;
        self
    }

    pub fn comment_fails(mut self, fails: bool) -> Self {
        self.comment_fails = fails;
        self
    }

    pub fn comments(&self) -> Vec<String> {
        self.comments.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PullRequestService for FakePullRequests {
    async fn list_files(&self, _context: &PullRequestContext) -> anyhow::Result<Vec<ChangedFile>> {
        if self.list_fails {
            return Err(anyhow!("GET /pulls/7/files returned HTTP 401: Bad credentials"));
        }
        Ok(self.files.iter().map(|(file, _)| file.clone()).collect())
    }

    async fn fetch_content(&self, file: &ChangedFile) -> anyhow::Result<String> {
        self.files
            .iter()
            .find(|(candidate, _)| candidate.filename == file.filename)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| anyhow!("GET {} returned HTTP 404: Not Found", file.contents_url))
    }

    async fn create_comment(
        &self,
        _context: &PullRequestContext,
        body: &str,
    ) -> anyhow::Result<()> {
        if self.comment_fails {
            return Err(anyhow!("POST /issues/7/comments returned HTTP 403: Forbidden"));
        }
        self.comments.lock().unwrap().push(body.to_string());
        Ok(())
    }
}

/// Validator answering from a table keyed by content. Unknown content is
/// treated as valid; content mapped to `None` fails like a dropped connection.
#[derive(Default)]
pub struct FakeValidator {
    responses: HashMap<String, Option<ValidationResult>>,
    calls: Mutex<Vec<String>>,
}

impl FakeValidator {
    pub fn respond(mut self, content: &str, result: ValidationResult) -> Self {
        self.responses.insert(content.to_string(), Some(result));
        self
    }

    pub fn unreachable_for(mut self, content: &str) -> Self {
        self.responses.insert(content.to_string(), None);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ValidatorService for FakeValidator {
    async fn validate(&self, content: &str) -> anyhow::Result<ValidationResult> {
        self.calls.lock().unwrap().push(content.to_string());
        match self.responses.get(content) {
            Some(Some(result)) => Ok(result.clone()),
            Some(None) => Err(anyhow!("POST /Samples/validateSample failed: connection refused")),
            None => Ok(ValidationResult::valid()),
        }
    }
}
