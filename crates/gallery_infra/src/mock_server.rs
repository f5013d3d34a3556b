use std::ops::{Deref, DerefMut};

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::Value;

pub struct MockServer {
    server: ServerGuard,
}

impl MockServer {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        Self { server }
    }

    pub async fn mock_files_page(&mut self, number: u64, page: usize, body: Value) -> Mock {
        self.server
            .mock("GET", format!("/repos/pnp/samples/pulls/{number}/files").as_str())
            .match_header("authorization", "Bearer ghp_test")
            .match_header("accept", "application/vnd.github+json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("per_page".into(), "100".into()),
                Matcher::UrlEncoded("page".into(), page.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// Contents of `path` at the `abc123` head commit.
    pub async fn mock_contents(&mut self, path: &str, body: Value) -> Mock {
        self.server
            .mock("GET", format!("/repos/pnp/samples/contents/{path}").as_str())
            .match_header("authorization", "Bearer ghp_test")
            .match_query(Matcher::UrlEncoded("ref".into(), "abc123".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    pub fn url(&self) -> String {
        self.server.url()
    }
}

impl Deref for MockServer {
    type Target = ServerGuard;

    fn deref(&self) -> &Self::Target {
        &self.server
    }
}

impl DerefMut for MockServer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.server
    }
}
