use base64::Engine;
use gallery_domain::{ChangedFile, Environment, PullRequestContext, PullRequestService};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::error::{Error, Result, excerpt};

/// Page size requested from the "list pull request files" endpoint.
const PER_PAGE: usize = 100;
/// The endpoint stops at 3000 files.
const MAX_PAGES: usize = 30;

#[derive(Debug, Deserialize)]
struct ContentResponse {
    content: String,
    #[serde(default)]
    encoding: Option<String>,
}

/// REST client for the pull request endpoints the pipeline needs.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: Url,
    headers: HeaderMap,
}

impl GithubClient {
    pub fn new(env: &Environment) -> Result<Self> {
        // A trailing slash keeps path prefixes such as `/api/v3` when joining.
        let base = format!("{}/", env.api_url.trim_end_matches('/'));
        let api_url = Url::parse(&base)
            .map_err(|e| Error::UrlParse { url: env.api_url.clone(), error: e.to_string() })?;
        let client = Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .map_err(|source| Error::Client { source })?;

        Ok(Self { client, api_url, headers: Self::headers(&env.token)? })
    }

    fn headers(token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| Error::InvalidToken)?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static("2022-11-28"));
        Ok(headers)
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.api_url
            .join(path)
            .map_err(|e| Error::UrlParse { url: path.to_string(), error: e.to_string() })
    }

    async fn check(method: &'static str, url: &Url, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            body: excerpt(&body),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, usize)]) -> Result<T> {
        let response = self
            .client
            .get(url.clone())
            .headers(self.headers.clone())
            .query(query)
            .send()
            .await
            .map_err(|source| Error::Request { method: "GET", url: url.to_string(), source })?;
        let response = Self::check("GET", &url, response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| Error::Request { method: "GET", url: url.to_string(), source })?;

        serde_json::from_slice(&bytes)
            .map_err(|source| Error::Json { url: url.to_string(), source })
    }

    pub async fn list_files(&self, context: &PullRequestContext) -> Result<Vec<ChangedFile>> {
        let repository = &context.repository;
        let url = self.url(&format!(
            "repos/{}/{}/pulls/{}/files",
            repository.owner, repository.repo, context.number
        ))?;

        let mut files = Vec::new();
        for page in 1..=MAX_PAGES {
            let batch: Vec<ChangedFile> =
                self.get_json(url.clone(), &[("per_page", PER_PAGE), ("page", page)]).await?;
            let count = batch.len();
            files.extend(batch);
            debug!(page, count, "Listed pull request files");

            if count < PER_PAGE {
                break;
            }
        }

        Ok(files)
    }

    pub async fn fetch_content(&self, file: &ChangedFile) -> Result<String> {
        let url = Url::parse(&file.contents_url)
            .map_err(|e| Error::UrlParse {
                url: file.contents_url.clone(),
                error: e.to_string(),
            })?;
        let response: ContentResponse = self.get_json(url, &[]).await?;

        if let Some(encoding) = response.encoding.filter(|encoding| encoding != "base64") {
            return Err(Error::UnsupportedEncoding { url: file.contents_url.clone(), encoding });
        }

        // The API wraps base64 payloads at 60 columns.
        let payload: String = response.content.split_whitespace().collect();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|source| Error::Base64 { url: file.contents_url.clone(), source })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub async fn create_comment(&self, context: &PullRequestContext, body: &str) -> Result<()> {
        let repository = &context.repository;
        let url = self.url(&format!(
            "repos/{}/{}/issues/{}/comments",
            repository.owner, repository.repo, context.number
        ))?;

        let response = self
            .client
            .post(url.clone())
            .headers(self.headers.clone())
            .json(&json!({ "body": body }))
            .send()
            .await
            .map_err(|source| Error::Request { method: "POST", url: url.to_string(), source })?;
        Self::check("POST", &url, response).await?;

        debug!(url = %url, "Created pull request comment");
        Ok(())
    }
}

#[async_trait::async_trait]
impl PullRequestService for GithubClient {
    async fn list_files(&self, context: &PullRequestContext) -> anyhow::Result<Vec<ChangedFile>> {
        Ok(GithubClient::list_files(self, context).await?)
    }

    async fn fetch_content(&self, file: &ChangedFile) -> anyhow::Result<String> {
        Ok(GithubClient::fetch_content(self, file).await?)
    }

    async fn create_comment(&self, context: &PullRequestContext, body: &str) -> anyhow::Result<()> {
        Ok(GithubClient::create_comment(self, context, body).await?)
    }
}
