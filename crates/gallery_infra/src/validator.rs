use gallery_domain::{ValidationResult, ValidatorService};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::{Error, Result, excerpt};

/// Client for the sample validation endpoint.
///
/// The response body is parsed whatever the status code: the service reports
/// rejected samples in the body, and anything that does not parse as a
/// validation result is an error.
#[derive(Clone)]
pub struct ValidatorClient {
    client: Client,
    url: Url,
}

impl ValidatorClient {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| Error::UrlParse { url: url.to_string(), error: e.to_string() })?;
        let client = Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .map_err(|source| Error::Client { source })?;
        Ok(Self { client, url })
    }

    pub async fn validate(&self, content: &str) -> Result<ValidationResult> {
        let url = self.url.to_string();
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(content.to_string())
            .send()
            .await
            .map_err(|source| Error::Request { method: "POST", url: url.clone(), source })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|source| Error::Request { method: "POST", url: url.clone(), source })?;
        debug!(status, bytes = body.len(), "Validator responded");

        serde_json::from_str(&body).map_err(|source| Error::InvalidValidation {
            url,
            status,
            body: excerpt(&body),
            source,
        })
    }
}

#[async_trait::async_trait]
impl ValidatorService for ValidatorClient {
    async fn validate(&self, content: &str) -> anyhow::Result<ValidationResult> {
        Ok(ValidatorClient::validate(self, content).await?)
    }
}
