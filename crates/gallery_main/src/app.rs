use std::sync::Arc;

use anyhow::Context;
use gallery_domain::{Environment, Error, Repository, RunOutcome, TOKEN_INPUT, required_input};
use gallery_infra::{ActionInputs, GithubClient, ValidatorClient, load_pull_request_context};
use gallery_services::ValidationRun;
use tracing::info;

use crate::Cli;

pub const VALIDATOR_URL_INPUT: &str = "validator-url";
pub const SUFFIX_INPUT: &str = "suffix";

/// Resolves the run settings: flags first, then action inputs, then defaults.
pub fn environment<F: Fn(&str) -> Option<String>>(
    cli: &Cli,
    inputs: &ActionInputs<F>,
) -> Result<Environment, Error> {
    let token = match &cli.token {
        Some(token) => required_input(TOKEN_INPUT, Some(token.clone()))?,
        None => inputs.required(TOKEN_INPUT)?,
    };

    let mut env = Environment::new(token).api_url(cli.api_url.clone());
    if let Some(url) = cli.validator_url.clone().or_else(|| inputs.get(VALIDATOR_URL_INPUT)) {
        env = env.validator_url(url);
    }
    if let Some(suffix) = cli.suffix.clone().or_else(|| inputs.get(SUFFIX_INPUT)) {
        env = env.suffix(suffix);
    }
    Ok(env)
}

/// Runs the whole check for the pull request described by the environment.
pub async fn run(cli: Cli) -> anyhow::Result<RunOutcome> {
    run_with_inputs(cli, &ActionInputs::from_env()).await
}

pub async fn run_with_inputs<F: Fn(&str) -> Option<String>>(
    cli: Cli,
    inputs: &ActionInputs<F>,
) -> anyhow::Result<RunOutcome> {
    let env = environment(&cli, inputs)?;
    let repository = cli
        .repository
        .ok_or(Error::MissingVariable("GITHUB_REPOSITORY"))?
        .parse::<Repository>()?;
    let event_path = cli.event_path.ok_or(Error::MissingVariable("GITHUB_EVENT_PATH"))?;

    let context = load_pull_request_context(&event_path, &cli.event_name, repository).await?;
    info!(
        repository = %context.repository,
        number = context.number,
        validator = %env.validator_url,
        "Checking pull request"
    );

    let github = GithubClient::new(&env).context("Failed to create API client")?;
    let validator =
        ValidatorClient::new(&env.validator_url).context("Failed to create validator client")?;

    ValidationRun::new(Arc::new(github), Arc::new(validator))
        .suffix(env.suffix.clone())
        .run(&context)
        .await
}
