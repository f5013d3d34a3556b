use std::path::PathBuf;

use clap::Parser;
use gallery_domain::DEFAULT_API_URL;

/// Validates the gallery samples changed by a pull request.
///
/// Meant to run as a workflow step on pull request events: everything is read
/// from the runner's environment, and the flags exist to run it by hand.
#[derive(Parser)]
#[command(name = "gallery-check", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Access token. Defaults to the `gh-token` action input.
    #[arg(long)]
    pub token: Option<String>,

    /// Validator endpoint. Defaults to the `validator-url` action input, then
    /// to the gallery validation service.
    #[arg(long)]
    pub validator_url: Option<String>,

    /// Filename suffix of the files to validate. Defaults to the `suffix`
    /// action input, then to `sample.json`.
    #[arg(long)]
    pub suffix: Option<String>,

    /// Repository the pull request belongs to, as `owner/repo`. Checked when
    /// the run starts so a malformed value fails like any other setting.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Path of the JSON payload of the triggering event.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Name of the triggering event.
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = "unknown")]
    pub event_name: String,

    /// Base URL of the REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Log at debug level unless `GALLERY_LOG` says otherwise.
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
