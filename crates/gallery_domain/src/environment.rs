use std::fmt;

use derive_setters::Setters;

use crate::{Error, SAMPLE_SUFFIX};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_VALIDATOR_URL: &str =
    "https://m365-galleries.azurewebsites.net/Samples/validateSample";

/// Name of the action input holding the access token.
pub const TOKEN_INPUT: &str = "gh-token";

/// Settings for a single run.
#[derive(Clone, Setters)]
#[setters(into)]
pub struct Environment {
    /// Access token used for every platform API call.
    pub token: String,
    /// Base URL of the platform's REST API.
    pub api_url: String,
    /// Endpoint samples are POSTed to.
    pub validator_url: String,
    /// Filename suffix that selects the files to validate.
    pub suffix: String,
}

impl Environment {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            validator_url: DEFAULT_VALIDATOR_URL.to_string(),
            suffix: SAMPLE_SUFFIX.to_string(),
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("token", &"***")
            .field("api_url", &self.api_url)
            .field("validator_url", &self.validator_url)
            .field("suffix", &self.suffix)
            .finish()
    }
}

/// Environment variable an action input is exposed under: `INPUT_` followed
/// by the upper-cased name with spaces replaced by underscores.
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Trims an input value, treating a missing or blank value as absent.
pub fn required_input(name: &str, value: Option<String>) -> Result<String, Error> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::MissingInput(name.to_string()))
}
