use serde::{Deserialize, Serialize};

/// Message the run fails with when at least one sample is invalid.
pub const INVALID_SAMPLES_MESSAGE: &str = "Invalid samples!";

/// Response body of the validator service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    pub fn invalid<S: Into<String>>(errors: impl IntoIterator<Item = S>) -> Self {
        Self { is_valid: false, errors: errors.into_iter().map(Into::into).collect() }
    }
}

/// A sample the validator rejected, keyed by its blob URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub file_url: String,
    pub result: ValidationResult,
}

/// What happened to a single file once it went through fetch and validation.
#[derive(Debug)]
pub enum FileOutcome {
    Valid { filename: String },
    Invalid(FailureRecord),
    Errored { filename: String, error: anyhow::Error },
}

impl FileOutcome {
    /// Classifies a validator response for the file at `blob_url`.
    pub fn from_result(
        filename: impl Into<String>,
        blob_url: &str,
        result: ValidationResult,
    ) -> Self {
        if result.is_valid {
            Self::Valid { filename: filename.into() }
        } else {
            Self::Invalid(FailureRecord { file_url: blob_url.to_string(), result })
        }
    }
}

/// Terminal state of a run, as signalled to the CI host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Passed,
    Failed { message: String },
}

impl RunOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed { message: message.into() }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}
