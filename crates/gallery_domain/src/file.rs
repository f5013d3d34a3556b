use serde::{Deserialize, Serialize};

/// Suffix that marks a changed file as a gallery sample.
pub const SAMPLE_SUFFIX: &str = "sample.json";

/// A file touched by a pull request, as reported by the platform's
/// "list pull request files" endpoint. Fields the pipeline does not need are
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
    pub blob_url: String,
    pub contents_url: String,
    pub raw_url: String,
}

impl ChangedFile {
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.filename.ends_with(suffix)
    }
}

/// Keeps the files whose name ends with `suffix`, preserving input order.
/// The comparison is case-sensitive.
pub fn filter_by_suffix(files: Vec<ChangedFile>, suffix: &str) -> Vec<ChangedFile> {
    files.into_iter().filter(|file| file.has_suffix(suffix)).collect()
}
