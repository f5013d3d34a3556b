use percent_encoding::percent_decode_str;

use crate::FailureRecord;

/// Heading that opens every failure comment.
pub const FAILURE_HEADING: &str = "### Validation failed!";

/// Renders a blob URL as a Markdown link whose text is the repository path of
/// the file.
///
/// The path is whatever follows `blob/<ref>/`, percent-decoded for display;
/// the link target keeps the original encoding. URLs without a `blob/`
/// segment are shown in full.
pub fn file_markdown_url(blob_url: &str) -> String {
    let display = blob_url
        .split_once("blob/")
        .map(|(_, tail)| tail.split_once('/').map_or("", |(_, path)| path))
        .unwrap_or(blob_url);
    let display = percent_decode_str(display).decode_utf8_lossy();

    format!("[{display}]({blob_url})")
}

/// One Markdown block per rejected file: a link line followed by the
/// validator's errors as a bullet list.
pub fn failure_block(record: &FailureRecord) -> String {
    let errors = record
        .result
        .errors
        .iter()
        .map(|error| format!("- {error}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("File: {}\n{errors}\n", file_markdown_url(&record.file_url))
}

/// Full body of the pull request comment for the given failures.
pub fn failure_comment(failures: &[FailureRecord]) -> String {
    let blocks = failures.iter().map(failure_block).collect::<Vec<_>>().join("\n");
    format!("{FAILURE_HEADING}\n{blocks}")
}
