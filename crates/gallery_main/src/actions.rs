use std::process::ExitCode;

/// Escapes a message for use in a workflow command.
pub fn escape_data(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// The `::error::` workflow command that annotates the run with `message`.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Marks the run as failed: prints the error annotation and yields a non-zero
/// exit code.
pub fn set_failed(message: &str) -> ExitCode {
    println!("{}", error_command(message));
    ExitCode::FAILURE
}
