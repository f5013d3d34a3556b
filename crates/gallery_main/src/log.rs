use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Variable holding the log filter directives.
pub const LOG_ENV: &str = "GALLERY_LOG";

/// Sends logs to stderr so stdout stays free for workflow commands and the
/// comment fallback. `GALLERY_LOG` overrides the default level.
pub fn init_tracing(verbose: bool) -> anyhow::Result<Guard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
    let default_filter = if verbose { "gallery=debug" } else { "gallery=info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(verbose)
        .with_ansi(false)
        .with_writer(non_blocking)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    debug!("Logging initialized");
    Ok(Guard(guard))
}

pub struct Guard(#[allow(dead_code)] WorkerGuard);
