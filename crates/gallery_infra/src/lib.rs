mod env;
mod error;
mod github;
mod validator;

#[cfg(test)]
mod mock_server;

pub use env::*;
pub use error::*;
pub use github::GithubClient;
pub use validator::ValidatorClient;

/// User agent sent with every outbound request.
const USER_AGENT: &str = concat!("gallery-check/", env!("CARGO_PKG_VERSION"));
