mod context;
mod environment;
mod error;
mod file;
mod markdown;
mod service;
mod validation;

pub use context::*;
pub use environment::*;
pub use error::*;
pub use file::*;
pub use markdown::*;
pub use service::*;
pub use validation::*;
