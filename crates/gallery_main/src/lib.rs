mod actions;
mod app;
mod cli;
mod log;

pub use actions::*;
pub use app::*;
pub use cli::Cli;
pub use log::*;
