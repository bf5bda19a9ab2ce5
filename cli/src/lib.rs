pub mod backend;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod navigator;
pub mod repl;

pub use config::CliConfig;
pub use context::CliContext;
pub use error::CliError;
pub use repl::readline;
