//! Error types for the admin shell

use std::path::PathBuf;

use notipanel_core::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to load configuration")]
    ConfigLoad(#[source] confy::ConfyError),

    #[error("failed to save configuration")]
    ConfigStore(#[source] confy::ConfyError),

    #[error("settings store at {path} is unusable")]
    Backend {
        path: PathBuf,
        #[source]
        source: ServiceError,
    },

    #[error("unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("no group with id {0}")]
    UnknownGroup(i64),
}
