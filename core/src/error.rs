//! Error types for settings operations

use notipanel_types::ConfigScope;
use thiserror::Error;

/// Errors reported by the group directory and configuration services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no configuration stored for {scope}")]
    NotFound { scope: ConfigScope },

    #[error("group '{name}' is read-only")]
    ReadOnlyGroup { name: String },

    #[error("service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("configuration store I/O failed")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration payload")]
    Json(#[from] serde_json::Error),
}

/// Errors converting settings to and from stored blobs
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize settings")]
    Serialize(#[source] serde_json::Error),

    #[error("malformed settings blob for {scope}")]
    Parse {
        scope: ConfigScope,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a save did not reach the backend or was refused by it
#[derive(Debug, Error)]
pub enum SaveFailure {
    #[error(transparent)]
    Store(StoreError),
    #[error(transparent)]
    Service(ServiceError),
}

impl SaveFailure {
    pub fn is_read_only(&self) -> bool {
        matches!(self, SaveFailure::Service(ServiceError::ReadOnlyGroup { .. }))
    }
}
