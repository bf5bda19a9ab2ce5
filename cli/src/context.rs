use std::sync::Arc;

use notipanel_core::{AdminPanel, SettingsStore, Strings};

use crate::backend::FileBackend;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::navigator::ConsoleNavigator;

pub type Panel = AdminPanel<FileBackend, ConsoleNavigator>;

/// Holds all state for the shell.
pub struct CliContext {
    pub config: CliConfig,
    pub panel: Panel,
}

impl CliContext {
    /// Open the configured store and build the panel on top of it.
    pub async fn new(config: CliConfig) -> Result<Self, CliError> {
        let backend = FileBackend::open(&config.store_path, &config.seed_groups)
            .await
            .map_err(|source| CliError::Backend {
                path: config.store_path.clone(),
                source,
            })?;

        let strings = Strings::builtin();
        let store = SettingsStore::new(Arc::new(backend))
            .with_banner_timeout(config.banner_timeout())
            .with_strings(&strings);
        let panel = AdminPanel::new(store, ConsoleNavigator, strings);

        Ok(Self { config, panel })
    }
}
