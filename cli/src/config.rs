//! Shell configuration, persisted with confy under the `notipanel` app name

use std::path::PathBuf;
use std::time::Duration;

use notipanel_types::UserGroup;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

pub const APP_NAME: &str = "notipanel";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// JSON file backing the group directory and configuration store
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Groups written into a store file that does not exist yet
    #[serde(default = "default_seed_groups")]
    pub seed_groups: Vec<UserGroup>,
    #[serde(default = "default_banner_timeout_secs")]
    pub banner_timeout_secs: u64,
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join("settings-store.json")
}

fn default_seed_groups() -> Vec<UserGroup> {
    vec![
        UserGroup::new(1, "Dispatch"),
        UserGroup::new(2, "Supervisors"),
        UserGroup::new(3, "Default Dispatch"),
    ]
}

fn default_banner_timeout_secs() -> u64 {
    5
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            seed_groups: default_seed_groups(),
            banner_timeout_secs: default_banner_timeout_secs(),
        }
    }
}

impl CliConfig {
    pub fn load() -> Result<Self, CliError> {
        confy::load(APP_NAME, None).map_err(CliError::ConfigLoad)
    }

    pub fn save(&self) -> Result<(), CliError> {
        confy::store(APP_NAME, None, self).map_err(CliError::ConfigStore)
    }

    pub fn banner_timeout(&self) -> Duration {
        Duration::from_secs(self.banner_timeout_secs)
    }
}
