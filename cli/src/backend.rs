//! JSON-file backend
//!
//! One file holds the group directory and every stored settings blob. It
//! implements both collaborator traits the settings store needs. Groups whose
//! name starts with "Default" are system managed and refuse writes.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use notipanel_core::{ConfigKey, ConfigService, GroupDirectory, ServiceError};
use notipanel_types::{ConfigScope, UserGroup};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    groups: Vec<UserGroup>,
    /// Serialized blobs by `scope/item/sub/pattern`
    #[serde(default)]
    entries: HashMap<String, String>,
}

fn entry_key(scope: ConfigScope, key: ConfigKey) -> String {
    let scope = match scope {
        ConfigScope::Site => "site".to_string(),
        ConfigScope::Group(id) => format!("group:{id}"),
    };
    format!("{scope}/{}/{}/{}", key.item_type, key.sub_type, key.pattern)
}

pub struct FileBackend {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl FileBackend {
    /// Open the store at `path`, creating it with `seed_groups` if missing.
    pub async fn open(path: impl Into<PathBuf>, seed_groups: &[UserGroup]) -> Result<Self, ServiceError> {
        let backend = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };

        if !tokio::fs::try_exists(&backend.path).await? {
            if let Some(parent) = backend.path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let file = StoreFile {
                groups: seed_groups.to_vec(),
                entries: HashMap::new(),
            };
            backend.write(&file).await?;
            info!(path = ?backend.path, groups = seed_groups.len(), "Created settings store");
        }

        Ok(backend)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<StoreFile, ServiceError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        if text.trim().is_empty() {
            return Ok(StoreFile::default());
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn write(&self, file: &StoreFile) -> Result<(), ServiceError> {
        let text = serde_json::to_string_pretty(file)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, text).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl GroupDirectory for FileBackend {
    async fn list_groups(&self) -> Result<Vec<UserGroup>, ServiceError> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.groups)
    }
}

impl ConfigService for FileBackend {
    async fn get(&self, scope: ConfigScope, key: ConfigKey) -> Result<Option<String>, ServiceError> {
        let _guard = self.lock.lock().await;
        let mut file = self.read().await?;
        Ok(file.entries.remove(&entry_key(scope, key)))
    }

    async fn put(&self, blob: String, scope: ConfigScope, key: ConfigKey) -> Result<(), ServiceError> {
        let _guard = self.lock.lock().await;
        let mut file = self.read().await?;

        if let ConfigScope::Group(id) = scope {
            let group = file
                .groups
                .iter()
                .find(|g| g.id == id)
                .ok_or(ServiceError::NotFound { scope })?;
            if group.is_read_only() {
                return Err(ServiceError::ReadOnlyGroup {
                    name: group.name.clone(),
                });
            }
        }

        file.entries.insert(entry_key(scope, key), blob);
        self.write(&file).await?;
        debug!(%scope, "Wrote settings blob");
        Ok(())
    }
}
