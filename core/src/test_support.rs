//! In-memory collaborators for tests

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use notipanel_types::{ConfigScope, NotificationPanelSettings, UserGroup};

use crate::error::ServiceError;
use crate::navigation::NavigationTarget;
use crate::services::{ConfigKey, ConfigService, GroupDirectory, Navigator};

#[derive(Default)]
pub struct FakeBackend {
    groups: Mutex<Vec<UserGroup>>,
    blobs: Mutex<HashMap<ConfigScope, String>>,
    puts: Mutex<Vec<(ConfigScope, String)>>,
    fail_gets: AtomicBool,
    fail_puts: AtomicBool,
    fail_groups: AtomicBool,
}

impl FakeBackend {
    pub fn with_groups(groups: &[(i64, &str)]) -> Self {
        let backend = Self::default();
        *backend.groups.lock().unwrap() = groups
            .iter()
            .map(|(id, name)| UserGroup::new(*id, *name))
            .collect();
        backend
    }

    pub fn store(&self, scope: ConfigScope, settings: &NotificationPanelSettings) {
        self.store_raw(scope, serde_json::to_string(settings).unwrap());
    }

    pub fn store_raw(&self, scope: ConfigScope, blob: impl Into<String>) {
        self.blobs.lock().unwrap().insert(scope, blob.into());
    }

    pub fn stored(&self, scope: ConfigScope) -> Option<NotificationPanelSettings> {
        self.blobs
            .lock()
            .unwrap()
            .get(&scope)
            .map(|b| serde_json::from_str(b).unwrap())
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    pub fn fail_gets(&self, fail: bool) {
        self.fail_gets.store(fail, Ordering::SeqCst);
    }

    pub fn fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_groups(&self, fail: bool) {
        self.fail_groups.store(fail, Ordering::SeqCst);
    }
}

fn unavailable() -> ServiceError {
    ServiceError::Unavailable {
        reason: "offline".to_string(),
    }
}

impl GroupDirectory for FakeBackend {
    async fn list_groups(&self) -> Result<Vec<UserGroup>, ServiceError> {
        if self.fail_groups.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.groups.lock().unwrap().clone())
    }
}

impl ConfigService for FakeBackend {
    async fn get(&self, scope: ConfigScope, _key: ConfigKey) -> Result<Option<String>, ServiceError> {
        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.blobs.lock().unwrap().get(&scope).cloned())
    }

    async fn put(&self, blob: String, scope: ConfigScope, _key: ConfigKey) -> Result<(), ServiceError> {
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        self.puts.lock().unwrap().push((scope, blob.clone()));
        self.blobs.lock().unwrap().insert(scope, blob);
        Ok(())
    }
}

/// Records every navigation instead of performing it
#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    pub fn last_path(&self) -> Option<String> {
        self.visits.borrow().last().map(|t| t.path.clone())
    }

    pub fn last_params(&self) -> BTreeMap<String, String> {
        self.visits
            .borrow()
            .last()
            .map(|t| t.params.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &NavigationTarget) {
        self.visits.borrow_mut().push(target.clone());
    }
}
