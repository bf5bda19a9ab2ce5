//! Collaborator interfaces
//!
//! The settings store never talks to a transport directly. Group listing,
//! key/value configuration, localization and navigation are supplied by the
//! host through these traits.

use std::collections::HashMap;
use std::future::Future;

use notipanel_types::{ConfigScope, UserGroup};

use crate::error::ServiceError;
use crate::navigation::NavigationTarget;

/// Address of a configuration item inside a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    pub item_type: &'static str,
    pub sub_type: &'static str,
    pub pattern: &'static str,
}

/// Key under which notification panel settings are stored
pub const NOTIFICATION_PANEL_SETTINGS_KEY: ConfigKey = ConfigKey {
    item_type: "NotificationPanelSettings",
    sub_type: "NotificationPanelSettings",
    pattern: "NotificationPanelSettings",
};

/// Lists the user groups an administrator can configure.
pub trait GroupDirectory: Send + Sync {
    fn list_groups(&self) -> impl Future<Output = Result<Vec<UserGroup>, ServiceError>> + Send;
}

/// Key/value configuration store holding serialized settings blobs.
///
/// `get` returns `Ok(None)` when nothing is stored for the scope.
pub trait ConfigService: Send + Sync {
    fn get(
        &self,
        scope: ConfigScope,
        key: ConfigKey,
    ) -> impl Future<Output = Result<Option<String>, ServiceError>> + Send;

    fn put(
        &self,
        blob: String,
        scope: ConfigScope,
        key: ConfigKey,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}

/// Resolves localization keys to display text.
pub trait Localizer {
    fn resolve(&self, keys: &[&str]) -> HashMap<String, String>;
}

/// Host navigation, used for the group-creation redirect.
pub trait Navigator {
    fn navigate(&self, target: &NavigationTarget);
}
