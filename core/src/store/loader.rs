//! Remote fetch and save orchestration
//!
//! A [`SettingsLoader`] only holds the backend, never the panel state, so a
//! host can run its fetches concurrently and dispatch the returned actions
//! whenever they complete. Group fetches are tagged with their target group
//! and the reducer discards results for a superseded selection.

use std::sync::Arc;

use notipanel_types::{ConfigScope, DEFAULT_GROUP_ID, NotificationPanelSettings, UserGroup};
use tracing::{debug, warn};

use super::state::Action;
use crate::error::{SaveFailure, ServiceError, StoreError};
use crate::services::{ConfigService, GroupDirectory, NOTIFICATION_PANEL_SETTINGS_KEY};

pub struct SettingsLoader<S> {
    backend: Arc<S>,
}

impl<S> Clone for SettingsLoader<S> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<S> SettingsLoader<S>
where
    S: GroupDirectory + ConfigService,
{
    pub fn new(backend: Arc<S>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<S> {
        &self.backend
    }

    /// Group list with the synthetic Default group first.
    ///
    /// A directory failure leaves only the Default group selectable.
    pub async fn load_groups(&self) -> Action {
        let mut groups = vec![UserGroup::site_default()];
        match self.backend.list_groups().await {
            Ok(listed) => groups.extend(listed.into_iter().filter(|g| !g.is_site_default())),
            Err(e) => warn!(error = %e, "Failed to list user groups"),
        }
        Action::SetGroups(groups)
    }

    /// Site-level settings, or system defaults marked as inherited when none
    /// are stored or the stored blob itself defers to the defaults.
    pub async fn load_site_settings(&self) -> Action {
        let stored = self.fetch(ConfigScope::Site).await;
        let settings = match stored {
            Some(settings) if !settings.use_default => settings,
            Some(_) => NotificationPanelSettings::system_default(),
            None => {
                debug!("No saved site-level settings, using system defaults");
                NotificationPanelSettings::system_default()
            }
        };
        Action::SetSiteSettings(settings)
    }

    /// Stored settings of one group. A failed or empty fetch yields `None`,
    /// which the reducer resolves to the inherited site settings.
    pub async fn load_group_settings(&self, group_id: i64) -> Action {
        let settings = if group_id == DEFAULT_GROUP_ID {
            None
        } else {
            self.fetch(ConfigScope::Group(group_id)).await
        };
        Action::SetGroupSettings { group_id, settings }
    }

    /// Serialize and persist `settings` under `scope`.
    pub async fn save(
        &self,
        scope: ConfigScope,
        settings: &NotificationPanelSettings,
    ) -> Result<(), SaveFailure> {
        let blob = serialize_settings(settings).map_err(SaveFailure::Store)?;
        self.backend
            .put(blob, scope, NOTIFICATION_PANEL_SETTINGS_KEY)
            .await
            .map_err(SaveFailure::Service)
    }

    async fn fetch(&self, scope: ConfigScope) -> Option<NotificationPanelSettings> {
        let blob = match self.backend.get(scope, NOTIFICATION_PANEL_SETTINGS_KEY).await {
            Ok(Some(blob)) if !blob.trim().is_empty() => blob,
            Ok(_) | Err(ServiceError::NotFound { .. }) => return None,
            Err(e) => {
                warn!(error = %e, %scope, "Failed to fetch notification panel settings, falling back");
                return None;
            }
        };

        match parse_settings(scope, &blob) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!(error = %e, %scope, "Ignoring malformed notification panel settings");
                None
            }
        }
    }
}

pub fn serialize_settings(settings: &NotificationPanelSettings) -> Result<String, StoreError> {
    serde_json::to_string(settings).map_err(StoreError::Serialize)
}

pub fn parse_settings(
    scope: ConfigScope,
    blob: &str,
) -> Result<NotificationPanelSettings, StoreError> {
    serde_json::from_str(blob).map_err(|source| StoreError::Parse { scope, source })
}
