//! Shared settings types for notipanel
//!
//! This crate contains the serializable value objects that are shared between
//! the settings store (notipanel-core) and the admin shell (notipanel-cli).
//! Field names follow the camelCase layout of the stored configuration blobs.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Groups
// ─────────────────────────────────────────────────────────────────────────────

/// Id of the synthetic group that stands for the site-level settings.
pub const DEFAULT_GROUP_ID: i64 = -1;

/// Name of the synthetic site-level group.
pub const DEFAULT_GROUP_NAME: &str = "Default";

/// A user group as listed by the group directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    pub id: i64,
    pub name: String,
}

impl UserGroup {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The synthetic "Default" group injected at the head of every group list.
    pub fn site_default() -> Self {
        Self::new(DEFAULT_GROUP_ID, DEFAULT_GROUP_NAME)
    }

    /// Returns true for the synthetic site-level group
    pub fn is_site_default(&self) -> bool {
        self.id == DEFAULT_GROUP_ID
    }

    /// Directory groups whose name starts with "Default" are managed by the
    /// system and cannot be modified. The synthetic site group is exempt.
    pub fn is_read_only(&self) -> bool {
        !self.is_site_default() && self.name.starts_with(DEFAULT_GROUP_NAME)
    }
}

/// Storage scope of a settings blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigScope {
    Site,
    Group(i64),
}

impl ConfigScope {
    /// Scope for the given selected group id (`-1` maps to site).
    pub fn for_group(group_id: i64) -> Self {
        if group_id == DEFAULT_GROUP_ID {
            ConfigScope::Site
        } else {
            ConfigScope::Group(group_id)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigScope::Site => "site",
            ConfigScope::Group(_) => "group",
        }
    }

    /// Group identifier required by group-scoped reads and writes
    pub fn scope_id(&self) -> Option<i64> {
        match self {
            ConfigScope::Site => None,
            ConfigScope::Group(id) => Some(*id),
        }
    }
}

impl std::fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigScope::Site => write!(f, "site"),
            ConfigScope::Group(id) => write!(f, "group:{id}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Setting Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Ordering of notifications in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NotificationPanelSort {
    /// Grouped by category, in category rank order
    #[default]
    Categories,
    PriorityAscending,
    PriorityDescending,
    Newest,
    Oldest,
}

impl NotificationPanelSort {
    pub fn all() -> &'static [NotificationPanelSort] {
        &[
            NotificationPanelSort::Categories,
            NotificationPanelSort::PriorityAscending,
            NotificationPanelSort::PriorityDescending,
            NotificationPanelSort::Newest,
            NotificationPanelSort::Oldest,
        ]
    }

    /// Localization key for the sort option label
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Categories => "NOTIFICATION_PANEL_SORT_CATEGORIES",
            Self::PriorityAscending => "NOTIFICATION_PANEL_SORT_PRIORITY_ASC",
            Self::PriorityDescending => "NOTIFICATION_PANEL_SORT_PRIORITY_DESC",
            Self::Newest => "NOTIFICATION_PANEL_SORT_NEWEST",
            Self::Oldest => "NOTIFICATION_PANEL_SORT_OLDEST",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "categories" => Some(Self::Categories),
            "priorityascending" | "priorityasc" => Some(Self::PriorityAscending),
            "prioritydescending" | "prioritydesc" => Some(Self::PriorityDescending),
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            _ => None,
        }
    }
}

/// How repeated notifications for the same subject are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DuplicateNotification {
    #[default]
    ShowAll,
    DisplayOldest,
    DisplayNewest,
}

impl DuplicateNotification {
    pub fn all() -> &'static [DuplicateNotification] {
        &[
            DuplicateNotification::ShowAll,
            DuplicateNotification::DisplayOldest,
            DuplicateNotification::DisplayNewest,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Self::ShowAll => "NOTIFICATION_PANEL_SETTINGS_SHOW_ALL_NOTIFICATIONS",
            Self::DisplayOldest => "NOTIFICATION_PANEL_SETTINGS_DISPLAY_OLDEST_NOTIFICATIONS",
            Self::DisplayNewest => "NOTIFICATION_PANEL_SETTINGS_DISPLAY_NEWEST_NOTIFICATIONS",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "showall" | "all" => Some(Self::ShowAll),
            "displayoldest" | "oldest" => Some(Self::DisplayOldest),
            "displaynewest" | "newest" => Some(Self::DisplayNewest),
            _ => None,
        }
    }
}

/// Notification category shown as a group header when categories are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationCategory {
    Flagged,
    Informer,
    Broadcast,
    Alerts,
    RecommendedUnits,
    TaskAlerts,
    Messages,
    UnitStatus,
    System,
    EventCreate,
    EventUpdate,
    ContactCreate,
    ContactUpdate,
    Archive,
    SmartAdvisor,
    GeoFence,
    Other,
}

impl NotificationCategory {
    /// All categories in their default rank order
    pub fn all() -> &'static [NotificationCategory] {
        &[
            Self::Flagged,
            Self::Informer,
            Self::Broadcast,
            Self::Alerts,
            Self::RecommendedUnits,
            Self::TaskAlerts,
            Self::Messages,
            Self::UnitStatus,
            Self::System,
            Self::EventCreate,
            Self::EventUpdate,
            Self::ContactCreate,
            Self::ContactUpdate,
            Self::Archive,
            Self::SmartAdvisor,
            Self::GeoFence,
            Self::Other,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Flagged => "NOTIFICATION_CONFIG_FLAGGED_CATEGORY",
            Self::Informer => "INFORMER_NOTIFICATION_CONFIG_CATEGORY",
            Self::Broadcast => "BROADCAST_NOTIFICATION_CONFIG_CATEGORY",
            Self::Alerts => "NOTIFICATION_CONFIG_ALERTS_CATEGORY",
            Self::RecommendedUnits => "NOTIFICATION_CONFIG_RECOMMENDED_UNITS",
            Self::TaskAlerts => "NOTIFICATION_CONFIG_TASK_ALERTS_CATEGORY",
            Self::Messages => "NOTIFICATION_CONFIG_MSG_CATEGORY",
            Self::UnitStatus => "NOTIFICATION_CONFIG_UNIT_STATUS_CATEGORY",
            Self::System => "NOTIFICATION_CONFIG_SYSTEM_CATEGORY",
            Self::EventCreate => "NOTIFICATION_CONFIG_EVENT_CREATE_CATEGORY",
            Self::EventUpdate => "NOTIFICATION_CONFIG_EVENT_UPDATE_CATEGORY",
            Self::ContactCreate => "NOTIFICATION_CONFIG_CONTACT_CREATE_CATEGORY",
            Self::ContactUpdate => "NOTIFICATION_CONFIG_CONTACT_UPDATE_CATEGORY",
            Self::Archive => "NOTIFICATION_CONFIG_ARCHIVE_CATEGORY",
            Self::SmartAdvisor => "SMART_ADVISOR_NOTIFICATION_CONFIG_CATEGORY",
            Self::GeoFence => "GEO_FENCE_NOTIFICATION_CONFIG_CATEGORY",
            Self::Other => "NOTIFICATION_CONFIG_OTHER_CATEGORY",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.to_ascii_lowercase().replace(['-', '_', ' '], "");
        Self::all()
            .iter()
            .copied()
            .find(|c| format!("{c:?}").to_ascii_lowercase() == wanted)
    }
}

/// Position and visibility of one category. Rank is the list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRank {
    pub category: NotificationCategory,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl CategoryRank {
    pub fn new(category: NotificationCategory) -> Self {
        Self {
            category,
            enabled: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_num_per_category() -> i32 {
    DEFAULT_NUM_PER_CATEGORY
}
fn default_category_ranks() -> Vec<CategoryRank> {
    NotificationCategory::all()
        .iter()
        .copied()
        .map(CategoryRank::new)
        .collect()
}

/// Sentinel for `num_per_category` meaning every notification is shown.
pub const SHOW_ALL_PER_CATEGORY: i32 = -1;

pub const DEFAULT_NUM_PER_CATEGORY: i32 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Notification Panel Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Display settings for the notification panel.
///
/// The same value object is used for the site tier, the group tier and the
/// working copy being edited. `use_default` marks a tier that inherits from
/// its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPanelSettings {
    /// Remove a notification from the panel once it has been closed
    #[serde(default)]
    pub auto_remove_after_closed: bool,
    #[serde(default = "default_true")]
    pub unit_status_show_time: bool,
    #[serde(default = "default_true")]
    pub pending_events_show_time: bool,
    #[serde(default)]
    pub duplicate_notification_processing: DuplicateNotification,
    #[serde(default = "default_true")]
    pub show_categories: bool,
    #[serde(default)]
    pub sort_order: NotificationPanelSort,
    #[serde(default = "default_category_ranks")]
    pub category_ranks: Vec<CategoryRank>,
    /// Notifications shown per category, or [`SHOW_ALL_PER_CATEGORY`]
    #[serde(default = "default_num_per_category")]
    pub num_per_category: i32,
    #[serde(default = "default_true")]
    pub enable_animations: bool,
    #[serde(default = "default_true")]
    pub use_flagged: bool,
    #[serde(default = "default_true")]
    pub use_archive: bool,
    /// Inherit every value from the parent tier
    #[serde(default)]
    pub use_default: bool,
}

impl Default for NotificationPanelSettings {
    fn default() -> Self {
        Self {
            auto_remove_after_closed: false,
            unit_status_show_time: true,
            pending_events_show_time: true,
            duplicate_notification_processing: DuplicateNotification::ShowAll,
            show_categories: true,
            sort_order: NotificationPanelSort::Categories,
            category_ranks: default_category_ranks(),
            num_per_category: DEFAULT_NUM_PER_CATEGORY,
            enable_animations: true,
            use_flagged: true,
            use_archive: true,
            use_default: false,
        }
    }
}

impl NotificationPanelSettings {
    /// Built-in system defaults, marked as inherited.
    pub fn system_default() -> Self {
        Self {
            use_default: true,
            ..Self::default()
        }
    }

    /// Copy of these settings with the inheritance marker set to `use_default`.
    pub fn with_use_default(&self, use_default: bool) -> Self {
        Self {
            use_default,
            ..self.clone()
        }
    }

    pub fn shows_all_per_category(&self) -> bool {
        self.num_per_category == SHOW_ALL_PER_CATEGORY
    }

    /// Categories currently enabled, in rank order
    pub fn enabled_categories(&self) -> impl Iterator<Item = NotificationCategory> + '_ {
        self.category_ranks
            .iter()
            .filter(|r| r.enabled)
            .map(|r| r.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_groups() {
        assert!(UserGroup::new(7, "Default Dispatch").is_read_only());
        assert!(!UserGroup::new(8, "Dispatch Default").is_read_only());
        assert!(!UserGroup::site_default().is_read_only());
    }

    #[test]
    fn scope_for_group() {
        assert_eq!(ConfigScope::for_group(DEFAULT_GROUP_ID), ConfigScope::Site);
        assert_eq!(ConfigScope::for_group(4), ConfigScope::Group(4));
        assert_eq!(ConfigScope::Group(4).as_str(), "group");
        assert_eq!(ConfigScope::Group(4).scope_id(), Some(4));
        assert_eq!(ConfigScope::Site.scope_id(), None);
    }

    #[test]
    fn partial_blob_fills_defaults() {
        let settings: NotificationPanelSettings =
            serde_json::from_str(r#"{"showCategories":false,"sortOrder":"PriorityAscending"}"#)
                .unwrap();

        assert!(!settings.show_categories);
        assert_eq!(settings.sort_order, NotificationPanelSort::PriorityAscending);
        assert_eq!(settings.num_per_category, DEFAULT_NUM_PER_CATEGORY);
        assert_eq!(settings.category_ranks.len(), NotificationCategory::all().len());
        assert!(!settings.use_default);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_string(&NotificationPanelSettings::system_default()).unwrap();
        assert!(json.contains("\"autoRemoveAfterClosed\":false"));
        assert!(json.contains("\"useDefault\":true"));
        assert!(json.contains("\"numPerCategory\":3"));
    }

    #[test]
    fn enum_names_parse_loosely() {
        assert_eq!(
            NotificationPanelSort::from_name("priority-asc"),
            Some(NotificationPanelSort::PriorityAscending)
        );
        assert_eq!(
            DuplicateNotification::from_name("newest"),
            Some(DuplicateNotification::DisplayNewest)
        );
        assert_eq!(
            NotificationCategory::from_name("geo_fence"),
            Some(NotificationCategory::GeoFence)
        );
        assert_eq!(NotificationCategory::from_name("nope"), None);
    }

    #[test]
    fn enabled_categories_skip_disabled() {
        let mut settings = NotificationPanelSettings::default();
        settings.category_ranks[0].enabled = false;
        let first = settings.enabled_categories().next();
        assert_eq!(first, Some(NotificationCategory::Informer));
    }
}
