//! Localized display strings for the settings panel
//!
//! The panel resolves every key it needs once per render pass through a
//! [`Localizer`]. Missing translations fall back to the key itself.

use std::collections::HashMap;

use phf::phf_map;

use crate::services::Localizer;

pub const SAVE: &str = "SAVE";
pub const CANCEL: &str = "CANCEL";
pub const SAVE_FAILED: &str = "NOTIFICATION_CONFIG_SAVE_FAILED";
pub const SAVE_SUCCESS: &str = "NOTIFICATION_CONFIG_SAVE_SUCCESS";
pub const DEFAULT_GROUP_READ_ONLY: &str = "NOTIFICATION_CONFIG_DEFAULT_GROUP_READ_ONLY";
pub const CREATE_GROUP: &str = "NOTIFICATION_CONFIG_CREATE_GROUP_BTN";
pub const GROUPS: &str = "NOTIFICATION_PANEL_SETTINGS_GROUPS";
pub const DISPLAY_SETTINGS: &str = "NOTIFICATION_DISPLAY_SETTINGS";
pub const AUTO_DISPLAY_DEFAULT: &str = "NOTIFICATION_AUTO_DISPLAY_DEFAULT";
pub const UNSAVED_TITLE: &str = "NOTIFICATION_PANEL_SETTINGS_UNSAVED_TITLE";
pub const UNSAVED_MESSAGE: &str = "NOTIFICATION_PANEL_SETTINGS_UNSAVED_MSG";
pub const DISCARD: &str = "NOTIFICATION_PANEL_SETTINGS_DISCARD";
pub const KEEP_EDITING: &str = "NOTIFICATION_PANEL_SETTINGS_KEEP_EDITING";

/// Every key the panel renders.
pub static PANEL_STRING_KEYS: &[&str] = &[
    SAVE,
    CANCEL,
    SAVE_FAILED,
    SAVE_SUCCESS,
    DEFAULT_GROUP_READ_ONLY,
    CREATE_GROUP,
    GROUPS,
    DISPLAY_SETTINGS,
    AUTO_DISPLAY_DEFAULT,
    UNSAVED_TITLE,
    UNSAVED_MESSAGE,
    DISCARD,
    KEEP_EDITING,
    "NOTIFICATION_PANEL_SETTINGS",
    "NOTIFICATION_PANEL_SETTINGS_USE_DEFAULT",
    "NOTIFICATION_PANEL_SETTINGS_ENABLE_FLAGGED",
    "NOTIFICATION_PANEL_SETTINGS_MOVE_ACKNOWLEDGED",
    "NOTIFICATION_PANEL_SETTINGS_AUTO_REMOVE",
    "NOTIFICATION_PANEL_SETTINGS_ENABLE_CATEGORIES",
    "NOTIFICATION_PANEL_SETTINGS_UNIT_STATUS",
    "NOTIFICATION_PANEL_SETTINGS_PENDING_EVENTS",
    "NOTIFICATION_PANEL_SETTINGS_SHOW_TIME",
    "NOTIFICATION_PANEL_SETTINGS_CATEGORY_ORDER",
    "NOTIFICATION_PANEL_SETTINGS_NUM_PER_CATEGORY",
    "NOTIFICATION_PANEL_SETTINGS_SHOW_ALL",
    "NOTIFICATION_PANEL_SETTINGS_ENABLE_ANIMATIONS",
    "NOTIFICATION_PANEL_SETTINGS_DUPLICATE_NOTIFICATION_PROCESS",
    "NOTIFICATION_PANEL_SETTINGS_SHOW_ALL_NOTIFICATIONS",
    "NOTIFICATION_PANEL_SETTINGS_DISPLAY_OLDEST_NOTIFICATIONS",
    "NOTIFICATION_PANEL_SETTINGS_DISPLAY_NEWEST_NOTIFICATIONS",
    "NOTIFICATION_PANEL_SORT_OPTIONS",
    "NOTIFICATION_PANEL_SORT_CATEGORIES",
    "NOTIFICATION_PANEL_SORT_PRIORITY_ASC",
    "NOTIFICATION_PANEL_SORT_PRIORITY_DESC",
    "NOTIFICATION_PANEL_SORT_NEWEST",
    "NOTIFICATION_PANEL_SORT_OLDEST",
    "NOTIFICATION_CONFIG_FLAGGED_CATEGORY",
    "INFORMER_NOTIFICATION_CONFIG_CATEGORY",
    "BROADCAST_NOTIFICATION_CONFIG_CATEGORY",
    "NOTIFICATION_CONFIG_ALERTS_CATEGORY",
    "NOTIFICATION_CONFIG_RECOMMENDED_UNITS",
    "NOTIFICATION_CONFIG_TASK_ALERTS_CATEGORY",
    "NOTIFICATION_CONFIG_MSG_CATEGORY",
    "NOTIFICATION_CONFIG_UNIT_STATUS_CATEGORY",
    "NOTIFICATION_CONFIG_SYSTEM_CATEGORY",
    "NOTIFICATION_CONFIG_EVENT_CREATE_CATEGORY",
    "NOTIFICATION_CONFIG_EVENT_UPDATE_CATEGORY",
    "NOTIFICATION_CONFIG_CONTACT_CREATE_CATEGORY",
    "NOTIFICATION_CONFIG_CONTACT_UPDATE_CATEGORY",
    "NOTIFICATION_CONFIG_ARCHIVE_CATEGORY",
    "SMART_ADVISOR_NOTIFICATION_CONFIG_CATEGORY",
    "GEO_FENCE_NOTIFICATION_CONFIG_CATEGORY",
    "NOTIFICATION_CONFIG_OTHER_CATEGORY",
];

static ENGLISH: phf::Map<&'static str, &'static str> = phf_map! {
    "SAVE" => "Save",
    "CANCEL" => "Cancel",
    "NOTIFICATION_CONFIG_SAVE_FAILED" => "Failed to save notification settings",
    "NOTIFICATION_CONFIG_SAVE_SUCCESS" => "Notification settings saved",
    "NOTIFICATION_CONFIG_DEFAULT_GROUP_READ_ONLY" => "Default groups cannot be modified",
    "NOTIFICATION_CONFIG_CREATE_GROUP_BTN" => "Create New Group",
    "NOTIFICATION_PANEL_SETTINGS_GROUPS" => "Groups",
    "NOTIFICATION_DISPLAY_SETTINGS" => "Notification Display Settings",
    "NOTIFICATION_AUTO_DISPLAY_DEFAULT" => "Groups without their own settings use the Default settings",
    "NOTIFICATION_PANEL_SETTINGS_UNSAVED_TITLE" => "Unsaved Changes",
    "NOTIFICATION_PANEL_SETTINGS_UNSAVED_MSG" => "You have unsaved changes. Save them before continuing?",
    "NOTIFICATION_PANEL_SETTINGS_DISCARD" => "Discard",
    "NOTIFICATION_PANEL_SETTINGS_KEEP_EDITING" => "Keep Editing",
    "NOTIFICATION_PANEL_SETTINGS" => "Notification Panel Settings",
    "NOTIFICATION_PANEL_SETTINGS_USE_DEFAULT" => "Use Default",
    "NOTIFICATION_PANEL_SETTINGS_ENABLE_FLAGGED" => "Enable flagged notifications",
    "NOTIFICATION_PANEL_SETTINGS_MOVE_ACKNOWLEDGED" => "Move acknowledged notifications to archive",
    "NOTIFICATION_PANEL_SETTINGS_AUTO_REMOVE" => "Remove notifications after closing",
    "NOTIFICATION_PANEL_SETTINGS_ENABLE_CATEGORIES" => "Group notifications by category",
    "NOTIFICATION_PANEL_SETTINGS_UNIT_STATUS" => "Unit status",
    "NOTIFICATION_PANEL_SETTINGS_PENDING_EVENTS" => "Pending events",
    "NOTIFICATION_PANEL_SETTINGS_SHOW_TIME" => "Show time",
    "NOTIFICATION_PANEL_SETTINGS_CATEGORY_ORDER" => "Category Order",
    "NOTIFICATION_PANEL_SETTINGS_NUM_PER_CATEGORY" => "Notifications per category",
    "NOTIFICATION_PANEL_SETTINGS_SHOW_ALL" => "Show all",
    "NOTIFICATION_PANEL_SETTINGS_ENABLE_ANIMATIONS" => "Enable animations",
    "NOTIFICATION_PANEL_SETTINGS_DUPLICATE_NOTIFICATION_PROCESS" => "Duplicate notifications",
    "NOTIFICATION_PANEL_SETTINGS_SHOW_ALL_NOTIFICATIONS" => "Show all notifications",
    "NOTIFICATION_PANEL_SETTINGS_DISPLAY_OLDEST_NOTIFICATIONS" => "Display oldest notification",
    "NOTIFICATION_PANEL_SETTINGS_DISPLAY_NEWEST_NOTIFICATIONS" => "Display newest notification",
    "NOTIFICATION_PANEL_SORT_OPTIONS" => "Sort",
    "NOTIFICATION_PANEL_SORT_CATEGORIES" => "Categories",
    "NOTIFICATION_PANEL_SORT_PRIORITY_ASC" => "Priority (ascending)",
    "NOTIFICATION_PANEL_SORT_PRIORITY_DESC" => "Priority (descending)",
    "NOTIFICATION_PANEL_SORT_NEWEST" => "Newest first",
    "NOTIFICATION_PANEL_SORT_OLDEST" => "Oldest first",
    "NOTIFICATION_CONFIG_FLAGGED_CATEGORY" => "Flagged",
    "INFORMER_NOTIFICATION_CONFIG_CATEGORY" => "Informer",
    "BROADCAST_NOTIFICATION_CONFIG_CATEGORY" => "Broadcast",
    "NOTIFICATION_CONFIG_ALERTS_CATEGORY" => "Alerts",
    "NOTIFICATION_CONFIG_RECOMMENDED_UNITS" => "Recommended Units",
    "NOTIFICATION_CONFIG_TASK_ALERTS_CATEGORY" => "Task Alerts",
    "NOTIFICATION_CONFIG_MSG_CATEGORY" => "Messages",
    "NOTIFICATION_CONFIG_UNIT_STATUS_CATEGORY" => "Unit Status",
    "NOTIFICATION_CONFIG_SYSTEM_CATEGORY" => "System",
    "NOTIFICATION_CONFIG_EVENT_CREATE_CATEGORY" => "Event Created",
    "NOTIFICATION_CONFIG_EVENT_UPDATE_CATEGORY" => "Event Updated",
    "NOTIFICATION_CONFIG_CONTACT_CREATE_CATEGORY" => "Contact Created",
    "NOTIFICATION_CONFIG_CONTACT_UPDATE_CATEGORY" => "Contact Updated",
    "NOTIFICATION_CONFIG_ARCHIVE_CATEGORY" => "Archive",
    "SMART_ADVISOR_NOTIFICATION_CONFIG_CATEGORY" => "Smart Advisor",
    "GEO_FENCE_NOTIFICATION_CONFIG_CATEGORY" => "Geofence",
    "NOTIFICATION_CONFIG_OTHER_CATEGORY" => "Other",
};

/// Localizer backed by the compiled-in English table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocalizer;

impl Localizer for BuiltinLocalizer {
    fn resolve(&self, keys: &[&str]) -> HashMap<String, String> {
        keys.iter()
            .filter_map(|key| ENGLISH.get(*key).map(|text| (key.to_string(), text.to_string())))
            .collect()
    }
}

/// Resolved display strings for one render pass.
#[derive(Debug, Clone, Default)]
pub struct Strings {
    table: HashMap<String, String>,
}

impl Strings {
    /// Resolve all panel keys through the given localizer
    pub fn load(localizer: &impl Localizer) -> Self {
        Self {
            table: localizer.resolve(PANEL_STRING_KEYS),
        }
    }

    pub fn builtin() -> Self {
        Self::load(&BuiltinLocalizer)
    }

    /// Display text for `key`, or the key itself when untranslated
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.get(key).map(String::as_str).unwrap_or(key)
    }
}
