//! Panel state and reducer
//!
//! All transitions are synchronous applications of an [`Action`] to a
//! [`PanelState`]. Async work (fetching, saving) happens outside and feeds
//! its results back in as actions.

use notipanel_types::{ConfigScope, DEFAULT_GROUP_ID, NotificationPanelSettings, UserGroup};

use super::edit::SettingsEdit;

// ─────────────────────────────────────────────────────────────────────────────
// Save Banner
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveErrorKind {
    Generic,
    /// The selected group is one of the read-only "Default" groups
    ReadOnlyGroup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveError {
    pub kind: SaveErrorKind,
    pub message: String,
}

/// Save-result banner. `generation` increases every time the banner is
/// shown so that a late auto-hide for an earlier showing can be ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    pub visible: bool,
    pub error: Option<SaveError>,
    pub generation: u64,
}

impl Banner {
    fn show(&mut self, error: Option<SaveError>) {
        self.visible = true;
        self.error = error;
        self.generation += 1;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.error = None;
    }

    /// Error message, or empty when the last save succeeded
    pub fn error_message(&self) -> &str {
        self.error.as_ref().map(|e| e.message.as_str()).unwrap_or("")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Actions
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetGroups(Vec<UserGroup>),
    SetSiteSettings(NotificationPanelSettings),
    /// Result of a group settings fetch, tagged with the group it was issued for
    SetGroupSettings {
        group_id: i64,
        settings: Option<NotificationPanelSettings>,
    },
    SetSelectedGroup(i64),
    Edit(SettingsEdit),
    ToggleUseDefault,
    /// A save for `group_id` persisted `settings`
    Saved {
        group_id: i64,
        settings: NotificationPanelSettings,
    },
    Clear,
    HideNotification,
    /// Auto-hide timer for the given banner generation elapsed
    BannerExpired(u64),
    ShowError(SaveError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Panel State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub groups: Vec<UserGroup>,
    pub selected_group_id: i64,
    pub has_changes: bool,
    /// Last-saved settings of the selected group
    pub group_settings: NotificationPanelSettings,
    /// Site-wide baseline
    pub site_settings: NotificationPanelSettings,
    /// Working copy bound to the editing controls
    pub edited_settings: NotificationPanelSettings,
    pub banner: Banner,
    /// Values replaced by the last "use default" toggle, restored when it is
    /// toggled back off without other edits in between
    inherited_over: Option<NotificationPanelSettings>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            selected_group_id: DEFAULT_GROUP_ID,
            has_changes: false,
            group_settings: NotificationPanelSettings::default(),
            site_settings: NotificationPanelSettings::default(),
            edited_settings: NotificationPanelSettings::default(),
            banner: Banner::default(),
            inherited_over: None,
        }
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_site_selected(&self) -> bool {
        self.selected_group_id == DEFAULT_GROUP_ID
    }

    pub fn scope(&self) -> ConfigScope {
        ConfigScope::for_group(self.selected_group_id)
    }

    pub fn selected_group(&self) -> Option<&UserGroup> {
        self.groups.iter().find(|g| g.id == self.selected_group_id)
    }

    /// True when the selected group is a read-only "Default" group
    pub fn selected_group_read_only(&self) -> bool {
        self.selected_group().is_some_and(UserGroup::is_read_only)
    }

    /// Settings a "use default" toggle inherits from: built-in defaults for
    /// the site tier, the site settings for every group.
    pub fn parent_settings(&self) -> NotificationPanelSettings {
        if self.is_site_selected() {
            NotificationPanelSettings::default()
        } else {
            self.site_settings.clone()
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetGroups(groups) => self.groups = groups,

            Action::SetSiteSettings(settings) => self.site_settings = settings,

            Action::SetGroupSettings { group_id, settings } => {
                if group_id != self.selected_group_id {
                    tracing::debug!(
                        group_id,
                        selected = self.selected_group_id,
                        "Discarding settings for superseded group selection"
                    );
                    return;
                }

                let resolved = match settings {
                    _ if self.is_site_selected() => self.site_settings.clone(),
                    Some(stored) if !stored.use_default => stored,
                    _ => self.site_settings.with_use_default(true),
                };

                self.group_settings = resolved;
                self.edited_settings = self.group_settings.clone();
                self.inherited_over = None;
                self.has_changes = false;
            }

            Action::SetSelectedGroup(id) => self.selected_group_id = id,

            Action::Edit(edit) => {
                edit.apply(&mut self.edited_settings);
                self.edited_settings.use_default = false;
                self.inherited_over = None;
                self.refresh_has_changes();
            }

            Action::ToggleUseDefault => {
                if self.edited_settings.use_default {
                    self.edited_settings = match self.inherited_over.take() {
                        Some(previous) => previous.with_use_default(false),
                        None => self.edited_settings.with_use_default(false),
                    };
                } else {
                    let parent = self.parent_settings().with_use_default(true);
                    self.inherited_over =
                        Some(std::mem::replace(&mut self.edited_settings, parent));
                }
                self.refresh_has_changes();
            }

            Action::Saved { group_id, settings } => {
                if group_id == self.selected_group_id {
                    if self.is_site_selected() {
                        self.site_settings = settings.clone();
                    }
                    self.group_settings = settings;
                    self.inherited_over = None;
                    self.refresh_has_changes();
                }
                self.banner.show(None);
            }

            Action::Clear => {
                self.edited_settings = self.group_settings.clone();
                self.inherited_over = None;
                self.has_changes = false;
            }

            Action::HideNotification => self.banner.hide(),

            Action::BannerExpired(generation) => {
                if self.banner.visible && self.banner.generation == generation {
                    self.banner.hide();
                }
            }

            Action::ShowError(error) => self.banner.show(Some(error)),
        }
    }

    fn refresh_has_changes(&mut self) {
        self.has_changes = self.edited_settings != self.group_settings;
    }
}
