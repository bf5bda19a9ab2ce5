//! Render model for the admin panel
//!
//! Turns the store state and resolved strings into everything a host needs to
//! draw the panel: group list, field rows, button states, banner and dialog.

use notipanel_types::{NotificationPanelSettings, UserGroup};

use crate::store::{PanelState, SaveErrorKind};
use crate::strings::{self, Strings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOption {
    pub id: i64,
    pub name: String,
    pub selected: bool,
    pub read_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub kind: BannerKind,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: String,
    pub message: String,
    pub save_label: String,
    pub discard_label: String,
    pub keep_label: String,
}

/// One labelled setting line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub title: String,
    pub groups: Vec<GroupOption>,
    pub use_default: bool,
    pub fields: Vec<FieldRow>,
    pub categories: Vec<CategoryRow>,
    pub save_enabled: bool,
    pub cancel_enabled: bool,
    pub banner: Option<BannerView>,
    pub dialog: Option<DialogView>,
}

/// Save needs pending edits and a writable group
pub fn save_enabled(state: &PanelState) -> bool {
    state.has_changes && !state.selected_group_read_only()
}

pub fn cancel_enabled(state: &PanelState) -> bool {
    state.has_changes
}

/// Groups for the selector: Default first, the rest by name.
pub fn sorted_groups(groups: &[UserGroup]) -> Vec<UserGroup> {
    let mut sorted = groups.to_vec();
    sorted.sort_by(|a, b| {
        b.is_site_default()
            .cmp(&a.is_site_default())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

/// Banner contents. An error always wins over the success state and a
/// read-only refusal gets its own title.
pub fn banner_view(state: &PanelState, strings: &Strings) -> Option<BannerView> {
    let banner = &state.banner;
    if !banner.visible {
        return None;
    }

    let view = match &banner.error {
        Some(error) if error.kind == SaveErrorKind::ReadOnlyGroup => BannerView {
            kind: BannerKind::Error,
            title: strings.get(strings::DEFAULT_GROUP_READ_ONLY).to_string(),
        },
        Some(_) => BannerView {
            kind: BannerKind::Error,
            title: strings.get(strings::SAVE_FAILED).to_string(),
        },
        None => BannerView {
            kind: BannerKind::Success,
            title: strings.get(strings::SAVE_SUCCESS).to_string(),
        },
    };
    Some(view)
}

fn dialog_view(strings: &Strings) -> DialogView {
    DialogView {
        title: strings.get(strings::UNSAVED_TITLE).to_string(),
        message: strings.get(strings::UNSAVED_MESSAGE).to_string(),
        save_label: strings.get(strings::SAVE).to_string(),
        discard_label: strings.get(strings::DISCARD).to_string(),
        keep_label: strings.get(strings::KEEP_EDITING).to_string(),
    }
}

fn on_off(value: bool) -> String {
    let text = if value { "on" } else { "off" };
    text.to_string()
}

fn field_rows(settings: &NotificationPanelSettings, strings: &Strings) -> Vec<FieldRow> {
    let row = |key: &str, value: String| FieldRow {
        label: strings.get(key).to_string(),
        value,
    };
    let show_time = strings.get("NOTIFICATION_PANEL_SETTINGS_SHOW_TIME");

    let num_per_category = if settings.shows_all_per_category() {
        strings.get("NOTIFICATION_PANEL_SETTINGS_SHOW_ALL").to_string()
    } else {
        settings.num_per_category.to_string()
    };

    vec![
        row("NOTIFICATION_PANEL_SETTINGS_ENABLE_FLAGGED", on_off(settings.use_flagged)),
        row("NOTIFICATION_PANEL_SETTINGS_MOVE_ACKNOWLEDGED", on_off(settings.use_archive)),
        row(
            "NOTIFICATION_PANEL_SETTINGS_AUTO_REMOVE",
            on_off(settings.auto_remove_after_closed),
        ),
        row(
            "NOTIFICATION_PANEL_SETTINGS_ENABLE_CATEGORIES",
            on_off(settings.show_categories),
        ),
        row(
            "NOTIFICATION_PANEL_SORT_OPTIONS",
            strings.get(settings.sort_order.label_key()).to_string(),
        ),
        FieldRow {
            label: format!(
                "{} - {}",
                strings.get("NOTIFICATION_PANEL_SETTINGS_UNIT_STATUS"),
                show_time
            ),
            value: on_off(settings.unit_status_show_time),
        },
        FieldRow {
            label: format!(
                "{} - {}",
                strings.get("NOTIFICATION_PANEL_SETTINGS_PENDING_EVENTS"),
                show_time
            ),
            value: on_off(settings.pending_events_show_time),
        },
        row("NOTIFICATION_PANEL_SETTINGS_NUM_PER_CATEGORY", num_per_category),
        row(
            "NOTIFICATION_PANEL_SETTINGS_DUPLICATE_NOTIFICATION_PROCESS",
            strings
                .get(settings.duplicate_notification_processing.label_key())
                .to_string(),
        ),
        row(
            "NOTIFICATION_PANEL_SETTINGS_ENABLE_ANIMATIONS",
            on_off(settings.enable_animations),
        ),
    ]
}

pub fn build_view(state: &PanelState, strings: &Strings, dialog_open: bool) -> PanelView {
    let settings = &state.edited_settings;

    let groups = sorted_groups(&state.groups)
        .into_iter()
        .map(|g| GroupOption {
            selected: g.id == state.selected_group_id,
            read_only: g.is_read_only(),
            id: g.id,
            name: g.name,
        })
        .collect();

    let categories = settings
        .category_ranks
        .iter()
        .map(|rank| CategoryRow {
            label: strings.get(rank.category.label_key()).to_string(),
            enabled: rank.enabled,
        })
        .collect();

    PanelView {
        title: strings.get("NOTIFICATION_PANEL_SETTINGS").to_string(),
        groups,
        use_default: settings.use_default,
        fields: field_rows(settings, strings),
        categories,
        save_enabled: save_enabled(state),
        cancel_enabled: cancel_enabled(state),
        banner: banner_view(state, strings),
        dialog: dialog_open.then(|| dialog_view(strings)),
    }
}
