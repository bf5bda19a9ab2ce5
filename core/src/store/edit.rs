//! Field-level edits to the working copy of the settings
//!
//! Every edit is a patch applied to `edited_settings`. The reducer clears the
//! inheritance marker and recomputes the dirty flag after applying one.

use notipanel_types::{
    CategoryRank, DuplicateNotification, NotificationCategory, NotificationPanelSettings,
    NotificationPanelSort, SHOW_ALL_PER_CATEGORY,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEdit {
    ToggleAutoRemoveAfterClosed,
    SetUnitStatusShowTime(bool),
    SetPendingEventsShowTime(bool),
    SetDuplicateNotificationProcessing(DuplicateNotification),
    /// Also switches the sort order to match the grouping mode
    ToggleShowCategories,
    SetSortOrder(NotificationPanelSort),
    SetCategoryRanks(Vec<CategoryRank>),
    MoveCategory { from: usize, to: usize },
    SetCategoryEnabled {
        category: NotificationCategory,
        enabled: bool,
    },
    SetNumPerCategory { value: i32, show_all: bool },
    ToggleEnableAnimations,
    ToggleUseFlagged,
    ToggleUseArchive,
    /// Replace every field at once
    Replace(NotificationPanelSettings),
}

impl SettingsEdit {
    pub fn apply(&self, settings: &mut NotificationPanelSettings) {
        match self {
            Self::ToggleAutoRemoveAfterClosed => {
                settings.auto_remove_after_closed = !settings.auto_remove_after_closed;
            }
            Self::SetUnitStatusShowTime(value) => settings.unit_status_show_time = *value,
            Self::SetPendingEventsShowTime(value) => settings.pending_events_show_time = *value,
            Self::SetDuplicateNotificationProcessing(value) => {
                settings.duplicate_notification_processing = *value;
            }
            Self::ToggleShowCategories => {
                settings.show_categories = !settings.show_categories;
                settings.sort_order = if settings.show_categories {
                    NotificationPanelSort::Categories
                } else {
                    NotificationPanelSort::PriorityAscending
                };
            }
            Self::SetSortOrder(order) => settings.sort_order = *order,
            Self::SetCategoryRanks(ranks) => settings.category_ranks = ranks.clone(),
            Self::MoveCategory { from, to } => {
                let ranks = &mut settings.category_ranks;
                if *from < ranks.len() && from != to {
                    let rank = ranks.remove(*from);
                    let to = (*to).min(ranks.len());
                    ranks.insert(to, rank);
                }
            }
            Self::SetCategoryEnabled { category, enabled } => {
                match settings
                    .category_ranks
                    .iter_mut()
                    .find(|r| r.category == *category)
                {
                    Some(rank) => rank.enabled = *enabled,
                    None => settings.category_ranks.push(CategoryRank {
                        category: *category,
                        enabled: *enabled,
                    }),
                }
            }
            Self::SetNumPerCategory { value, show_all } => {
                settings.num_per_category = clamp_num_per_category(*value, *show_all);
            }
            Self::ToggleEnableAnimations => settings.enable_animations = !settings.enable_animations,
            Self::ToggleUseFlagged => settings.use_flagged = !settings.use_flagged,
            Self::ToggleUseArchive => settings.use_archive = !settings.use_archive,
            Self::Replace(new_settings) => *settings = new_settings.clone(),
        }
    }
}

/// `-1` when showing all, otherwise at least one per category.
pub fn clamp_num_per_category(value: i32, show_all: bool) -> i32 {
    if show_all {
        SHOW_ALL_PER_CATEGORY
    } else {
        value.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_categories_drives_sort_order() {
        let mut settings = NotificationPanelSettings {
            show_categories: false,
            sort_order: NotificationPanelSort::PriorityAscending,
            ..Default::default()
        };

        SettingsEdit::ToggleShowCategories.apply(&mut settings);
        assert!(settings.show_categories);
        assert_eq!(settings.sort_order, NotificationPanelSort::Categories);

        SettingsEdit::ToggleShowCategories.apply(&mut settings);
        assert!(!settings.show_categories);
        assert_eq!(settings.sort_order, NotificationPanelSort::PriorityAscending);
    }

    #[test]
    fn num_per_category_clamps() {
        assert_eq!(clamp_num_per_category(0, false), 1);
        assert_eq!(clamp_num_per_category(-5, false), 1);
        assert_eq!(clamp_num_per_category(7, false), 7);
        assert_eq!(clamp_num_per_category(7, true), SHOW_ALL_PER_CATEGORY);
        assert_eq!(clamp_num_per_category(0, true), SHOW_ALL_PER_CATEGORY);
    }

    #[test]
    fn move_category_reorders() {
        let mut settings = NotificationPanelSettings::default();
        SettingsEdit::MoveCategory { from: 0, to: 2 }.apply(&mut settings);

        let order: Vec<_> = settings.category_ranks.iter().map(|r| r.category).collect();
        assert_eq!(order[0], NotificationCategory::Informer);
        assert_eq!(order[1], NotificationCategory::Broadcast);
        assert_eq!(order[2], NotificationCategory::Flagged);
    }

    #[test]
    fn move_category_out_of_range_is_ignored_or_clamped() {
        let mut settings = NotificationPanelSettings::default();
        let before = settings.clone();
        SettingsEdit::MoveCategory { from: 99, to: 0 }.apply(&mut settings);
        assert_eq!(settings, before);

        SettingsEdit::MoveCategory { from: 0, to: 99 }.apply(&mut settings);
        assert_eq!(
            settings.category_ranks.last().map(|r| r.category),
            Some(NotificationCategory::Flagged)
        );
    }

    #[test]
    fn category_enabled_toggle() {
        let mut settings = NotificationPanelSettings::default();
        SettingsEdit::SetCategoryEnabled {
            category: NotificationCategory::Archive,
            enabled: false,
        }
        .apply(&mut settings);

        assert!(
            !settings
                .enabled_categories()
                .any(|c| c == NotificationCategory::Archive)
        );
    }
}
