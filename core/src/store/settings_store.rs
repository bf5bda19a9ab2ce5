//! Settings store
//!
//! Owns the three-tier panel state and exposes the mutators bound to the
//! editing controls. Remote failures never reach the caller: fetches fall back
//! to the next tier and saves surface through the banner.

use std::sync::Arc;
use std::time::Duration;

use notipanel_types::{
    CategoryRank, DuplicateNotification, NotificationCategory, NotificationPanelSettings,
    NotificationPanelSort, UserGroup,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use super::banner_timer::BannerTimer;
use super::edit::SettingsEdit;
use super::loader::SettingsLoader;
use super::state::{Action, PanelState, SaveError, SaveErrorKind};
use crate::services::{ConfigService, GroupDirectory};
use crate::strings::{self, Strings};

pub struct SettingsStore<S> {
    state: PanelState,
    loader: SettingsLoader<S>,
    save_failed_message: String,
    read_only_message: String,
    events_tx: UnboundedSender<Action>,
    events_rx: UnboundedReceiver<Action>,
    banner_timer: BannerTimer,
}

impl<S> SettingsStore<S>
where
    S: GroupDirectory + ConfigService + 'static,
{
    pub fn new(backend: Arc<S>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut store = Self {
            state: PanelState::new(),
            loader: SettingsLoader::new(backend),
            save_failed_message: String::new(),
            read_only_message: String::new(),
            events_tx,
            events_rx,
            banner_timer: BannerTimer::default(),
        };
        store.set_strings(&Strings::builtin());
        store
    }

    pub fn with_banner_timeout(mut self, timeout: Duration) -> Self {
        self.banner_timer = BannerTimer::new(timeout);
        self
    }

    pub fn with_strings(mut self, strings: &Strings) -> Self {
        self.set_strings(strings);
        self
    }

    fn set_strings(&mut self, strings: &Strings) {
        self.save_failed_message = strings.get(strings::SAVE_FAILED).to_string();
        self.read_only_message = strings.get(strings::DEFAULT_GROUP_READ_ONLY).to_string();
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn has_changes(&self) -> bool {
        self.state.has_changes
    }

    /// Detached loader for hosts that run fetches themselves
    pub fn loader(&self) -> SettingsLoader<S> {
        self.loader.clone()
    }

    pub fn banner_timer_armed(&self) -> bool {
        self.banner_timer.is_armed()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event Queue
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply an action and keep the banner timer in step with visibility.
    pub fn dispatch(&mut self, action: Action) {
        let was_visible = self.state.banner.visible;
        let previous_generation = self.state.banner.generation;

        self.state.apply(action);

        let banner = &self.state.banner;
        if banner.visible && (!was_visible || banner.generation != previous_generation) {
            self.banner_timer.arm(self.events_tx.clone(), banner.generation);
        } else if !banner.visible && was_visible {
            self.banner_timer.cancel();
        }
    }

    /// Apply every queued event without waiting. Returns how many ran.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.events_rx.try_recv() {
            self.dispatch(action);
            processed += 1;
        }
        processed
    }

    /// Wait for the next queued event and apply it.
    pub async fn next_event(&mut self) {
        if let Some(action) = self.events_rx.recv().await {
            self.dispatch(action);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Remote Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Load the tiers for the current selection. Unless `group_only`, the
    /// group list and site settings are refreshed first.
    pub async fn get_settings(&mut self, group_only: bool) {
        let loader = self.loader.clone();
        if !group_only {
            self.dispatch(loader.load_groups().await);
            self.dispatch(loader.load_site_settings().await);
        }
        let group_id = self.state.selected_group_id;
        debug!(group_id, group_only, "Loading notification panel settings");
        self.dispatch(loader.load_group_settings(group_id).await);
    }

    /// Persist the working copy. Returns true when the save succeeded.
    pub async fn save_settings(&mut self) -> bool {
        let group_id = self.state.selected_group_id;
        let scope = self.state.scope();

        if self.state.selected_group_read_only() {
            self.dispatch(Action::ShowError(SaveError {
                kind: SaveErrorKind::ReadOnlyGroup,
                message: self.read_only_message.clone(),
            }));
            return false;
        }

        let settings = self.state.edited_settings.clone();
        match self.loader.save(scope, &settings).await {
            Ok(()) => {
                info!(%scope, "Saved notification panel settings");
                self.dispatch(Action::Saved { group_id, settings });
                true
            }
            Err(e) => {
                error!(error = %e, %scope, "Failed to save notification panel settings");
                let error = if e.is_read_only() {
                    SaveError {
                        kind: SaveErrorKind::ReadOnlyGroup,
                        message: self.read_only_message.clone(),
                    }
                } else {
                    SaveError {
                        kind: SaveErrorKind::Generic,
                        message: self.save_failed_message.clone(),
                    }
                };
                self.dispatch(Action::ShowError(error));
                false
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Local Operations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_selected_group(&mut self, group: &UserGroup) {
        self.dispatch(Action::SetSelectedGroup(group.id));
    }

    pub fn clear_changes(&mut self) {
        self.dispatch(Action::Clear);
    }

    pub fn dismiss_notification(&mut self) {
        self.dispatch(Action::HideNotification);
    }

    pub fn toggle_use_default(&mut self) {
        self.dispatch(Action::ToggleUseDefault);
    }

    pub fn edit(&mut self, edit: SettingsEdit) {
        self.dispatch(Action::Edit(edit));
    }

    pub fn set_edited_settings(&mut self, settings: NotificationPanelSettings) {
        self.edit(SettingsEdit::Replace(settings));
    }

    pub fn toggle_auto_remove_after_closed(&mut self) {
        self.edit(SettingsEdit::ToggleAutoRemoveAfterClosed);
    }

    pub fn set_unit_status_show_time(&mut self, value: bool) {
        self.edit(SettingsEdit::SetUnitStatusShowTime(value));
    }

    pub fn set_pending_events_show_time(&mut self, value: bool) {
        self.edit(SettingsEdit::SetPendingEventsShowTime(value));
    }

    pub fn set_duplicate_notification_processing(&mut self, value: DuplicateNotification) {
        self.edit(SettingsEdit::SetDuplicateNotificationProcessing(value));
    }

    pub fn toggle_show_categories(&mut self) {
        self.edit(SettingsEdit::ToggleShowCategories);
    }

    pub fn set_sort_order(&mut self, order: NotificationPanelSort) {
        self.edit(SettingsEdit::SetSortOrder(order));
    }

    pub fn set_category_ranks(&mut self, ranks: Vec<CategoryRank>) {
        self.edit(SettingsEdit::SetCategoryRanks(ranks));
    }

    pub fn move_category(&mut self, from: usize, to: usize) {
        self.edit(SettingsEdit::MoveCategory { from, to });
    }

    pub fn set_category_enabled(&mut self, category: NotificationCategory, enabled: bool) {
        self.edit(SettingsEdit::SetCategoryEnabled { category, enabled });
    }

    pub fn set_num_per_category(&mut self, value: i32, show_all: bool) {
        self.edit(SettingsEdit::SetNumPerCategory { value, show_all });
    }

    pub fn toggle_enable_animations(&mut self) {
        self.edit(SettingsEdit::ToggleEnableAnimations);
    }

    pub fn toggle_use_flagged(&mut self) {
        self.edit(SettingsEdit::ToggleUseFlagged);
    }

    pub fn toggle_use_archive(&mut self) {
        self.edit(SettingsEdit::ToggleUseArchive);
    }
}
