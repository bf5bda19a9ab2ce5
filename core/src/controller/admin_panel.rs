//! Admin panel coordination
//!
//! Drives the settings store from user intents: group selection, the create
//! group redirect, save and cancel. Any intent that would leave the current
//! group while edits are pending is held back behind an unsaved-changes
//! dialog until the user picks save, discard or keep editing.

use notipanel_types::UserGroup;
use tracing::{debug, info};

use super::view::{self, PanelView};
use crate::navigation::{CREATE_GROUP_URL, NavigationTarget, parse_navigation_url};
use crate::services::{ConfigService, GroupDirectory, Navigator};
use crate::store::{PanelState, SettingsStore};
use crate::strings::Strings;

/// Intent held back while the unsaved-changes dialog is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    SelectGroup(UserGroup),
    CreateGroup,
    Navigate(NavigationTarget),
}

/// Resolution picked in the unsaved-changes dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Save,
    Discard,
    KeepEditing,
}

pub struct AdminPanel<S, N> {
    store: SettingsStore<S>,
    navigator: N,
    strings: Strings,
    /// Whether the next refresh only needs the selected group's settings
    group_only: bool,
    /// Group whose settings were last loaded
    loaded_group: Option<i64>,
    pending: Option<PendingAction>,
    navigation_attempted: bool,
    selection_attempted: bool,
}

impl<S, N> AdminPanel<S, N>
where
    S: GroupDirectory + ConfigService + 'static,
    N: Navigator,
{
    pub fn new(store: SettingsStore<S>, navigator: N, strings: Strings) -> Self {
        Self {
            store,
            navigator,
            strings,
            group_only: false,
            loaded_group: None,
            pending: None,
            navigation_attempted: false,
            selection_attempted: false,
        }
    }

    pub fn state(&self) -> &PanelState {
        self.store.state()
    }

    pub fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    /// Field mutators are applied through the store directly
    pub fn store_mut(&mut self) -> &mut SettingsStore<S> {
        &mut self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn set_strings(&mut self, strings: Strings) {
        self.strings = strings;
    }

    pub fn view(&self) -> PanelView {
        view::build_view(self.store.state(), &self.strings, self.dialog_open())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Initial load of groups, site and group settings.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Reload settings if the selected group changed since the last load.
    /// Returns true when a load ran.
    pub async fn refresh(&mut self) -> bool {
        let selected = self.store.state().selected_group_id;
        if self.loaded_group == Some(selected) {
            return false;
        }

        self.store.get_settings(self.group_only).await;
        self.group_only = true;
        self.loaded_group = Some(selected);
        true
    }

    /// Force a full reload including the group list and site settings.
    pub async fn reload(&mut self) {
        self.group_only = false;
        self.loaded_group = None;
        self.refresh().await;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation Guard
    // ─────────────────────────────────────────────────────────────────────────

    pub fn should_block_navigation(&self) -> bool {
        self.store.has_changes() && (self.navigation_attempted || self.selection_attempted)
    }

    pub fn dialog_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_action(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    fn intercept(&mut self, action: PendingAction) {
        debug!(?action, "Holding action until unsaved changes are resolved");
        self.pending = Some(action);
    }

    /// Select `group`, or open the dialog when edits are pending.
    /// Returns true when the selection was applied.
    pub async fn request_group_selection(&mut self, group: UserGroup) -> bool {
        if group.id == self.store.state().selected_group_id {
            return true;
        }
        if self.store.has_changes() {
            self.selection_attempted = true;
            self.intercept(PendingAction::SelectGroup(group));
            return false;
        }
        self.select_group(&group).await;
        true
    }

    /// Open the group management view on its create form.
    /// Returns true when navigation happened.
    pub fn create_new_group(&mut self) -> bool {
        if self.store.has_changes() {
            self.navigation_attempted = true;
            self.intercept(PendingAction::CreateGroup);
            return false;
        }
        self.navigate(&parse_navigation_url(CREATE_GROUP_URL));
        true
    }

    /// Leave the panel for `url`, guarded like group creation.
    pub fn request_navigation(&mut self, url: &str) -> bool {
        let target = parse_navigation_url(url);
        if self.store.has_changes() {
            self.navigation_attempted = true;
            self.intercept(PendingAction::Navigate(target));
            return false;
        }
        self.navigate(&target);
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dialog
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn resolve_dialog(&mut self, choice: ConfirmChoice) {
        match choice {
            ConfirmChoice::Save => {
                self.confirm_save().await;
            }
            ConfirmChoice::Discard => self.confirm_discard().await,
            ConfirmChoice::KeepEditing => self.keep_editing(),
        }
    }

    /// Save, then carry out the held action. A failed save drops the held
    /// action and leaves the edits in place with the error banner showing.
    pub async fn confirm_save(&mut self) -> bool {
        let saved = self.store.save_settings().await;
        if saved {
            self.proceed().await;
        } else {
            self.reset_guard();
        }
        saved
    }

    /// Drop the edits, then carry out the held action.
    pub async fn confirm_discard(&mut self) {
        self.store.clear_changes();
        self.proceed().await;
    }

    /// Close the dialog and keep editing.
    pub fn keep_editing(&mut self) {
        self.reset_guard();
    }

    fn reset_guard(&mut self) {
        self.pending = None;
        self.navigation_attempted = false;
        self.selection_attempted = false;
    }

    async fn proceed(&mut self) {
        let pending = self.pending.take();
        self.reset_guard();

        match pending {
            Some(PendingAction::SelectGroup(group)) => self.select_group(&group).await,
            Some(PendingAction::CreateGroup) => {
                self.navigate(&parse_navigation_url(CREATE_GROUP_URL));
            }
            Some(PendingAction::Navigate(target)) => self.navigate(&target),
            None => {}
        }
    }

    async fn select_group(&mut self, group: &UserGroup) {
        debug!(group_id = group.id, name = %group.name, "Selecting group");
        self.store.set_selected_group(group);
        self.refresh().await;
    }

    fn navigate(&self, target: &NavigationTarget) {
        info!(%target, "Navigating away from notification panel settings");
        self.navigator.navigate(target);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save / Cancel
    // ─────────────────────────────────────────────────────────────────────────

    /// Save button. Does nothing while the button is disabled.
    pub async fn save(&mut self) -> bool {
        if !view::save_enabled(self.store.state()) {
            debug!("Save ignored, nothing to save or group is read-only");
            return false;
        }
        let saved = self.store.save_settings().await;
        if saved && !self.store.has_changes() {
            self.reset_guard();
        }
        saved
    }

    /// Cancel button. With the edits gone nothing is left to guard, so any
    /// held action is dropped along with the dialog.
    pub fn cancel(&mut self) {
        if view::cancel_enabled(self.store.state()) {
            self.store.clear_changes();
            self.reset_guard();
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.store.dismiss_notification();
    }

    pub fn process_pending(&mut self) -> usize {
        self.store.process_pending()
    }
}
