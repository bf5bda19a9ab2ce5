//! Tests for AdminPanel loading, navigation guard and dialog resolution

use std::sync::Arc;

use notipanel_types::{ConfigScope, DEFAULT_GROUP_ID, NotificationPanelSettings, UserGroup};

use super::{AdminPanel, ConfirmChoice, PendingAction};
use crate::store::SettingsStore;
use crate::strings::Strings;
use crate::test_support::{FakeBackend, RecordingNavigator};

type Panel = AdminPanel<FakeBackend, RecordingNavigator>;

fn backend() -> Arc<FakeBackend> {
    Arc::new(FakeBackend::with_groups(&[
        (10, "Dispatch"),
        (11, "Default Dispatch"),
    ]))
}

async fn mounted(backend: Arc<FakeBackend>) -> Panel {
    let store = SettingsStore::new(backend);
    let mut panel = AdminPanel::new(store, RecordingNavigator::default(), Strings::builtin());
    panel.mount().await;
    panel
}

fn dispatch() -> UserGroup {
    UserGroup::new(10, "Dispatch")
}

#[tokio::test]
async fn test_mount_loads_everything_once() {
    let mut panel = mounted(backend()).await;

    assert_eq!(panel.state().groups.len(), 3);
    assert!(!panel.refresh().await, "unchanged selection should not reload");
}

#[tokio::test]
async fn test_clean_selection_switches_group() {
    let backend = backend();
    backend.store(
        ConfigScope::Group(10),
        &NotificationPanelSettings {
            num_per_category: 6,
            ..Default::default()
        },
    );
    let mut panel = mounted(backend).await;

    assert!(panel.request_group_selection(dispatch()).await);

    assert_eq!(panel.state().selected_group_id, 10);
    assert_eq!(panel.state().group_settings.num_per_category, 6);
    assert!(!panel.dialog_open());
}

#[tokio::test]
async fn test_dirty_selection_is_intercepted() {
    let mut panel = mounted(backend()).await;
    panel.store_mut().toggle_use_flagged();

    assert!(!panel.request_group_selection(dispatch()).await);

    assert_eq!(panel.state().selected_group_id, DEFAULT_GROUP_ID);
    assert!(panel.dialog_open());
    assert!(panel.should_block_navigation());
    assert_eq!(
        panel.pending_action(),
        Some(&PendingAction::SelectGroup(dispatch()))
    );
    assert!(panel.view().dialog.is_some());
}

#[tokio::test]
async fn test_discard_then_select() {
    let mut panel = mounted(backend()).await;
    panel.store_mut().toggle_use_flagged();
    panel.request_group_selection(dispatch()).await;

    panel.resolve_dialog(ConfirmChoice::Discard).await;

    assert_eq!(panel.state().selected_group_id, 10);
    assert!(!panel.state().has_changes);
    assert!(!panel.dialog_open());
    assert!(!panel.should_block_navigation());
}

#[tokio::test]
async fn test_create_group_navigates_when_clean() {
    let mut panel = mounted(backend()).await;

    assert!(panel.create_new_group());

    let navigator = panel.navigator();
    assert_eq!(
        navigator.last_path().as_deref(),
        Some("userGroupManagementView")
    );
    let params = navigator.last_params();
    assert_eq!(params.get("select").map(String::as_str), Some("group"));
    assert_eq!(params.get("id").map(String::as_str), Some("CreateNew"));
}

#[tokio::test]
async fn test_create_group_while_dirty_then_save() {
    let backend = backend();
    let mut panel = mounted(Arc::clone(&backend)).await;
    panel.store_mut().set_num_per_category(8, false);

    assert!(!panel.create_new_group());
    assert!(panel.should_block_navigation());
    assert!(panel.navigator().last_path().is_none());

    panel.resolve_dialog(ConfirmChoice::Save).await;

    assert_eq!(
        backend.stored(ConfigScope::Site).map(|s| s.num_per_category),
        Some(8)
    );
    assert!(!panel.should_block_navigation());
    assert!(!panel.dialog_open());
    assert_eq!(
        panel.navigator().last_path().as_deref(),
        Some("userGroupManagementView")
    );
}

#[tokio::test]
async fn test_create_group_while_dirty_then_discard() {
    let mut panel = mounted(backend()).await;
    panel.store_mut().toggle_use_archive();
    panel.create_new_group();

    panel.resolve_dialog(ConfirmChoice::Discard).await;

    assert!(!panel.state().has_changes);
    assert!(!panel.should_block_navigation());
    assert_eq!(panel.navigator().visits.borrow().len(), 1);
}

#[tokio::test]
async fn test_keep_editing_keeps_changes() {
    let mut panel = mounted(backend()).await;
    panel.store_mut().toggle_use_archive();
    panel.create_new_group();

    panel.resolve_dialog(ConfirmChoice::KeepEditing).await;

    assert!(panel.state().has_changes);
    assert!(!panel.dialog_open());
    assert!(!panel.should_block_navigation());
    assert!(panel.navigator().last_path().is_none());
}

#[tokio::test]
async fn test_failed_save_in_dialog_stays_put() {
    let backend = backend();
    let mut panel = mounted(Arc::clone(&backend)).await;
    panel.store_mut().toggle_use_archive();
    panel.request_group_selection(dispatch()).await;

    backend.fail_puts(true);
    panel.resolve_dialog(ConfirmChoice::Save).await;

    assert_eq!(panel.state().selected_group_id, DEFAULT_GROUP_ID);
    assert!(panel.state().has_changes);
    assert!(!panel.dialog_open());
    assert!(panel.state().banner.error.is_some());
}

#[tokio::test]
async fn test_default_named_group_disables_save() {
    let backend = backend();
    let mut panel = mounted(Arc::clone(&backend)).await;
    panel
        .request_group_selection(UserGroup::new(11, "Default Dispatch"))
        .await;
    panel.store_mut().toggle_enable_animations();

    let view = panel.view();
    assert!(!view.save_enabled);
    assert!(view.cancel_enabled);

    assert!(!panel.save().await);
    assert_eq!(backend.put_count(), 0);
}

#[tokio::test]
async fn test_cancel_restores_saved_values() {
    let mut panel = mounted(backend()).await;
    let before = panel.state().group_settings.clone();
    panel.store_mut().toggle_show_categories();

    panel.cancel();

    assert_eq!(panel.state().edited_settings, before);
    assert!(!panel.view().cancel_enabled);
}

#[tokio::test]
async fn test_guarded_external_navigation() {
    let mut panel = mounted(backend()).await;
    panel.store_mut().toggle_use_archive();

    assert!(!panel.request_navigation("reports?tab=daily"));
    panel.confirm_discard().await;

    let navigator = panel.navigator();
    assert_eq!(navigator.last_path().as_deref(), Some("reports"));
    assert_eq!(
        navigator.last_params().get("tab").map(String::as_str),
        Some("daily")
    );
}

#[tokio::test]
async fn test_cancel_closes_open_dialog() {
    let backend = backend();
    let mut panel = mounted(Arc::clone(&backend)).await;
    panel.store_mut().toggle_use_flagged();
    panel.create_new_group();
    assert!(panel.dialog_open());

    panel.cancel();

    assert!(!panel.state().has_changes);
    assert!(!panel.dialog_open());
    assert!(panel.view().dialog.is_none());
    assert_eq!(panel.pending_action(), None);

    panel.store_mut().toggle_use_flagged();
    assert!(!panel.should_block_navigation());
    assert_eq!(backend.put_count(), 0);
    assert!(panel.navigator().last_path().is_none());
}
