//! Tests for SettingsStore remote orchestration and the banner timer

use std::sync::Arc;
use std::time::Duration;

use notipanel_types::{
    ConfigScope, DEFAULT_GROUP_ID, NotificationPanelSettings, NotificationPanelSort, UserGroup,
};

use super::{Action, SaveError, SaveErrorKind, SettingsStore};
use crate::test_support::FakeBackend;

fn backend() -> Arc<FakeBackend> {
    Arc::new(FakeBackend::with_groups(&[
        (10, "Dispatch"),
        (11, "Default Dispatch"),
        (12, "Admins"),
    ]))
}

fn custom_site() -> NotificationPanelSettings {
    NotificationPanelSettings {
        show_categories: false,
        sort_order: NotificationPanelSort::PriorityAscending,
        ..Default::default()
    }
}

async fn loaded_store(backend: Arc<FakeBackend>) -> SettingsStore<FakeBackend> {
    let mut store = SettingsStore::new(backend);
    store.get_settings(false).await;
    store
}

async fn select(store: &mut SettingsStore<FakeBackend>, id: i64, name: &str) {
    store.set_selected_group(&UserGroup::new(id, name));
    store.get_settings(true).await;
}

#[tokio::test]
async fn test_full_load_prepends_default_group() {
    let store = loaded_store(backend()).await;
    let state = store.state();

    assert_eq!(state.groups[0], UserGroup::site_default());
    assert_eq!(state.groups.len(), 4);
    assert_eq!(state.selected_group_id, DEFAULT_GROUP_ID);
}

#[tokio::test]
async fn test_missing_site_settings_use_system_default() {
    let store = loaded_store(backend()).await;

    assert_eq!(
        store.state().site_settings,
        NotificationPanelSettings::system_default()
    );
    assert_eq!(store.state().group_settings, store.state().site_settings);
}

#[tokio::test]
async fn test_stored_site_settings_are_loaded() {
    let backend = backend();
    backend.store(ConfigScope::Site, &custom_site());

    let store = loaded_store(backend).await;

    assert_eq!(store.state().site_settings, custom_site());
}

#[tokio::test]
async fn test_group_list_failure_keeps_default_group() {
    let backend = backend();
    backend.fail_groups(true);

    let store = loaded_store(backend).await;

    assert_eq!(store.state().groups, vec![UserGroup::site_default()]);
}

#[tokio::test]
async fn test_group_fetch_failure_inherits_site() {
    let backend = backend();
    backend.store(ConfigScope::Site, &custom_site());
    backend.store(
        ConfigScope::Group(10),
        &NotificationPanelSettings {
            num_per_category: 7,
            ..Default::default()
        },
    );
    let mut store = loaded_store(Arc::clone(&backend)).await;

    backend.fail_gets(true);
    select(&mut store, 10, "Dispatch").await;

    let group = &store.state().group_settings;
    assert!(group.use_default);
    assert_eq!(group.with_use_default(false), custom_site());
    assert!(!store.has_changes());
}

#[tokio::test]
async fn test_malformed_group_blob_inherits_site() {
    let backend = backend();
    backend.store_raw(ConfigScope::Group(12), "{not json");
    let mut store = loaded_store(backend).await;

    select(&mut store, 12, "Admins").await;

    assert!(store.state().group_settings.use_default);
}

#[tokio::test]
async fn test_save_group_settings_commits_tiers() {
    let backend = backend();
    let mut store = loaded_store(Arc::clone(&backend)).await;
    select(&mut store, 10, "Dispatch").await;

    store.toggle_use_archive();
    assert!(store.has_changes());
    let edited = store.state().edited_settings.clone();

    assert!(store.save_settings().await);

    assert_eq!(backend.stored(ConfigScope::Group(10)), Some(edited.clone()));
    assert_eq!(store.state().group_settings, edited);
    assert_ne!(store.state().site_settings, edited);
    assert!(!store.has_changes());
    assert!(store.state().banner.visible);
    assert!(store.banner_timer_armed());
}

#[tokio::test]
async fn test_save_site_settings_updates_site_tier() {
    let backend = backend();
    let mut store = loaded_store(Arc::clone(&backend)).await;

    store.set_num_per_category(5, false);
    assert!(store.save_settings().await);

    assert_eq!(store.state().site_settings.num_per_category, 5);
    assert_eq!(
        backend.stored(ConfigScope::Site).map(|s| s.num_per_category),
        Some(5)
    );
}

#[tokio::test]
async fn test_save_failure_then_dismiss() {
    let backend = backend();
    let mut store = loaded_store(Arc::clone(&backend)).await;
    select(&mut store, 10, "Dispatch").await;
    store.toggle_use_flagged();
    let before = store.state().clone();

    backend.fail_puts(true);
    assert!(!store.save_settings().await);

    let banner = &store.state().banner;
    assert!(banner.visible);
    assert_eq!(banner.error.as_ref().map(|e| e.kind), Some(SaveErrorKind::Generic));
    assert!(!banner.error_message().is_empty());

    store.dismiss_notification();

    let state = store.state();
    assert!(!state.banner.visible);
    assert_eq!(state.banner.error_message(), "");
    assert_eq!(state.group_settings, before.group_settings);
    assert_eq!(state.site_settings, before.site_settings);
    assert_eq!(state.edited_settings, before.edited_settings);
    assert!(state.has_changes);
    assert!(!store.banner_timer_armed());
}

#[tokio::test]
async fn test_read_only_group_is_not_saved() {
    let backend = backend();
    let mut store = loaded_store(Arc::clone(&backend)).await;
    select(&mut store, 11, "Default Dispatch").await;
    store.toggle_enable_animations();

    assert!(!store.save_settings().await);

    assert_eq!(backend.put_count(), 0);
    assert_eq!(
        store.state().banner.error.as_ref().map(|e| e.kind),
        Some(SaveErrorKind::ReadOnlyGroup)
    );
}

#[tokio::test]
async fn test_default_selection_mirrors_site_after_switch() {
    let backend = backend();
    backend.store(ConfigScope::Site, &custom_site());
    let mut store = loaded_store(backend).await;

    select(&mut store, 12, "Admins").await;
    select(&mut store, DEFAULT_GROUP_ID, "Default").await;

    assert_eq!(store.state().group_settings, store.state().site_settings);
}

#[tokio::test]
async fn test_late_response_for_previous_group_is_dropped() {
    let backend = backend();
    backend.store(
        ConfigScope::Group(10),
        &NotificationPanelSettings {
            num_per_category: 10,
            ..Default::default()
        },
    );
    backend.store(
        ConfigScope::Group(12),
        &NotificationPanelSettings {
            num_per_category: 12,
            ..Default::default()
        },
    );
    let mut store = loaded_store(backend).await;
    let loader = store.loader();

    store.set_selected_group(&UserGroup::new(10, "Dispatch"));
    let slow = loader.load_group_settings(10).await;

    store.set_selected_group(&UserGroup::new(12, "Admins"));
    let fast = loader.load_group_settings(12).await;

    store.dispatch(fast);
    store.dispatch(slow);

    assert_eq!(store.state().group_settings.num_per_category, 12);
    assert_eq!(store.state().edited_settings.num_per_category, 12);
}

#[tokio::test(start_paused = true)]
async fn test_banner_auto_hides_after_timeout() {
    let mut store = loaded_store(backend()).await;
    store.toggle_use_archive();
    assert!(store.save_settings().await);
    assert!(store.state().banner.visible);

    let start = tokio::time::Instant::now();
    store.next_event().await;

    assert!(start.elapsed() >= Duration::from_secs(5));
    assert!(!store.state().banner.visible);
}

#[tokio::test(start_paused = true)]
async fn test_custom_banner_timeout() {
    let mut store = SettingsStore::new(backend()).with_banner_timeout(Duration::from_secs(2));
    store.get_settings(false).await;
    store.toggle_use_archive();
    store.save_settings().await;

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(store.process_pending(), 1);
    assert!(!store.state().banner.visible);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_cancels_pending_timer() {
    let mut store = loaded_store(backend()).await;
    store.toggle_use_archive();
    store.save_settings().await;
    store.dismiss_notification();

    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(store.process_pending(), 0);
    assert!(!store.state().banner.visible);
}

#[test]
fn test_banner_without_runtime_stays_until_dismissed() {
    let mut store = SettingsStore::new(backend());

    store.dispatch(Action::ShowError(SaveError {
        kind: SaveErrorKind::Generic,
        message: "offline".to_string(),
    }));

    assert!(store.state().banner.visible);
    assert!(!store.banner_timer_armed());

    store.dismiss_notification();
    assert!(!store.state().banner.visible);
}
