use std::io::Write;
use std::path::PathBuf;

use clap::ValueEnum;
use notipanel_core::controller::{BannerKind, PanelView};
use notipanel_core::ConfirmChoice;
use notipanel_types::{DuplicateNotification, NotificationCategory, NotificationPanelSort};

use crate::context::CliContext;
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToggleField {
    AutoRemove,
    ShowCategories,
    Animations,
    Flagged,
    Archive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfirmArg {
    Save,
    Discard,
    Keep,
}

impl From<ConfirmArg> for ConfirmChoice {
    fn from(arg: ConfirmArg) -> Self {
        match arg {
            ConfirmArg::Save => ConfirmChoice::Save,
            ConfirmArg::Discard => ConfirmChoice::Discard,
            ConfirmArg::Keep => ConfirmChoice::KeepEditing,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

fn print_banner(view: &PanelView) {
    if let Some(banner) = &view.banner {
        let marker = match banner.kind {
            BannerKind::Success => "ok",
            BannerKind::Error => "error",
        };
        println!("[{marker}] {}", banner.title);
    }
}

fn print_dialog(view: &PanelView) {
    if let Some(dialog) = &view.dialog {
        println!("{}", dialog.title);
        println!("  {}", dialog.message);
        println!(
            "  confirm save ({}) | confirm discard ({}) | confirm keep ({})",
            dialog.save_label, dialog.discard_label, dialog.keep_label
        );
    }
}

/// Print whatever the last action changed: banner first, then any dialog.
fn print_feedback(ctx: &CliContext) {
    let view = ctx.panel.view();
    print_banner(&view);
    print_dialog(&view);
}

pub fn show(ctx: &CliContext) {
    let view = ctx.panel.view();
    let state = ctx.panel.state();
    let group = state
        .selected_group()
        .map(|g| g.name.as_str())
        .unwrap_or("?");

    println!("{} - {}", view.title, group);
    if view.use_default {
        println!("  (using default settings)");
    }
    println!("{}", "-".repeat(60));
    for row in &view.fields {
        println!("{:<45} {}", row.label, row.value);
    }

    let strings = ctx.panel.strings();
    println!();
    println!("{}", strings.get("NOTIFICATION_PANEL_SETTINGS_CATEGORY_ORDER"));
    for (i, category) in view.categories.iter().enumerate() {
        let mark = if category.enabled { "x" } else { " " };
        println!("  {i:>2} [{mark}] {}", category.label);
    }

    println!();
    let enabled = |on: bool| if on { "enabled" } else { "disabled" };
    println!(
        "{}: {}   {}: {}",
        strings.get(notipanel_core::strings::SAVE),
        enabled(view.save_enabled),
        strings.get(notipanel_core::strings::CANCEL),
        enabled(view.cancel_enabled)
    );
    print_banner(&view);
    print_dialog(&view);
}

pub fn groups(ctx: &CliContext) {
    let view = ctx.panel.view();
    println!("{:<6} {:<40} Flags", "Id", "Name");
    println!("{}", "-".repeat(60));
    for group in &view.groups {
        let mut flags = Vec::new();
        if group.selected {
            flags.push("selected");
        }
        if group.read_only {
            flags.push("read-only");
        }
        println!("{:<6} {:<40} {}", group.id, group.name, flags.join(", "));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Group Selection / Navigation
// ─────────────────────────────────────────────────────────────────────────────

pub async fn select(ctx: &mut CliContext, id: i64) -> Result<(), CliError> {
    let group = ctx
        .panel
        .state()
        .groups
        .iter()
        .find(|g| g.id == id)
        .cloned()
        .ok_or(CliError::UnknownGroup(id))?;

    if ctx.panel.request_group_selection(group.clone()).await {
        println!("Selected {}", group.name);
    }
    print_feedback(ctx);
    Ok(())
}

pub fn new_group(ctx: &mut CliContext) {
    ctx.panel.create_new_group();
    print_feedback(ctx);
}

pub fn navigate(ctx: &mut CliContext, url: &str) {
    ctx.panel.request_navigation(url);
    print_feedback(ctx);
}

pub async fn confirm(ctx: &mut CliContext, choice: ConfirmArg) {
    if !ctx.panel.dialog_open() {
        println!("Nothing to confirm");
        return;
    }
    ctx.panel.resolve_dialog(choice.into()).await;
    print_feedback(ctx);
}

pub async fn reload(ctx: &mut CliContext) {
    ctx.panel.reload().await;
    println!("Reloaded {} groups", ctx.panel.state().groups.len());
}

// ─────────────────────────────────────────────────────────────────────────────
// Field Edits
// ─────────────────────────────────────────────────────────────────────────────

pub fn toggle(ctx: &mut CliContext, field: ToggleField) {
    let store = ctx.panel.store_mut();
    match field {
        ToggleField::AutoRemove => store.toggle_auto_remove_after_closed(),
        ToggleField::ShowCategories => store.toggle_show_categories(),
        ToggleField::Animations => store.toggle_enable_animations(),
        ToggleField::Flagged => store.toggle_use_flagged(),
        ToggleField::Archive => store.toggle_use_archive(),
    }
}

pub fn set_sort(ctx: &mut CliContext, name: &str) -> Result<(), CliError> {
    let order = NotificationPanelSort::from_name(name).ok_or_else(|| CliError::UnknownValue {
        kind: "sort order",
        value: name.to_string(),
    })?;
    ctx.panel.store_mut().set_sort_order(order);
    Ok(())
}

pub fn set_duplicates(ctx: &mut CliContext, name: &str) -> Result<(), CliError> {
    let mode = DuplicateNotification::from_name(name).ok_or_else(|| CliError::UnknownValue {
        kind: "duplicate mode",
        value: name.to_string(),
    })?;
    ctx.panel
        .store_mut()
        .set_duplicate_notification_processing(mode);
    Ok(())
}

pub fn set_unit_status_time(ctx: &mut CliContext, value: bool) {
    ctx.panel.store_mut().set_unit_status_show_time(value);
}

pub fn set_pending_events_time(ctx: &mut CliContext, value: bool) {
    ctx.panel.store_mut().set_pending_events_show_time(value);
}

pub fn set_num_per_category(ctx: &mut CliContext, value: i32, show_all: bool) {
    ctx.panel.store_mut().set_num_per_category(value, show_all);
}

pub fn move_category(ctx: &mut CliContext, from: usize, to: usize) {
    ctx.panel.store_mut().move_category(from, to);
}

pub fn enable_category(ctx: &mut CliContext, name: &str, enabled: bool) -> Result<(), CliError> {
    let category = NotificationCategory::from_name(name).ok_or_else(|| CliError::UnknownValue {
        kind: "category",
        value: name.to_string(),
    })?;
    ctx.panel.store_mut().set_category_enabled(category, enabled);
    Ok(())
}

pub fn use_default(ctx: &mut CliContext) {
    ctx.panel.store_mut().toggle_use_default();
    let state = ctx.panel.state();
    println!(
        "Use default: {}",
        if state.edited_settings.use_default { "on" } else { "off" }
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Save / Cancel / Banner
// ─────────────────────────────────────────────────────────────────────────────

pub async fn save(ctx: &mut CliContext) {
    if !ctx.panel.view().save_enabled {
        println!("Save is disabled");
        return;
    }
    ctx.panel.save().await;
    print_feedback(ctx);
}

pub fn cancel(ctx: &mut CliContext) {
    if !ctx.panel.view().cancel_enabled {
        println!("No changes to cancel");
        return;
    }
    ctx.panel.cancel();
    println!("Changes discarded");
}

pub fn dismiss(ctx: &mut CliContext) {
    ctx.panel.dismiss_notification();
}

// ─────────────────────────────────────────────────────────────────────────────
// Shell
// ─────────────────────────────────────────────────────────────────────────────

/// Show the shell configuration, updating and persisting it when values are given.
pub fn config(
    ctx: &mut CliContext,
    banner_timeout: Option<u64>,
    store_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let changed = banner_timeout.is_some() || store_path.is_some();
    if let Some(secs) = banner_timeout {
        ctx.config.banner_timeout_secs = secs;
    }
    if let Some(path) = store_path {
        ctx.config.store_path = path;
    }
    if changed {
        ctx.config.save()?;
        println!("Configuration saved, restart to apply");
    }

    println!("store_path: {}", ctx.config.store_path.display());
    println!("banner_timeout_secs: {}", ctx.config.banner_timeout_secs);
    println!("seed_groups: {}", ctx.config.seed_groups.len());
    Ok(())
}

pub fn exit(ctx: &CliContext) -> std::io::Result<()> {
    if ctx.panel.state().has_changes {
        println!("Unsaved changes will be lost");
    }
    write!(std::io::stdout(), "quitting...")?;
    std::io::stdout().flush()
}
