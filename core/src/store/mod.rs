//! Settings store
//!
//! This module provides:
//! - **State**: the three settings tiers, dirty flag and save banner
//! - **Edits**: field-level patches applied to the working copy
//! - **Loader**: remote fetch/save returning tagged actions
//! - **Store**: the state container tying them together
//!
//! # Tiers
//!
//! ```text
//! site_settings  ──►  group_settings  ──►  edited_settings
//!  (baseline)        (last saved for       (working copy,
//!                     selected group)       bound to controls)
//! ```
//!
//! `has_changes` is true exactly when `edited_settings != group_settings`.

mod banner_timer;
mod edit;
mod loader;
mod settings_store;
mod state;

#[cfg(test)]
mod store_tests;

pub use banner_timer::{BANNER_TIMEOUT, BannerTimer};
pub use edit::{SettingsEdit, clamp_num_per_category};
pub use loader::{SettingsLoader, parse_settings, serialize_settings};
pub use settings_store::SettingsStore;
pub use state::{Action, Banner, PanelState, SaveError, SaveErrorKind};
