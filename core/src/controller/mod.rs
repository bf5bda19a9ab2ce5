//! Admin panel controller
//!
//! [`AdminPanel`] sits between the host UI and the [`SettingsStore`](crate::store::SettingsStore):
//! it decides when to load, guards navigation while edits are pending and
//! derives the [`PanelView`] the host renders.

mod admin_panel;
pub mod view;

#[cfg(test)]
mod controller_tests;

pub use admin_panel::{AdminPanel, ConfirmChoice, PendingAction};
pub use view::{BannerKind, BannerView, DialogView, GroupOption, PanelView, build_view};
