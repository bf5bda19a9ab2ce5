pub mod controller;
pub mod error;
pub mod navigation;
pub mod services;
pub mod store;
pub mod strings;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use controller::{AdminPanel, ConfirmChoice, PanelView, PendingAction};
pub use error::{SaveFailure, ServiceError, StoreError};
pub use navigation::{CREATE_GROUP_URL, NavigationTarget, parse_navigation_url};
pub use services::{
    ConfigKey, ConfigService, GroupDirectory, Localizer, NOTIFICATION_PANEL_SETTINGS_KEY,
    Navigator,
};
pub use store::{
    Action, BANNER_TIMEOUT, Banner, PanelState, SaveError, SaveErrorKind, SettingsEdit,
    SettingsLoader, SettingsStore,
};
pub use strings::{BuiltinLocalizer, Strings};
