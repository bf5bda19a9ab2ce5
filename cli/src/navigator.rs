use notipanel_core::{NavigationTarget, Navigator};
use tracing::info;

/// The shell has no other views, so navigation is only reported.
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, target: &NavigationTarget) {
        info!(path = %target.path, params = ?target.params, "Navigation requested");
        println!("-> {target}");
    }
}
