//! The record threaded through a whole run of the program.

use crate::config::AppConfig;

/// State shared by the startup sequence, the menu presenter and the dispatcher.
///
/// `menu_action` holds the raw identifier returned by the selection prompt. Only the
/// presenter writes it; the dispatcher validates it against `MenuAction` before use.
#[derive(Debug)]
pub struct ApplicationState<S> {
    pub settings: AppConfig,
    pub config: S,
    pub menu_action: Option<String>,
}

impl<S> ApplicationState<S> {
    pub fn new(settings: AppConfig, config: S) -> Self {
        Self {
            settings,
            config,
            menu_action: None,
        }
    }
}
