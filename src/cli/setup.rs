//! First-time setup, shown once before the user ever reaches the main menu.

use crate::cli::{MenuPresenter, Screen};
use crate::error::{AppError, Result};
use crate::models::ApplicationState;
use tracing::{info, warn};

pub const SETUP_PROMPT: &str = "Complete first-time setup?";

/// Walks the user through setup. Returns `Ok(())` only if setup was completed;
/// persisting the completion flag is left to the caller.
pub fn run_setup<S, C>(state: &ApplicationState<S>, console: &mut C) -> Result<()>
where
    C: Screen + MenuPresenter + ?Sized,
{
    let settings = &state.settings;
    console.title_screen(&settings.app_name)?;
    console.print_line(&format!(
        "Welcome to {}! Looks like this is your first run.",
        settings.app_name
    ))?;
    console.print_line(&format!(
        "Your settings will be kept in {}",
        settings.store_path().display()
    ))?;
    console.print_line("")?;

    if console.confirm(SETUP_PROMPT, true)? {
        info!("First-time setup completed");
        Ok(())
    } else {
        warn!("First-time setup declined");
        Err(AppError::Setup(
            "first-time setup was not completed".to_string(),
        ))
    }
}
