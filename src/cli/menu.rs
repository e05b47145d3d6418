//! The menu presenter: asks the user for one action and records it in the state.

use crate::error::{AppError, Result};
use crate::models::{main_menu, ApplicationState, MenuEntry, MAIN_MENU_PROMPT};
use tracing::debug;

/// Label drawn for `MenuEntry::Separator` rows.
pub const SEPARATOR_LABEL: &str = "──────────────";

/// Interactive prompts.
pub trait MenuPresenter {
    /// Shows `entries` as a single-choice list and returns the `value` of the chosen
    /// row. Separators are never returned.
    fn select(&mut self, prompt: &str, entries: &[MenuEntry]) -> Result<String>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Presents the main menu and stores the chosen identifier in `state.menu_action`.
pub fn display_main_menu<S, P>(state: &mut ApplicationState<S>, presenter: &mut P) -> Result<String>
where
    P: MenuPresenter + ?Sized,
{
    let choice = presenter.select(MAIN_MENU_PROMPT, &main_menu())?;
    debug!("Main menu selection: {}", choice);
    state.menu_action = Some(choice.clone());
    Ok(choice)
}

/// Index of the first selectable row at or after `from`, wrapping around.
pub fn next_selectable(entries: &[MenuEntry], from: usize) -> Option<usize> {
    let len = entries.len();
    (0..len)
        .map(|offset| (from + offset) % len)
        .find(|&i| entries[i].is_selectable())
}

/// Index of the last selectable row, picked when a prompt is cancelled.
pub fn last_selectable(entries: &[MenuEntry]) -> Option<usize> {
    entries.iter().rposition(MenuEntry::is_selectable)
}

/// Display labels for a prompt's rows.
pub fn entry_labels(entries: &[MenuEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| match entry {
            MenuEntry::Choice { label, .. } => label.clone(),
            MenuEntry::Separator => SEPARATOR_LABEL.to_string(),
        })
        .collect()
}

pub(crate) fn value_at(entries: &[MenuEntry], index: usize) -> Option<&str> {
    match entries.get(index)? {
        MenuEntry::Choice { value, .. } => Some(value.as_str()),
        MenuEntry::Separator => None,
    }
}

pub(crate) fn no_choices() -> AppError {
    AppError::Precondition("a selection prompt needs at least one selectable entry".to_string())
}
