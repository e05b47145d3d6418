//! Maps the selected menu action to its handler and runs it.

use crate::cli::{Keypress, Screen};
use crate::error::{AppError, Result};
use crate::models::{ApplicationState, MenuAction};
use tracing::{debug, info};

pub const RETURN_PROMPT: &str = "Press any key to return to Main Menu ...";

/// What the menu loop does once a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// The action finished; show the menu again.
    Completed,
    /// Leave the menu loop and end the program.
    Exit,
}

/// Runs the handler for `state.menu_action`.
///
/// Fails with `AppError::Precondition` if no action has been selected yet, and with
/// `AppError::UnknownAction` if the identifier is not one of the menu's actions.
pub fn interpret_menu_action<S, C>(state: &ApplicationState<S>, console: &mut C) -> Result<Flow>
where
    C: Screen + Keypress + ?Sized,
{
    let id = state.menu_action.as_deref().ok_or_else(|| {
        AppError::Precondition("menu action can not be unset when dispatching".to_string())
    })?;
    let action: MenuAction = id.parse()?;
    debug!("Dispatching menu action {}", action);

    match action {
        MenuAction::Option1 => placeholder(state, console, 1),
        MenuAction::Option2 => placeholder(state, console, 2),
        MenuAction::Option3 => placeholder(state, console, 3),
        MenuAction::About => about(state, console),
        MenuAction::Exit => exit(),
    }
}

fn placeholder<S, C>(state: &ApplicationState<S>, console: &mut C, number: u8) -> Result<Flow>
where
    C: Screen + Keypress + ?Sized,
{
    console.title_screen(&state.settings.app_name)?;
    console.print_line(&format!("Option {} Logic would take place here :)", number))?;
    console.print_line("")?;
    return_to_menu(console)
}

fn about<S, C>(state: &ApplicationState<S>, console: &mut C) -> Result<Flow>
where
    C: Screen + Keypress + ?Sized,
{
    console.title_screen(&state.settings.app_name)?;
    console.about_panel(&state.settings.author)?;
    return_to_menu(console)
}

fn exit() -> Result<Flow> {
    info!("Exit selected");
    Ok(Flow::Exit)
}

fn return_to_menu<C>(console: &mut C) -> Result<Flow>
where
    C: Screen + Keypress + ?Sized,
{
    console.print_line(RETURN_PROMPT)?;
    console.wait_for_keypress()?;
    Ok(Flow::Completed)
}
