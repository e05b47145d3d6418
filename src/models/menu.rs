//! Menu vocabulary: the closed set of actions and the ordered main-menu table.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Every action the main menu can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Option1,
    Option2,
    Option3,
    About,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Option1,
        MenuAction::Option2,
        MenuAction::Option3,
        MenuAction::About,
        MenuAction::Exit,
    ];

    /// Identifier exchanged with the selection prompt.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuAction::Option1 => "option1",
            MenuAction::Option2 => "option2",
            MenuAction::Option3 => "option3",
            MenuAction::About => "about",
            MenuAction::Exit => "exit",
        }
    }

    /// Label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Option1 => "Option 1",
            MenuAction::Option2 => "Option 2",
            MenuAction::Option3 => "Option 3",
            MenuAction::About => "About",
            MenuAction::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| AppError::UnknownAction(s.to_string()))
    }
}

/// One row of a selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Choice { value: String, label: String },
    /// Visual divider; never selectable.
    Separator,
}

impl MenuEntry {
    pub fn choice(action: MenuAction) -> Self {
        MenuEntry::Choice {
            value: action.as_str().to_string(),
            label: action.label().to_string(),
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, MenuEntry::Choice { .. })
    }
}

/// Prompt text of the main menu.
pub const MAIN_MENU_PROMPT: &str = "Main Menu";

/// The main menu in display order: three options, a divider, about, exit.
pub fn main_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::choice(MenuAction::Option1),
        MenuEntry::choice(MenuAction::Option2),
        MenuEntry::choice(MenuAction::Option3),
        MenuEntry::Separator,
        MenuEntry::choice(MenuAction::About),
        MenuEntry::choice(MenuAction::Exit),
    ]
}
