//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes the command-line arguments, the startup sequence (first-time setup,
//! then the menu loop), the menu presenter, the action dispatcher, and the
//! terminal they all draw on.

mod commands;
mod dispatch;
mod keypress;
mod menu;
mod screen;
mod setup;
mod terminal;
#[cfg(test)]
pub(crate) mod testing;

pub use commands::*;
pub use dispatch::*;
pub use keypress::*;
pub use menu::*;
pub use screen::*;
pub use setup::*;
pub use terminal::*;
