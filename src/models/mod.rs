//! Defines the data structures and models used throughout the application.
//!
//! This covers the closed set of menu actions, the rows of the main menu,
//! and the `ApplicationState` record carried through the menu loop.

mod menu;
mod state;

pub use menu::*;
pub use state::*;
