//! Command-line arguments and the `App` that sequences setup and the menu loop.

use crate::cli::{
    display_main_menu, interpret_menu_action, run_setup, Flow, Keypress, MenuPresenter, Screen,
};
use crate::config::{AppConfig, ConfigStore, IS_SET_UP};
use crate::error::Result;
use crate::models::ApplicationState;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};

/// Interactive menu with a one-time setup step
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Forget that setup was completed, so it runs again
    #[arg(long)]
    pub reset_setup: bool,

    /// Directory holding the `configstore/` settings folder
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// CLI application
pub struct App<S, C> {
    state: ApplicationState<S>,
    console: C,
    reset_setup: bool,
}

impl<S, C> App<S, C>
where
    S: ConfigStore,
    C: Screen + Keypress + MenuPresenter,
{
    pub fn new(settings: AppConfig, store: S, console: C) -> Self {
        Self {
            state: ApplicationState::new(settings, store),
            console,
            reset_setup: false,
        }
    }

    /// Makes `run` forget any completed setup before checking for it.
    pub fn reset_setup_on_start(mut self, reset: bool) -> Self {
        self.reset_setup = reset;
        self
    }

    pub fn state(&self) -> &ApplicationState<S> {
        &self.state
    }

    #[cfg(test)]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs setup if it was never completed (or a reset was requested), then the
    /// menu loop until the user exits.
    pub fn run(&mut self) -> Result<()> {
        if self.reset_setup {
            info!("Resetting first-time setup flag");
            self.state.config.delete(IS_SET_UP)?;
            self.reset_setup = false;
        }

        if self.state.config.get_bool(IS_SET_UP)? {
            debug!("Setup already completed; skipping");
        } else {
            info!("No completed setup found; starting first-time setup");
            run_setup(&self.state, &mut self.console)?;
            self.state.config.set(IS_SET_UP, Value::Bool(true))?;
            self.console.clear()?;
        }

        self.menu_loop()
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.console.title_screen(&self.state.settings.app_name)?;
            display_main_menu(&mut self.state, &mut self.console)?;

            match interpret_menu_action(&self.state, &mut self.console)? {
                Flow::Completed => debug!("Action completed; returning to main menu"),
                Flow::Exit => {
                    info!("Leaving main menu");
                    return Ok(());
                },
            }
        }
    }
}
