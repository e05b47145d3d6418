//! The real terminal: `crossterm` for clearing and raw input, `dialoguer` for prompts.

use crate::cli::keypress::{read_single_key, with_raw_mode, CrosstermRawMode, Keypress};
use crate::cli::menu::{entry_labels, last_selectable, next_selectable, no_choices, value_at};
use crate::cli::screen::{render_about_panel, render_title, Screen};
use crate::cli::MenuPresenter;
use crate::error::Result;
use crate::models::MenuEntry;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use std::io::{self, Stdout, Write};
use tracing::debug;

/// Console bound to the process's stdout and controlling terminal.
pub struct TerminalConsole {
    out: Stdout,
    raw_mode: CrosstermRawMode,
    theme: ColorfulTheme,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            raw_mode: CrosstermRawMode,
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalConsole {
    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn title_screen(&mut self, app_name: &str) -> Result<()> {
        self.clear()?;
        writeln!(self.out, "{}", render_title(app_name))?;
        Ok(())
    }

    fn print_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn about_panel(&mut self, author: &str) -> Result<()> {
        writeln!(self.out, "{}", render_about_panel(author))?;
        Ok(())
    }
}

impl Keypress for TerminalConsole {
    fn wait_for_keypress(&mut self) -> Result<()> {
        self.out.flush()?;
        with_raw_mode(&mut self.raw_mode, read_single_key)
    }
}

impl MenuPresenter for TerminalConsole {
    fn select(&mut self, prompt: &str, entries: &[MenuEntry]) -> Result<String> {
        let labels = entry_labels(entries);
        let mut cursor = next_selectable(entries, 0).ok_or_else(no_choices)?;

        loop {
            let picked = Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(labels.as_slice())
                .default(cursor)
                .report(false)
                .interact_opt()?;

            // Cancelling (Esc / q) picks the last entry, like choosing "Exit".
            let index = match picked {
                Some(index) => index,
                None => {
                    debug!("Prompt '{}' cancelled", prompt);
                    last_selectable(entries).ok_or_else(no_choices)?
                },
            };

            match value_at(entries, index) {
                Some(value) => return Ok(value.to_string()),
                None => {
                    debug!("Separator picked in '{}'; prompting again", prompt);
                    cursor = next_selectable(entries, index).ok_or_else(no_choices)?;
                },
            }
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}
