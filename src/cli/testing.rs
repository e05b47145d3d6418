//! Scripted stand-in for the terminal, shared by the `cli` unit tests.

use crate::cli::{Keypress, MenuPresenter, Screen};
use crate::config::{AppConfig, ConfigStore, MemoryStore, IS_SET_UP};
use crate::error::{AppError, Result};
use crate::models::{ApplicationState, MenuEntry};
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

/// Everything the code under test showed or asked for, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Clear,
    Title(String),
    Line(String),
    About(String),
    KeyWait,
    Menu(String),
    Confirm(String),
}

/// Replays queued answers and records output. An empty answer queue behaves
/// like a closed input stream.
#[derive(Default)]
pub struct ScriptedConsole {
    selections: VecDeque<String>,
    confirmations: VecDeque<bool>,
    keypress_failures: VecDeque<io::ErrorKind>,
    pub events: Vec<Output>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selections(mut self, values: &[&str]) -> Self {
        self.selections.extend(values.iter().map(|v| v.to_string()));
        self
    }

    pub fn with_confirmations(mut self, answers: &[bool]) -> Self {
        self.confirmations.extend(answers.iter().copied());
        self
    }

    pub fn fail_next_keypress(mut self, kind: io::ErrorKind) -> Self {
        self.keypress_failures.push_back(kind);
        self
    }

    pub fn menu_count(&self) -> usize {
        self.count(|e| matches!(e, Output::Menu(_)))
    }

    pub fn keywait_count(&self) -> usize {
        self.count(|e| matches!(e, Output::KeyWait))
    }

    pub fn confirm_count(&self) -> usize {
        self.count(|e| matches!(e, Output::Confirm(_)))
    }

    fn count(&self, pred: impl Fn(&Output) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

fn input_closed() -> AppError {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed").into()
}

impl Screen for ScriptedConsole {
    fn clear(&mut self) -> Result<()> {
        self.events.push(Output::Clear);
        Ok(())
    }

    fn title_screen(&mut self, app_name: &str) -> Result<()> {
        self.events.push(Output::Title(app_name.to_string()));
        Ok(())
    }

    fn print_line(&mut self, text: &str) -> Result<()> {
        self.events.push(Output::Line(text.to_string()));
        Ok(())
    }

    fn about_panel(&mut self, author: &str) -> Result<()> {
        self.events.push(Output::About(author.to_string()));
        Ok(())
    }
}

impl Keypress for ScriptedConsole {
    fn wait_for_keypress(&mut self) -> Result<()> {
        self.events.push(Output::KeyWait);
        match self.keypress_failures.pop_front() {
            Some(kind) => Err(io::Error::new(kind, "keypress failed").into()),
            None => Ok(()),
        }
    }
}

impl MenuPresenter for ScriptedConsole {
    fn select(&mut self, prompt: &str, _entries: &[MenuEntry]) -> Result<String> {
        self.events.push(Output::Menu(prompt.to_string()));
        self.selections.pop_front().ok_or_else(input_closed)
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        self.events.push(Output::Confirm(prompt.to_string()));
        self.confirmations.pop_front().ok_or_else(input_closed)
    }
}

pub fn test_settings() -> AppConfig {
    AppConfig {
        app_name: "speckyboy-scraper".to_string(),
        author: "Alex Lee".to_string(),
        config_dir: PathBuf::from("/tmp/speckyboy-test/config"),
        log_dir: PathBuf::from("/tmp/speckyboy-test/logs"),
    }
}

pub fn test_store(is_set_up: bool) -> MemoryStore {
    let mut store = MemoryStore::new();
    if is_set_up {
        store
            .set(IS_SET_UP, serde_json::Value::Bool(true))
            .expect("memory store never fails");
    }
    store
}

pub fn test_state(is_set_up: bool) -> ApplicationState<MemoryStore> {
    ApplicationState::new(test_settings(), test_store(is_set_up))
}
