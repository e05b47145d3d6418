//! Blocking single-keystroke wait with scoped raw mode.
//!
//! Raw mode is held by a `RawModeGuard`. The guard switches it off when released
//! explicitly and, as a fallback, when dropped, so the terminal never stays raw
//! after a wait, whether the wait succeeded or failed.

use crate::error::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use tracing::{debug, warn};

/// Suspends until the user presses a key.
pub trait Keypress {
    fn wait_for_keypress(&mut self) -> Result<()>;
}

/// Switches the terminal's raw (unbuffered, unechoed) input mode.
pub trait RawModeToggle {
    fn enable(&mut self) -> io::Result<()>;
    fn disable(&mut self) -> io::Result<()>;
}

/// Raw mode of the process's controlling terminal.
#[derive(Debug, Default)]
pub struct CrosstermRawMode;

impl RawModeToggle for CrosstermRawMode {
    fn enable(&mut self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    fn disable(&mut self) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }
}

/// Raw mode held for the lifetime of the guard.
pub struct RawModeGuard<'a, T: RawModeToggle + ?Sized> {
    toggle: &'a mut T,
    active: bool,
}

impl<'a, T: RawModeToggle + ?Sized> RawModeGuard<'a, T> {
    pub fn acquire(toggle: &'a mut T) -> io::Result<Self> {
        toggle.enable()?;
        Ok(Self {
            toggle,
            active: true,
        })
    }

    /// Leaves raw mode, reporting a failure to do so.
    pub fn release(mut self) -> io::Result<()> {
        self.active = false;
        self.toggle.disable()
    }
}

impl<T: RawModeToggle + ?Sized> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = self.toggle.disable() {
                warn!("Failed to leave raw mode: {}", e);
            }
        }
    }
}

/// Runs `wait` with raw mode enabled. An error from `wait` takes precedence over
/// an error leaving raw mode.
pub fn with_raw_mode<T, R, F>(toggle: &mut T, wait: F) -> Result<R>
where
    T: RawModeToggle + ?Sized,
    F: FnOnce() -> Result<R>,
{
    let guard = RawModeGuard::acquire(toggle)?;
    let outcome = wait();
    let released = guard.release();
    let value = outcome?;
    released?;
    Ok(value)
}

/// Blocks until one key press arrives. Non-key events (resize, focus, mouse)
/// do not end the wait; the key itself is discarded.
pub fn read_single_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                debug!("Key received: {:?}", key.code);
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[derive(Default)]
    struct RecordingToggle {
        calls: Vec<&'static str>,
        fail_enable: bool,
        fail_disable: bool,
    }

    impl RecordingToggle {
        fn is_raw(&self) -> bool {
            self.calls.last() == Some(&"enable")
        }
    }

    impl RawModeToggle for RecordingToggle {
        fn enable(&mut self) -> io::Result<()> {
            if self.fail_enable {
                return Err(io::Error::new(io::ErrorKind::Unsupported, "not a tty"));
            }
            self.calls.push("enable");
            Ok(())
        }

        fn disable(&mut self) -> io::Result<()> {
            self.calls.push("disable");
            if self.fail_disable {
                return Err(io::Error::new(io::ErrorKind::Other, "tcsetattr failed"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_raw_mode_released_after_successful_wait() {
        let mut toggle = RecordingToggle::default();
        let result = with_raw_mode(&mut toggle, || Ok(42));

        assert_eq!(result.unwrap(), 42);
        assert_eq!(toggle.calls, ["enable", "disable"]);
        assert!(!toggle.is_raw());
    }

    #[test]
    fn test_raw_mode_released_after_failed_wait() {
        let mut toggle = RecordingToggle::default();
        let result: Result<()> = with_raw_mode(&mut toggle, || {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into())
        });

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(toggle.calls, ["enable", "disable"]);
    }

    #[test]
    fn test_raw_mode_released_when_wait_panics() {
        let mut toggle = RecordingToggle::default();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = RawModeGuard::acquire(&mut toggle).unwrap();
            panic!("handler blew up");
        }));

        assert!(outcome.is_err());
        assert_eq!(toggle.calls, ["enable", "disable"]);
    }

    #[test]
    fn test_enable_failure_skips_wait() {
        let mut toggle = RecordingToggle {
            fail_enable: true,
            ..Default::default()
        };
        let mut waited = false;
        let result = with_raw_mode(&mut toggle, || {
            waited = true;
            Ok(())
        });

        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(!waited);
        assert!(toggle.calls.is_empty());
    }

    #[test]
    fn test_disable_failure_is_reported() {
        let mut toggle = RecordingToggle {
            fail_disable: true,
            ..Default::default()
        };
        let result = with_raw_mode(&mut toggle, || Ok(()));

        match result {
            Err(AppError::Io(e)) => assert_eq!(e.to_string(), "tcsetattr failed"),
            other => panic!("Expected Io error, got {:?}", other),
        }
        // Released once, not again on drop.
        assert_eq!(toggle.calls, ["enable", "disable"]);
    }
}
