//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::core::checks::EnvironmentCheck;
use crate::core::error::AppError;
use crate::tui::event::{InputSource, KeyPress};
use crate::tui::terminal::{TerminalMode, TerminalSession};

/// Terminal mode that only counts calls. Clones share the counters.
#[derive(Clone, Default)]
pub struct RecordingMode {
    enters: Rc<Cell<usize>>,
    leaves: Rc<Cell<usize>>,
    fail_enter: bool,
}

impl RecordingMode {
    pub fn failing_enter() -> Self {
        Self {
            fail_enter: true,
            ..Default::default()
        }
    }

    pub fn enters(&self) -> usize {
        self.enters.get()
    }

    pub fn leaves(&self) -> usize {
        self.leaves.get()
    }
}

impl TerminalMode for RecordingMode {
    fn enter(&mut self) -> io::Result<()> {
        if self.fail_enter {
            return Err(io::Error::other("not a terminal"));
        }
        self.enters.set(self.enters.get() + 1);
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        self.leaves.set(self.leaves.get() + 1);
        Ok(())
    }
}

/// Plays back a fixed script of polls, then reports `^C` forever.
pub struct ScriptedInput {
    script: VecDeque<Option<KeyPress>>,
}

impl ScriptedInput {
    pub fn new(script: Vec<Option<KeyPress>>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn idle_then_interrupt(idle_polls: usize) -> Self {
        Self::new(vec![None; idle_polls])
    }

    pub fn key(c: char) -> KeyPress {
        KeyPress::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    pub fn help() -> KeyPress {
        KeyPress::new(KeyCode::F(1), KeyModifiers::NONE)
    }

    pub fn interrupt() -> KeyPress {
        KeyPress::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Option<KeyPress>> {
        Ok(self
            .script
            .pop_front()
            .unwrap_or_else(|| Some(Self::interrupt())))
    }
}

pub struct PassingChecks;

impl EnvironmentCheck for PassingChecks {
    fn run(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub struct FailingChecks;

impl EnvironmentCheck for FailingChecks {
    fn run(&self) -> Result<(), AppError> {
        Err(AppError::Initialization)
    }
}

/// A session drawing into a `TestBackend` of the given size.
pub fn test_session(width: u16, height: u16) -> TerminalSession<TestBackend, RecordingMode> {
    TerminalSession::acquire(TestBackend::new(width, height), RecordingMode::default())
        .expect("test session")
}

/// The symbols of one buffer row joined into a string.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}
