// src/menu/mod.rs
//
// Folder module facade: the dispatcher loop plus the console it talks through.

mod console;
mod dispatcher;

pub use console::{Console, InputError};
pub use dispatcher::{DispatchState, Dispatcher, MSG_EXIT, MSG_INVALID, Outcome, RunSummary, Selection, run};

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// One line of a menu. `choice` is what the owning [`Menu`] executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuOption<C> {
    pub key: &'static str,
    pub label: &'static str,
    pub choice: C,
}

impl<C> MenuOption<C> {
    pub const fn new(key: &'static str, label: &'static str, choice: C) -> Self {
        Self { key, label, choice }
    }
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid menu: {0}")]
    InvalidMenu(String),

    #[error("input closed")]
    InputClosed,

    #[error("'{input}' is not a valid {expected}")]
    InvalidInput { input: String, expected: &'static str },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<InputError> for MenuError {
    fn from(e: InputError) -> Self {
        match e {
            InputError::Closed => MenuError::InputClosed,
            InputError::Io(e) => MenuError::Io(e),
            InputError::Invalid { input, expected } => MenuError::InvalidInput { input, expected },
        }
    }
}

/// A closed set of selections and the handlers behind them.
///
/// Implementors own whatever state their handlers touch (the roster, for one)
/// and get it back by `&mut self` on every call.
pub trait Menu {
    type Choice: Copy + Eq + std::fmt::Debug + 'static;

    /// Every option in display order, the exit option included.
    fn options(&self) -> &'static [MenuOption<Self::Choice>];

    fn exit_key(&self) -> &'static str;

    /// Printed once before the first menu.
    fn banner(&self) -> Option<&'static str> { None }

    fn execute<R: BufRead, W: Write>(
        &mut self,
        choice: Self::Choice,
        console: &mut Console<R, W>,
    ) -> Result<(), MenuError>;
}

/// Unwrap a parsed answer, or tell the user it was bad and yield `None`.
/// Closed input and I/O failures still propagate.
pub fn recover<T, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    parsed: Result<T, InputError>,
) -> Result<Option<T>, MenuError> {
    match parsed {
        Ok(v) => Ok(Some(v)),
        Err(InputError::Invalid { input, expected }) => {
            logd!("Input: rejected {:?} (expected {})", input, expected);
            console.say(format!("Invalid input: '{}' is not a valid {}.", input.trim(), expected))?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
