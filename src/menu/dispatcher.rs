// src/menu/dispatcher.rs
use std::collections::HashSet;
use std::io::{BufRead, Write};

use super::{Console, Menu, MenuError, MenuOption};

pub const MSG_EXIT: &str = "Exiting program.";
pub const MSG_INVALID: &str = "Invalid selection.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchState {
    AwaitingSelection,
    Terminated,
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The exit key was chosen.
    Terminated,
    /// Input ran out before that happened.
    InputClosed,
}

/// What one line of input resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<C> {
    Exit,
    Choice(C),
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: Outcome,
    /// Menus shown.
    pub iterations: usize,
    /// Handlers invoked.
    pub handled: usize,
    pub invalid: usize,
}

pub struct Dispatcher<C: 'static> {
    options: &'static [MenuOption<C>],
    exit_key: &'static str,
    state: DispatchState,
}

impl<C: Copy + Eq + std::fmt::Debug + 'static> Dispatcher<C> {
    /// Checks the menu once up front: at least one option, unique keys,
    /// exactly one of them equal to `exit_key`.
    pub fn new(options: &'static [MenuOption<C>], exit_key: &'static str) -> Result<Self, MenuError> {
        if options.is_empty() {
            return Err(MenuError::InvalidMenu(s!("no options")));
        }

        let mut seen = HashSet::with_capacity(options.len());
        for opt in options {
            if !seen.insert(opt.key) {
                return Err(MenuError::InvalidMenu(format!("duplicate key {:?}", opt.key)));
            }
        }

        if !seen.contains(exit_key) {
            return Err(MenuError::InvalidMenu(format!("exit key {:?} matches no option", exit_key)));
        }

        Ok(Self { options, exit_key, state: DispatchState::AwaitingSelection })
    }

    pub fn state(&self) -> DispatchState { self.state }

    /// Exact match of the trimmed line against each key.
    pub fn select(&self, line: &str) -> Selection<C> {
        let key = line.trim();
        if key == self.exit_key {
            return Selection::Exit;
        }
        self.options
            .iter()
            .find(|o| o.key == key)
            .map_or(Selection::Invalid, |o| Selection::Choice(o.choice))
    }

    /// "Choose an option (1-4): " from the first and last keys.
    pub fn prompt_text(&self) -> String {
        let first = self.options.first().map_or("", |o| o.key);
        let last = self.options.last().map_or("", |o| o.key);
        if first == last {
            format!("Choose an option ({first}): ")
        } else {
            format!("Choose an option ({first}-{last}): ")
        }
    }

    pub fn render<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> std::io::Result<()> {
        console.blank()?;
        for opt in self.options {
            console.say(format!("{}. {}", opt.key, opt.label))?;
        }
        Ok(())
    }

    fn terminate<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> std::io::Result<()> {
        self.state = DispatchState::Terminated;
        console.say(MSG_EXIT)
    }
}

/// Run `menu` until its exit key is chosen or input ends.
///
/// Handler errors are not caught here. End of input, whether at the menu
/// prompt or inside a handler's prompt, ends the run with
/// [`Outcome::InputClosed`].
pub fn run<M: Menu, R: BufRead, W: Write>(
    menu: &mut M,
    console: &mut Console<R, W>,
) -> Result<RunSummary, MenuError> {
    let mut dispatcher = Dispatcher::new(menu.options(), menu.exit_key())?;
    let prompt = dispatcher.prompt_text();

    let mut summary = RunSummary {
        outcome: Outcome::InputClosed,
        iterations: 0,
        handled: 0,
        invalid: 0,
    };

    if let Some(banner) = menu.banner() {
        console.say(banner)?;
    }

    while dispatcher.state() == DispatchState::AwaitingSelection {
        summary.iterations += 1;
        dispatcher.render(console)?;

        let line = match console.prompt(&prompt) {
            Ok(line) => line,
            Err(super::InputError::Closed) => {
                logd!("Menu: input closed at selection prompt");
                return Ok(summary);
            }
            Err(e) => return Err(e.into()),
        };

        match dispatcher.select(&line) {
            Selection::Exit => {
                logd!("Menu: exit selected");
                dispatcher.terminate(console)?;
                summary.outcome = Outcome::Terminated;
            }
            Selection::Choice(choice) => {
                logd!("Menu: dispatch {:?}", choice);
                summary.handled += 1;
                match menu.execute(choice, console) {
                    Ok(()) => {}
                    Err(MenuError::InputClosed) => {
                        logd!("Menu: input closed inside {:?}", choice);
                        return Ok(summary);
                    }
                    Err(e) => {
                        loge!("Menu: handler {:?} failed: {}", choice, e);
                        return Err(e);
                    }
                }
            }
            Selection::Invalid => {
                logd!("Menu: invalid selection {:?}", line.trim());
                summary.invalid += 1;
                console.say(MSG_INVALID)?;
            }
        }
    }

    logf!(
        "Menu: done outcome={:?} iterations={} handled={} invalid={}",
        summary.outcome, summary.iterations, summary.handled, summary.invalid
    );
    Ok(summary)
}
