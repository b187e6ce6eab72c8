// src/gui/pad.rs
//
// Keypad state without any egui in it, so it can be driven from tests.

use crate::calc::expr::{self, ExprError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Dot,
    Add,
    Sub,
    Mul,
    Div,
    Equals,
}

impl Key {
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Key::Digit(d) => DIGITS[(d % 10) as usize],
            Key::Dot => ".",
            Key::Add => "+",
            Key::Sub => "-",
            Key::Mul => "*",
            Key::Div => "/",
            Key::Equals => "=",
        }
    }
}

/// Button grid, row-major.
pub const LAYOUT: [[Key; 4]; 4] = [
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Div],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Mul],
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Sub],
    [Key::Digit(0), Key::Dot, Key::Equals, Key::Add],
];

#[derive(Debug, Default)]
pub struct CalcPad {
    /// What the entry field shows. The user may also type into it directly.
    pub entry: String,
    /// Set when `=` failed; the window shows it as a modal.
    pub error: Option<String>,
}

impl CalcPad {
    pub fn new() -> Self { Self::default() }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Equals => self.evaluate(),
            other => self.entry.push_str(other.label()),
        }
    }

    /// Replace the entry with its value, or keep it and raise the error.
    pub fn evaluate(&mut self) {
        match expr::evaluate(&self.entry) {
            Ok(v) => {
                let shown = expr::format_number(v);
                logd!("Pad: {:?} = {}", self.entry, shown);
                self.entry = shown;
            }
            Err(e) => {
                logd!("Pad: {:?} rejected ({})", self.entry, e);
                self.error = Some(error_text(&e));
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

fn error_text(e: &ExprError) -> String {
    format!("Cannot calculate this expression ({e}).")
}
