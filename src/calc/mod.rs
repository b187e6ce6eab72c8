// src/calc/mod.rs
//
// Four-function calculator behind the menu dispatcher,
// plus the restricted expression evaluator the GUI keypad uses.

pub mod expr;

use std::{fmt, io::{BufRead, Write}};

use thiserror::Error;

use crate::menu::{self, Console, Menu, MenuError, MenuOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivideByZero,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op { Add, Sub, Mul, Div }

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Op::Add => Ok(add(a, b)),
            Op::Sub => Ok(subtract(a, b)),
            Op::Mul => Ok(multiply(a, b)),
            Op::Div => divide(a, b),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn add(a: f64, b: f64) -> f64 { a + b }
pub fn subtract(a: f64, b: f64) -> f64 { a - b }
pub fn multiply(a: f64, b: f64) -> f64 { a * b }

pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}

/* ---------------- Menu ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcChoice {
    Run(Op),
    Exit,
}

static OPTIONS: &[MenuOption<CalcChoice>] = &[
    MenuOption::new("1", "Addition", CalcChoice::Run(Op::Add)),
    MenuOption::new("2", "Subtraction", CalcChoice::Run(Op::Sub)),
    MenuOption::new("3", "Multiplication", CalcChoice::Run(Op::Mul)),
    MenuOption::new("4", "Division", CalcChoice::Run(Op::Div)),
    MenuOption::new("5", "Exit", CalcChoice::Exit),
];

#[derive(Default)]
pub struct CalcMenu;

impl CalcMenu {
    fn compute<R: BufRead, W: Write>(&mut self, op: Op, console: &mut Console<R, W>) -> Result<(), MenuError> {
        let parsed = console_number(console, "Enter the first number: ");
        let Some(a) = menu::recover(console, parsed)? else { return Ok(()) };
        let parsed = console_number(console, "Enter the second number: ");
        let Some(b) = menu::recover(console, parsed)? else { return Ok(()) };

        match op.apply(a, b) {
            Ok(r) => {
                logd!("Calc: {} {} {} = {}", a, op, b, r);
                console.say(format!("Result: {a} {op} {b} = {r}"))?;
            }
            Err(e) => {
                logd!("Calc: {} {} {} rejected ({})", a, op, b, e);
                console.say(e)?;
            }
        }
        Ok(())
    }
}

fn console_number<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    msg: &str,
) -> Result<f64, menu::InputError> {
    console.prompt_parse(msg, "number")
}

impl Menu for CalcMenu {
    type Choice = CalcChoice;

    fn options(&self) -> &'static [MenuOption<CalcChoice>] { OPTIONS }

    fn exit_key(&self) -> &'static str { "5" }

    fn banner(&self) -> Option<&'static str> { Some("Simple calculator.") }

    fn execute<R: BufRead, W: Write>(
        &mut self,
        choice: CalcChoice,
        console: &mut Console<R, W>,
    ) -> Result<(), MenuError> {
        match choice {
            CalcChoice::Run(op) => self.compute(op, console),
            // The dispatcher consumes the exit key before calling execute.
            CalcChoice::Exit => Ok(()),
        }
    }
}
