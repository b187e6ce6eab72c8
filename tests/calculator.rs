// tests/calculator.rs
mod common;

use deskkit::calc::{self, CalcError, CalcMenu, Op};
use deskkit::menu::Outcome;

#[test]
fn arithmetic_basics() {
    assert_eq!(calc::add(2.0, 3.0), 5.0);
    assert_eq!(calc::subtract(2.0, 3.0), -1.0);
    assert_eq!(calc::multiply(-2.0, 3.0), -6.0);
    assert_eq!(calc::divide(10.0, 4.0), Ok(2.5));
}

#[test]
fn divide_by_zero_has_no_result() {
    assert_eq!(calc::divide(10.0, 0.0), Err(CalcError::DivideByZero));
    assert_eq!(Op::Div.apply(10.0, 0.0), Err(CalcError::DivideByZero));
    assert_eq!(CalcError::DivideByZero.to_string(), "Cannot divide by zero!");
}

#[test]
fn menu_addition() {
    let (s, out) = common::drive(&mut CalcMenu, "1\n2\n3\n5\n");
    assert_eq!(s.outcome, Outcome::Terminated);
    assert!(out.starts_with("Simple calculator.\n"));
    assert!(out.contains("Result: 2 + 3 = 5\n"));
}

#[test]
fn menu_multiply_negative() {
    let (_, out) = common::drive(&mut CalcMenu, "3\n-2\n3\n5\n");
    assert!(out.contains("Result: -2 * 3 = -6\n"));
}

#[test]
fn menu_divide_by_zero_is_reported() {
    let (s, out) = common::drive(&mut CalcMenu, "4\n10\n0\n5\n");
    assert_eq!(s.outcome, Outcome::Terminated);
    assert!(out.contains("Cannot divide by zero!\n"));
    assert!(!out.contains("Result:"));
}

#[test]
fn malformed_number_is_recoverable() {
    // Bad first operand: nothing computed, menu continues to the exit.
    let (s, out) = common::drive(&mut CalcMenu, "1\nabc\n2\n1.5\n2\n5\n");
    assert_eq!(s.outcome, Outcome::Terminated);
    assert!(out.contains("Invalid input: 'abc' is not a valid number."));
    assert!(out.contains("Result: 1.5 - 2 = -0.5\n"));
}
