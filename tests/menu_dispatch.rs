// tests/menu_dispatch.rs
//
// Dispatcher loop driven by a small counting menu, no real handlers.

use std::io::{BufRead, Cursor, Write};

use deskkit::menu::{
    self, Console, DispatchState, Dispatcher, Menu, MenuError, MenuOption, Outcome, Selection,
    MSG_EXIT, MSG_INVALID,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice { Bump, Fail, Quit }

static OPTIONS: &[MenuOption<Choice>] = &[
    MenuOption::new("1", "Bump", Choice::Bump),
    MenuOption::new("2", "Fail", Choice::Fail),
    MenuOption::new("q", "Quit", Choice::Quit),
];

#[derive(Default)]
struct Counter {
    bumps: u32,
}

impl Menu for Counter {
    type Choice = Choice;

    fn options(&self) -> &'static [MenuOption<Choice>] { OPTIONS }

    fn exit_key(&self) -> &'static str { "q" }

    fn execute<R: BufRead, W: Write>(
        &mut self,
        choice: Choice,
        console: &mut Console<R, W>,
    ) -> Result<(), MenuError> {
        match choice {
            Choice::Bump => {
                self.bumps += 1;
                console.say("bumped")?;
                Ok(())
            }
            Choice::Fail => Err(MenuError::InvalidMenu("handler blew up".into())),
            Choice::Quit => panic!("exit key reached the handler"),
        }
    }
}

fn drive(menu: &mut Counter, input: &str) -> (Result<menu::RunSummary, MenuError>, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let res = menu::run(menu, &mut console);
    let (_, out) = console.into_parts();
    (res, String::from_utf8(out).unwrap())
}

#[test]
fn exit_key_terminates_immediately() {
    let mut m = Counter::default();
    let (res, out) = drive(&mut m, "q\n");
    let s = res.unwrap();
    assert_eq!(s.outcome, Outcome::Terminated);
    assert_eq!(s.iterations, 1);
    assert_eq!(s.handled, 0);
    assert!(out.ends_with(&format!("{MSG_EXIT}\n")));
}

#[test]
fn exit_key_terminates_after_any_history() {
    let mut m = Counter::default();
    let (res, _) = drive(&mut m, "1\nzzz\n1\n\n  q  \n1\n");
    let s = res.unwrap();
    assert_eq!(s.outcome, Outcome::Terminated);
    assert_eq!(s.handled, 2);
    assert_eq!(s.invalid, 2);
    // The trailing "1" after exit is never read.
    assert_eq!(m.bumps, 2);
}

#[test]
fn invalid_input_reprompts_without_touching_state() {
    let mut m = Counter::default();
    let (res, out) = drive(&mut m, "3\nQ\n11\n1 1\nq\n");
    let s = res.unwrap();
    assert_eq!(s.invalid, 4);
    assert_eq!(s.iterations, 5);
    assert_eq!(m.bumps, 0);
    assert_eq!(out.matches(MSG_INVALID).count(), 4);
    assert!(!out.contains("bumped"));
}

#[test]
fn menu_is_rendered_every_iteration() {
    let mut m = Counter::default();
    let (_, out) = drive(&mut m, "1\nq\n");
    assert_eq!(out.matches("1. Bump\n2. Fail\nq. Quit\n").count(), 2);
    assert_eq!(out.matches("Choose an option (1-q): ").count(), 2);
}

#[test]
fn end_of_input_stops_the_loop() {
    let mut m = Counter::default();
    let (res, _) = drive(&mut m, "1\n");
    let s = res.unwrap();
    assert_eq!(s.outcome, Outcome::InputClosed);
    assert_eq!(m.bumps, 1);
}

#[test]
fn handler_errors_propagate() {
    let mut m = Counter::default();
    let (res, _) = drive(&mut m, "2\nq\n");
    assert!(matches!(res, Err(MenuError::InvalidMenu(msg)) if msg == "handler blew up"));
}

#[test]
fn select_uses_exact_trimmed_match() {
    let d = Dispatcher::new(OPTIONS, "q").unwrap();
    assert_eq!(d.state(), DispatchState::AwaitingSelection);
    assert_eq!(d.select(" 1\t"), Selection::Choice(Choice::Bump));
    assert_eq!(d.select("q"), Selection::Exit);
    assert_eq!(d.select("01"), Selection::Invalid);
    assert_eq!(d.select(""), Selection::Invalid);
}

static DUPLICATE: &[MenuOption<Choice>] = &[
    MenuOption::new("1", "Bump", Choice::Bump),
    MenuOption::new("1", "Again", Choice::Bump),
    MenuOption::new("q", "Quit", Choice::Quit),
];

static EMPTY: &[MenuOption<Choice>] = &[];

#[test]
fn malformed_menus_are_rejected() {
    assert!(matches!(Dispatcher::new(DUPLICATE, "q"), Err(MenuError::InvalidMenu(_))));
    assert!(matches!(Dispatcher::new(EMPTY, "q"), Err(MenuError::InvalidMenu(_))));
    assert!(matches!(Dispatcher::new(OPTIONS, "x"), Err(MenuError::InvalidMenu(_))));
}
