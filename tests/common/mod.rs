// tests/common/mod.rs
#![allow(dead_code)]

use std::io::Cursor;

use deskkit::menu::{self, Console, Menu, RunSummary};

/// Feed `input` to `menu`, return the summary and everything printed.
pub fn drive<M: Menu>(menu: &mut M, input: &str) -> (RunSummary, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let summary = menu::run(menu, &mut console).expect("menu run");
    let (_, out) = console.into_parts();
    (summary, String::from_utf8(out).expect("utf8 output"))
}
