// src/roster.rs
//
// In-memory student roster. Nothing is persisted; the store lives exactly as
// long as the StudentMenu that owns it.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::menu::{self, Console, Menu, MenuError, MenuOption};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudentRecord {
    pub age: u32,
    pub grade: i32,
}

/// Name-keyed store. Listing follows first insertion; re-adding a name
/// replaces its record in place.
#[derive(Debug, Default)]
pub struct Roster {
    entries: Vec<(String, StudentRecord)>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new() -> Self { Self::default() }

    /// Insert or overwrite. Returns the record that was replaced, if any.
    pub fn add(&mut self, name: &str, record: StudentRecord) -> Option<StudentRecord> {
        if let Some(&ix) = self.index.get(name) {
            let prev = std::mem::replace(&mut self.entries[ix].1, record);
            return Some(prev);
        }
        self.index.insert(s!(name), self.entries.len());
        self.entries.push((s!(name), record));
        None
    }

    pub fn find(&self, name: &str) -> Option<&StudentRecord> {
        self.index.get(name).map(|&ix| &self.entries[ix].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StudentRecord)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

pub fn describe(name: &str, r: &StudentRecord) -> String {
    format!("Name: {}, Age: {}, Grade: {}", name, r.age, r.grade)
}

/* ---------------- Menu ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentChoice { Add, List, Find, Exit }

static OPTIONS: &[MenuOption<StudentChoice>] = &[
    MenuOption::new("1", "Add a student", StudentChoice::Add),
    MenuOption::new("2", "List students", StudentChoice::List),
    MenuOption::new("3", "Find a student", StudentChoice::Find),
    MenuOption::new("4", "Exit", StudentChoice::Exit),
];

#[derive(Default)]
pub struct StudentMenu {
    roster: Roster,
}

impl StudentMenu {
    pub fn new() -> Self { Self::default() }

    pub fn roster(&self) -> &Roster { &self.roster }

    fn add<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), MenuError> {
        let name = console.prompt("Student name: ")?;

        let parsed = console.prompt_parse("Student age: ", "age");
        let Some(age) = menu::recover(console, parsed)? else { return Ok(()) };
        let parsed = console.prompt_parse("Student grade: ", "grade");
        let Some(grade) = menu::recover(console, parsed)? else { return Ok(()) };

        if self.roster.add(&name, StudentRecord { age, grade }).is_some() {
            logd!("Roster: overwrote {:?}", name);
        }
        logf!("Roster: {} student(s)", self.roster.len());
        console.say(format!("Added student {name}."))?;
        Ok(())
    }

    fn list<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), MenuError> {
        if self.roster.is_empty() {
            console.say("No students registered.")?;
            return Ok(());
        }
        console.say("\n=== Student list ===")?;
        for (name, r) in self.roster.iter() {
            console.say(describe(name, r))?;
        }
        Ok(())
    }

    fn find<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), MenuError> {
        let name = console.prompt("Name to look up: ")?;
        match self.roster.find(&name) {
            Some(r) => console.say(describe(&name, r))?,
            None => {
                logd!("Roster: no match for {:?}", name);
                console.say("Student not found.")?
            }
        }
        Ok(())
    }
}

impl Menu for StudentMenu {
    type Choice = StudentChoice;

    fn options(&self) -> &'static [MenuOption<StudentChoice>] { OPTIONS }

    fn exit_key(&self) -> &'static str { "4" }

    fn execute<R: BufRead, W: Write>(
        &mut self,
        choice: StudentChoice,
        console: &mut Console<R, W>,
    ) -> Result<(), MenuError> {
        match choice {
            StudentChoice::Add => self.add(console),
            StudentChoice::List => self.list(console),
            StudentChoice::Find => self.find(console),
            // The dispatcher consumes the exit key before calling execute.
            StudentChoice::Exit => Ok(()),
        }
    }
}
