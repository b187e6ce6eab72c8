// src/files/mod.rs
//
// Text file write / read / append. Each call opens, acts once, and closes;
// the handle is dropped on every return path, the error ones included.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::menu::{Console, Menu, MenuError, MenuOption};

#[derive(Debug, Error)]
pub enum FileError {
    #[error("'{}' not found: {source}", .path.display())]
    NotFound { path: PathBuf, source: io::Error },

    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl FileError {
    fn from_io(path: &Path, e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            FileError::NotFound { path: path.to_path_buf(), source: e }
        } else {
            FileError::Io { path: path.to_path_buf(), source: e }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound { .. })
    }
}

/// Create or truncate `path` and write `content` as UTF-8.
pub fn write_text(path: &Path, content: &str) -> Result<(), FileError> {
    let file = File::create(path).map_err(|e| FileError::from_io(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(content.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| FileError::from_io(path, e))
}

/// Whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|e| FileError::from_io(path, e))
}

/// Append a newline and then `content`. Creates the file when absent.
pub fn append_text(path: &Path, content: &str) -> Result<(), FileError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FileError::from_io(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(b"\n")
        .and_then(|_| out.write_all(content.as_bytes()))
        .and_then(|_| out.flush())
        .map_err(|e| FileError::from_io(path, e))
}

/* ---------------- Menu ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileChoice { Write, Read, Append, Exit }

static OPTIONS: &[MenuOption<FileChoice>] = &[
    MenuOption::new("1", "Write to a file", FileChoice::Write),
    MenuOption::new("2", "Read a file", FileChoice::Read),
    MenuOption::new("3", "Append to a file", FileChoice::Append),
    MenuOption::new("4", "Exit", FileChoice::Exit),
];

#[derive(Default)]
pub struct FileMenu;

impl FileMenu {
    fn write<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), MenuError> {
        let name = console.prompt("File name to save: ")?;
        let content = console.prompt("Content to save: ")?;

        let msg = match write_text(Path::new(&name), &content) {
            Ok(()) => {
                logf!("Files: wrote {} bytes to {}", content.len(), name);
                format!("Saved content to '{name}'.")
            }
            Err(e) => {
                loge!("Files: write failed: {}", e);
                format!("An error occurred while saving the file: {e}")
            }
        };
        console.say(msg)?;
        Ok(())
    }

    fn read<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), MenuError> {
        let name = console.prompt("File name to read: ")?;

        match read_text(Path::new(&name)) {
            Ok(text) => {
                logf!("Files: read {} bytes from {}", text.len(), name);
                console.say("\n=== File contents ===")?;
                console.say(text)?;
            }
            Err(e) => {
                loge!("Files: read failed: {}", e);
                console.say(read_failure_msg(&name, &e))?;
            }
        }
        Ok(())
    }

    fn append<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), MenuError> {
        let name = console.prompt("File name to append to: ")?;
        let content = console.prompt("Content to append: ")?;

        let msg = match append_text(Path::new(&name), &content) {
            Ok(()) => {
                logf!("Files: appended {} bytes to {}", content.len(), name);
                format!("Appended content to '{name}'.")
            }
            Err(e) => {
                loge!("Files: append failed: {}", e);
                format!("An error occurred while appending to the file: {e}")
            }
        };
        console.say(msg)?;
        Ok(())
    }
}

/// Not-found gets its own wording; anything else carries the cause.
pub fn read_failure_msg(name: &str, e: &FileError) -> String {
    match e {
        FileError::NotFound { .. } => format!("Could not find the file '{name}'."),
        FileError::Io { source, .. } => format!("An error occurred while reading the file: {source}"),
    }
}

impl Menu for FileMenu {
    type Choice = FileChoice;

    fn options(&self) -> &'static [MenuOption<FileChoice>] { OPTIONS }

    fn exit_key(&self) -> &'static str { "4" }

    fn execute<R: BufRead, W: Write>(
        &mut self,
        choice: FileChoice,
        console: &mut Console<R, W>,
    ) -> Result<(), MenuError> {
        match choice {
            FileChoice::Write => self.write(console),
            FileChoice::Read => self.read(console),
            FileChoice::Append => self.append(console),
            // The dispatcher consumes the exit key before calling execute.
            FileChoice::Exit => Ok(()),
        }
    }
}
