// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;

pub mod calc;
pub mod files;
pub mod gui;
pub mod menu;
pub mod roster;
pub mod scrape;
