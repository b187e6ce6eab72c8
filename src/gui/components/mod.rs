// src/gui/components/mod.rs
pub mod entry;
pub mod error_modal;
pub mod keypad;
