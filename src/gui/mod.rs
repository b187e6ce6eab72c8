// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod pad;

pub use app::run;
