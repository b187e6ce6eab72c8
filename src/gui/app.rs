// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::config::consts::WINDOW_TITLE;

use super::pad::CalcPad;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    logf!("GUI: starting");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

pub struct App {
    pub pad: CalcPad,
}

impl App {
    pub fn new() -> Self {
        Self { pad: CalcPad::new() }
    }
}

impl Default for App {
    fn default() -> Self { Self::new() }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Typing into a modal-covered field would edit behind the dialog.
            ui.add_enabled_ui(self.pad.error.is_none(), |ui| {
                crate::gui::components::entry::draw(ui, self);
                ui.add_space(6.0);
                crate::gui::components::keypad::draw(ui, self);
            });
        });

        crate::gui::components::error_modal::draw(ctx, self);
    }
}
