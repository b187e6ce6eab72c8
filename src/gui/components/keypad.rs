// src/gui/components/keypad.rs

use eframe::egui;
use crate::gui::{app::App, pad::LAYOUT};

const BUTTON: [f32; 2] = [52.0, 40.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::Grid::new("keypad")
        .spacing([4.0, 4.0])
        .show(ui, |ui| {
            for row in LAYOUT {
                for key in row {
                    let text = egui::RichText::new(key.label()).size(18.0);
                    if ui.add_sized(BUTTON, egui::Button::new(text)).clicked() {
                        app.pad.press(key);
                    }
                }
                ui.end_row();
            }
        });
}
