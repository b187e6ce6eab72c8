// src/gui/components/entry.rs
//
// Expression field across the top. Enter evaluates, same as the `=` key.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let resp = ui.add(
        egui::TextEdit::singleline(&mut app.pad.entry)
            .font(egui::FontId::proportional(20.0))
            .desired_width(f32::INFINITY),
    );

    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        logd!("UI: Enter in entry field");
        app.pad.evaluate();
    }
}
