// src/gui/components/error_modal.rs
//
// Shown while `pad.error` is set. OK, Escape, or a backdrop click clears it;
// the entry text is left as it was.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.pad.error.clone() else { return };

    let mut ok = false;
    let resp = egui::Modal::new(egui::Id::new("calc_error")).show(ctx, |ui| {
        ui.set_width(240.0);
        ui.heading("Error");
        ui.add_space(4.0);
        ui.label(msg);
        ui.add_space(8.0);
        ok = ui.button("OK").clicked();
    });

    if ok || resp.should_close() {
        app.pad.dismiss_error();
    }
}
