use eframe::egui;

use crate::catalog::FontSummary;

const PREVIEW_TEXT: &str = "The quick brown fox";

/// Card for a shared font with a sample line.
pub fn show(ui: &mut egui::Ui, font: &FontSummary) {
    egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(8.0)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(240.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(font.name).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    crate::project_card::tag_badge(ui, font.category);
                });
            });
            ui.label(
                egui::RichText::new(format!("by {}", font.author))
                    .weak()
                    .size(12.0),
            );

            ui.add_space(8.0);
            egui::Frame::none()
                .fill(ui.visuals().faint_bg_color)
                .rounding(6.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(egui::RichText::new(PREVIEW_TEXT).size(20.0));
                    });
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let _ = ui.small_button("➕ Add");
                let _ = ui.small_button("⬇");
            });
        });
}
