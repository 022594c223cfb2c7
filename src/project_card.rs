use eframe::egui;

use crate::catalog::ProjectSummary;

/// Card for a community project. Returns the click response so the caller
/// decides where it navigates.
pub fn show(ui: &mut egui::Ui, project: &ProjectSummary) -> egui::Response {
    let frame = egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(8.0)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(12.0);

    let response = frame
        .show(ui, |ui| {
            ui.set_width(240.0);

            ui.label(egui::RichText::new(project.title).strong().size(16.0));
            ui.label(
                egui::RichText::new(format!("by {}", project.author))
                    .weak()
                    .size(12.0),
            );
            ui.add_space(6.0);
            ui.label(egui::RichText::new(project.description).size(12.0));
            ui.add_space(6.0);

            ui.horizontal_wrapped(|ui| {
                for tag in project.tags.iter().take(3) {
                    tag_badge(ui, tag);
                }
                if project.tags.len() > 3 {
                    tag_badge(ui, &format!("+{}", project.tags.len() - 3));
                }
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("★ {:.1}", project.rating))
                        .color(egui::Color32::GOLD)
                        .size(12.0),
                );
                ui.label(egui::RichText::new(format!("👁 {}", project.views)).weak().size(12.0));
                ui.label(egui::RichText::new(format!("♥ {}", project.likes)).weak().size(12.0));
            });
        })
        .response;

    response.interact(egui::Sense::click())
}

pub fn tag_badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(6.0)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(11.0));
        });
}
