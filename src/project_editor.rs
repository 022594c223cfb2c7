use eframe::egui;

use crate::app_state::AppState;
use crate::code_panel;

/// Editor page: project settings + three-tab code editor on the left, the
/// live preview surface on the right. The preview itself is driven from
/// `AppState::tick`, not from here; this page only reports edits to the
/// scheduler and exposes its controls.
pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
    let now = ui.ctx().input(|i| i.time);

    // Toolbar
    ui.horizontal(|ui| {
        ui.heading("Project editor");
        if let Some(saved_at) = state.editor.last_saved.clone() {
            ui.label(
                egui::RichText::new(format!("Saved {saved_at}"))
                    .weak()
                    .size(11.0),
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Publish").clicked() && state.save_project(now) {
                state.toast_success("Project published!", now);
            }
            if ui.button("🔗 Share").clicked() {
                ui.output_mut(|o| o.copied_text = "https://code.bit.city/p/new".to_string());
                state.toast_success("Link copied!", now);
            }
            if ui.button("💾 Save").clicked() {
                state.save_project(now);
            }

            let auto = state.editor.scheduler.auto_preview();
            if !auto && ui.button("▶ Refresh preview").clicked() {
                state.editor.scheduler.request_refresh();
            }
            if ui
                .button(if auto { "👁 Auto preview" } else { "👁 Manual preview" })
                .clicked()
            {
                state.editor.scheduler.set_auto_preview(!auto);
            }
        });
    });
    ui.separator();

    egui::SidePanel::right("preview_panel")
        .resizable(true)
        .default_width(ui.available_width() * 0.45)
        .show_inside(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Live preview").strong());
                if state.editor.scheduler.is_pending() {
                    ui.label(egui::RichText::new("updating…").weak().size(11.0));
                }
            });
            ui.separator();
            state.editor.pane.show(ui);
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        // Project settings
        egui::CollapsingHeader::new("Project settings")
            .default_open(true)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Title");
                    ui.text_edit_singleline(&mut state.editor.title);
                });
                ui.horizontal(|ui| {
                    ui.label("Description");
                    ui.text_edit_singleline(&mut state.editor.description);
                });
                ui.horizontal(|ui| {
                    ui.label("Tags (comma separated)");
                    ui.text_edit_singleline(&mut state.editor.tags_input);
                });
            });

        ui.add_space(4.0);
        code_panel::show(ui, &mut state.editor);
    });
}
