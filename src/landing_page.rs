use eframe::egui;

use crate::app_state::{AppState, AuthTab, Page};
use crate::catalog::{POPULAR_FONTS, POPULAR_PROJECTS};
use crate::{font_card, project_card};

pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .id_source("landing_scroll")
        .show(ui, |ui| {
            // Hero
            ui.add_space(48.0);
            ui.vertical_centered(|ui| {
                ui.heading(
                    egui::RichText::new("Figma AI Prompts")
                        .size(42.0)
                        .strong(),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(
                        "A platform for creating and sharing AI prompts for Figma. \
                         Discover new design possibilities with community projects and fonts.",
                    )
                    .size(16.0)
                    .weak(),
                );
                ui.add_space(20.0);

                ui.horizontal(|ui| {
                    // Center the two call-to-action buttons.
                    let spacing = (ui.available_width() - 320.0).max(0.0) / 2.0;
                    ui.add_space(spacing);
                    if ui
                        .add(egui::Button::new("Get started →").min_size(egui::vec2(150.0, 36.0)))
                        .clicked()
                    {
                        state.open_auth_modal(AuthTab::Register);
                    }
                    if ui
                        .add(
                            egui::Button::new("Browse projects").min_size(egui::vec2(150.0, 36.0)),
                        )
                        .clicked()
                    {
                        state.navigate(Page::Dashboard);
                    }
                });
            });

            ui.add_space(40.0);
            ui.separator();

            // Popular projects
            ui.add_space(16.0);
            ui.heading("Popular projects");
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for project in POPULAR_PROJECTS.iter() {
                    if project_card::show(ui, project).clicked() {
                        state.navigate(Page::ProjectView);
                    }
                }
            });

            // Popular fonts
            ui.add_space(24.0);
            ui.heading("Popular fonts");
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for font in POPULAR_FONTS.iter() {
                    font_card::show(ui, font);
                }
            });
            ui.add_space(32.0);
        });
}
