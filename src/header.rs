use eframe::egui;

use crate::app_state::{AppState, AuthTab, Page};

const LANGUAGES: &[&str] = &["ua", "en", "pl"];

pub fn show(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("header_panel")
        .exact_height(44.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                // Logo navigates home
                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new("code.bit.city").strong().size(16.0),
                        )
                        .frame(false),
                    )
                    .clicked()
                {
                    state.navigate(Page::Landing);
                }

                ui.add_space(16.0);
                ui.add(
                    egui::TextEdit::singleline(&mut state.search_query)
                        .hint_text("🔍 Search projects, fonts...")
                        .desired_width(260.0),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.session.is_authenticated() {
                        if ui.button("Log out").clicked() {
                            state.logout();
                        }
                        if ui.button("👤 Dashboard").clicked() {
                            state.navigate(Page::Dashboard);
                        }
                        if ui.button("➕ Create").clicked() {
                            state.navigate(Page::ProjectEditor);
                        }
                    } else {
                        if ui.button("Sign up").clicked() {
                            state.open_auth_modal(AuthTab::Register);
                        }
                        if ui.button("Log in").clicked() {
                            state.open_auth_modal(AuthTab::Login);
                        }
                    }

                    // Theme toggle
                    let icon = if state.dark_mode { "☀" } else { "🌙" };
                    if ui.button(icon).clicked() {
                        let dark = !state.dark_mode;
                        state.set_dark_mode(dark);
                    }

                    // Language switcher
                    egui::ComboBox::from_id_source("language_select")
                        .selected_text(state.language.to_uppercase())
                        .width(56.0)
                        .show_ui(ui, |ui| {
                            for lang in LANGUAGES {
                                ui.selectable_value(
                                    &mut state.language,
                                    *lang,
                                    lang.to_uppercase(),
                                );
                            }
                        });
                });
            });
        });
}
