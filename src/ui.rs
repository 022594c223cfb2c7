use eframe::egui;

use crate::app_state::{AppState, Page, ToastType};
use crate::{auth_modal, dashboard, header, landing_page, project_editor, project_view};

pub struct App {
    state: AppState,
}

pub fn create_app() -> App {
    App {
        state: AppState::default(),
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;

        ctx.set_visuals(if state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // Drive the debounced preview from the frame clock.
        let now = ctx.input(|i| i.time);
        state.tick(now);
        if state.page == Page::ProjectEditor && state.editor.scheduler.is_pending() {
            // Make sure the quiet period elapses even when the user stops
            // producing input events.
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        header::show(ctx, state);

        egui::CentralPanel::default().show(ctx, |ui| match state.page {
            Page::Landing => landing_page::show(ui, state),
            Page::Dashboard => dashboard::show(ui, state),
            Page::ProjectEditor => project_editor::show(ui, state),
            Page::ProjectView => project_view::show(ui, state),
        });

        auth_modal::show(ctx, state);

        // Toast notification
        if let Some(msg) = &state.toast_message {
            if now > state.toast_deadline {
                state.toast_message = None;
            } else {
                let bg_color = match state.toast_type {
                    ToastType::Error => egui::Color32::from_rgb(200, 50, 50),
                    ToastType::Success => egui::Color32::from_rgb(50, 150, 50),
                    ToastType::Info => egui::Color32::from_gray(80),
                };

                egui::Area::new("toast_notification")
                    .order(egui::Order::Tooltip)
                    .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -60.0))
                    .show(ctx, |ui| {
                        egui::Frame::none()
                            .fill(bg_color)
                            .rounding(8.0)
                            .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(50)))
                            .inner_margin(12.0)
                            .shadow(egui::epaint::Shadow::small_dark())
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(msg)
                                        .color(egui::Color32::WHITE)
                                        .size(15.0),
                                );
                            });
                    });
                // Repaint so the toast disappears on schedule.
                ctx.request_repaint_after(std::time::Duration::from_millis(200));
            }
        }
    }
}
