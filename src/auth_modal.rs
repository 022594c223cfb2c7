use eframe::egui;

use crate::app_state::{AppState, AuthTab};

/// Login / register modal. Credentials are mock-validated: anything
/// non-empty signs in; the register tab additionally checks confirmation
/// and a minimum password length.
pub fn show(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_auth_modal {
        return;
    }
    let now = ctx.input(|i| i.time);
    let screen_rect = ctx.input(|i| i.screen_rect());

    // Backdrop over the page, modal above it.
    let backdrop = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("auth_backdrop"),
    ));
    backdrop.rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(160));

    egui::Area::new("auth_modal_area")
        .fixed_pos(screen_rect.center())
        .pivot(egui::Align2::CENTER_CENTER)
        .order(egui::Order::Tooltip)
        .interactable(true)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style())
                .rounding(12.0)
                .inner_margin(24.0)
                .show(ui, |ui| {
                    ui.set_width(320.0);

                    ui.horizontal(|ui| {
                        tab(ui, state, AuthTab::Login, "Log in");
                        tab(ui, state, AuthTab::Register, "Sign up");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("✖").clicked() {
                                state.show_auth_modal = false;
                            }
                        });
                    });
                    ui.separator();
                    ui.add_space(8.0);

                    match state.auth_tab {
                        AuthTab::Login => login_form(ui, state, now),
                        AuthTab::Register => register_form(ui, state, now),
                    }
                });
        });
}

fn tab(ui: &mut egui::Ui, state: &mut AppState, tab: AuthTab, label: &str) {
    if ui.selectable_label(state.auth_tab == tab, label).clicked() {
        state.auth_tab = tab;
    }
}

fn login_form(ui: &mut egui::Ui, state: &mut AppState, now: f64) {
    ui.label("Email");
    ui.add(
        egui::TextEdit::singleline(&mut state.login_email)
            .hint_text("your.email@example.com")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
    ui.label("Password");
    ui.add(
        egui::TextEdit::singleline(&mut state.login_password)
            .password(true)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(12.0);

    if ui
        .add_sized([ui.available_width(), 32.0], egui::Button::new("Log in"))
        .clicked()
    {
        let (email, password) = (state.login_email.clone(), state.login_password.clone());
        if state.session.login(&email, &password) {
            state.toast_success("Signed in!", now);
            state.show_auth_modal = false;
            state.login_email.clear();
            state.login_password.clear();
        } else {
            state.toast_error("Invalid email or password", now);
        }
    }
}

fn register_form(ui: &mut egui::Ui, state: &mut AppState, now: f64) {
    ui.label("Username");
    ui.add(egui::TextEdit::singleline(&mut state.register_username).desired_width(f32::INFINITY));
    ui.add_space(6.0);
    ui.label("Email");
    ui.add(egui::TextEdit::singleline(&mut state.register_email).desired_width(f32::INFINITY));
    ui.add_space(6.0);
    ui.label("Password");
    ui.add(
        egui::TextEdit::singleline(&mut state.register_password)
            .password(true)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
    ui.label("Confirm password");
    ui.add(
        egui::TextEdit::singleline(&mut state.register_confirm)
            .password(true)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(12.0);

    if ui
        .add_sized([ui.available_width(), 32.0], egui::Button::new("Sign up"))
        .clicked()
    {
        if state.register_password != state.register_confirm {
            state.toast_error("Passwords do not match", now);
            return;
        }
        if state.register_password.len() < 6 {
            state.toast_error("Password must be at least 6 characters", now);
            return;
        }
        let (username, email, password) = (
            state.register_username.clone(),
            state.register_email.clone(),
            state.register_password.clone(),
        );
        if state.session.register(&username, &email, &password) {
            state.toast_success("Registration successful!", now);
            state.show_auth_modal = false;
            state.register_username.clear();
            state.register_email.clear();
            state.register_password.clear();
            state.register_confirm.clear();
        } else {
            state.toast_error("Registration failed", now);
        }
    }
}
