use eframe::egui;

use crate::app_state::{AppState, DashboardTab, Page};
use crate::catalog::{self, PublishStatus};
use crate::project_card::tag_badge;

pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(user) = state.session.user().cloned() else {
        // Signed out while on the dashboard (e.g. logout): bounce home.
        state.navigate(Page::Landing);
        return;
    };

    egui::SidePanel::left("dashboard_sidebar")
        .resizable(false)
        .exact_width(220.0)
        .show_inside(ui, |ui| {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("👤").size(40.0));
                ui.label(egui::RichText::new(&user.username).strong().size(16.0));
                ui.label(egui::RichText::new(&user.email).weak().size(12.0));
                if let Some(bio) = &user.bio {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(bio).weak().size(12.0));
                }
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("★ {:.1}", user.rating))
                        .color(egui::Color32::GOLD),
                );
            });

            ui.add_space(16.0);
            tab_entry(ui, state, DashboardTab::Projects, "🗁 My projects");
            tab_entry(ui, state, DashboardTab::Fonts, "🗛 My fonts");
            tab_entry(ui, state, DashboardTab::Friends, "👥 Friends");
            tab_entry(ui, state, DashboardTab::Bookmarks, "🔖 Bookmarks");
        });

    egui::CentralPanel::default().show_inside(ui, |ui| match state.dashboard_tab {
        DashboardTab::Projects => projects_tab(ui, state),
        DashboardTab::Fonts => fonts_tab(ui),
        DashboardTab::Friends => friends_tab(ui),
        DashboardTab::Bookmarks => bookmarks_tab(ui, state),
    });
}

fn tab_entry(ui: &mut egui::Ui, state: &mut AppState, tab: DashboardTab, label: &str) {
    if ui
        .selectable_label(state.dashboard_tab == tab, label)
        .clicked()
    {
        state.dashboard_tab = tab;
    }
}

fn projects_tab(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("My projects");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ New project").clicked() {
                state.navigate(Page::ProjectEditor);
            }
        });
    });
    ui.separator();

    for project in catalog::user_projects() {
        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(project.title).strong());
                            status_badge(ui, project.status);
                        });
                        ui.label(egui::RichText::new(project.description).weak().size(12.0));
                        ui.horizontal_wrapped(|ui| {
                            for tag in project.tags {
                                tag_badge(ui, tag);
                            }
                        });
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "👁 {}   ♥ {}   {}",
                                project.views, project.likes, project.last_modified
                            ))
                            .weak()
                            .size(12.0),
                        );
                    });
                });
            });
        ui.add_space(8.0);
    }
}

fn fonts_tab(ui: &mut egui::Ui) {
    ui.heading("My fonts");
    ui.separator();
    for font in catalog::user_fonts() {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(font.name).strong());
            tag_badge(ui, font.category);
            status_badge(ui, font.status);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("⬇ {}   ♥ {}", font.downloads, font.likes))
                        .weak()
                        .size(12.0),
                );
            });
        });
        ui.add_space(4.0);
    }
}

fn friends_tab(ui: &mut egui::Ui) {
    ui.heading("Friends");
    ui.separator();
    for friend in catalog::friends() {
        ui.horizontal(|ui| {
            let dot = if friend.online {
                egui::RichText::new("●").color(egui::Color32::from_rgb(50, 180, 50))
            } else {
                egui::RichText::new("●").weak()
            };
            ui.label(dot);
            ui.label(friend.username);
            ui.label(
                egui::RichText::new(if friend.online { "online" } else { "offline" })
                    .weak()
                    .size(11.0),
            );
        });
    }
}

fn bookmarks_tab(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Bookmarks");
    ui.separator();
    for bookmark in catalog::bookmarks() {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(bookmark.title).strong());
            ui.label(egui::RichText::new(format!("by {}", bookmark.author)).weak());
            ui.label(
                egui::RichText::new(format!("★ {:.1}", bookmark.rating))
                    .color(egui::Color32::GOLD)
                    .size(12.0),
            );
            ui.label(egui::RichText::new(format!("♥ {}", bookmark.likes)).weak().size(12.0));
            if ui.small_button("Open").clicked() {
                state.navigate(Page::ProjectView);
            }
        });
    }
}

fn status_badge(ui: &mut egui::Ui, status: PublishStatus) {
    let (text, color) = match status {
        PublishStatus::Published => ("published", egui::Color32::from_rgb(50, 150, 50)),
        PublishStatus::Draft => ("draft", egui::Color32::from_gray(120)),
    };
    ui.label(egui::RichText::new(text).color(color).size(11.0));
}
