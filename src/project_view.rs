use chrono::Utc;
use eframe::egui;

use crate::app_state::AppState;
use crate::project_card::tag_badge;
use crate::states::viewer::format_time_ago;

pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
    let now = ui.ctx().input(|i| i.time);
    let signed_in = state.session.is_authenticated();
    let username = state
        .session
        .user()
        .map(|u| u.username.clone())
        .unwrap_or_else(|| "Anonymous".to_string());

    egui::SidePanel::right("viewer_sidebar")
        .resizable(false)
        .exact_width(240.0)
        .show_inside(ui, |ui| {
            sidebar(ui, state, signed_in, now);
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_source("viewer_scroll")
            .show(ui, |ui| {
                header(ui, state);

                ui.add_space(12.0);
                ui.label(egui::RichText::new("Live preview").strong());
                ui.separator();
                let preview_height = 260.0;
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), preview_height),
                    egui::Sense::hover(),
                );
                let mut pane_ui = ui.child_ui(rect, *ui.layout());
                state.viewer.pane.show(&mut pane_ui);

                ui.add_space(16.0);
                comments(ui, state, signed_in, &username, now);
                ui.add_space(24.0);
            });
    });
}

fn header(ui: &mut egui::Ui, state: &mut AppState) {
    let detail = &state.viewer.detail;
    ui.heading(detail.title);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(detail.author).strong().size(13.0));
        ui.label(
            egui::RichText::new(format!("★ {:.1}", detail.author_rating))
                .color(egui::Color32::GOLD)
                .size(12.0),
        );
        ui.label(
            egui::RichText::new(format!("Published {}", detail.publish_date))
                .weak()
                .size(12.0),
        );
    });
    ui.add_space(6.0);
    ui.label(egui::RichText::new(detail.description).weak());
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for tag in detail.tags {
            tag_badge(ui, tag);
        }
    });
}

fn sidebar(ui: &mut egui::Ui, state: &mut AppState, signed_in: bool, now: f64) {
    ui.add_space(8.0);
    let detail = state.viewer.detail.clone();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("👁 {}", detail.views)).weak());
        ui.label(egui::RichText::new(format!("♥ {}", detail.likes)).weak());
    });
    ui.label(
        egui::RichText::new(format!(
            "★ {:.1} ({} ratings)",
            detail.rating, detail.total_ratings
        ))
        .color(egui::Color32::GOLD),
    );

    if signed_in {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for star in 1..=5u8 {
                let filled = star <= state.viewer.user_rating;
                let label = if filled { "★" } else { "☆" };
                if ui
                    .button(egui::RichText::new(label).color(egui::Color32::GOLD))
                    .clicked()
                {
                    state.viewer.user_rating = star;
                    state.toast_success(format!("You rated this project {star} stars"), now);
                }
            }
        });

        ui.add_space(8.0);
        let like_label = if state.viewer.is_liked {
            "♥ Liked"
        } else {
            "♡ Like"
        };
        if ui
            .add_sized([ui.available_width(), 28.0], egui::Button::new(like_label))
            .clicked()
        {
            state.viewer.is_liked = !state.viewer.is_liked;
            let msg = if state.viewer.is_liked {
                "Project liked!"
            } else {
                "Like removed"
            };
            state.toast_success(msg, now);
        }

        let bm_label = if state.viewer.is_bookmarked {
            "🔖 Bookmarked"
        } else {
            "🔖 Bookmark"
        };
        if ui
            .add_sized([ui.available_width(), 28.0], egui::Button::new(bm_label))
            .clicked()
        {
            state.viewer.is_bookmarked = !state.viewer.is_bookmarked;
            let msg = if state.viewer.is_bookmarked {
                "Added to bookmarks!"
            } else {
                "Removed from bookmarks"
            };
            state.toast_success(msg, now);
        }

        if ui
            .add_sized([ui.available_width(), 28.0], egui::Button::new("🔗 Share"))
            .clicked()
        {
            ui.output_mut(|o| o.copied_text = "https://code.bit.city/p/1".to_string());
            state.toast_success("Link copied!", now);
        }
    }

    ui.add_space(16.0);
    ui.separator();
    ui.label(egui::RichText::new("About the author").strong());
    ui.add_space(4.0);
    ui.label(detail.author);
    ui.label(
        egui::RichText::new(format!("★ {:.1}", detail.author_rating))
            .color(egui::Color32::GOLD)
            .size(12.0),
    );
    let _ = ui.button("View profile");
}

fn comments(ui: &mut egui::Ui, state: &mut AppState, signed_in: bool, username: &str, now: f64) {
    ui.label(
        egui::RichText::new(format!("Comments ({})", state.viewer.comments.len())).strong(),
    );
    ui.separator();

    if signed_in {
        ui.add(
            egui::TextEdit::multiline(&mut state.viewer.new_comment)
                .hint_text("Add your comment...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        let can_post = !state.viewer.new_comment.trim().is_empty();
        if ui
            .add_enabled(can_post, egui::Button::new("Add comment"))
            .clicked()
            && state.viewer.add_comment(username)
        {
            state.toast_success("Comment added!", now);
        }
        ui.add_space(8.0);
    }

    let wall_now = Utc::now();
    let mut like_toggle: Option<usize> = None;
    for (i, comment) in state.viewer.comments.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&comment.author).strong().size(13.0));
            ui.label(
                egui::RichText::new(format_time_ago(wall_now, comment.timestamp))
                    .weak()
                    .size(11.0),
            );
        });
        ui.label(egui::RichText::new(&comment.content).size(13.0));
        let thumb = if comment.is_liked { "👍" } else { "👍🏻" };
        if ui
            .small_button(format!("{thumb} {}", comment.likes))
            .clicked()
        {
            like_toggle = Some(i);
        }
        ui.separator();
    }
    if let Some(i) = like_toggle {
        state.viewer.toggle_comment_like(i);
    }
}
