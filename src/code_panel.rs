pub mod highlighter;

use eframe::egui;

use crate::code_panel::highlighter::{highlight_code, Language};
use crate::states::editor::{CodeTab, EditorState};

/// Three-tab code editor (HTML / CSS / JS). Every keystroke replaces the
/// active fragment wholesale and notifies the preview scheduler.
pub fn show(ui: &mut egui::Ui, editor: &mut EditorState) {
    ui.horizontal(|ui| {
        tab_button(ui, editor, CodeTab::Html, "<> HTML");
        tab_button(ui, editor, CodeTab::Css, "🎨 CSS");
        tab_button(ui, editor, CodeTab::Js, "{} JavaScript");
    });
    ui.separator();

    let lang = match editor.active_tab {
        CodeTab::Html => Language::Html,
        CodeTab::Css => Language::Css,
        CodeTab::Js => Language::Js,
    };

    let mut layouter = |ui: &egui::Ui, string: &str, wrap_width: f32| {
        let mut layout_job = egui::text::LayoutJob::default();
        highlight_code(&mut layout_job, string, lang);
        layout_job.wrap.max_width = wrap_width;
        ui.fonts(|f| f.layout_job(layout_job))
    };

    let available_rect = ui.available_rect_before_wrap();
    ui.painter()
        .rect_filled(available_rect, 0.0, egui::Color32::from_rgb(10, 10, 10));

    egui::ScrollArea::vertical()
        .id_source("code_editor_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.set_min_height(ui.available_height());

            let buffer = match editor.active_tab {
                CodeTab::Html => &mut editor.document.markup,
                CodeTab::Css => &mut editor.document.style,
                CodeTab::Js => &mut editor.document.script,
            };
            let rows = buffer.lines().count().max(6);

            let response = ui.add(
                egui::TextEdit::multiline(buffer)
                    .id(ui.make_persistent_id("fragment_text_edit"))
                    .font(egui::TextStyle::Monospace)
                    .code_editor()
                    .desired_rows(rows)
                    .frame(false)
                    .desired_width(f32::INFINITY)
                    .lock_focus(true)
                    .layouter(&mut layouter),
            );

            if response.changed() {
                let now = ui.ctx().input(|i| i.time);
                editor.scheduler.note_change(now);
            }
        });
}

fn tab_button(ui: &mut egui::Ui, editor: &mut EditorState, tab: CodeTab, label: &str) {
    if ui
        .selectable_label(editor.active_tab == tab, label)
        .clicked()
    {
        editor.active_tab = tab;
    }
}
