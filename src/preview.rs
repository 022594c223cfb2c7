//! Live preview: composition, scheduling and the render boundary.

pub mod composer;
pub mod scheduler;

pub use composer::compose;
pub use scheduler::PreviewScheduler;

use eframe::egui;

/// The isolated render boundary. Fire-and-forget: the caller hands over the
/// composed document and must not assume anything about what the surface
/// does with it — no return value, no callback.
pub trait RenderSurface {
    fn render(&mut self, document: &str);
}

/// Desktop stand-in for the sandboxed frame: owns the last composed document
/// and displays it in a scrollable monospace pane. Replacing this with a
/// real webview would not touch the composer or the scheduler.
#[derive(Default)]
pub struct PreviewPane {
    document: String,
    has_rendered: bool,
}

impl PreviewPane {
    pub fn show(&self, ui: &mut egui::Ui) {
        let bg = egui::Color32::from_rgb(10, 10, 10);
        ui.painter()
            .rect_filled(ui.available_rect_before_wrap(), 0.0, bg);

        if !self.has_rendered {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Preview will appear here")
                        .italics()
                        .weak(),
                );
            });
            return;
        }

        egui::ScrollArea::vertical()
            .id_source("preview_pane_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&self.document)
                            .monospace()
                            .color(egui::Color32::from_rgb(200, 210, 200)),
                    )
                    .wrap(true),
                );
            });
    }
}

impl RenderSurface for PreviewPane {
    fn render(&mut self, document: &str) {
        self.document = document.to_string();
        self.has_rendered = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_keeps_only_the_latest_document() {
        let mut pane = PreviewPane::default();
        pane.render("first");
        pane.render("second");
        assert_eq!(pane.document, "second");
        assert!(pane.has_rendered);
    }
}
