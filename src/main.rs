mod app_state;
mod auth_modal;
mod catalog;
mod code_panel;
mod dashboard;
mod font_card;
mod header;
mod landing_page;
mod preview;
mod project_card;
mod project_editor;
mod project_view;
mod session;
mod states;
mod storage;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let native_options = eframe::NativeOptions::default();
    let _ = eframe::run_native(
        "code.bit.city",
        native_options,
        Box::new(|_cc| Box::new(ui::create_app())),
    );
    Ok(())
}
