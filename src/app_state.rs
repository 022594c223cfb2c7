use std::path::PathBuf;

use crate::session::Session;
use crate::states::editor::EditorState;
use crate::states::viewer::ViewerState;
use crate::storage;

/// The four top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Dashboard,
    ProjectEditor,
    ProjectView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Projects,
    Fonts,
    Friends,
    Bookmarks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Success,
    Error,
}

pub struct AppState {
    pub page: Page,
    pub dark_mode: bool,
    pub language: &'static str,
    pub search_query: String,

    pub storage_dir: PathBuf,
    pub session: Session,

    pub editor: EditorState,
    pub viewer: ViewerState,
    pub dashboard_tab: DashboardTab,

    // Auth modal
    pub show_auth_modal: bool,
    pub auth_tab: AuthTab,
    pub login_email: String,
    pub login_password: String,
    pub register_username: String,
    pub register_email: String,
    pub register_password: String,
    pub register_confirm: String,

    // Toast notification
    pub toast_message: Option<String>,
    pub toast_type: ToastType,
    pub toast_deadline: f64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_storage_dir(storage::storage_dir())
    }
}

impl AppState {
    pub fn with_storage_dir(dir: PathBuf) -> Self {
        let session = Session::restore(dir.clone());
        let dark_mode = storage::load_theme(&dir).unwrap_or(false);
        Self {
            page: Page::Landing,
            dark_mode,
            language: "en",
            search_query: String::new(),
            storage_dir: dir,
            session,
            editor: EditorState::default(),
            viewer: ViewerState::default(),
            dashboard_tab: DashboardTab::Projects,
            show_auth_modal: false,
            auth_tab: AuthTab::Login,
            login_email: String::new(),
            login_password: String::new(),
            register_username: String::new(),
            register_email: String::new(),
            register_password: String::new(),
            register_confirm: String::new(),
            toast_message: None,
            toast_type: ToastType::Info,
            toast_deadline: 0.0,
        }
    }

    /// Per-frame work. Returns true when the editor rendered a new preview
    /// this frame.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.page == Page::ProjectEditor {
            self.editor.tick(now)
        } else {
            false
        }
    }

    /// Switch pages. Entering the editor or the viewer starts a fresh
    /// session for that page; leaving one discards its state, which also
    /// cancels any composition still pending in the editor.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        match page {
            Page::ProjectEditor => self.editor = EditorState::default(),
            Page::ProjectView => self.viewer = ViewerState::default(),
            _ => {}
        }
        self.page = page;
    }

    pub fn open_auth_modal(&mut self, tab: AuthTab) {
        self.auth_tab = tab;
        self.show_auth_modal = true;
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.navigate(Page::Landing);
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        if let Err(e) = storage::save_theme(&self.storage_dir, dark) {
            log::warn!("failed to persist theme preference: {e}");
        }
    }

    pub fn toast_success(&mut self, msg: impl Into<String>, now: f64) {
        self.toast(msg, ToastType::Success, now);
    }

    pub fn toast_error(&mut self, msg: impl Into<String>, now: f64) {
        self.toast(msg, ToastType::Error, now);
    }

    fn toast(&mut self, msg: impl Into<String>, kind: ToastType, now: f64) {
        self.toast_message = Some(msg.into());
        self.toast_type = kind;
        self.toast_deadline = now + 3.0;
    }

    /// Explicit save: snapshot the editor fields into local storage and
    /// surface the outcome as a toast.
    pub fn save_project(&mut self, now: f64) -> bool {
        let snapshot = self.editor.snapshot();
        match storage::save_project_snapshot(&self.storage_dir, &snapshot) {
            Ok(_) => {
                self.editor.last_saved =
                    Some(chrono::Local::now().format("%H:%M:%S").to_string());
                self.toast_success("Project saved!", now);
                true
            }
            Err(e) => {
                log::warn!("project save failed: {e}");
                self.toast_error(format!("Save failed: {e}"), now);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn entering_the_editor_starts_a_fresh_session() {
        let td = tempdir().expect("tempdir");
        let mut app = AppState::with_storage_dir(td.path().to_path_buf());
        app.navigate(Page::ProjectEditor);
        app.editor.document.markup = "edited".into();
        app.editor.scheduler.note_change(1.0);

        app.navigate(Page::Landing);
        app.navigate(Page::ProjectEditor);
        // Fresh document, and the pending composition died with the session.
        assert_ne!(app.editor.document.markup, "edited");
        assert!(!app.editor.scheduler.is_pending());
    }

    #[test]
    fn editor_only_ticks_while_on_the_editor_page() {
        let td = tempdir().expect("tempdir");
        let mut app = AppState::with_storage_dir(td.path().to_path_buf());
        app.navigate(Page::ProjectEditor);
        app.editor.scheduler.note_change(0.0);
        assert!(app.tick(1.0));

        app.editor.scheduler.note_change(2.0);
        app.page = Page::Landing;
        assert!(!app.tick(3.0));
    }

    #[test]
    fn save_project_writes_the_snapshot_and_sets_the_badge() {
        let td = tempdir().expect("tempdir");
        let mut app = AppState::with_storage_dir(td.path().to_path_buf());
        app.navigate(Page::ProjectEditor);
        assert!(app.save_project(0.0));
        assert!(app.editor.last_saved.is_some());
        assert!(td.path().join(storage::PROJECT_KEY).exists());
        assert_eq!(app.toast_type, ToastType::Success);
    }

    #[test]
    fn theme_preference_round_trips_through_storage() {
        let td = tempdir().expect("tempdir");
        {
            let mut app = AppState::with_storage_dir(td.path().to_path_buf());
            app.set_dark_mode(true);
        }
        let again = AppState::with_storage_dir(td.path().to_path_buf());
        assert!(again.dark_mode);
    }
}
