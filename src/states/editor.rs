//! Editor session state: the three source fragments, the project settings
//! fields and the preview machinery. Discarded when the session ends; only
//! an explicit save snapshots it to local storage.

use crate::preview::{PreviewPane, PreviewScheduler, RenderSurface};
use crate::storage::{self, ProjectSnapshot};

/// The three independently edited text buffers. Each keystroke replaces the
/// relevant field wholesale; the composer only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl Default for SourceDocument {
    fn default() -> Self {
        Self {
            markup: DEFAULT_MARKUP.to_string(),
            style: DEFAULT_STYLE.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTab {
    Html,
    Css,
    Js,
}

pub struct EditorState {
    pub title: String,
    pub description: String,
    /// Raw comma-separated tags as typed; parsed only at save time.
    pub tags_input: String,

    pub document: SourceDocument,
    pub active_tab: CodeTab,

    pub scheduler: PreviewScheduler,
    pub pane: PreviewPane,

    /// Local time of the last successful save, for the header badge.
    pub last_saved: Option<String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            title: "New project".to_string(),
            description: String::new(),
            tags_input: String::new(),
            document: SourceDocument::default(),
            active_tab: CodeTab::Html,
            scheduler: PreviewScheduler::default(),
            pane: PreviewPane::default(),
            last_saved: None,
        }
    }
}

impl EditorState {
    /// Poll the scheduler; when a composition is due, compose from the
    /// current fragment values and hand the result to the render surface.
    /// Returns true when a render happened this frame.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.scheduler.poll(now) {
            return false;
        }
        let doc = crate::preview::compose(
            &self.document.markup,
            &self.document.style,
            &self.document.script,
        );
        self.pane.render(&doc);
        true
    }

    /// Snapshot the current fields for persistence.
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            title: self.title.clone(),
            description: self.description.clone(),
            tags: storage::parse_tags(&self.tags_input),
            markup: self.document.markup.clone(),
            style: self.document.style.clone(),
            script: self.document.script.clone(),
            last_modified: chrono::Utc::now().to_rfc3339(),
        }
    }
}

pub const DEFAULT_MARKUP: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>My project</title>
</head>
<body>
    <div class="container">
        <h1>Hello, world!</h1>
        <p>This is my new project.</p>
        <button onclick="changeColor()">Change color</button>
    </div>
</body>
</html>"#;

pub const DEFAULT_STYLE: &str = r#"body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    margin: 0;
    padding: 20px;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
}

.container {
    background: white;
    padding: 40px;
    border-radius: 12px;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
    text-align: center;
    max-width: 400px;
    width: 100%;
}

button {
    background: #667eea;
    color: white;
    border: none;
    padding: 12px 24px;
    border-radius: 6px;
    cursor: pointer;
}"#;

pub const DEFAULT_SCRIPT: &str = r#"function changeColor() {
    const colors = ['#667eea', '#764ba2', '#f093fb', '#f5576c', '#4facfe', '#00f2fe'];
    const randomColor = colors[Math.floor(Math.random() * colors.length)];
    document.querySelector('button').style.background = randomColor;
}

document.addEventListener('DOMContentLoaded', function() {
    console.log('Project loaded!');
});"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_composes_from_the_values_present_at_fire_time() {
        let mut ed = EditorState::default();
        ed.document.markup = "<head></head><body></body>".into();
        ed.document.style = "old{}".into();
        ed.document.script = "old()".into();

        ed.scheduler.note_change(0.0);
        // The user keeps typing before the quiet period elapses.
        ed.document.style = "new{}".into();
        ed.scheduler.note_change(0.2);
        assert!(!ed.tick(0.4));

        assert!(ed.tick(0.8));
        // Rendered output reflects the final edit, not the first one.
        // (The pane is the render boundary; peek through the composer.)
        let composed = crate::preview::compose(
            &ed.document.markup,
            &ed.document.style,
            &ed.document.script,
        );
        assert!(composed.contains("<style>new{}</style>"));
    }

    #[test]
    fn snapshot_parses_tags_and_stamps_iso8601() {
        let mut ed = EditorState::default();
        ed.title = "Demo".into();
        ed.tags_input = "html, css , js".into();
        let snap = ed.snapshot();
        assert_eq!(snap.tags, vec!["html", "css", "js"]);
        // rfc3339 always carries a date-time separator.
        assert!(snap.last_modified.contains('T'));
    }

    #[test]
    fn default_document_contains_both_anchors() {
        let doc = SourceDocument::default();
        assert!(doc.markup.contains("</head>"));
        assert!(doc.markup.contains("</body>"));
    }
}
