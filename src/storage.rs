//! Local persistence. The browser original kept everything in
//! `localStorage`; here each key is a JSON file in the platform data
//! directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::session::User;

/// Fixed key the editor snapshot is saved under.
pub const PROJECT_KEY: &str = "current_project.json";
/// Fixed key the signed-in user is saved under.
pub const USER_KEY: &str = "user.json";
/// Fixed key for the UI theme preference.
pub const THEME_KEY: &str = "theme.json";

/// Snapshot written on explicit save from the editor. Tags are stored as an
/// ordered list parsed from the comma-separated input field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub markup: String,
    pub style: String,
    pub script: String,
    /// ISO-8601 timestamp of the save.
    pub last_modified: String,
}

/// Split a comma-separated tag string into trimmed, non-empty tags,
/// preserving input order.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Platform data directory for the app, created on demand.
pub fn storage_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("codebit")
}

/// Write the editor snapshot under `PROJECT_KEY`.
///
/// There is deliberately no matching load function: the reference behavior
/// only ever writes this key, nothing reads it back. Keep the asymmetry.
pub fn save_project_snapshot(dir: &Path, snapshot: &ProjectSnapshot) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let dst = dir.join(PROJECT_KEY);
    let body = serde_json::to_string_pretty(snapshot)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&dst, body)?;
    Ok(dst)
}

/// Persist the signed-in user under `USER_KEY`.
pub fn save_user(dir: &Path, user: &User) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let body = serde_json::to_string_pretty(user)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(dir.join(USER_KEY), body)
}

/// Restore the signed-in user, if a previous session saved one. Unreadable
/// or corrupt files count as "no user" rather than an error.
pub fn load_user(dir: &Path) -> Option<User> {
    let raw = fs::read_to_string(dir.join(USER_KEY)).ok()?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("ignoring corrupt {USER_KEY}: {e}");
            None
        }
    }
}

/// Remove the persisted user on logout.
pub fn clear_user(dir: &Path) -> io::Result<()> {
    match fs::remove_file(dir.join(USER_KEY)) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemePref {
    dark: bool,
}

pub fn save_theme(dir: &Path, dark: bool) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let body = serde_json::to_string(&ThemePref { dark })
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(dir.join(THEME_KEY), body)
}

pub fn load_theme(dir: &Path) -> Option<bool> {
    let raw = fs::read_to_string(dir.join(THEME_KEY)).ok()?;
    serde_json::from_str::<ThemePref>(&raw).ok().map(|p| p.dark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_snapshot() -> ProjectSnapshot {
        ProjectSnapshot {
            title: "New project".into(),
            description: "demo".into(),
            tags: parse_tags("React, HTML, , CSS "),
            markup: "<head></head>".into(),
            style: "p{}".into(),
            script: "go()".into(),
            last_modified: "2024-01-20T10:30:00+00:00".into(),
        }
    }

    #[test]
    fn parse_tags_trims_and_drops_empty_entries() {
        assert_eq!(parse_tags("a, b ,, c "), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn snapshot_is_written_under_the_fixed_key() {
        let td = tempdir().expect("tempdir");
        let dst = save_project_snapshot(td.path(), &sample_snapshot()).expect("save");
        assert_eq!(dst.file_name().unwrap(), PROJECT_KEY);

        let raw = fs::read_to_string(&dst).expect("read written file");
        let back: ProjectSnapshot = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(back.title, "New project");
        assert_eq!(back.tags, vec!["React", "HTML", "CSS"]);
        assert_eq!(back.script, "go()");
    }

    #[test]
    fn user_round_trips_and_clear_removes_the_file() {
        let td = tempdir().expect("tempdir");
        let user = User::mock_login("a@b.c");
        save_user(td.path(), &user).expect("save user");

        let back = load_user(td.path()).expect("user present");
        assert_eq!(back.email, "a@b.c");

        clear_user(td.path()).expect("clear");
        assert!(load_user(td.path()).is_none());
        // Clearing twice is fine.
        clear_user(td.path()).expect("clear again");
    }

    #[test]
    fn corrupt_user_file_is_treated_as_signed_out() {
        let td = tempdir().expect("tempdir");
        fs::write(td.path().join(USER_KEY), "{not json").expect("write");
        assert!(load_user(td.path()).is_none());
    }
}
