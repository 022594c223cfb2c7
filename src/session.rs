//! Mock authentication. There is no backend: any non-empty credentials
//! succeed and produce a canned user, matching the reference behavior.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub rating: f32,
    pub join_date: String,
}

impl User {
    /// Canned profile returned by a successful login.
    pub fn mock_login(email: &str) -> Self {
        Self {
            id: "1".into(),
            username: "john_doe".into(),
            email: email.into(),
            avatar: Some("/api/placeholder/64/64".into()),
            bio: Some("Frontend developer who ships design tools".into()),
            rating: 4.8,
            join_date: "2024-01-15".into(),
        }
    }

    fn registered(username: &str, email: &str) -> Self {
        Self {
            id: "2".into(),
            username: username.into(),
            email: email.into(),
            avatar: None,
            bio: None,
            rating: 0.0,
            join_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// The signed-in state for this app run, persisted to local storage so a
/// restart keeps the user signed in.
pub struct Session {
    user: Option<User>,
    dir: PathBuf,
}

impl Session {
    /// Restore the previous session from disk, if any.
    pub fn restore(dir: PathBuf) -> Self {
        let user = storage::load_user(&dir);
        Self { user, dir }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Succeeds for any non-empty email + password pair.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        if email.is_empty() || password.is_empty() {
            return false;
        }
        self.set_user(User::mock_login(email));
        true
    }

    /// Succeeds for any non-empty username + email + password triple.
    /// Password confirmation and length rules live in the auth modal.
    pub fn register(&mut self, username: &str, email: &str, password: &str) -> bool {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return false;
        }
        self.set_user(User::registered(username, email));
        true
    }

    pub fn logout(&mut self) {
        self.user = None;
        if let Err(e) = storage::clear_user(&self.dir) {
            log::warn!("failed to clear persisted user: {e}");
        }
    }

    /// Replace profile fields on the signed-in user and re-persist.
    pub fn update_profile(&mut self, bio: Option<String>, avatar: Option<String>) {
        if let Some(user) = self.user.as_mut() {
            if bio.is_some() {
                user.bio = bio;
            }
            if avatar.is_some() {
                user.avatar = avatar;
            }
            let user = user.clone();
            self.persist(&user);
        }
    }

    fn set_user(&mut self, user: User) {
        self.persist(&user);
        self.user = Some(user);
    }

    fn persist(&self, user: &User) {
        if let Err(e) = storage::save_user(&self.dir, user) {
            log::warn!("failed to persist user: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn login_succeeds_on_any_non_empty_credentials() {
        let td = tempdir().expect("tempdir");
        let mut s = Session::restore(td.path().to_path_buf());
        assert!(!s.is_authenticated());
        assert!(s.login("me@example.com", "hunter2"));
        assert!(s.is_authenticated());
        assert_eq!(s.user().unwrap().email, "me@example.com");
    }

    #[test]
    fn login_fails_on_empty_input() {
        let td = tempdir().expect("tempdir");
        let mut s = Session::restore(td.path().to_path_buf());
        assert!(!s.login("", "pw"));
        assert!(!s.login("me@example.com", ""));
        assert!(!s.is_authenticated());
    }

    #[test]
    fn session_survives_a_restart_until_logout() {
        let td = tempdir().expect("tempdir");
        let dir = td.path().to_path_buf();
        {
            let mut s = Session::restore(dir.clone());
            assert!(s.register("ada", "ada@example.com", "secret"));
        }
        let mut again = Session::restore(dir.clone());
        assert!(again.is_authenticated());
        assert_eq!(again.user().unwrap().username, "ada");

        again.logout();
        let after_logout = Session::restore(dir);
        assert!(!after_logout.is_authenticated());
    }

    #[test]
    fn update_profile_replaces_fields_wholesale() {
        let td = tempdir().expect("tempdir");
        let mut s = Session::restore(td.path().to_path_buf());
        s.login("me@example.com", "pw");
        s.update_profile(Some("New bio".into()), None);
        assert_eq!(s.user().unwrap().bio.as_deref(), Some("New bio"));
        // Avatar untouched by a None update.
        assert!(s.user().unwrap().avatar.is_some());
    }
}
