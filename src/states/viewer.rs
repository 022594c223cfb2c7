//! Project-view session state: the mock project being viewed plus the
//! reader's local interactions (like, bookmark, rating, comments).

use chrono::{DateTime, Utc};

use crate::catalog::{self, ProjectDetail};
use crate::preview::{PreviewPane, RenderSurface};

#[derive(Debug, Clone)]
pub struct Comment {
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub is_liked: bool,
}

pub struct ViewerState {
    pub detail: ProjectDetail,
    pub pane: PreviewPane,
    pub is_liked: bool,
    pub is_bookmarked: bool,
    /// 0 = not rated yet, otherwise 1..=5 stars.
    pub user_rating: u8,
    pub new_comment: String,
    pub comments: Vec<Comment>,
}

impl Default for ViewerState {
    fn default() -> Self {
        let detail = catalog::project_detail();
        // The viewed project is static, so one composition at session start
        // is the only render this page ever needs.
        let mut pane = PreviewPane::default();
        pane.render(&crate::preview::compose(
            detail.markup,
            detail.style,
            detail.script,
        ));

        Self {
            detail,
            pane,
            is_liked: false,
            is_bookmarked: false,
            user_rating: 0,
            new_comment: String::new(),
            comments: seed_comments(),
        }
    }
}

impl ViewerState {
    /// Prepend the drafted comment, authored by `username`. Empty or
    /// whitespace-only drafts are ignored.
    pub fn add_comment(&mut self, username: &str) -> bool {
        let content = self.new_comment.trim();
        if content.is_empty() {
            return false;
        }
        self.comments.insert(
            0,
            Comment {
                author: username.to_string(),
                content: content.to_string(),
                timestamp: Utc::now(),
                likes: 0,
                is_liked: false,
            },
        );
        self.new_comment.clear();
        true
    }

    pub fn toggle_comment_like(&mut self, index: usize) {
        if let Some(c) = self.comments.get_mut(index) {
            if c.is_liked {
                c.likes = c.likes.saturating_sub(1);
            } else {
                c.likes += 1;
            }
            c.is_liked = !c.is_liked;
        }
    }
}

fn seed_comments() -> Vec<Comment> {
    vec![
        Comment {
            author: "jane_designer".into(),
            content: "Great project! Love the design and the animations. \
                      Could use a bit more interactivity."
                .into(),
            timestamp: "2024-01-20T10:30:00Z".parse().expect("seed timestamp"),
            likes: 5,
            is_liked: false,
        },
        Comment {
            author: "dev_master".into(),
            content: "Very clean and readable code. Nice work with the CSS animations!".into(),
            timestamp: "2024-01-20T09:15:00Z".parse().expect("seed timestamp"),
            likes: 3,
            is_liked: true,
        },
    ]
}

/// Coarse relative-time label for comment timestamps.
pub fn format_time_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes().max(0);
    if minutes < 60 {
        format!("{minutes} min ago")
    } else if minutes < 1440 {
        format!("{} h ago", minutes / 60)
    } else {
        format!("{} d ago", minutes / 1440)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn add_comment_prepends_and_clears_the_draft() {
        let mut v = ViewerState::default();
        let before = v.comments.len();
        v.new_comment = "  looks great  ".into();
        assert!(v.add_comment("me"));
        assert_eq!(v.comments.len(), before + 1);
        assert_eq!(v.comments[0].content, "looks great");
        assert!(v.new_comment.is_empty());
    }

    #[test]
    fn blank_comment_is_rejected() {
        let mut v = ViewerState::default();
        v.new_comment = "   ".into();
        assert!(!v.add_comment("me"));
    }

    #[test]
    fn comment_like_toggles_both_ways() {
        let mut v = ViewerState::default();
        let likes = v.comments[0].likes;
        v.toggle_comment_like(0);
        assert_eq!(v.comments[0].likes, likes + 1);
        assert!(v.comments[0].is_liked);
        v.toggle_comment_like(0);
        assert_eq!(v.comments[0].likes, likes);
        assert!(!v.comments[0].is_liked);
    }

    #[test]
    fn time_ago_buckets() {
        let now: DateTime<Utc> = "2024-01-20T12:00:00Z".parse().unwrap();
        assert_eq!(format_time_ago(now, now - Duration::minutes(5)), "5 min ago");
        assert_eq!(format_time_ago(now, now - Duration::hours(3)), "3 h ago");
        assert_eq!(format_time_ago(now, now - Duration::days(2)), "2 d ago");
    }
}
