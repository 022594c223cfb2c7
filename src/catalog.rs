//! Mock content. Every entity on the platform is seeded in memory; there is
//! no backend to fetch from.

use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub title: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub rating: f32,
    pub views: u32,
    pub likes: u32,
}

#[derive(Debug, Clone)]
pub struct FontSummary {
    pub name: &'static str,
    pub category: &'static str,
    pub author: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStatus {
    Published,
    Draft,
}

#[derive(Debug, Clone)]
pub struct UserProject {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub status: PublishStatus,
    pub views: u32,
    pub likes: u32,
    pub last_modified: &'static str,
}

#[derive(Debug, Clone)]
pub struct UserFont {
    pub name: &'static str,
    pub category: &'static str,
    pub status: PublishStatus,
    pub downloads: u32,
    pub likes: u32,
}

#[derive(Debug, Clone)]
pub struct Friend {
    pub username: &'static str,
    pub online: bool,
}

#[derive(Debug, Clone)]
pub struct Bookmark {
    pub title: &'static str,
    pub author: &'static str,
    pub rating: f32,
    pub likes: u32,
}

/// Full detail for the one viewable mock project.
#[derive(Debug, Clone)]
pub struct ProjectDetail {
    pub title: &'static str,
    pub author: &'static str,
    pub author_rating: f32,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub views: u32,
    pub likes: u32,
    pub rating: f32,
    pub total_ratings: u32,
    pub publish_date: &'static str,
    pub markup: &'static str,
    pub style: &'static str,
    pub script: &'static str,
}

pub static POPULAR_PROJECTS: Lazy<Vec<ProjectSummary>> = Lazy::new(|| {
    vec![
        ProjectSummary {
            title: "Modern Dashboard UI",
            author: "John Doe",
            description: "A contemporary admin dashboard with a dark theme and smooth animations",
            tags: &["React", "Dashboard", "Dark Theme"],
            rating: 4.8,
            views: 1234,
            likes: 89,
        },
        ProjectSummary {
            title: "E-commerce Landing",
            author: "Jane Smith",
            description: "A stylish store landing page with a fully responsive layout",
            tags: &["Landing", "E-commerce", "Responsive"],
            rating: 4.9,
            views: 2156,
            likes: 145,
        },
        ProjectSummary {
            title: "Mobile Chat App",
            author: "Alex Johnson",
            description: "A mobile chat interface with a clean, modern design",
            tags: &["Mobile", "Chat", "UI/UX"],
            rating: 4.7,
            views: 876,
            likes: 67,
        },
    ]
});

pub static POPULAR_FONTS: Lazy<Vec<FontSummary>> = Lazy::new(|| {
    vec![
        FontSummary {
            name: "ModernSans",
            category: "Sans-serif",
            author: "Typography Studio",
        },
        FontSummary {
            name: "CodePro",
            category: "Monospace",
            author: "DevFonts",
        },
        FontSummary {
            name: "CreativeScript",
            category: "Script",
            author: "Design House",
        },
    ]
});

pub fn user_projects() -> Vec<UserProject> {
    vec![
        UserProject {
            title: "My Portfolio Website",
            description: "Personal portfolio site with animations",
            tags: &["Portfolio", "React", "Animation"],
            status: PublishStatus::Published,
            views: 234,
            likes: 18,
            last_modified: "2024-01-20",
        },
        UserProject {
            title: "E-commerce Dashboard",
            description: "Admin panel for an online store",
            tags: &["Dashboard", "Admin", "Charts"],
            status: PublishStatus::Draft,
            views: 0,
            likes: 0,
            last_modified: "2024-01-18",
        },
    ]
}

pub fn user_fonts() -> Vec<UserFont> {
    vec![UserFont {
        name: "MyCustomFont",
        category: "Sans-serif",
        status: PublishStatus::Published,
        downloads: 45,
        likes: 12,
    }]
}

pub fn friends() -> Vec<Friend> {
    vec![
        Friend {
            username: "jane_smith",
            online: true,
        },
        Friend {
            username: "alex_dev",
            online: false,
        },
        Friend {
            username: "design_pro",
            online: true,
        },
    ]
}

pub fn bookmarks() -> Vec<Bookmark> {
    vec![Bookmark {
        title: "Modern UI Kit",
        author: "design_master",
        rating: 4.9,
        likes: 156,
    }]
}

pub fn project_detail() -> ProjectDetail {
    ProjectDetail {
        title: "Modern Dashboard UI",
        author: "john_doe",
        author_rating: 4.8,
        description: "A contemporary admin dashboard with a dark theme and smooth \
                      animations. Includes charts, tables and interactive widgets.",
        tags: &["React", "Dashboard", "Dark Theme", "Animation", "Charts"],
        views: 1234,
        likes: 89,
        rating: 4.8,
        total_ratings: 23,
        publish_date: "2024-01-15",
        markup: r#"<!DOCTYPE html>
<html>
<head>
    <title>Dashboard</title>
</head>
<body>
    <div class="dashboard">
        <h1>Analytics Dashboard</h1>
        <div class="stats">
            <div class="stat-card">
                <h3>Total Users</h3>
                <p>12,345</p>
            </div>
        </div>
    </div>
</body>
</html>"#,
        style: r#"body { font-family: Arial, sans-serif; margin: 0; background: #1a1a1a; color: white; }
.dashboard { padding: 20px; }
.stats { display: flex; gap: 20px; }
.stat-card { background: #2a2a2a; padding: 20px; border-radius: 8px; flex: 1; }"#,
        script: "console.log('Dashboard loaded');",
    }
}
