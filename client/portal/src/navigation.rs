//! Role-gated navigation menu
//!
//! Pure visibility: the static menu definition is filtered by the current
//! role on every render. Hiding an entry is a UX convenience only: a
//! hidden route is still reachable by direct navigation and is enforced by
//! the route guard, never here. No redirects, no network calls.

use auth::models::{Role, User};

/// One menu entry
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub path: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    /// Roles the entry is shown to; empty means every authenticated role
    pub required_roles: &'static [Role],
}

/// One titled group of entries
#[derive(Debug, Clone, PartialEq)]
pub struct NavSection {
    pub title: &'static str,
    pub entries: &'static [NavEntry],
}

/// A section after role filtering
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub title: &'static str,
    pub entries: Vec<&'static NavEntry>,
}

const MAIN_ENTRIES: [NavEntry; 3] = [
    NavEntry {
        path: "/dashboard",
        icon: "icon-dashboard",
        label: "Dashboard",
        required_roles: &[],
    },
    NavEntry {
        path: "/jobs",
        icon: "icon-jobs",
        label: "Latest Jobs",
        required_roles: &[],
    },
    NavEntry {
        path: "/user/profile",
        icon: "icon-profile",
        label: "Update Profile",
        required_roles: &[],
    },
];

const ACTION_ENTRIES: [NavEntry; 2] = [
    NavEntry {
        path: "/post-job",
        icon: "icon-post-job",
        label: "Post Job",
        required_roles: &[Role::Employee, Role::Admin],
    },
    NavEntry {
        path: "/create-employee",
        icon: "icon-employees",
        label: "Create Employee",
        required_roles: &[Role::Admin],
    },
];

static MENU: [NavSection; 2] = [
    NavSection {
        title: "Main",
        entries: &MAIN_ENTRIES,
    },
    NavSection {
        title: "Actions",
        entries: &ACTION_ENTRIES,
    },
];

/// The full static menu definition
pub fn menu() -> &'static [NavSection] {
    &MENU
}

/// Whether one entry is shown to the given role
pub fn entry_visible(entry: &NavEntry, role: Option<Role>) -> bool {
    entry.required_roles.is_empty()
        || role.is_some_and(|role| entry.required_roles.contains(&role))
}

/// The menu as rendered for the given role; empty sections are dropped
pub fn visible_menu(role: Option<Role>) -> Vec<MenuSection> {
    MENU.iter()
        .map(|section| MenuSection {
            title: section.title,
            entries: section
                .entries
                .iter()
                .filter(|entry| entry_visible(entry, role))
                .collect(),
        })
        .filter(|section| !section.entries.is_empty())
        .collect()
}

/// Whether a menu entry is highlighted for the current path
pub fn is_active_path(current: &str, entry_path: &str) -> bool {
    if entry_path == "/dashboard" {
        return current == "/" || current == "/dashboard";
    }

    current == entry_path || current.starts_with(&format!("{}/", entry_path))
}

/// Sidebar display name, with a generic fallback
pub fn user_label(user: Option<&User>) -> String {
    match user {
        Some(user) if !user.display_name().is_empty() => user.display_name(),
        _ => "User".to_string(),
    }
}

/// Sidebar avatar initial
pub fn user_initial(user: Option<&User>) -> char {
    user.map(User::initial).unwrap_or('?')
}

/// Role caption under the display name
pub fn role_label(role: Option<Role>) -> &'static str {
    role.map(|role| role.as_str()).unwrap_or("user")
}
