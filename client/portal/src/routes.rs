//! Route table for the portal
//!
//! Static registry of every guarded route with its access descriptor. The
//! rendering shell looks the navigated path up here and hands the matching
//! descriptor to the route guard; the guard stays the sole enforcement
//! point, the table just says what to enforce.

use auth::guard::RouteAccess;
use auth::models::Role;

/// One registered route
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Path pattern; `:`-prefixed segments match any value
    pub pattern: &'static str,
    /// Access descriptor handed to the route guard
    pub access: RouteAccess,
    /// Title the shell shows in the top bar
    pub title: &'static str,
}

/// The portal's guarded routes
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// Build the static route registry
    pub fn new() -> Self {
        let routes = vec![
            RouteEntry {
                pattern: "/dashboard",
                access: RouteAccess::any_authenticated("/dashboard"),
                title: "Dashboard",
            },
            RouteEntry {
                pattern: "/jobs",
                access: RouteAccess::any_authenticated("/jobs"),
                title: "Latest Jobs",
            },
            RouteEntry {
                pattern: "/jobs/:id",
                access: RouteAccess::any_authenticated("/jobs/:id"),
                title: "Job Details",
            },
            RouteEntry {
                pattern: "/user/profile",
                access: RouteAccess::any_authenticated("/user/profile"),
                title: "Profile",
            },
            RouteEntry {
                pattern: "/post-job",
                access: RouteAccess::restricted("/post-job", [Role::Employee, Role::Admin]),
                title: "Post Job",
            },
            RouteEntry {
                pattern: "/create-employee",
                access: RouteAccess::restricted("/create-employee", [Role::Admin]),
                title: "Create Employee",
            },
        ];

        Self { routes }
    }

    /// Look a navigated path up in the registry
    pub fn find(&self, path: &str) -> Option<&RouteEntry> {
        self.routes
            .iter()
            .find(|entry| pattern_matches(entry.pattern, path))
    }

    /// Title for the top bar, with the portal name as fallback
    pub fn page_title(&self, path: &str) -> &'static str {
        if path == "/" {
            return "Dashboard";
        }

        self.find(path).map(|entry| entry.title).unwrap_or("Job Portal")
    }

    /// Every registered route
    pub fn entries(&self) -> &[RouteEntry] {
        &self.routes
    }
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.trim_matches('/').split('/');
    let mut path_segments = path.trim_matches('/').split('/');

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                if expected.starts_with(':') {
                    if actual.is_empty() {
                        return false;
                    }
                } else if expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
