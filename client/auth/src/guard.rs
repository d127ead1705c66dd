//! Route guard for protected navigation
//!
//! The access-control checkpoint evaluated before a protected view renders.
//! The decision logic is a pure function from a session snapshot and a
//! route descriptor to a [`Decision`]; the async [`RouteGuard`] drives the
//! resolution around it. The rendering shell interprets the decision; the
//! guard itself never navigates and never panics.

use common::notify::Notifier;
use tracing::{info, warn};

use crate::models::Role;
use crate::session::{Resolution, SessionSnapshot, SessionStore};

/// Path unauthenticated navigations are redirected to.
pub const LOGIN_PATH: &str = "/login";

/// Landing page for authenticated users refused by a role check.
pub const DEFAULT_LANDING: &str = "/dashboard";

/// Access descriptor attached to each protected route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteAccess {
    /// Path the descriptor applies to
    pub path: String,
    /// Roles allowed in; empty means any authenticated role
    pub allowed_roles: Vec<Role>,
}

impl RouteAccess {
    /// Descriptor restricted to the given roles
    pub fn restricted(path: impl Into<String>, allowed_roles: impl Into<Vec<Role>>) -> Self {
        Self {
            path: path.into(),
            allowed_roles: allowed_roles.into(),
        }
    }

    /// Descriptor any authenticated role may enter
    pub fn any_authenticated(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            allowed_roles: Vec::new(),
        }
    }

    /// Whether the given role may enter
    ///
    /// Membership is exact: there is no hierarchy between roles.
    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(&role)
    }

    /// Human-readable list of the required roles, e.g. "employee or admin"
    pub fn required_roles_label(&self) -> String {
        self.allowed_roles
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Terminal render outcome of one guard evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Render the wrapped view
    Render,
    /// A resolution is pending; show the loading indicator
    Loading,
    /// Leave the route, optionally with one user-visible warning
    Redirect {
        to: String,
        notice: Option<String>,
    },
}

impl Decision {
    /// Redirect to the login page, with no user-visible error
    pub fn to_login() -> Self {
        Decision::Redirect {
            to: LOGIN_PATH.to_string(),
            notice: None,
        }
    }

    /// Redirect an authenticated but unpermitted user to the landing page
    pub fn forbidden(route: &RouteAccess) -> Self {
        Decision::Redirect {
            to: DEFAULT_LANDING.to_string(),
            notice: Some(format!(
                "Access denied. Required role: {}",
                route.required_roles_label()
            )),
        }
    }

    /// Redirect target, if this decision leaves the route
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Decision::Redirect { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// Pure decision function over the session snapshot
///
/// The role check runs only once a user is present: an unauthenticated
/// visitor on a role-restricted route goes to login, never to the
/// forbidden redirect. A token with no user yet means resolution has not
/// completed, which renders as loading.
pub fn decide(snapshot: &SessionSnapshot, route: &RouteAccess) -> Decision {
    match &snapshot.user {
        Some(user) => {
            if route.permits(user.role) {
                Decision::Render
            } else {
                Decision::forbidden(route)
            }
        }
        None if snapshot.token.is_some() => Decision::Loading,
        None => Decision::to_login(),
    }
}

/// Access-control checkpoint wrapping every protected view
#[derive(Clone)]
pub struct RouteGuard {
    session: SessionStore,
    notifier: Notifier,
}

impl RouteGuard {
    /// Create a new guard over the shared session store
    pub fn new(session: SessionStore, notifier: Notifier) -> Self {
        Self { session, notifier }
    }

    /// Evaluate one navigation to a guarded route
    ///
    /// Drives the session resolution to completion and returns the terminal
    /// decision; the caller renders a loading indicator while the returned
    /// future is pending. Dropping the future discards the in-flight
    /// resolution instead of applying it to a view that no longer exists.
    /// A resolution failure never escapes: it collapses into the login
    /// redirect.
    pub async fn evaluate(&self, route: &RouteAccess) -> Decision {
        match self.session.resolve().await {
            Resolution::Authenticated(user) => {
                if route.permits(user.role) {
                    info!("Access granted to {} for role {}", route.path, user.role);
                    Decision::Render
                } else {
                    warn!(
                        "Access denied to {} for role {}, required: {}",
                        route.path,
                        user.role,
                        route.required_roles_label()
                    );
                    let decision = Decision::forbidden(route);
                    if let Decision::Redirect {
                        notice: Some(message),
                        ..
                    } = &decision
                    {
                        self.notifier.warning(message.clone());
                    }
                    decision
                }
            }
            Resolution::Unauthenticated => {
                info!("Not authenticated, redirecting to login from {}", route.path);
                Decision::to_login()
            }
        }
    }
}
