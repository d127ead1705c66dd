//! Session cache for the authenticated user
//!
//! Single source of truth for "who is the current user" and "are they
//! authenticated". The route guard, the navigation shell, and the profile
//! editor all read and write the session through this store; nothing else
//! touches the durable `token`/`user` keys, so a write from one call site
//! is visible to the others on their next read.

use common::error::{ApiError, ApiResult};
use common::http::{ApiClient, Envelope};
use common::notify::Notifier;
use common::storage::{Storage, TOKEN_KEY, USER_KEY};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::{info, warn};

use crate::models::{Role, User};

/// Backend endpoint that exchanges a bearer token for the user record.
const GET_USER_ENDPOINT: &str = "/api/v1/user/getUser";

/// Outcome of a session resolution
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The token was confirmed by the backend; the user record is cached
    Authenticated(User),
    /// No token, or the backend refused it; the session has been cleared
    Unauthenticated,
}

/// Immutable view of the session, consumed by the pure guard decision
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Durable bearer token, if any
    pub token: Option<String>,
    /// Cached user record, if resolution has completed
    pub user: Option<User>,
    /// Whether a resolution call is currently in flight
    pub resolving: bool,
}

/// Session store backed by the durable client storage
///
/// Created empty on application load; populated by [`SessionStore::resolve`]
/// during guarded navigation. The cached user is only ever what the backend
/// confirmed for the stored token; the two are cleared together.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    api: ApiClient,
    changes: Arc<watch::Sender<Option<User>>>,
    resolving: Arc<Mutex<()>>,
}

impl SessionStore {
    /// Create a new session store over the given storage and API client
    pub fn new(storage: Arc<dyn Storage>, api: ApiClient) -> Self {
        let (changes, _) = watch::channel(None);

        Self {
            storage,
            api,
            changes: Arc::new(changes),
            resolving: Arc::new(Mutex::new(())),
        }
    }

    /// Durable bearer token, if one is stored
    pub fn token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read token from storage: {}", e);
                None
            }
        }
    }

    /// Store a bearer token, e.g. after a successful login
    pub fn set_token(&self, token: &str) {
        if let Err(e) = self.storage.set(TOKEN_KEY, token) {
            warn!("Failed to persist token: {}", e);
        }
    }

    /// Currently cached user record, if resolution has completed
    pub fn current_user(&self) -> Option<User> {
        self.changes.borrow().clone()
    }

    /// Role of the cached user; `None` is the unauthenticated sentinel
    pub fn current_role(&self) -> Option<Role> {
        self.changes.borrow().as_ref().map(|user| user.role)
    }

    /// Immutable snapshot for the guard's pure decision function
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.token(),
            user: self.current_user(),
            resolving: self.resolving.try_lock().is_err(),
        }
    }

    /// Watch the cached user for changes
    ///
    /// The navigation shell and the profile editor subscribe here so a
    /// write from any call site reaches them on their next render.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.changes.subscribe()
    }

    /// Resolve the stored token into a confirmed user record
    ///
    /// Idempotent and safe to call on every guarded navigation: an already
    /// cached user short-circuits with zero network calls, a missing token
    /// short-circuits with zero network calls, and concurrent invocations
    /// are collapsed onto a single in-flight request.
    pub async fn resolve(&self) -> Resolution {
        if let Some(user) = self.current_user() {
            return Resolution::Authenticated(user);
        }

        let Some(token) = self.token() else {
            return Resolution::Unauthenticated;
        };

        // One resolution at a time; a caller that waited here reads the
        // winner's result from the cache instead of fetching again.
        let _inflight = self.resolving.lock().await;

        if let Some(user) = self.current_user() {
            return Resolution::Authenticated(user);
        }

        match self.fetch_user(&token).await {
            Ok(user) => {
                info!("Session resolved for {} ({})", user.email, user.role);
                self.set_user(user.clone());
                Resolution::Authenticated(user)
            }
            Err(e) => {
                // Backend unreachable and token invalid collapse into the
                // same outcome: the session is gone.
                warn!("Session resolution failed: {}", e);
                self.clear();
                Resolution::Unauthenticated
            }
        }
    }

    /// Directly cache a user record and persist it
    ///
    /// Used after resolution and after a successful profile update.
    pub fn set_user(&self, user: User) {
        match serde_json::to_string(&user) {
            Ok(body) => {
                if let Err(e) = self.storage.set(USER_KEY, &body) {
                    warn!("Failed to persist user record: {}", e);
                }
            }
            Err(e) => warn!("Failed to encode user record: {}", e),
        }

        self.changes.send_replace(Some(user));
    }

    /// Drop the token and the cached user, in memory and in storage
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            warn!("Failed to remove token from storage: {}", e);
        }
        if let Err(e) = self.storage.remove(USER_KEY) {
            warn!("Failed to remove user record from storage: {}", e);
        }

        self.changes.send_replace(None);
    }

    /// Log out locally: clear the session and confirm with a notice
    ///
    /// No backend call is involved; the shell navigates to the login page
    /// afterwards.
    pub fn logout(&self, notifier: &Notifier) {
        info!("Logging out");
        self.clear();
        notifier.success("Logged out successfully!");
    }

    async fn fetch_user(&self, token: &str) -> ApiResult<User> {
        let envelope: Envelope<User> = self
            .api
            .post_json(GET_USER_ENDPOINT, &serde_json::json!({}), Some(token))
            .await?;

        match envelope {
            Envelope {
                success: true,
                data: Some(user),
                ..
            } => Ok(user),
            Envelope { message, .. } => Err(ApiError::Rejected(
                message.unwrap_or_else(|| "User resolution refused".to_string()),
            )),
        }
    }
}
