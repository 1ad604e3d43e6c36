//! Session manager: the single owner of authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app keeps one `SessionManager` inside an `RwSignal` provided via
//! context. Views observe that signal; only the manager touches persistence.
//! Two string keys are persisted, `isLoggedIn` (`"true"`/`"false"`) and
//! `token`, and every transition writes them before returning.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::PortalError;
use crate::net::api;
use crate::net::transport::Transport;
use crate::net::types::Credentials;
use crate::util::storage::{BrowserStorage, KeyValueStore};

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const TOKEN_KEY: &str = "token";

/// Authentication state. An authenticated session always carries its token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
    },
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token } => Some(token),
            Self::Anonymous => None,
        }
    }
}

/// Session state plus the store it is persisted to.
#[derive(Clone, Debug)]
pub struct SessionManager<S> {
    store: S,
    current: Session,
}

/// The manager the browser app runs with.
pub type PortalSession = SessionManager<BrowserStorage>;

impl<S: KeyValueStore> SessionManager<S> {
    /// Anonymous manager that has not looked at the store yet.
    pub fn new(store: S) -> Self {
        Self { store, current: Session::Anonymous }
    }

    /// Rebuild the session from persisted keys without contacting the backend.
    ///
    /// A persisted pair that disagrees with itself is cleared.
    pub fn restore(store: S) -> Self {
        let current = read_persisted(&store);
        let manager = Self { store, current };
        let dangling = manager.store.get(LOGGED_IN_KEY).as_deref() == Some("true")
            || manager.store.get(TOKEN_KEY).is_some();
        if !manager.current.is_logged_in() && dangling {
            log::warn!("discarding inconsistent persisted session");
            manager.persist();
        }
        manager
    }

    pub fn session(&self) -> &Session {
        &self.current
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_logged_in()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.token()
    }

    /// Authenticate against the backend. State is only touched on success.
    ///
    /// # Errors
    ///
    /// Propagates `Auth`/`Network` from the login call; the session is unchanged.
    pub async fn login<T: Transport>(&mut self, transport: &T, credentials: &Credentials) -> Result<(), PortalError> {
        let token = api::login(transport, credentials).await?;
        self.establish(token);
        log::info!("session established");
        Ok(())
    }

    /// Adopt `token` as the current session and persist it.
    pub fn establish(&mut self, token: String) {
        self.current = Session::Authenticated { token };
        self.persist();
    }

    /// Clear local session state. No backend call is made.
    pub fn logout(&mut self) {
        self.current = Session::Anonymous;
        self.persist();
        log::info!("session cleared");
    }

    /// Re-read persisted keys; drops the session if storage was cleared
    /// underneath it. Returns whether the session is still authenticated.
    pub fn revalidate(&mut self) -> bool {
        let persisted = read_persisted(&self.store);
        if persisted != self.current {
            log::debug!("persisted session changed outside the manager");
            self.current = persisted;
        }
        self.is_authenticated()
    }

    fn persist(&self) {
        match &self.current {
            Session::Authenticated { token } => {
                self.store.set(TOKEN_KEY, token);
                self.store.set(LOGGED_IN_KEY, "true");
            }
            Session::Anonymous => {
                self.store.remove(TOKEN_KEY);
                self.store.set(LOGGED_IN_KEY, "false");
            }
        }
    }
}

fn read_persisted<S: KeyValueStore>(store: &S) -> Session {
    let flag = store.get(LOGGED_IN_KEY);
    match (flag.as_deref(), store.get(TOKEN_KEY)) {
        (Some("true"), Some(token)) if !token.is_empty() => Session::Authenticated { token },
        _ => Session::Anonymous,
    }
}
