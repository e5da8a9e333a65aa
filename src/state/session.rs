//! Session Store
//!
//! Single source of truth for "is this client authenticated" and the bearer
//! token used to authorize API calls. The token is the only piece of client
//! state that survives a page reload.

use leptos::*;

/// localStorage key holding the session token
const TOKEN_KEY: &str = "securebank_token";

/// Whether the client currently holds a session token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    Authenticated,
}

/// The three screens of the application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Auth,
    Dashboard,
}

impl Screen {
    pub fn path(self) -> &'static str {
        match self {
            Screen::Landing => "/",
            Screen::Auth => "/auth",
            Screen::Dashboard => "/dashboard",
        }
    }
}

/// Navigation guard: which route may actually be shown for a requested route.
///
/// The dashboard requires an authenticated session, the auth screen is only
/// for unauthenticated visitors, and the landing page is always reachable.
pub fn route_for(phase: SessionPhase, requested: Screen) -> Screen {
    match (phase, requested) {
        (SessionPhase::Unauthenticated, Screen::Dashboard) => Screen::Auth,
        (SessionPhase::Authenticated, Screen::Auth) => Screen::Dashboard,
        (_, route) => route,
    }
}

/// Session store provided to all components.
///
/// The token signal is the single writer point: `login` and `logout` are the
/// only mutations, everything else just reads.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Current phase, tracked reactively
    pub fn phase(&self) -> SessionPhase {
        if self.token.get().is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    /// Current token for attaching as a bearer credential
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Read a previously stored token from localStorage, if any.
    ///
    /// No expiry check happens here; a stale token is only discovered when an
    /// authenticated call comes back 401.
    pub fn restore(&self) {
        if let Some(token) = read_stored_token() {
            self.token.set(Some(token));
        }
    }

    /// Store the token durably and mark the session authenticated
    pub fn login(&self, token: &str) {
        write_stored_token(Some(token));
        self.token.set(Some(token.to_string()));
    }

    /// Clear the token from durable storage and mark the session
    /// unauthenticated
    pub fn logout(&self) {
        write_stored_token(None);
        self.token.set(None);
    }
}

fn read_stored_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

fn write_stored_token(token: Option<&str>) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = match token {
                Some(token) => storage.set_item(TOKEN_KEY, token),
                None => storage.remove_item(TOKEN_KEY),
            };
        }
    }
}

/// Provide the session store to the component tree, restoring any persisted
/// token first
pub fn provide_session() {
    let session = Session {
        token: create_rw_signal(None),
    };
    session.restore();
    provide_context(session);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_redirects_unauthenticated_dashboard_to_auth() {
        assert_eq!(
            route_for(SessionPhase::Unauthenticated, Screen::Dashboard),
            Screen::Auth
        );
    }

    #[test]
    fn test_guard_redirects_authenticated_auth_to_dashboard() {
        assert_eq!(
            route_for(SessionPhase::Authenticated, Screen::Auth),
            Screen::Dashboard
        );
    }

    #[test]
    fn test_guard_landing_reachable_in_any_phase() {
        assert_eq!(
            route_for(SessionPhase::Unauthenticated, Screen::Landing),
            Screen::Landing
        );
        assert_eq!(
            route_for(SessionPhase::Authenticated, Screen::Landing),
            Screen::Landing
        );
    }

    #[test]
    fn test_guard_allows_matching_phase() {
        assert_eq!(
            route_for(SessionPhase::Unauthenticated, Screen::Auth),
            Screen::Auth
        );
        assert_eq!(
            route_for(SessionPhase::Authenticated, Screen::Dashboard),
            Screen::Dashboard
        );
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Screen::Landing.path(), "/");
        assert_eq!(Screen::Auth.path(), "/auth");
        assert_eq!(Screen::Dashboard.path(), "/dashboard");
    }
}
