use contracts::system::auth::AdminInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_client::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Token found, `/me` not answered yet
    Checking,
    Authenticated(AdminInfo),
    Anonymous,
}

/// Process-wide session, provided once at the app root
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let initial = if storage::get_token().is_some() {
            SessionState::Checking
        } else {
            SessionState::Anonymous
        };
        Self {
            state: RwSignal::new(initial),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn is_checking(&self) -> bool {
        self.state.with(|s| *s == SessionState::Checking)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| matches!(s, SessionState::Authenticated(_)))
    }

    /// Top bar label
    pub fn admin_name(&self) -> String {
        self.state.with(|s| match s {
            SessionState::Authenticated(admin) => admin.display_name().to_string(),
            _ => "Admin".to_string(),
        })
    }

    /// Validate the stored token against `/admin/auth/me`
    pub fn refresh(&self) {
        if storage::get_token().is_none() {
            self.state.set(SessionState::Anonymous);
            return;
        }
        self.state.set(SessionState::Checking);
        let state = self.state;
        spawn_local(async move {
            match api::current_admin().await {
                Ok(admin) => state.set(SessionState::Authenticated(admin)),
                Err(e) => {
                    log::warn!("Stored session rejected: {}", e);
                    storage::clear_token();
                    state.set(SessionState::Anonymous);
                }
            }
        });
    }

    /// Store a fresh token and load the admin behind it
    pub fn sign_in(&self, token: &str) {
        storage::save_token(token);
        self.refresh();
    }

    /// Server-side logout errors are logged and ignored
    pub async fn logout(self) {
        if let Err(e) = api::logout().await {
            log::error!("Logout failed: {}", e);
        }
        self.teardown();
    }

    pub fn teardown(&self) {
        storage::clear_token();
        self.state.set(SessionState::Anonymous);
    }

    /// Ends the session when the server no longer accepts the token
    pub fn handle_error(&self, error: &ApiError) {
        if error.is_unauthorized() {
            log::warn!("Token rejected, ending session");
            self.teardown();
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Session provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);

    // Validate the stored token once on mount
    Effect::new(move |_| {
        session.refresh();
    });

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
