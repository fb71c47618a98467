//! Leptos side of the session: an `AuthContext` of signals built from
//! `sessionStorage` before the first render, and helpers that keep storage
//! and signals in step on login, logout and profile edits. Never log the
//! token held in `Session`.

use crate::features::{
    auth::{session::AuthSession, storage::BrowserSessionStore, types::Session},
    users::types::UserRecord,
};
use leptos::prelude::*;
use tracing::warn;

/// Reactive view of the tab's session, provided once at the root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
    pub current_user: Signal<Option<UserRecord>>,
}

impl AuthContext {
    fn new(session: RwSignal<Option<Session>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        let current_user =
            Signal::derive(move || session.get().and_then(|session| session.cached_user));
        Self {
            session,
            is_authenticated,
            current_user,
        }
    }

    /// Session handle over this tab's storage.
    pub fn store(&self) -> AuthSession<BrowserSessionStore> {
        AuthSession::new(BrowserSessionStore)
    }

    /// Publishes a freshly established session (login or registration).
    pub fn set_session(&self, session: Session) {
        self.session.set(Some(session));
    }

    /// Clears storage and the in-memory session.
    pub fn logout(&self) {
        self.store().logout();
        self.session.set(None);
    }

    /// Refreshes the cached profile after the user edited their own record.
    pub fn refresh_user(&self, updated: &UserRecord) {
        match self.store().merge_cached_user(updated) {
            Ok(merged) => self.session.update(|session| {
                if let Some(session) = session {
                    session.cached_user = Some(merged);
                }
            }),
            Err(err) => warn!("failed to refresh cached profile: {err}"),
        }
    }
}

/// Reads any stored session before the first render, so guards never see a
/// signed-in tab as anonymous.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let stored = AuthSession::new(BrowserSessionStore).snapshot();
    let auth = AuthContext::new(RwSignal::new(stored));
    provide_context(auth);

    view! { {children()} }
}

/// Context from the nearest `AuthProvider`; outside one, an anonymous session.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
