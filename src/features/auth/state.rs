//! Session gate state. The gated layout resolves the session once per mount and
//! picks between the protected app and the auth landing. Lookup failures count
//! as "no session" so a broken provider never exposes protected content. Only
//! non-sensitive session metadata is kept in memory; cookies remain `HttpOnly`.

use crate::features::auth::{ports::SessionProvider, types::Session};
use leptos::prelude::*;

/// What the gated layout renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Lookup still running; render neutral chrome only.
    Pending,
    Landing,
    Protected,
}

pub fn gate_view(loading: bool, session: Option<&Session>) -> GateView {
    match (loading, session) {
        (true, _) => GateView::Pending,
        (false, Some(_)) => GateView::Protected,
        (false, None) => GateView::Landing,
    }
}

/// Looks up the current session, failing closed.
pub async fn resolve_session<S: SessionProvider>(provider: &S) -> Option<Session> {
    match provider.current_session().await {
        Ok(Some(session)) if !session.is_empty() => Some(session),
        Ok(_) => None,
        Err(err) => {
            log::warn!("session lookup failed, treating as signed out: {err}");
            None
        }
    }
}

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    pub is_loading: RwSignal<bool>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext {
    /// Starts in the loading state until the first lookup finishes.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            is_loading: RwSignal::new(true),
        }
    }

    /// Tracked view decision for the gated layout.
    pub fn view(&self) -> GateView {
        let loading = self.is_loading.get();
        self.session.with(|session| gate_view(loading, session.as_ref()))
    }

    /// Re-evaluates the gate: one lookup, no retries, no caching.
    pub async fn refresh<S: SessionProvider>(&self, provider: &S) {
        self.is_loading.set(true);
        let session = resolve_session(provider).await;
        self.session.try_set(session);
        self.is_loading.try_set(false);
    }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_default()
}
