//! Seams between the auth flows and the outside world: the remote auth API, the
//! session provider, and page navigation. Browser implementations live in
//! `client`; tests substitute in-memory doubles.

// Futures here run on the single-threaded browser executor and are never Send.
#![allow(async_fn_in_trait)]

use crate::{
    app_lib::{AppError, config::NavigationPolicy},
    features::auth::types::{ActivationCode, Credentials, RegistrationDraft, Session, SignInProvider},
};

/// Remote authentication API.
pub trait AuthApi {
    /// `POST /authenticate`. Succeeds only on HTTP 200.
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AppError>;
    /// `POST /register` with the full draft.
    async fn register(&self, draft: &RegistrationDraft) -> Result<(), AppError>;
    /// `GET /activate-account?token=<code>`.
    async fn activate_account(&self, code: &ActivationCode) -> Result<(), AppError>;
}

/// Identity/session provider that owns the session cookie.
pub trait SessionProvider {
    async fn current_session(&self) -> Result<Option<Session>, AppError>;
    /// Hands the browser over to a federated provider; normally does not return
    /// to the caller in any meaningful way.
    async fn sign_in_with_provider(&self, provider: SignInProvider) -> Result<(), AppError>;
    /// Establishes the local session without redirecting.
    async fn sign_in_with_credentials(&self, credentials: &Credentials) -> Result<(), AppError>;
}

pub trait Navigator {
    /// Router navigation inside the loaded app.
    fn push(&self, path: &str);
    /// Full page load of `path`.
    fn reload(&self, path: &str);
}

/// Everything a flow needs to talk to the outside world.
#[derive(Clone)]
pub struct AuthServices<A, S, N> {
    pub api: A,
    pub session: S,
    pub navigator: N,
    pub policy: NavigationPolicy,
    pub home_path: String,
}

impl<A, S, N: Navigator> AuthServices<A, S, N> {
    /// Leaves the auth dialogs for the home route using the configured policy.
    pub fn navigate_home(&self) {
        log::debug!("navigating to {} ({:?})", self.home_path, self.policy);
        match self.policy {
            NavigationPolicy::FullReload => self.navigator.reload(&self.home_path),
            NavigationPolicy::ClientSide => self.navigator.push(&self.home_path),
        }
    }
}
