//! Login dialog flow: validate, authenticate against the auth API, establish the
//! local session with the same credentials, then close the dialog and go home.
//! Credentials are never logged.

use crate::app_lib::AppError;
use crate::features::auth::{
    form::{FormState, SubmitOutcome},
    modal::{Cancelled, Dialog, ModalContext},
    ports::{AuthApi, AuthServices, Navigator, SessionProvider},
    types::Credentials,
    validation::validate_login,
};
use leptos::prelude::*;

pub const LOGIN_FALLBACK_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Clone)]
pub struct LoginFlow<A, S, N> {
    services: AuthServices<A, S, N>,
    modals: ModalContext,
    state: RwSignal<FormState>,
}

impl<A, S, N> LoginFlow<A, S, N>
where
    A: AuthApi,
    S: SessionProvider,
    N: Navigator,
{
    pub fn new(services: AuthServices<A, S, N>, modals: ModalContext) -> Self {
        Self {
            services,
            modals,
            state: RwSignal::new(FormState::default()),
        }
    }

    pub fn state(&self) -> RwSignal<FormState> {
        self.state
    }

    pub async fn submit(&self, email: &str, password: &str) -> SubmitOutcome {
        let credentials = match validate_login(email, password) {
            Ok(credentials) => credentials,
            Err(errors) => {
                self.state.update(|state| state.reject(errors));
                return SubmitOutcome::Rejected;
            }
        };

        if !self.state.try_update(FormState::begin).unwrap_or(false) {
            return SubmitOutcome::Ignored;
        }

        let lease = self.modals.lease();
        match lease.run(self.sign_in(&credentials)).await {
            Ok(Ok(())) => {
                log::info!("login succeeded");
                self.state.try_update(FormState::succeed);
                self.modals.close(Dialog::Login);
                self.services.navigate_home();
                SubmitOutcome::Completed
            }
            Ok(Err(err)) => {
                log::warn!("login failed: {err}");
                let message = err.user_message(LOGIN_FALLBACK_ERROR);
                self.state.try_update(|state| state.fail(message));
                SubmitOutcome::Failed
            }
            Err(Cancelled) => {
                log::debug!("login request cancelled");
                self.state.try_update(FormState::cancel);
                SubmitOutcome::Cancelled
            }
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.services.api.authenticate(credentials).await?;
        self.services
            .session
            .sign_in_with_credentials(credentials)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::config::NavigationPolicy;
    use crate::features::auth::{
        form::FormPhase,
        test_support::{
            Call, FakeApi, FakeNavigator, FakeServices, FakeSession, Reply, fake_services,
            http_error, is_navigation,
        },
        validation::Field,
    };
    use futures::FutureExt;

    fn credentials() -> Credentials {
        Credentials {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        }
    }

    fn open_login(
        services: FakeServices,
    ) -> (LoginFlow<FakeApi, FakeSession, FakeNavigator>, ModalContext) {
        let modals = ModalContext::new();
        modals.open(Dialog::Login);
        (LoginFlow::new(services, modals), modals)
    }

    #[tokio::test]
    async fn invalid_credentials_rejected_with_server_message() {
        let (services, log) = fake_services(NavigationPolicy::FullReload);
        services.api.reply_authenticate(Reply::Err(http_error(
            401,
            Some("Invalid credentials"),
        )));
        let (flow, modals) = open_login(services);

        let outcome = flow.submit("a@b.com", "x").await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        let state = flow.state().get_untracked();
        assert_eq!(state.error(), Some("Invalid credentials"));
        assert_eq!(state.phase(), FormPhase::Failed);
        assert!(!state.submit_disabled());
        assert!(modals.is_open(Dialog::Login));
        assert_eq!(log.calls(), vec![Call::Authenticate(credentials())]);
    }

    #[tokio::test]
    async fn failure_without_server_message_uses_fallback() {
        let (services, log) = fake_services(NavigationPolicy::FullReload);
        services
            .api
            .reply_authenticate(Reply::Err(http_error(500, None)));
        let (flow, _modals) = open_login(services);

        assert_eq!(flow.submit("a@b.com", "x").await, SubmitOutcome::Failed);
        assert_eq!(
            flow.state().get_untracked().error(),
            Some(LOGIN_FALLBACK_ERROR)
        );
        assert_eq!(log.count(|call| matches!(call, Call::CredentialSignIn(_))), 0);
        assert_eq!(log.count(is_navigation), 0);
    }

    #[tokio::test]
    async fn success_signs_in_once_then_closes_and_navigates() {
        let (services, log) = fake_services(NavigationPolicy::ClientSide);
        let (flow, modals) = open_login(services);

        let outcome = flow.submit("a@b.com", "x").await;

        assert_eq!(outcome, SubmitOutcome::Completed);
        assert_eq!(
            log.calls(),
            vec![
                Call::Authenticate(credentials()),
                Call::CredentialSignIn(credentials()),
                Call::Push("/".to_string()),
            ]
        );
        assert_eq!(modals.active(), None);
        assert_eq!(flow.state().get_untracked().phase(), FormPhase::Success);
    }

    #[tokio::test]
    async fn success_honors_full_reload_policy() {
        let (services, log) = fake_services(NavigationPolicy::FullReload);
        let (flow, _modals) = open_login(services);

        flow.submit("a@b.com", "x").await;

        assert_eq!(log.count(|call| *call == Call::Reload("/".to_string())), 1);
        assert_eq!(log.count(|call| matches!(call, Call::Push(_))), 0);
    }

    #[tokio::test]
    async fn validation_failure_never_reaches_network() {
        let (services, log) = fake_services(NavigationPolicy::FullReload);
        let (flow, _modals) = open_login(services);

        let outcome = flow.submit("not-an-email", "").await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(log.calls().is_empty());
        let state = flow.state().get_untracked();
        assert_eq!(state.phase(), FormPhase::Editing);
        assert!(state.field_error(Field::Email).is_some());
        assert!(state.field_error(Field::Password).is_some());
    }

    #[tokio::test]
    async fn session_sign_in_failure_keeps_dialog_open() {
        let (services, log) = fake_services(NavigationPolicy::FullReload);
        services
            .session
            .reply_credential_sign_in(Reply::Err(http_error(401, Some("CredentialsSignin"))));
        let (flow, modals) = open_login(services);

        assert_eq!(flow.submit("a@b.com", "x").await, SubmitOutcome::Failed);
        assert!(modals.is_open(Dialog::Login));
        assert_eq!(log.count(is_navigation), 0);
    }

    #[tokio::test]
    async fn second_submit_while_pending_is_ignored() {
        let (services, log) = fake_services(NavigationPolicy::FullReload);
        services.api.reply_authenticate(Reply::Hang);
        let (flow, _modals) = open_login(services);

        let mut first = Box::pin(flow.submit("a@b.com", "x"));
        assert!((&mut first).now_or_never().is_none());
        assert!(flow.state().get_untracked().submit_disabled());

        assert_eq!(flow.submit("a@b.com", "x").await, SubmitOutcome::Ignored);
        assert_eq!(log.count(|call| matches!(call, Call::Authenticate(_))), 1);
    }

    #[tokio::test]
    async fn closing_dialog_cancels_inflight_login() {
        let (services, log) = fake_services(NavigationPolicy::FullReload);
        services.api.reply_authenticate(Reply::Hang);
        let (flow, modals) = open_login(services);

        let mut pending = Box::pin(flow.submit("a@b.com", "x"));
        assert!((&mut pending).now_or_never().is_none());

        modals.close(Dialog::Login);

        assert_eq!(pending.await, SubmitOutcome::Cancelled);
        assert_eq!(log.count(is_navigation), 0);
        assert_eq!(log.count(|call| matches!(call, Call::CredentialSignIn(_))), 0);
        assert_eq!(flow.state().get_untracked().error(), None);
    }
}
