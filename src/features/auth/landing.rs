//! Actions behind the auth landing screen.

use crate::features::auth::{
    modal::{Dialog, ModalContext},
    ports::SessionProvider,
    types::SignInProvider,
};

/// Hands the browser to a federated provider. The provider owns whatever comes
/// next (redirect or session); failures are only logged.
pub async fn federated_sign_in<S: SessionProvider>(session: &S, provider: SignInProvider) {
    log::info!("starting {} sign-in", provider.id());
    if let Err(err) = session.sign_in_with_provider(provider).await {
        log::warn!("{} sign-in could not start: {err}", provider.id());
    }
}

pub fn open_login(modals: ModalContext) {
    modals.open(Dialog::Login);
}

pub fn open_register(modals: ModalContext) {
    modals.open(Dialog::Register);
}
