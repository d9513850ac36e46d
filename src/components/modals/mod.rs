//! Login and register dialogs. At most one is open at a time; both read the
//! shared `ModalContext` and drive the auth flows from `features::auth`.

mod login_modal;
mod register_modal;

use crate::app_lib::config::NavigationPolicy;
use crate::features::auth::{client::BrowserServices, state::AuthContext};
use leptos::prelude::*;
use login_modal::LoginModal;
use register_modal::RegisterModal;

#[component]
pub fn AuthModals() -> impl IntoView {
    view! {
        <LoginModal />
        <RegisterModal />
    }
}

/// Client-side navigation keeps the gated layout mounted, so the session has to
/// be re-read before the protected view can show.
async fn settle_session(auth: AuthContext, services: &BrowserServices) {
    if services.policy == NavigationPolicy::ClientSide {
        auth.refresh(&services.session).await;
    }
}
