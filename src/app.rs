use crate::features::auth::{client::AuthServicesProvider, modal::ModalContext, state::AuthContext};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AuthContext::new());
    provide_context(ModalContext::new());

    view! {
        <Router>
            <AuthServicesProvider>
                <AppRoutes />
            </AuthServicesProvider>
        </Router>
    }
}
