use crate::components::AuthLanding;
use crate::features::auth::{
    client::use_services,
    state::{GateView, use_auth},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::Outlet;

/// Session gate for the protected region. Each mount performs one session
/// lookup; until it settles only neutral chrome is rendered.
#[component]
pub fn GatedLayout() -> impl IntoView {
    let auth = use_auth();

    match use_services() {
        Ok(services) => {
            spawn_local(async move {
                auth.refresh(&services.session).await;
            });
        }
        Err(err) => {
            log::error!("session gate has no services: {err}");
            auth.is_loading.set(false);
        }
    }

    view! {
        {move || match auth.view() {
            // Neutral loading state (no chrome)
            GateView::Pending => {
                view! {
                    <div class="flex justify-center items-center min-h-screen bg-white dark:bg-gray-900">
                        <div class="animate-pulse text-gray-400">"Loading..."</div>
                    </div>
                }
                    .into_any()
            }
            GateView::Landing => view! { <AuthLanding /> }.into_any(),
            GateView::Protected => view! { <Outlet /> }.into_any(),
        }}
    }
}
