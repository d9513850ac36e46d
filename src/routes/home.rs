//! Protected home. Only reachable through the session gate.

use crate::features::auth::{state::use_auth, types::Session};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session.with(|session| {
            session
                .as_ref()
                .and_then(Session::display_name)
                .map_or_else(|| "Welcome back".to_string(), |name| format!("Welcome back, {name}"))
        })
    };

    view! {
        <main class="max-w-screen-xl mx-auto p-4">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{greeting}</h1>
            <p class="mt-2 text-gray-500 dark:text-gray-400">"You are signed in."</p>
        </main>
    }
}
