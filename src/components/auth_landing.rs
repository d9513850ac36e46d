//! Entry screen for visitors without a session: federated providers plus the
//! login and register dialogs.

use crate::app_lib::build_info::git_commit_hash;
use crate::components::{Alert, AlertKind, Button, ButtonKind, modals::AuthModals};
use crate::features::auth::{
    client::use_services,
    landing::{federated_sign_in, open_login, open_register},
    modal::use_modals,
    types::SignInProvider,
};
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn AuthLanding() -> impl IntoView {
    let modals = use_modals();
    let services = use_services();
    let unavailable = services.as_ref().err().map(ToString::to_string);
    let session = StoredValue::new_local(services.ok().map(|services| services.session));

    let sign_in_with = move |provider: SignInProvider| {
        let Some(session) = session.get_value() else {
            log::error!("{} sign-in unavailable", provider.id());
            return;
        };
        spawn_local(async move {
            federated_sign_in(&session, provider).await;
        });
    };

    view! {
        <section class="flex min-h-screen flex-col items-center justify-center bg-white px-4 dark:bg-gray-900">
            <div class="w-full max-w-sm space-y-6">
                <img src="/cloud.png" class="h-10" alt="Cloud" />
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white">"Happening now."</h1>

                {unavailable.map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}

                <div class="space-y-2">
                    <h2 class="mb-4 text-3xl font-bold text-gray-900 dark:text-white">"Join today."</h2>
                    {SignInProvider::ALL
                        .into_iter()
                        .map(|provider| {
                            view! {
                                <Button
                                    kind=ButtonKind::Secondary
                                    full_width=true
                                    on_click=move |()| sign_in_with(provider)
                                >
                                    {provider.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                    <div class="flex items-center justify-center gap-4 text-gray-500">
                        <span class="h-px w-1/2 bg-gray-200 dark:bg-gray-700"></span>
                        "or"
                        <span class="h-px w-1/2 bg-gray-200 dark:bg-gray-700"></span>
                    </div>
                    <Button full_width=true on_click=move |()| open_register(modals)>
                        "Create account"
                    </Button>
                    <p class="text-[10px] text-gray-400">
                        "By signing up, you agree to the "
                        <span class="text-sky-500">"Terms of Service"</span>
                        " and "
                        <span class="text-sky-500">"Privacy Policy"</span>
                        ", including "
                        <span class="text-sky-500">"Cookie Use"</span>
                        "."
                    </p>
                </div>

                <div>
                    <h3 class="mb-4 text-xl font-medium text-gray-900 dark:text-white">
                        "Already have an account?"
                    </h3>
                    <Button
                        kind=ButtonKind::Outline
                        full_width=true
                        on_click=move |()| open_login(modals)
                    >
                        "Sign in"
                    </Button>
                </div>

                <p class="text-xs text-gray-400 dark:text-gray-500">
                    {format!("build {}", git_commit_hash())}
                </p>
            </div>
        </section>
        <AuthModals />
    }
}
