use super::settle_session;
use crate::components::{Alert, AlertKind, Button, ModalShell, Spinner, TextInput};
use crate::features::auth::{
    client::{BrowserServices, use_services},
    form::{FormState, SubmitOutcome},
    login::LoginFlow,
    modal::{Dialog, ModalContext, use_modals},
    state::use_auth,
    validation::Field,
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

#[component]
pub fn LoginModal() -> impl IntoView {
    let modals = use_modals();

    view! {
        <Show when=move || modals.is_open(Dialog::Login)>
            <ModalShell title="Sign in" on_close=Callback::new(move |()| modals.close(Dialog::Login))>
                {match use_services() {
                    Ok(services) => view! { <LoginForm services=services modals=modals /> }.into_any(),
                    Err(err) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
                }}
            </ModalShell>
        </Show>
    }
}

/// Mounted fresh each time the dialog opens.
#[component]
fn LoginForm(services: BrowserServices, modals: ModalContext) -> impl IntoView {
    let auth = use_auth();
    let flow = StoredValue::new_local(LoginFlow::new(services.clone(), modals));
    let services = StoredValue::new_local(services);
    let state = flow.with_value(LoginFlow::state);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let field_error = move |field: Field| {
        Signal::derive(move || state.with(|state| state.field_error(field).map(str::to_string)))
    };
    let submitting = Signal::derive(move || state.with(FormState::submit_disabled));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let (Some(flow), Some(services)) = (flow.try_get_value(), services.try_get_value()) else {
            return;
        };
        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            if flow.submit(&email, &password).await == SubmitOutcome::Completed {
                settle_session(auth, &services).await;
            }
        });
    };

    view! {
        <form on:submit=on_submit novalidate>
            <TextInput
                id="login-email"
                label="Email"
                input_type="email"
                autocomplete="email"
                placeholder="name@example.com"
                value=email
                error=field_error(Field::Email)
            />
            <TextInput
                id="login-password"
                label="Password"
                input_type="password"
                autocomplete="current-password"
                value=password
                error=field_error(Field::Password)
            />
            {move || {
                state
                    .with(|state| state.error().map(str::to_string))
                    .map(|message| {
                        view! {
                            <div class="mb-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
            <Button button_type="submit" full_width=true disabled=submitting>
                "Sign in"
            </Button>
            {move || submitting.get().then_some(view! { <div class="mt-4 flex justify-center"><Spinner /></div> })}
            <p class="mt-4 text-center text-sm text-gray-500 dark:text-gray-400">
                "Don't have an account? "
                <button
                    type="button"
                    class="font-medium text-blue-600 hover:underline dark:text-blue-500"
                    on:click=move |_| modals.toggle(Dialog::Login)
                >
                    "Create one"
                </button>
            </p>
        </form>
    }
}
