//! Two-step registration dialog. The wizard lives as long as the landing; its
//! state follows the modal generation, so a reopened dialog starts from an
//! empty step 1.

use super::settle_session;
use crate::components::{Alert, AlertKind, Button, ModalShell, Spinner, TextInput};
use crate::features::auth::{
    client::{BrowserNavigator, BrowserServices, BrowserSessionProvider, HttpAuthApi, use_services},
    form::{FormPhase, FormState, SubmitOutcome},
    modal::{Dialog, ModalContext, use_modals},
    register::{RegisterFlow, WizardStep},
    state::{AuthContext, use_auth},
    types::{ACTIVATION_CODE_LENGTH, RegistrationDraft},
    validation::Field,
};
use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

type Wizard = StoredValue<RegisterFlow<HttpAuthApi, BrowserSessionProvider, BrowserNavigator>, LocalStorage>;
type Services = StoredValue<BrowserServices, LocalStorage>;

#[component]
pub fn RegisterModal() -> impl IntoView {
    let modals = use_modals();

    match use_services() {
        Ok(services) => view! { <RegisterWizard services=services modals=modals /> }.into_any(),
        Err(err) => {
            log::error!("register dialog unavailable: {err}");
            ().into_any()
        }
    }
}

#[component]
fn RegisterWizard(services: BrowserServices, modals: ModalContext) -> impl IntoView {
    let auth = use_auth();
    let wizard: Wizard = StoredValue::new_local(RegisterFlow::new(services.clone(), modals));
    let services: Services = StoredValue::new_local(services);

    let step = Signal::derive(move || wizard.with_value(RegisterFlow::step));
    let progress = Signal::derive(move || (step.get().number(), WizardStep::TOTAL));

    view! {
        <Show when=move || modals.is_open(Dialog::Register)>
            <ModalShell
                title="Create account"
                step=progress
                on_close=Callback::new(move |()| modals.close(Dialog::Register))
            >
                {move || match step.get() {
                    WizardStep::Details => {
                        view! { <DetailsStep wizard=wizard modals=modals /> }.into_any()
                    }
                    WizardStep::Activation => {
                        view! {
                            <ActivationStep wizard=wizard services=services auth=auth modals=modals />
                        }
                            .into_any()
                    }
                }}
            </ModalShell>
        </Show>
    }
}

fn field_error(state: Signal<FormState>, field: Field) -> Signal<Option<String>> {
    Signal::derive(move || state.with(|state| state.field_error(field).map(str::to_string)))
}

fn form_error(state: Signal<FormState>) -> impl IntoView {
    move || {
        state
            .with(|state| state.error().map(str::to_string))
            .map(|message| {
                view! {
                    <div class="mb-4">
                        <Alert kind=AlertKind::Error message=message />
                    </div>
                }
            })
    }
}

/// Footer shown on both steps.
#[component]
fn SignInFooter(modals: ModalContext) -> impl IntoView {
    view! {
        <p class="mt-4 text-center text-sm text-gray-500 dark:text-gray-400">
            "Already have an account? "
            <button
                type="button"
                class="font-medium text-blue-600 hover:underline dark:text-blue-500"
                on:click=move |_| modals.toggle(Dialog::Register)
            >
                "Sign in"
            </button>
        </p>
    }
}

#[component]
fn DetailsStep(wizard: Wizard, modals: ModalContext) -> impl IntoView {
    let state = wizard.with_value(RegisterFlow::details_state);
    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let submitting = Signal::derive(move || state.with(FormState::submit_disabled));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let Some(wizard) = wizard.try_get_value() else {
            return;
        };
        let draft = RegistrationDraft {
            firstname: firstname.get_untracked(),
            lastname: lastname.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        spawn_local(async move {
            wizard.submit_details(&draft).await;
        });
    };

    view! {
        <form on:submit=on_submit novalidate>
            <div class="grid gap-4 sm:grid-cols-2">
                <TextInput
                    id="register-firstname"
                    label="First name"
                    autocomplete="given-name"
                    value=firstname
                    error=field_error(state, Field::FirstName)
                />
                <TextInput
                    id="register-lastname"
                    label="Last name"
                    autocomplete="family-name"
                    value=lastname
                    error=field_error(state, Field::LastName)
                />
            </div>
            <TextInput
                id="register-email"
                label="Email"
                input_type="email"
                autocomplete="email"
                placeholder="name@example.com"
                value=email
                error=field_error(state, Field::Email)
            />
            <TextInput
                id="register-password"
                label="Password"
                input_type="password"
                autocomplete="new-password"
                value=password
                error=field_error(state, Field::Password)
            />
            <TextInput
                id="register-confirm-password"
                label="Confirm password"
                input_type="password"
                autocomplete="new-password"
                value=confirm_password
                error=field_error(state, Field::ConfirmPassword)
            />
            {form_error(state)}
            <Button button_type="submit" full_width=true disabled=submitting>
                "Continue"
            </Button>
            {move || submitting.get().then_some(view! { <div class="mt-4 flex justify-center"><Spinner /></div> })}
            <SignInFooter modals=modals />
        </form>
    }
}

#[component]
fn ActivationStep(
    wizard: Wizard,
    services: Services,
    auth: AuthContext,
    modals: ModalContext,
) -> impl IntoView {
    let state = wizard.with_value(RegisterFlow::activation_state);
    let code = RwSignal::new(String::new());
    let code_ref = NodeRef::<html::Input>::new();
    let submitting = Signal::derive(move || state.with(FormState::submit_disabled));
    let sent_to = move || {
        wizard
            .with_value(RegisterFlow::pending_email)
            .map(|email| format!("We sent a {ACTIVATION_CODE_LENGTH}-character code to {email}."))
    };

    Effect::new(move |_| {
        if state.with(FormState::phase) == FormPhase::Failed {
            if let Some(input) = code_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let (Some(wizard), Some(services)) = (wizard.try_get_value(), services.try_get_value())
        else {
            return;
        };
        let code = code.get_untracked();
        spawn_local(async move {
            if wizard.submit_code(&code).await == SubmitOutcome::Completed {
                settle_session(auth, &services).await;
            }
        });
    };

    view! {
        <form on:submit=on_submit novalidate>
            {move || {
                sent_to()
                    .map(|message| {
                        view! {
                            <div class="mb-4">
                                <Alert kind=AlertKind::Info message=message />
                            </div>
                        }
                    })
            }}
            <TextInput
                id="register-code"
                label="Activation code"
                autocomplete="one-time-code"
                max_length=ACTIVATION_CODE_LENGTH
                value=code
                node_ref=code_ref
                error=field_error(state, Field::Code)
            />
            {form_error(state)}
            <Button button_type="submit" full_width=true disabled=submitting>
                "Activate account"
            </Button>
            {move || submitting.get().then_some(view! { <div class="mt-4 flex justify-center"><Spinner /></div> })}
            <SignInFooter modals=modals />
        </form>
    }
}
