//! Two-step registration wizard.
//!
//! Step 1 validates the profile and credentials and posts them to the register
//! endpoint. Only a successful answer stores the draft and moves the wizard to
//! step 2, where the emailed activation code is sent to the activate endpoint.
//! There is no way back to step 1 short of closing the dialog. Wizard state is
//! keyed to the modal generation it was written in, so any dialog transition
//! discards it and a reopened dialog starts from an empty step 1.

use crate::features::auth::{
    form::{FormState, SubmitOutcome},
    modal::{Cancelled, Dialog, ModalContext},
    ports::{AuthApi, AuthServices, Navigator, SessionProvider},
    types::RegistrationDraft,
    validation::{validate_activation_code, validate_registration},
};
use leptos::prelude::*;

pub const REGISTER_FALLBACK_ERROR: &str = "Registration failed. Please try again.";
pub const ACTIVATION_FALLBACK_ERROR: &str = "Activation failed. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Details,
    Activation,
}

impl WizardStep {
    pub const TOTAL: u8 = 2;

    pub fn number(self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Activation => 2,
        }
    }
}

/// One pass through the wizard, owned by a single opening of the dialog.
#[derive(Clone, Debug, Default)]
struct Attempt {
    generation: u64,
    step: WizardStep,
    draft: Option<RegistrationDraft>,
    details: FormState,
    activation: FormState,
}

/// Reads the attempt of the current dialog generation (tracked). A stale
/// attempt reads as a fresh one.
fn read<R>(attempt: RwSignal<Attempt>, modals: ModalContext, f: impl FnOnce(&Attempt) -> R) -> R {
    let generation = modals.generation();
    attempt.with(|attempt| {
        if attempt.generation == generation {
            f(attempt)
        } else {
            f(&Attempt::default())
        }
    })
}

#[derive(Clone)]
pub struct RegisterFlow<A, S, N> {
    services: AuthServices<A, S, N>,
    modals: ModalContext,
    attempt: RwSignal<Attempt>,
}

impl<A, S, N> RegisterFlow<A, S, N>
where
    A: AuthApi,
    S: SessionProvider,
    N: Navigator,
{
    pub fn new(services: AuthServices<A, S, N>, modals: ModalContext) -> Self {
        let generation = modals.generation_untracked();
        Self {
            services,
            modals,
            attempt: RwSignal::new(Attempt {
                generation,
                ..Attempt::default()
            }),
        }
    }

    /// Current step (tracked). Read-only: only a successful step 1 advances it.
    pub fn step(&self) -> WizardStep {
        read(self.attempt, self.modals, |attempt| attempt.step)
    }

    pub fn details_state(&self) -> Signal<FormState> {
        let (attempt, modals) = (self.attempt, self.modals);
        Signal::derive(move || read(attempt, modals, |attempt| attempt.details.clone()))
    }

    pub fn activation_state(&self) -> Signal<FormState> {
        let (attempt, modals) = (self.attempt, self.modals);
        Signal::derive(move || read(attempt, modals, |attempt| attempt.activation.clone()))
    }

    /// Email the activation code was sent to (tracked).
    pub fn pending_email(&self) -> Option<String> {
        read(self.attempt, self.modals, |attempt| {
            attempt.draft.as_ref().map(|draft| draft.email.clone())
        })
    }

    /// Applies `f` to the attempt of the current generation, starting a fresh
    /// one if the dialog moved on. `None` once the signal is disposed.
    fn update<R>(&self, f: impl FnOnce(&mut Attempt) -> R) -> Option<R> {
        let generation = self.modals.generation_untracked();
        self.attempt.try_update(|attempt| {
            if attempt.generation != generation {
                *attempt = Attempt {
                    generation,
                    ..Attempt::default()
                };
            }
            f(attempt)
        })
    }

    pub async fn submit_details(&self, input: &RegistrationDraft) -> SubmitOutcome {
        if self.update(|attempt| attempt.step) != Some(WizardStep::Details) {
            log::debug!("ignoring registration details outside step 1");
            return SubmitOutcome::Ignored;
        }

        let draft = match validate_registration(input) {
            Ok(draft) => draft,
            Err(errors) => {
                self.update(|attempt| attempt.details.reject(errors));
                return SubmitOutcome::Rejected;
            }
        };

        if !self
            .update(|attempt| attempt.details.begin())
            .unwrap_or(false)
        {
            return SubmitOutcome::Ignored;
        }

        let lease = self.modals.lease();
        let result = lease.run(self.services.api.register(&draft)).await;
        match result {
            Ok(Ok(())) => {
                log::info!("registration accepted, awaiting activation code");
                self.update(|attempt| {
                    attempt.details.succeed();
                    attempt.draft = Some(draft);
                    attempt.step = WizardStep::Activation;
                });
                SubmitOutcome::Completed
            }
            Ok(Err(err)) => {
                log::warn!("registration failed: {err}");
                let message = err.user_message(REGISTER_FALLBACK_ERROR);
                self.update(|attempt| attempt.details.fail(message));
                SubmitOutcome::Failed
            }
            Err(Cancelled) => {
                log::debug!("registration request cancelled");
                self.update(|attempt| attempt.details.cancel());
                SubmitOutcome::Cancelled
            }
        }
    }

    pub async fn submit_code(&self, raw_code: &str) -> SubmitOutcome {
        if self.update(|attempt| attempt.step) != Some(WizardStep::Activation) {
            log::debug!("ignoring activation code before registration");
            return SubmitOutcome::Ignored;
        }

        let code = match validate_activation_code(raw_code) {
            Ok(code) => code,
            Err(errors) => {
                self.update(|attempt| attempt.activation.reject(errors));
                return SubmitOutcome::Rejected;
            }
        };

        if !self
            .update(|attempt| attempt.activation.begin())
            .unwrap_or(false)
        {
            return SubmitOutcome::Ignored;
        }

        let lease = self.modals.lease();
        match lease.run(self.services.api.activate_account(&code)).await {
            Ok(Ok(())) => {
                log::info!("account activated");
                self.update(|attempt| {
                    attempt.activation.succeed();
                    attempt.draft = None;
                });
                self.modals.close(Dialog::Register);
                self.services.navigate_home();
                SubmitOutcome::Completed
            }
            Ok(Err(err)) => {
                log::warn!("activation failed: {err}");
                let message = err.user_message(ACTIVATION_FALLBACK_ERROR);
                self.update(|attempt| attempt.activation.fail(message));
                SubmitOutcome::Failed
            }
            Err(Cancelled) => {
                log::debug!("activation request cancelled");
                self.update(|attempt| attempt.activation.cancel());
                SubmitOutcome::Cancelled
            }
        }
    }
}
