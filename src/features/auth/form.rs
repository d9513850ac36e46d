use crate::features::auth::validation::{Field, FieldErrors};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Failed,
    Success,
}

/// Submission state of one auth form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    phase: FormPhase,
    error: Option<String>,
    field_errors: FieldErrors,
}

/// What happened to a single submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Rejected,
    /// A submission from this form is still running, or the form is done.
    Ignored,
    /// The request failed; the form is editable again.
    Failed,
    /// The dialog closed while the request was in flight.
    Cancelled,
    Completed,
}

impl FormState {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(field)
    }

    /// The submit control stays disabled while a request runs and after success.
    pub fn submit_disabled(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting | FormPhase::Success)
    }

    /// Moves to `Submitting`. Returns `false` when a submission is already
    /// running or the form has completed.
    pub fn begin(&mut self) -> bool {
        if self.submit_disabled() {
            return false;
        }
        self.phase = FormPhase::Submitting;
        self.error = None;
        self.field_errors = FieldErrors::default();
        true
    }

    pub fn reject(&mut self, errors: FieldErrors) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        self.phase = FormPhase::Editing;
        self.error = None;
        self.field_errors = errors;
    }

    pub fn fail(&mut self, message: String) {
        self.phase = FormPhase::Failed;
        self.error = Some(message);
    }

    pub fn succeed(&mut self) {
        self.phase = FormPhase::Success;
        self.error = None;
    }

    /// Back to editing without a message, used when a dialog cancels the request.
    pub fn cancel(&mut self) {
        self.phase = FormPhase::Editing;
    }
}
