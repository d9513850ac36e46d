//! Which auth dialog is open. A single `Option<Dialog>` makes "both open"
//! unrepresentable, and every change of the active dialog aborts requests that
//! were started inside the previous one so they cannot touch state afterwards.

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use leptos::prelude::*;
use std::future::Future;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    Login,
    Register,
}

impl Dialog {
    /// The dialog a footer link switches to.
    pub fn counterpart(self) -> Self {
        match self {
            Dialog::Login => Dialog::Register,
            Dialog::Register => Dialog::Login,
        }
    }
}

/// Returned when the dialog that started a request went away before it finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("dialog closed before the request finished")]
pub struct Cancelled;

/// Ties one request to the lifetime of the currently open dialog.
pub struct DialogLease {
    id: u64,
    registration: AbortRegistration,
    inflight: StoredValue<Inflight>,
}

impl DialogLease {
    /// Runs `future` unless the dialog changes first. The abort handle is
    /// released either way.
    pub async fn run<F: Future>(self, future: F) -> Result<F::Output, Cancelled> {
        let DialogLease {
            id,
            registration,
            inflight,
        } = self;
        let result = Abortable::new(future, registration).await;
        inflight.try_update_value(|inflight| inflight.release(id));
        result.map_err(|_| Cancelled)
    }
}

#[derive(Default)]
struct Inflight {
    next_id: u64,
    handles: Vec<(u64, AbortHandle)>,
}

impl Inflight {
    fn register(&mut self, handle: AbortHandle) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.handles.push((id, handle));
        id
    }

    fn release(&mut self, id: u64) {
        self.handles.retain(|(existing, _)| *existing != id);
    }
}

/// Shared modal store provided through context by the app shell.
#[derive(Clone, Copy)]
pub struct ModalContext {
    active: RwSignal<Option<Dialog>>,
    generation: RwSignal<u64>,
    inflight: StoredValue<Inflight>,
}

impl Default for ModalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            generation: RwSignal::new(0),
            inflight: StoredValue::new(Inflight::default()),
        }
    }

    /// Currently open dialog (tracked).
    pub fn active(&self) -> Option<Dialog> {
        self.active.get()
    }

    /// Whether `dialog` is open (tracked).
    pub fn is_open(&self, dialog: Dialog) -> bool {
        self.active() == Some(dialog)
    }

    /// Bumped on every change of the active dialog (tracked). Dialog state
    /// recorded under an older generation belongs to a dialog that has closed.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn generation_untracked(&self) -> u64 {
        self.generation.get_untracked()
    }

    /// Opens `dialog`, replacing whichever one was open.
    pub fn open(&self, dialog: Dialog) {
        self.transition(Some(dialog));
    }

    /// Closes `dialog`; does nothing if a different dialog is active.
    pub fn close(&self, dialog: Dialog) {
        if self.active.get_untracked() == Some(dialog) {
            self.transition(None);
        }
    }

    /// Footer link: close `from` and open the other dialog. Does nothing unless
    /// `from` is the active dialog.
    pub fn toggle(&self, from: Dialog) {
        if self.active.get_untracked() == Some(from) {
            self.transition(Some(from.counterpart()));
        }
    }

    /// Registers a request with the open dialog. It is aborted on the next
    /// transition.
    pub fn lease(&self) -> DialogLease {
        let (handle, registration) = AbortHandle::new_pair();
        let id = self
            .inflight
            .try_update_value(|inflight| inflight.register(handle))
            .unwrap_or_default();
        DialogLease {
            id,
            registration,
            inflight: self.inflight,
        }
    }

    fn transition(&self, next: Option<Dialog>) {
        let current = self.active.get_untracked();
        if current == next {
            return;
        }
        self.abort_inflight();
        log::debug!("auth dialog {current:?} -> {next:?}");
        self.generation.update(|generation| *generation += 1);
        self.active.set(next);
    }

    fn abort_inflight(&self) {
        let handles = self
            .inflight
            .try_update_value(|inflight| std::mem::take(&mut inflight.handles))
            .unwrap_or_default();
        if !handles.is_empty() {
            log::debug!("aborting {} in-flight auth request(s)", handles.len());
        }
        for (_, handle) in handles {
            handle.abort();
        }
    }
}

/// Returns the modal store from context, or a detached one outside the app shell.
pub fn use_modals() -> ModalContext {
    use_context::<ModalContext>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{FutureExt, future::pending};

    #[test]
    fn starts_closed() {
        let modals = ModalContext::new();
        assert_eq!(modals.active(), None);
        assert!(!modals.is_open(Dialog::Login));
        assert!(!modals.is_open(Dialog::Register));
    }

    #[test]
    fn opening_one_dialog_replaces_the_other() {
        let modals = ModalContext::new();
        modals.open(Dialog::Login);
        modals.open(Dialog::Register);
        assert!(modals.is_open(Dialog::Register));
        assert!(!modals.is_open(Dialog::Login));
    }

    #[test]
    fn toggle_from_login_opens_register() {
        let modals = ModalContext::new();
        modals.open(Dialog::Login);
        modals.toggle(Dialog::Login);
        assert!(!modals.is_open(Dialog::Login));
        assert!(modals.is_open(Dialog::Register));
    }

    #[test]
    fn toggle_from_register_opens_login() {
        let modals = ModalContext::new();
        modals.open(Dialog::Register);
        modals.toggle(Dialog::Register);
        assert!(modals.is_open(Dialog::Login));
        assert!(!modals.is_open(Dialog::Register));
    }

    #[test]
    fn close_ignores_inactive_dialog() {
        let modals = ModalContext::new();
        modals.open(Dialog::Register);
        modals.close(Dialog::Login);
        assert_eq!(modals.active(), Some(Dialog::Register));
        modals.close(Dialog::Register);
        assert_eq!(modals.active(), None);
    }

    #[tokio::test]
    async fn lease_passes_through_completed_work() {
        let modals = ModalContext::new();
        modals.open(Dialog::Login);
        let result = modals.lease().run(async { 7 }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn closing_the_dialog_cancels_pending_work() {
        let modals = ModalContext::new();
        modals.open(Dialog::Login);

        let mut request = Box::pin(modals.lease().run(pending::<()>()));
        assert!((&mut request).now_or_never().is_none());

        modals.close(Dialog::Login);
        assert_eq!(request.await, Err(Cancelled));
    }

    #[tokio::test]
    async fn reopening_the_same_dialog_keeps_pending_work() {
        let modals = ModalContext::new();
        modals.open(Dialog::Register);
        let lease = modals.lease();
        modals.open(Dialog::Register);
        assert_eq!(lease.run(async { "done" }).await, Ok("done"));
    }

    #[test]
    fn toggle_ignores_inactive_dialog() {
        let modals = ModalContext::new();
        modals.toggle(Dialog::Login);
        assert_eq!(modals.active(), None);

        modals.open(Dialog::Register);
        modals.toggle(Dialog::Login);
        assert_eq!(modals.active(), Some(Dialog::Register));
    }

    #[test]
    fn every_transition_bumps_the_generation() {
        let modals = ModalContext::new();
        let initial = modals.generation();

        modals.open(Dialog::Register);
        modals.open(Dialog::Register);
        assert_eq!(modals.generation(), initial + 1);

        modals.close(Dialog::Register);
        modals.open(Dialog::Register);
        assert_eq!(modals.generation(), initial + 3);
    }

    #[tokio::test]
    async fn finished_requests_release_their_handle() {
        let modals = ModalContext::new();
        modals.open(Dialog::Login);

        for attempt in 0..3 {
            assert_eq!(modals.lease().run(async { attempt }).await, Ok(attempt));
        }

        assert_eq!(modals.inflight.with_value(|inflight| inflight.handles.len()), 0);
    }
}
