//! Shared UI components exported for routes and features.

mod auth_landing;
pub(crate) mod layout;
pub(crate) mod modals;
pub(crate) mod ui;

pub(crate) use auth_landing::AuthLanding;
pub(crate) use ui::{Alert, AlertKind, Button, ButtonKind, ModalShell, Spinner, TextInput};
