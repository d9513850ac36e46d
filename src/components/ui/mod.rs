mod alert;
mod button;
mod modal;
mod spinner;
mod text_input;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonKind};
pub(crate) use modal::ModalShell;
pub(crate) use spinner::Spinner;
pub(crate) use text_input::TextInput;
