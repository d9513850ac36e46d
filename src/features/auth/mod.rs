//! Auth feature module covering the session gate, the login and register
//! dialogs, and federated sign-in. It keeps authentication logic out of the UI
//! and compiles on every target so the flows are tested natively against
//! in-memory doubles. This module touches security boundaries and must avoid
//! logging passwords or activation codes.
//!
//! Flow Overview: The gated layout resolves the session once per mount and
//! shows either the protected app or the landing. Login authenticates against
//! the auth API, then establishes the session with the same credentials.
//! Register submits the details, then activates the account with the emailed
//! code and goes home. Closing a dialog cancels whatever it still has in flight.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod form;
pub(crate) mod landing;
pub(crate) mod login;
pub(crate) mod modal;
pub(crate) mod ports;
pub(crate) mod register;
pub(crate) mod state;
#[cfg(test)]
mod test_support;
pub(crate) mod types;
pub(crate) mod validation;
