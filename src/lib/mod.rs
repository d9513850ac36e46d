//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! ## Auth API surface
//!
//! All auth calls go to `api_base_url` (default `http://localhost:8090/api/v1/auth`):
//! 1. **Authenticate:** `POST /authenticate` with `{email, password}`; only a 200 counts.
//! 2. **Register:** `POST /register` with the full registration draft.
//! 3. **Activate:** `GET /activate-account?token=<code>` with the emailed code.
//!
//! Session lookups and sign-in go to `session_base_url` and rely on `HttpOnly`
//! cookies set by the session provider. These helpers never log request
//! payloads; callers must do the same.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod logging;

pub(crate) use errors::AppError;
