//! Shared frontend utilities for API access, configuration, errors, and theming.
//!
//! ## Core flows
//!
//! ### Account lifecycle
//!
//! 1. **Sign up:** `POST auth/createAccount` creates an account that is pending
//!    email verification; the session cache is never populated at this stage.
//! 2. **Verify:** the user follows the emailed link to `/verify-account`, which
//!    consumes the `?token=` query parameter via `POST auth/verifyAccount`.
//! 3. **Sign in:** `POST auth/login` returns the access token that is cached in
//!    durable local storage together with a derived opaque user id.
//! 4. **Reset:** `/reset-pass` requests a reset email, or applies a new
//!    password when the emailed `?token=` is present.
//!
//! ### Checkout
//!
//! The subscription checkout runs in a provider-hosted popup window. The
//! orchestration (popup-blocker probe, closure polling, cross-window messages,
//! deadline) lives in `features::payment` and is independent of these helpers.
//!
//! Centralizing request helpers here keeps network behavior consistent and
//! avoids duplicated logic in routes and features. Callers must not log access
//! tokens or passwords.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

pub(crate) use errors::AppError;
