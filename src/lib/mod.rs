//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! ## Session model
//!
//! 1. **Sign in:** `POST /auth/login` (or `/auth/register`) returns a bearer
//!    token and the user's profile.
//! 2. **Persist:** both are written to `sessionStorage`, so the session lives as
//!    long as the browser tab.
//! 3. **Use:** every `/users` call sends `Authorization: Bearer <token>`.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must never log the token.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod http;
pub(crate) mod logging;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    delete_with_headers, get_json_with_headers, patch_json_with_headers,
    patch_json_with_headers_response, post_json_response,
};
pub(crate) use errors::AppError;
