//! Auth feature module: login/register requests, the tab-scoped session cache
//! and its Leptos context. It keeps authentication logic out of the UI. The
//! bearer token is a credential and must never be logged.
//!
//! Flow Overview: login or register returns a token plus the user's profile;
//! both go to `sessionStorage`. Logout removes both. There is no refresh or
//! expiry handling; a rejected token surfaces as a request error.

pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod password;
pub(crate) mod registration;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;
