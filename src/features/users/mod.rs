//! User management: wire types, the API seam, client-side lookup by id and the
//! delete guard shared by the list and detail views.

pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod deletion;
pub(crate) mod directory;
pub(crate) mod types;

pub(crate) use api::UsersApi;
pub(crate) use directory::UserDirectory;
