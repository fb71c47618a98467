//! Shared UI components exported for routes and features.

pub(crate) mod confirm_delete;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use confirm_delete::ConfirmDelete;
pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, AlertKind, Button, ButtonKind, Spinner, TextField};
