//! Profile editing: the form model with its client-side validation, and the
//! editor flow that loads, saves and deletes one user record.

pub(crate) mod editor;
pub(crate) mod form;

pub(crate) use editor::ProfileEditor;
pub(crate) use form::ProfileForm;
