mod alert;
mod button;
mod field;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonKind};
pub(crate) use field::TextField;
pub(crate) use spinner::Spinner;
