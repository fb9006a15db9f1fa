mod alert;
mod button;
mod confirm_dialog;
mod spinner;
mod text_field;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonStyle};
pub(crate) use confirm_dialog::ConfirmDialog;
pub(crate) use spinner::Spinner;
pub(crate) use text_field::TextField;
