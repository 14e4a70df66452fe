mod alert;
mod button;
mod field;
mod spinner;

pub(crate) use alert::{Alert, AlertKind, MessageAlert};
pub(crate) use button::SubmitButton;
pub(crate) use field::TextField;
pub(crate) use spinner::Spinner;
