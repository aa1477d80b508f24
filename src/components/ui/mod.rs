mod alert;
mod button;
mod fields;
mod modal;
mod spinner;
mod toast;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use fields::{SelectField, TextArea, TextField};
pub(crate) use modal::Modal;
pub(crate) use spinner::Spinner;
pub(crate) use toast::{use_toasts, ToastKind, ToastProvider};
