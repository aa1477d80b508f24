//! Shared UI components exported for routes and features.

pub(crate) mod layout;
pub(crate) mod products;
pub(crate) mod ui;

pub(crate) use layout::{DashboardShell, Navbar};
pub(crate) use ui::{
    Alert, AlertKind, Button, ButtonVariant, Modal, SelectField, Spinner, TextArea, TextField,
    ToastKind, ToastProvider,
};
