mod alert;
mod modal;

pub(crate) use alert::Alert;
pub(crate) use modal::Modal;
