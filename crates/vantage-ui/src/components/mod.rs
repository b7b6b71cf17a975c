//! Shared presentational components.
pub(crate) mod daisy;
pub(crate) mod toast;
