//! DaisyUI-flavoured wrappers, split into atoms and molecules.

pub(crate) mod atoms;
pub(crate) mod foundations;
pub(crate) mod molecules;

pub(crate) use atoms::{Button, Checkbox, Input, Loading};
pub(crate) use foundations::{DaisyColor, DaisySize, DaisyVariant};
pub(crate) use molecules::{Alert, Modal};
