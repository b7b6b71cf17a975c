mod button;
mod checkbox;
mod input;
mod loading;

pub(crate) use button::Button;
pub(crate) use checkbox::Checkbox;
pub(crate) use input::Input;
pub(crate) use loading::Loading;
