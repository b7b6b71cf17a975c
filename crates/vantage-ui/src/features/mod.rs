//! Feature slices. Each slice owns its state, pure logic, API calls and views.
pub mod experiment;
pub mod settings;
