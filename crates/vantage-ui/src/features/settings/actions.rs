//! Settings editor actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use crate::models::ImplementationType;

/// Field-level edits applied to the settings draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsEdit {
    /// Enable or disable one implementation category.
    ToggleCategory(ImplementationType, bool),
    /// Enable or disable branding customization.
    SetCustomized(bool),
    /// Replace the logo path.
    SetLogoPath(String),
    /// Replace the primary color.
    SetPrimaryColor(String),
    /// Replace the secondary color.
    SetSecondaryColor(String),
    /// Discard unsaved edits and re-mirror the last snapshot.
    Reset,
}
