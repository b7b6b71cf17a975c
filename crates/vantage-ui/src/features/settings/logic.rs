//! Draft mirroring and change detection.
//!
//! # Design
//! - `to_draft` and `diff` are pure so they are tested without a renderer.
//! - Category comparison is set equality: order never matters, cardinality does.
//! - Missing snapshot fields compare as their defaults (`false`, empty string).

use crate::features::settings::state::{CategoryFlags, SettingsDraft};
use crate::models::{ImplementationType, OrganizationSettings};

/// Which parts of the draft differ from the snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsChanges {
    /// The enabled category set differs.
    pub types: bool,
    /// At least one customization field differs.
    pub customization: bool,
}

impl SettingsChanges {
    /// Save gate: true when anything changed.
    #[must_use]
    pub const fn any(self) -> bool {
        self.types || self.customization
    }
}

/// Checkbox label for a category.
#[must_use]
pub const fn category_label(kind: ImplementationType) -> &'static str {
    match kind {
        ImplementationType::Visual => "Visual editor",
        ImplementationType::Code => "Code",
        ImplementationType::Configuration => "Configuration / feature flags",
        ImplementationType::Custom => "Custom",
    }
}

/// Mirror a snapshot into a fresh editable draft.
///
/// Unknown categories are dropped; absent customization fields become
/// `false` or the empty string.
#[must_use]
pub fn to_draft(snapshot: &OrganizationSettings) -> SettingsDraft {
    let mut types = CategoryFlags::default();
    for kind in snapshot
        .implementation_types
        .iter()
        .filter_map(|name| ImplementationType::parse(name))
    {
        types.set(kind, true);
    }
    SettingsDraft {
        types,
        customized: snapshot.customized.unwrap_or(false),
        logo_path: snapshot.logo_path.clone().unwrap_or_default(),
        primary_color: snapshot.primary_color.clone().unwrap_or_default(),
        secondary_color: snapshot.secondary_color.clone().unwrap_or_default(),
    }
}

/// Whether the enabled flags differ, as a set, from the snapshot categories.
#[must_use]
pub fn has_type_changes(flags: &CategoryFlags, types: &[String]) -> bool {
    let mut current: Vec<&str> = flags.enabled().map(ImplementationType::as_str).collect();
    if current.len() != types.len() {
        return true;
    }
    let mut existing: Vec<&str> = types.iter().map(String::as_str).collect();
    current.sort_unstable();
    existing.sort_unstable();
    current != existing
}

/// Whether any of the four customization fields differ from the snapshot.
#[must_use]
pub fn has_customization_changes(draft: &SettingsDraft, snapshot: &OrganizationSettings) -> bool {
    draft.customized != snapshot.customized.unwrap_or(false)
        || draft.logo_path != snapshot.logo_path.as_deref().unwrap_or_default()
        || draft.primary_color != snapshot.primary_color.as_deref().unwrap_or_default()
        || draft.secondary_color != snapshot.secondary_color.as_deref().unwrap_or_default()
}

/// Compare a draft with the snapshot it was edited from.
#[must_use]
pub fn diff(draft: &SettingsDraft, snapshot: &OrganizationSettings) -> SettingsChanges {
    SettingsChanges {
        types: has_type_changes(&draft.types, &snapshot.implementation_types),
        customization: has_customization_changes(draft, snapshot),
    }
}
