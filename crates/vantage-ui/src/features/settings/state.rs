//! Settings editor state.
//!
//! # Design
//! - The draft holds exactly one flag per known category; the fixed struct
//!   makes "never more, never fewer" hold by construction.
//! - `SettingsSession` owns the load/edit/save lifecycle. Network completions
//!   carry the epoch they were started in and are dropped when it moved on.
//! - A save is only handed out when the gate is open and nothing is in flight.

use crate::features::settings::actions::SettingsEdit;
use crate::features::settings::logic::{SettingsChanges, diff, to_draft};
use crate::models::{ImplementationType, OrganizationSettings, OrganizationView, SettingsPayload};

/// One boolean per known implementation category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryFlags {
    /// Visual editor variations.
    pub visual: bool,
    /// Code-based variations.
    pub code: bool,
    /// Configuration-driven variations.
    pub configuration: bool,
    /// Anything else.
    pub custom: bool,
}

impl CategoryFlags {
    /// Flag value for `kind`.
    #[must_use]
    pub const fn get(&self, kind: ImplementationType) -> bool {
        match kind {
            ImplementationType::Visual => self.visual,
            ImplementationType::Code => self.code,
            ImplementationType::Configuration => self.configuration,
            ImplementationType::Custom => self.custom,
        }
    }

    /// Set the flag for `kind`.
    pub const fn set(&mut self, kind: ImplementationType, enabled: bool) {
        match kind {
            ImplementationType::Visual => self.visual = enabled,
            ImplementationType::Code => self.code = enabled,
            ImplementationType::Configuration => self.configuration = enabled,
            ImplementationType::Custom => self.custom = enabled,
        }
    }

    /// Enabled categories in enumeration order.
    pub fn enabled(&self) -> impl Iterator<Item = ImplementationType> + '_ {
        ImplementationType::ALL
            .into_iter()
            .filter(|kind| self.get(*kind))
    }
}

/// Editable mirror of the organization settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    /// Category flags.
    pub types: CategoryFlags,
    /// Branding customization toggle.
    pub customized: bool,
    /// Logo path or URL.
    pub logo_path: String,
    /// Primary brand color.
    pub primary_color: String,
    /// Secondary brand color.
    pub secondary_color: String,
}

impl SettingsDraft {
    /// Full settings object for `PUT /organization`.
    #[must_use]
    pub fn to_payload(&self) -> SettingsPayload {
        SettingsPayload {
            implementation_types: self.types.enabled().collect(),
            customized: self.customized,
            logo_path: self.logo_path.clone(),
            primary_color: self.primary_color.clone(),
            secondary_color: self.secondary_color.clone(),
        }
    }

    fn apply(&mut self, edit: SettingsEdit, snapshot: &OrganizationSettings) {
        match edit {
            SettingsEdit::ToggleCategory(kind, enabled) => self.types.set(kind, enabled),
            SettingsEdit::SetCustomized(value) => self.customized = value,
            SettingsEdit::SetLogoPath(value) => self.logo_path = value,
            SettingsEdit::SetPrimaryColor(value) => self.primary_color = value,
            SettingsEdit::SetSecondaryColor(value) => self.secondary_color = value,
            SettingsEdit::Reset => *self = to_draft(snapshot),
        }
    }
}

/// Lifecycle phase of an editing session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initial fetch pending.
    Loading,
    /// Snapshot loaded; the draft is editable.
    Ready,
    /// A write is in flight.
    Saving,
    /// The initial fetch failed. Terminal for this session.
    Errored(String),
}

/// Handle for an in-flight load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

/// Handle for an in-flight save, carrying the exact payload to write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveTicket {
    epoch: u64,
    /// Settings object to send.
    pub payload: SettingsPayload,
}

/// Organization rename dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameForm {
    /// Name as typed.
    pub value: String,
    /// A rename request is in flight.
    pub pending: bool,
}

/// Handle for an in-flight rename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameTicket {
    epoch: u64,
    /// Trimmed name to send.
    pub name: String,
}

/// Editing session for the general settings page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsSession {
    phase: SessionPhase,
    epoch: u64,
    organization: Option<OrganizationView>,
    snapshot: OrganizationSettings,
    draft: SettingsDraft,
    rename: Option<RenameForm>,
}

impl Default for SettingsSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsSession {
    /// A session waiting for its first snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Loading,
            epoch: 0,
            organization: None,
            snapshot: OrganizationSettings::default(),
            draft: SettingsDraft::default(),
            rename: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Organization envelope from the last snapshot, for display.
    #[must_use]
    pub const fn organization(&self) -> Option<&OrganizationView> {
        self.organization.as_ref()
    }

    /// Last snapshot the draft was mirrored from.
    #[must_use]
    pub const fn snapshot(&self) -> &OrganizationSettings {
        &self.snapshot
    }

    /// Current draft.
    #[must_use]
    pub const fn draft(&self) -> &SettingsDraft {
        &self.draft
    }

    /// Open rename dialog, if any.
    #[must_use]
    pub const fn rename_form(&self) -> Option<&RenameForm> {
        self.rename.as_ref()
    }

    /// Differences between the draft and the snapshot.
    #[must_use]
    pub fn changes(&self) -> SettingsChanges {
        match self.phase {
            SessionPhase::Ready | SessionPhase::Saving => diff(&self.draft, &self.snapshot),
            SessionPhase::Loading | SessionPhase::Errored(_) => SettingsChanges::default(),
        }
    }

    /// Whether the save trigger should be enabled.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.phase == SessionPhase::Ready && self.changes().any()
    }

    /// Start a fresh load. Any completion from an earlier epoch is discarded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.epoch += 1;
        self.phase = SessionPhase::Loading;
        self.rename = None;
        LoadTicket { epoch: self.epoch }
    }

    /// Apply a fetched snapshot, replacing the draft wholesale.
    ///
    /// Returns `false` when the ticket is stale.
    pub fn load_succeeded(
        &mut self,
        ticket: LoadTicket,
        organization: Option<OrganizationView>,
    ) -> bool {
        if ticket.epoch != self.epoch || self.phase != SessionPhase::Loading {
            return false;
        }
        self.mirror(organization);
        self.phase = SessionPhase::Ready;
        true
    }

    /// Record a failed load. The session stays errored.
    ///
    /// Returns `false` when the ticket is stale.
    pub fn load_failed(&mut self, ticket: LoadTicket, message: impl Into<String>) -> bool {
        if ticket.epoch != self.epoch || self.phase != SessionPhase::Loading {
            return false;
        }
        self.phase = SessionPhase::Errored(message.into());
        true
    }

    /// Apply a user edit. Ignored unless the session is ready.
    pub fn apply(&mut self, edit: SettingsEdit) -> bool {
        if self.phase != SessionPhase::Ready {
            return false;
        }
        self.draft.apply(edit, &self.snapshot);
        true
    }

    /// Hand out a save when the gate is open and no save is in flight.
    ///
    /// Returns `None` without touching any state otherwise.
    pub fn begin_save(&mut self) -> Option<SaveTicket> {
        if !self.can_save() {
            return None;
        }
        self.phase = SessionPhase::Saving;
        Some(SaveTicket {
            epoch: self.epoch,
            payload: self.draft.to_payload(),
        })
    }

    /// Complete a confirmed write.
    ///
    /// With a re-fetched envelope the draft is re-mirrored from it; without
    /// one the written payload becomes the snapshot. Returns `false` when the
    /// ticket is stale.
    pub fn save_succeeded(
        &mut self,
        ticket: &SaveTicket,
        refreshed: Option<OrganizationView>,
    ) -> bool {
        if ticket.epoch != self.epoch || self.phase != SessionPhase::Saving {
            return false;
        }
        if refreshed.is_some() {
            self.mirror(refreshed);
        } else {
            self.snapshot = OrganizationSettings::from(&ticket.payload);
            if let Some(organization) = self.organization.as_mut() {
                organization.settings = Some(self.snapshot.clone());
            }
            self.draft = to_draft(&self.snapshot);
        }
        self.phase = SessionPhase::Ready;
        true
    }

    /// Complete a failed write. Draft and snapshot are left untouched.
    pub fn save_failed(&mut self, ticket: &SaveTicket) -> bool {
        if ticket.epoch != self.epoch || self.phase != SessionPhase::Saving {
            return false;
        }
        self.phase = SessionPhase::Ready;
        true
    }

    /// Open the rename dialog pre-filled with the current name.
    pub fn open_rename(&mut self) -> bool {
        if !matches!(self.phase, SessionPhase::Ready | SessionPhase::Saving) || self.rename.is_some()
        {
            return false;
        }
        let Some(organization) = self.organization.as_ref() else {
            return false;
        };
        self.rename = Some(RenameForm {
            value: organization.name.clone(),
            pending: false,
        });
        true
    }

    /// Update the typed name. Ignored while a rename is in flight.
    pub fn set_rename_value(&mut self, value: String) -> bool {
        match self.rename.as_mut() {
            Some(form) if !form.pending => {
                form.value = value;
                true
            }
            _ => false,
        }
    }

    /// Close the rename dialog unless a rename is in flight.
    pub fn close_rename(&mut self) -> bool {
        if self.rename.as_ref().is_some_and(|form| !form.pending) {
            self.rename = None;
            return true;
        }
        false
    }

    /// Hand out a rename when the typed name is non-blank and differs from
    /// the current one.
    pub fn begin_rename(&mut self) -> Option<RenameTicket> {
        let current = self.organization.as_ref()?.name.as_str();
        let form = self.rename.as_mut()?;
        let name = form.value.trim().to_string();
        if form.pending || name.is_empty() || name == current {
            return None;
        }
        form.pending = true;
        Some(RenameTicket {
            epoch: self.epoch,
            name,
        })
    }

    /// Complete a confirmed rename and close the dialog.
    ///
    /// A re-fetched envelope replaces the displayed organization; the draft
    /// is re-mirrored only when it holds no unsaved edits. Returns `false`
    /// when the ticket is stale.
    pub fn rename_succeeded(
        &mut self,
        ticket: &RenameTicket,
        refreshed: Option<OrganizationView>,
    ) -> bool {
        if ticket.epoch != self.epoch || !self.rename.as_ref().is_some_and(|form| form.pending) {
            return false;
        }
        self.rename = None;
        match refreshed {
            Some(view) if self.phase == SessionPhase::Ready && !self.changes().any() => {
                self.mirror(Some(view));
            }
            Some(mut view) => {
                view.settings = self
                    .organization
                    .as_ref()
                    .and_then(|org| org.settings.clone());
                self.organization = Some(view);
            }
            None => {
                if let Some(organization) = self.organization.as_mut() {
                    organization.name.clone_from(&ticket.name);
                }
            }
        }
        true
    }

    /// Complete a failed rename; the dialog stays open with the typed name.
    pub fn rename_failed(&mut self, ticket: &RenameTicket) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        match self.rename.as_mut() {
            Some(form) if form.pending => {
                form.pending = false;
                true
            }
            _ => false,
        }
    }

    /// Drop every pending completion, e.g. when the view unmounts.
    pub const fn invalidate(&mut self) {
        self.epoch += 1;
    }

    fn mirror(&mut self, organization: Option<OrganizationView>) {
        self.snapshot = organization
            .as_ref()
            .and_then(|org| org.settings.clone())
            .unwrap_or_default();
        self.draft = to_draft(&self.snapshot);
        self.organization = organization;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organization(types: &[&str]) -> OrganizationView {
        OrganizationView {
            id: "org_a".to_string(),
            name: "Acme".to_string(),
            url: "acme".to_string(),
            owner_email: "owner@acme.test".to_string(),
            members: Vec::new(),
            invites: Vec::new(),
            subscription: None,
            slack_team: None,
            settings: Some(OrganizationSettings {
                implementation_types: types.iter().map(|name| (*name).to_string()).collect(),
                customized: Some(false),
                logo_path: Some(String::new()),
                primary_color: Some("#391c6d".to_string()),
                secondary_color: Some("#50279a".to_string()),
            }),
        }
    }

    fn ready(types: &[&str]) -> SettingsSession {
        let mut session = SettingsSession::new();
        let ticket = session.begin_load();
        assert!(session.load_succeeded(ticket, Some(organization(types))));
        session
    }

    #[test]
    fn flags_cover_every_category_in_order() {
        let mut flags = CategoryFlags::default();
        for kind in ImplementationType::ALL {
            assert!(!flags.get(kind));
        }
        flags.set(ImplementationType::Custom, true);
        flags.set(ImplementationType::Visual, true);
        let enabled: Vec<_> = flags.enabled().collect();
        assert_eq!(
            enabled,
            vec![ImplementationType::Visual, ImplementationType::Custom]
        );
    }

    #[test]
    fn load_then_edit_then_save_round_trip() {
        let mut session = ready(&["code"]);
        assert_eq!(session.phase(), &SessionPhase::Ready);
        assert!(!session.can_save());

        assert!(session.apply(SettingsEdit::ToggleCategory(
            ImplementationType::Visual,
            true
        )));
        assert!(session.can_save());

        let ticket = session.begin_save().expect("gate open");
        assert_eq!(session.phase(), &SessionPhase::Saving);
        assert_eq!(
            ticket.payload.implementation_types,
            vec![ImplementationType::Visual, ImplementationType::Code]
        );
        assert_eq!(ticket.payload.primary_color, "#391c6d");

        assert!(session.save_succeeded(&ticket, Some(organization(&["visual", "code"]))));
        assert_eq!(session.phase(), &SessionPhase::Ready);
        assert!(!session.can_save());
        assert!(session.draft().types.visual);
    }

    #[test]
    fn begin_save_is_inert_when_nothing_changed() {
        let mut session = ready(&["code"]);
        let before = session.clone();
        assert!(session.begin_save().is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn begin_save_refuses_while_in_flight() {
        let mut session = ready(&[]);
        session.apply(SettingsEdit::SetCustomized(true));
        let ticket = session.begin_save().expect("first save");
        assert!(session.begin_save().is_none());
        assert!(!session.apply(SettingsEdit::SetLogoPath("/x.png".to_string())));
        assert!(session.save_failed(&ticket));
    }

    #[test]
    fn failed_save_keeps_draft_and_snapshot() {
        let mut session = ready(&["code"]);
        session.apply(SettingsEdit::SetPrimaryColor("#000000".to_string()));
        let snapshot = session.snapshot().clone();
        let draft = session.draft().clone();

        let ticket = session.begin_save().expect("gate open");
        assert!(session.save_failed(&ticket));
        assert_eq!(session.phase(), &SessionPhase::Ready);
        assert_eq!(session.snapshot(), &snapshot);
        assert_eq!(session.draft(), &draft);
        assert!(session.can_save());
    }

    #[test]
    fn save_without_refresh_adopts_written_payload() {
        let mut session = ready(&["code"]);
        session.apply(SettingsEdit::ToggleCategory(ImplementationType::Code, false));
        let ticket = session.begin_save().expect("gate open");
        assert!(session.save_succeeded(&ticket, None));
        assert!(session.snapshot().implementation_types.is_empty());
        assert!(!session.can_save());
        let settings = session
            .organization()
            .and_then(|org| org.settings.clone())
            .expect("settings");
        assert!(settings.implementation_types.is_empty());
    }

    #[test]
    fn load_failure_is_terminal() {
        let mut session = SettingsSession::new();
        let ticket = session.begin_load();
        assert!(session.load_failed(ticket, "network down"));
        assert_eq!(
            session.phase(),
            &SessionPhase::Errored("network down".to_string())
        );
        assert!(!session.load_succeeded(ticket, Some(organization(&[]))));
        assert!(!session.apply(SettingsEdit::SetCustomized(true)));
        assert!(session.begin_save().is_none());
    }

    #[test]
    fn stale_completions_are_discarded() {
        let mut session = SettingsSession::new();
        let stale = session.begin_load();
        let fresh = session.begin_load();
        assert!(!session.load_succeeded(stale, Some(organization(&["custom"]))));
        assert!(session.load_succeeded(fresh, Some(organization(&["code"]))));

        session.apply(SettingsEdit::SetCustomized(true));
        let ticket = session.begin_save().expect("gate open");
        session.invalidate();
        assert!(!session.save_succeeded(&ticket, None));
        assert_eq!(session.phase(), &SessionPhase::Saving);
    }

    #[test]
    fn reset_restores_snapshot_values() {
        let mut session = ready(&["code"]);
        session.apply(SettingsEdit::SetSecondaryColor("#ffffff".to_string()));
        session.apply(SettingsEdit::ToggleCategory(ImplementationType::Custom, true));
        assert!(session.can_save());
        session.apply(SettingsEdit::Reset);
        assert!(!session.can_save());
        assert_eq!(session.draft().secondary_color, "#50279a");
    }

    #[test]
    fn missing_settings_block_loads_as_defaults() {
        let mut session = SettingsSession::new();
        let ticket = session.begin_load();
        let mut org = organization(&[]);
        org.settings = None;
        assert!(session.load_succeeded(ticket, Some(org)));
        assert_eq!(session.draft(), &SettingsDraft::default());
        assert!(!session.can_save());
    }

    #[test]
    fn rename_flow_updates_name_and_keeps_unsaved_edits() {
        let mut session = ready(&["code"]);
        session.apply(SettingsEdit::SetLogoPath("/brand.png".to_string()));

        assert!(session.open_rename());
        assert_eq!(
            session.rename_form().map(|form| form.value.as_str()),
            Some("Acme")
        );
        assert!(session.set_rename_value("  Acme Labs  ".to_string()));
        let ticket = session.begin_rename().expect("name changed");
        assert_eq!(ticket.name, "Acme Labs");
        assert!(!session.set_rename_value("other".to_string()));
        assert!(!session.close_rename());

        let mut refreshed = organization(&["code"]);
        refreshed.name = "Acme Labs".to_string();
        assert!(session.rename_succeeded(&ticket, Some(refreshed)));
        assert!(session.rename_form().is_none());
        assert_eq!(
            session.organization().map(|org| org.name.as_str()),
            Some("Acme Labs")
        );
        assert_eq!(session.draft().logo_path, "/brand.png");
        assert!(session.can_save());
    }

    #[test]
    fn rename_without_refresh_adopts_sent_name() {
        let mut session = ready(&["code"]);
        session.open_rename();
        session.set_rename_value("Renamed".to_string());
        let ticket = session.begin_rename().expect("name changed");
        assert!(session.rename_succeeded(&ticket, None));
        assert_eq!(
            session.organization().map(|org| org.name.as_str()),
            Some("Renamed")
        );
    }

    #[test]
    fn rename_refuses_blank_or_unchanged_names() {
        let mut session = ready(&[]);
        assert!(session.begin_rename().is_none());
        session.open_rename();
        assert!(session.begin_rename().is_none());
        session.set_rename_value("   ".to_string());
        assert!(session.begin_rename().is_none());
        assert!(session.close_rename());
        assert!(session.rename_form().is_none());
    }

    #[test]
    fn failed_rename_keeps_dialog_open() {
        let mut session = ready(&[]);
        session.open_rename();
        session.set_rename_value("New name".to_string());
        let ticket = session.begin_rename().expect("name changed");
        assert!(session.rename_failed(&ticket));
        let form = session.rename_form().expect("dialog open");
        assert!(!form.pending);
        assert_eq!(form.value, "New name");
        assert_eq!(
            session.organization().map(|org| org.name.as_str()),
            Some("Acme")
        );
    }

    #[test]
    fn reload_discards_pending_rename() {
        let mut session = ready(&[]);
        session.open_rename();
        session.set_rename_value("New name".to_string());
        let ticket = session.begin_rename().expect("name changed");
        let reload = session.begin_load();
        assert!(session.rename_form().is_none());
        assert!(!session.rename_succeeded(&ticket, None));
        assert!(session.load_succeeded(reload, Some(organization(&[]))));
        assert_eq!(
            session.organization().map(|org| org.name.as_str()),
            Some("Acme")
        );
    }
}
