//! Post-write reconciliation for the settings editor.
//!
//! # Design
//! - Network calls stay in `api`; everything after the response lands here so
//!   it runs against plain values.
//! - The organizations cache is patched only for a confirmed write, and always
//!   with the values that were sent, never with the re-fetched ones.

use crate::core::store::AppStore;
use crate::features::settings::state::{RenameTicket, SaveTicket, SettingsSession};
use crate::models::{OrganizationView, ToastKind};
use crate::services::error::ApiError;

/// Outcome of a write followed by a re-fetch: `Ok(None)` means the write
/// succeeded but the re-fetch did not.
pub type WriteOutcome = Result<Option<OrganizationView>, ApiError>;

/// Apply the result of `PUT /organization` to the store and the session.
///
/// Returns whether the session changed and needs a re-render.
pub fn complete_save(
    store: &mut AppStore,
    session: &mut SettingsSession,
    org_id: Option<&str>,
    ticket: &SaveTicket,
    outcome: WriteOutcome,
) -> bool {
    match outcome {
        Ok(refreshed) => {
            if let Some(target) = write_target(org_id, refreshed.as_ref(), session) {
                store.organizations.apply_settings(&target, &ticket.payload);
            }
            store.toasts.push(ToastKind::Success, "Settings saved");
            session.save_succeeded(ticket, refreshed)
        }
        Err(err) => {
            store
                .toasts
                .push(ToastKind::Error, format!("Saving settings failed: {err}"));
            session.save_failed(ticket)
        }
    }
}

/// Apply the result of `PUT /organization/name` to the store and the session.
///
/// Returns whether the session changed and needs a re-render.
pub fn complete_rename(
    store: &mut AppStore,
    session: &mut SettingsSession,
    org_id: Option<&str>,
    ticket: &RenameTicket,
    outcome: WriteOutcome,
) -> bool {
    match outcome {
        Ok(refreshed) => {
            if let Some(target) = write_target(org_id, refreshed.as_ref(), session) {
                store.organizations.apply_name(&target, &ticket.name);
            }
            store.toasts.push(ToastKind::Success, "Organization renamed");
            session.rename_succeeded(ticket, refreshed)
        }
        Err(err) => {
            store.toasts.push(
                ToastKind::Error,
                format!("Renaming organization failed: {err}"),
            );
            session.rename_failed(ticket)
        }
    }
}

/// Organization the write went to: the scoped id, else whatever the server
/// reported, else the organization on screen.
fn write_target(
    org_id: Option<&str>,
    refreshed: Option<&OrganizationView>,
    session: &SettingsSession,
) -> Option<String> {
    org_id
        .or_else(|| refreshed.map(|org| org.id.as_str()))
        .or_else(|| session.organization().map(|org| org.id.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::settings::actions::SettingsEdit;
    use crate::features::settings::state::SessionPhase;
    use crate::models::{
        ImplementationType, MemberRole, OrganizationSettings, OrganizationSummary,
    };

    fn settings(types: &[&str]) -> OrganizationSettings {
        OrganizationSettings {
            implementation_types: types.iter().map(|name| (*name).to_string()).collect(),
            customized: Some(false),
            logo_path: Some(String::new()),
            primary_color: Some("#391c6d".to_string()),
            secondary_color: Some("#50279a".to_string()),
        }
    }

    fn organization(id: &str, types: &[&str]) -> OrganizationView {
        OrganizationView {
            id: id.to_string(),
            name: "Acme".to_string(),
            url: "acme".to_string(),
            owner_email: "owner@acme.test".to_string(),
            members: Vec::new(),
            invites: Vec::new(),
            subscription: None,
            slack_team: None,
            settings: Some(settings(types)),
        }
    }

    fn store() -> AppStore {
        let mut store = AppStore::default();
        store.organizations.replace(
            ["org_a", "org_b"]
                .into_iter()
                .map(|id| OrganizationSummary {
                    id: id.to_string(),
                    name: "Acme".to_string(),
                    role: MemberRole::Admin,
                    settings: Some(settings(&["code"])),
                })
                .collect(),
        );
        store
    }

    fn session_with_visual_enabled() -> (SettingsSession, SaveTicket) {
        let mut session = SettingsSession::new();
        let load = session.begin_load();
        assert!(session.load_succeeded(load, Some(organization("org_a", &["code"]))));
        session.apply(SettingsEdit::ToggleCategory(ImplementationType::Visual, true));
        let ticket = session.begin_save().expect("gate open");
        (session, ticket)
    }

    fn cached_types(store: &AppStore, org_id: &str) -> Vec<String> {
        store
            .organizations
            .get(org_id)
            .and_then(|org| org.settings.clone())
            .map(|settings| settings.implementation_types)
            .unwrap_or_default()
    }

    #[test]
    fn failed_write_leaves_cache_and_snapshot_alone() {
        let mut store = store();
        let cache_before = store.organizations.clone();
        let (mut session, ticket) = session_with_visual_enabled();
        let snapshot = session.snapshot().clone();
        let draft = session.draft().clone();

        let outcome = Err(ApiError::Transport {
            message: "offline".to_string(),
        });
        assert!(complete_save(
            &mut store,
            &mut session,
            Some("org_a"),
            &ticket,
            outcome
        ));

        assert_eq!(store.organizations, cache_before);
        assert_eq!(session.phase(), &SessionPhase::Ready);
        assert_eq!(session.snapshot(), &snapshot);
        assert_eq!(session.draft(), &draft);
        let toast = store.toasts.items().last().expect("toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.contains("offline"));
    }

    #[test]
    fn confirmed_write_patches_active_entry_with_sent_values() {
        let mut store = store();
        let (mut session, ticket) = session_with_visual_enabled();

        let outcome = Ok(Some(organization("org_a", &["visual", "code"])));
        assert!(complete_save(
            &mut store,
            &mut session,
            Some("org_a"),
            &ticket,
            outcome
        ));

        assert_eq!(cached_types(&store, "org_a"), vec!["visual", "code"]);
        assert_eq!(cached_types(&store, "org_b"), vec!["code"]);
        assert_eq!(
            store
                .organizations
                .get("org_a")
                .and_then(|org| org.settings.clone()),
            Some(OrganizationSettings::from(&ticket.payload))
        );
        assert!(!session.can_save());
        assert_eq!(
            store.toasts.items().last().map(|toast| toast.kind),
            Some(ToastKind::Success)
        );
    }

    #[test]
    fn confirmed_write_without_refetch_still_patches_cache() {
        let mut store = store();
        let (mut session, ticket) = session_with_visual_enabled();

        assert!(complete_save(&mut store, &mut session, None, &ticket, Ok(None)));

        assert_eq!(cached_types(&store, "org_a"), vec!["visual", "code"]);
        assert_eq!(session.phase(), &SessionPhase::Ready);
        assert!(session.draft().types.visual);
        assert!(!session.can_save());
    }

    #[test]
    fn stale_save_still_patches_cache_but_not_session() {
        let mut store = store();
        let (mut session, ticket) = session_with_visual_enabled();
        session.invalidate();

        assert!(!complete_save(
            &mut store,
            &mut session,
            Some("org_a"),
            &ticket,
            Ok(None)
        ));
        assert_eq!(cached_types(&store, "org_a"), vec!["visual", "code"]);
    }

    #[test]
    fn rename_updates_cached_name_only_on_success() {
        let mut store = store();
        let mut session = SettingsSession::new();
        let load = session.begin_load();
        session.load_succeeded(load, Some(organization("org_b", &[])));
        session.open_rename();
        session.set_rename_value("Beta".to_string());

        let ticket = session.begin_rename().expect("name changed");
        let outcome = Err(ApiError::from_status(422, "Unprocessable Entity", None));
        assert!(complete_rename(
            &mut store,
            &mut session,
            Some("org_b"),
            &ticket,
            outcome
        ));
        assert_eq!(
            store.organizations.get("org_b").map(|org| org.name.as_str()),
            Some("Acme")
        );

        let ticket = session.begin_rename().expect("retry");
        assert!(complete_rename(&mut store, &mut session, None, &ticket, Ok(None)));
        assert_eq!(
            store.organizations.get("org_b").map(|org| org.name.as_str()),
            Some("Beta")
        );
        assert_eq!(
            store.organizations.get("org_a").map(|org| org.name.as_str()),
            Some("Acme")
        );
        assert!(session.rename_form().is_none());
    }
}
