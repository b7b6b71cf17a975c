//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep session-scoped data in one store instead of ad-hoc contexts.
//! - Mutate the organizations cache only through named operations so
//!   reconciliation after a save stays auditable.
//! - Keep every slice DOM-free so reducers are tested natively.

use crate::models::{
    OrganizationSettings, OrganizationSummary, SettingsPayload, Toast, ToastKind, UserResponse,
};
use yewdux::store::Store;

/// Maximum number of toasts kept on screen at once.
pub const MAX_TOASTS: usize = 4;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Current session identity and active organization.
    pub session: SessionSlice,
    /// Organizations known to the current session.
    pub organizations: OrganizationsCache,
    /// Transient notifications.
    pub toasts: ToastQueue,
}

/// Identity of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// User id reported by `GET /user`.
    pub user_id: Option<String>,
    /// Email reported by `GET /user`.
    pub email: Option<String>,
    /// Organization targeted by API calls (`x-organization`).
    pub active_org_id: Option<String>,
}

/// Session-wide list of organization summaries.
///
/// Other views read settings from here, so a successful save patches the
/// matching entry rather than waiting for the next `GET /user`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrganizationsCache {
    entries: Vec<OrganizationSummary>,
}

impl OrganizationsCache {
    /// Organizations belonging to the current session.
    #[must_use]
    pub fn organizations(&self) -> &[OrganizationSummary] {
        &self.entries
    }

    /// Replace the whole collection.
    pub fn replace(&mut self, organizations: Vec<OrganizationSummary>) {
        self.entries = organizations;
    }

    /// Look up an organization by id.
    #[must_use]
    pub fn get(&self, org_id: &str) -> Option<&OrganizationSummary> {
        self.entries.iter().find(|entry| entry.id == org_id)
    }

    /// Overwrite the settings of `org_id` with the values that were written.
    ///
    /// Returns `false` when the organization is not cached; nothing changes in
    /// that case.
    pub fn apply_settings(&mut self, org_id: &str, payload: &SettingsPayload) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == org_id) else {
            return false;
        };
        entry.settings = Some(OrganizationSettings::from(payload));
        true
    }

    /// Overwrite the display name of `org_id` after a confirmed rename.
    ///
    /// Returns `false` when the organization is not cached.
    pub fn apply_name(&mut self, org_id: &str, name: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == org_id) else {
            return false;
        };
        entry.name = name.to_string();
        true
    }
}

/// Bounded toast list with monotonic ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    last_id: u64,
}

impl ToastQueue {
    /// Visible toasts, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Append a toast, dropping the oldest beyond [`MAX_TOASTS`].
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.last_id += 1;
        self.items.push(Toast {
            id: self.last_id,
            message: message.into(),
            kind,
        });
        if self.items.len() > MAX_TOASTS {
            let drain = self.items.len() - MAX_TOASTS;
            self.items.drain(0..drain);
        }
        self.last_id
    }

    /// Remove a toast by id.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Seed the session and organizations cache from `GET /user`.
///
/// The stored active organization survives when it still belongs to the
/// session; otherwise the first organization becomes active.
pub fn seed_session(store: &mut AppStore, user: UserResponse, preferred_org: Option<String>) {
    let active = preferred_org
        .filter(|id| user.organizations.iter().any(|org| &org.id == id))
        .or_else(|| user.organizations.first().map(|org| org.id.clone()));
    store.session = SessionSlice {
        user_id: Some(user.user_id),
        email: Some(user.email),
        active_org_id: active,
    };
    store.organizations.replace(user.organizations);
}
