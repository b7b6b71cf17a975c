//! Organization store facade used by the HTTP layer.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{MemberRole, OrganizationSettings, OrganizationSummary, OrganizationView};

/// Identity of the session the API answers for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// User identifier.
    pub user_id: String,
    /// User email.
    pub email: String,
}

/// Backend that owns organization records.
#[async_trait]
pub trait OrganizationStore: Send + Sync {
    /// Load an organization by id, returning `None` when it does not exist.
    async fn organization(&self, org_id: &str) -> Result<Option<OrganizationView>>;

    /// Replace the full settings object of an organization.
    ///
    /// Returns the updated record, or `None` when the organization does not
    /// exist. Writes are last-writer-wins.
    async fn replace_settings(
        &self,
        org_id: &str,
        settings: OrganizationSettings,
    ) -> Result<Option<OrganizationView>>;

    /// Change the display name of an organization.
    ///
    /// Returns the updated record, or `None` when the organization does not
    /// exist.
    async fn rename(&self, org_id: &str, name: String) -> Result<Option<OrganizationView>>;

    /// Identity of the current session.
    async fn session_user(&self) -> Result<SessionUser>;

    /// Organizations the current session belongs to, with its role in each.
    async fn session_organizations(&self) -> Result<Vec<(OrganizationView, MemberRole)>>;
}

/// Shared reference to the organization backend.
pub type SharedStore = Arc<dyn OrganizationStore>;

/// Project an organization record into the session summary shape.
#[must_use]
pub fn summarize(view: &OrganizationView, role: MemberRole) -> OrganizationSummary {
    OrganizationSummary {
        id: view.id.clone(),
        name: view.name.clone(),
        role,
        settings: view.settings.clone(),
    }
}
