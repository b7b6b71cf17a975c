//! In-memory organization backend.
//!
//! # Design
//! - Single-process store guarded by an async `RwLock`.
//! - Settings writes replace the whole settings object (no merge).
//! - Concurrent writers race; the last write wins.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::{OrganizationStore, SessionUser};
use crate::models::{MemberRole, OrganizationSettings, OrganizationView};

#[derive(Debug, Clone)]
struct Membership {
    organization: OrganizationView,
    role: MemberRole,
}

/// Organization store backed by process memory.
#[derive(Debug)]
pub struct InMemoryOrganizationStore {
    user: SessionUser,
    memberships: RwLock<Vec<Membership>>,
}

impl InMemoryOrganizationStore {
    /// Create a store for `user` holding the supplied organizations.
    #[must_use]
    pub fn new(user: SessionUser, organizations: Vec<(OrganizationView, MemberRole)>) -> Self {
        let memberships = organizations
            .into_iter()
            .map(|(organization, role)| Membership { organization, role })
            .collect();
        Self {
            user,
            memberships: RwLock::new(memberships),
        }
    }
}

#[async_trait]
impl OrganizationStore for InMemoryOrganizationStore {
    async fn organization(&self, org_id: &str) -> Result<Option<OrganizationView>> {
        let guard = self.memberships.read().await;
        Ok(guard
            .iter()
            .find(|entry| entry.organization.id == org_id)
            .map(|entry| entry.organization.clone()))
    }

    async fn replace_settings(
        &self,
        org_id: &str,
        settings: OrganizationSettings,
    ) -> Result<Option<OrganizationView>> {
        let mut guard = self.memberships.write().await;
        let Some(entry) = guard
            .iter_mut()
            .find(|entry| entry.organization.id == org_id)
        else {
            return Ok(None);
        };
        entry.organization.settings = Some(settings);
        Ok(Some(entry.organization.clone()))
    }

    async fn rename(&self, org_id: &str, name: String) -> Result<Option<OrganizationView>> {
        let mut guard = self.memberships.write().await;
        let Some(entry) = guard
            .iter_mut()
            .find(|entry| entry.organization.id == org_id)
        else {
            return Ok(None);
        };
        entry.organization.name = name;
        Ok(Some(entry.organization.clone()))
    }

    async fn session_user(&self) -> Result<SessionUser> {
        Ok(self.user.clone())
    }

    async fn session_organizations(&self) -> Result<Vec<(OrganizationView, MemberRole)>> {
        let guard = self.memberships.read().await;
        Ok(guard
            .iter()
            .map(|entry| (entry.organization.clone(), entry.role))
            .collect())
    }
}
