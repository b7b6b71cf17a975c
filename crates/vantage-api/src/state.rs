//! Shared handler state.

use crate::config::SharedStore;

/// State injected into every handler.
pub struct ApiState {
    pub(crate) store: SharedStore,
    pub(crate) default_org_id: String,
}

impl ApiState {
    /// Build state around a store; requests without an organization header
    /// resolve to `default_org_id`.
    #[must_use]
    pub fn new(store: SharedStore, default_org_id: impl Into<String>) -> Self {
        Self {
            store,
            default_org_id: default_org_id.into(),
        }
    }

    /// Resolve the organization a request targets.
    pub(crate) fn resolve_org<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(&self.default_org_id)
    }
}
