//! API helpers for the settings editor.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Every write is followed by a re-fetch; a failed re-fetch is not a failed
//!   write.

use crate::features::settings::reconcile::WriteOutcome;
use crate::models::{OrganizationView, SettingsPayload};
use crate::services::api::{ApiClient, ApiError};
use gloo::console;

/// Fetch the active organization and its settings.
pub(crate) async fn load_settings(client: &ApiClient) -> Result<Option<OrganizationView>, ApiError> {
    client
        .fetch_organization()
        .await
        .map(|response| response.organization)
}

/// Write the full settings object, then re-fetch.
pub(crate) async fn save_settings(client: &ApiClient, payload: &SettingsPayload) -> WriteOutcome {
    client.update_organization(payload).await?;
    Ok(refresh(client, "settings").await)
}

/// Rename the active organization, then re-fetch.
pub(crate) async fn rename_organization(client: &ApiClient, name: &str) -> WriteOutcome {
    client.rename_organization(name).await?;
    Ok(refresh(client, "rename").await)
}

async fn refresh(client: &ApiClient, after: &'static str) -> Option<OrganizationView> {
    match load_settings(client).await {
        Ok(organization) => organization,
        Err(err) => {
            console::warn!("organization refresh after write failed", after, err.to_string());
            None
        }
    }
}
