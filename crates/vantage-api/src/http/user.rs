//! Session endpoint seeding the client's organization list.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::error;

use crate::config::summarize;
use crate::http::errors::ApiError;
use crate::models::UserResponse;
use crate::state::ApiState;

pub(crate) async fn get_user(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.store.session_user().await.map_err(|err| {
        error!(error = %err, "failed to load session user");
        ApiError::internal("failed to load session user")
    })?;
    let organizations = state.store.session_organizations().await.map_err(|err| {
        error!(error = %err, "failed to load session organizations");
        ApiError::internal("failed to load session organizations")
    })?;
    Ok(Json(UserResponse {
        status: 200,
        user_id: user.user_id,
        email: user.email,
        organizations: organizations
            .iter()
            .map(|(organization, role)| summarize(organization, *role))
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberRole;
    use crate::store::tests::sample_store;

    #[tokio::test]
    async fn get_user_lists_memberships_with_settings() {
        let state = Arc::new(ApiState::new(Arc::new(sample_store()), "org_a"));
        let Json(body) = get_user(State(state)).await.expect("user");
        assert_eq!(body.user_id, "u_1");
        assert_eq!(body.organizations.len(), 2);
        assert_eq!(body.organizations[1].role, MemberRole::Developer);
        assert!(body.organizations[0].settings.is_some());
    }
}
