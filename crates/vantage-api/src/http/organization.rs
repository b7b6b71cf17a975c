//! Organization read/write endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use tracing::{error, info};

use crate::http::constants::HEADER_ORGANIZATION;
use crate::http::errors::ApiError;

const MAX_NAME_CHARS: usize = 120;
use crate::models::{
    OrganizationSettings, ProblemInvalidParam, RenameOrganizationRequest, SettingsApiResponse,
    SettingsPayload, StatusResponse, UpdateOrganizationRequest,
};
use crate::state::ApiState;

pub(crate) async fn get_organization(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<SettingsApiResponse>, ApiError> {
    let org_id = state.resolve_org(requested_org(&headers));
    let organization = state.store.organization(org_id).await.map_err(|err| {
        error!(error = %err, org_id, "failed to load organization");
        ApiError::internal("failed to load organization")
    })?;
    let organization =
        organization.ok_or_else(|| ApiError::not_found(format!("organization {org_id}")))?;
    Ok(Json(SettingsApiResponse {
        status: 200,
        organization: Some(organization),
    }))
}

pub(crate) async fn put_organization(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(request): Json<UpdateOrganizationRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let invalid = validate_settings(&request.settings);
    if !invalid.is_empty() {
        return Err(ApiError::settings_invalid(invalid));
    }

    let org_id = state.resolve_org(requested_org(&headers));
    let settings = OrganizationSettings::from(&request.settings);
    let updated = state
        .store
        .replace_settings(org_id, settings)
        .await
        .map_err(|err| {
            error!(error = %err, org_id, "failed to persist organization settings");
            ApiError::internal("failed to persist organization settings")
        })?;
    if updated.is_none() {
        return Err(ApiError::not_found(format!("organization {org_id}")));
    }

    info!(
        org_id,
        implementation_types = request.settings.implementation_types.len(),
        customized = request.settings.customized,
        "organization settings replaced"
    );
    Ok(Json(StatusResponse { status: 200 }))
}

pub(crate) async fn put_organization_name(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(request): Json<RenameOrganizationRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let name = request.name.trim();
    let invalid = validate_name(name);
    if !invalid.is_empty() {
        return Err(ApiError::name_invalid(invalid));
    }

    let org_id = state.resolve_org(requested_org(&headers));
    let updated = state
        .store
        .rename(org_id, name.to_string())
        .await
        .map_err(|err| {
            error!(error = %err, org_id, "failed to rename organization");
            ApiError::internal("failed to rename organization")
        })?;
    if updated.is_none() {
        return Err(ApiError::not_found(format!("organization {org_id}")));
    }

    info!(org_id, "organization renamed");
    Ok(Json(StatusResponse { status: 200 }))
}

fn requested_org(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(HEADER_ORGANIZATION)
        .and_then(|value| value.to_str().ok())
}

pub(crate) fn validate_settings(settings: &SettingsPayload) -> Vec<ProblemInvalidParam> {
    let mut invalid = Vec::new();
    for (field, value) in [
        ("primaryColor", settings.primary_color.as_str()),
        ("secondaryColor", settings.secondary_color.as_str()),
    ] {
        if !is_hex_color(value) {
            invalid.push(ProblemInvalidParam {
                pointer: format!("/settings/{field}"),
                message: "must be empty or a #rrggbb color".to_string(),
            });
        }
    }
    invalid
}

fn validate_name(name: &str) -> Vec<ProblemInvalidParam> {
    let message = if name.is_empty() {
        "must not be empty"
    } else if name.chars().count() > MAX_NAME_CHARS {
        "must be at most 120 characters"
    } else {
        return Vec::new();
    };
    vec![ProblemInvalidParam {
        pointer: "/name".to_string(),
        message: message.to_string(),
    }]
}

/// Empty values are accepted; organizations may never have set a color.
fn is_hex_color(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|ch| ch.is_ascii_hexdigit()))
}
