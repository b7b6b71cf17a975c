//! HTTP client for the organization API.

use crate::models::{
    ProblemDetails, RenameOrganizationRequest, SettingsApiResponse, SettingsPayload,
    StatusResponse, UpdateOrganizationRequest, UserResponse,
};
pub(crate) use crate::services::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use std::cell::RefCell;

const HEADER_ORGANIZATION: &str = "x-organization";

/// REST client bound to one API origin.
#[derive(Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    organization: RefCell<Option<String>>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            organization: RefCell::new(None),
        }
    }

    /// Target subsequent calls at `org_id`.
    pub(crate) fn set_organization(&self, org_id: Option<String>) {
        *self.organization.borrow_mut() = org_id;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn scoped(&self, request: Request) -> Request {
        match self.organization.borrow().as_deref() {
            Some(org_id) => request.header(HEADER_ORGANIZATION, org_id),
            None => request,
        }
    }

    pub(crate) async fn fetch_user(&self) -> Result<UserResponse, ApiError> {
        let request = Request::get(&self.url("/user"));
        decode(send(request).await?).await
    }

    pub(crate) async fn fetch_organization(&self) -> Result<SettingsApiResponse, ApiError> {
        let request = self.scoped(Request::get(&self.url("/organization")));
        decode(send(request).await?).await
    }

    pub(crate) async fn update_organization(
        &self,
        settings: &SettingsPayload,
    ) -> Result<StatusResponse, ApiError> {
        let body = UpdateOrganizationRequest {
            settings: settings.clone(),
        };
        let request = self
            .scoped(Request::put(&self.url("/organization")))
            .json(&body)
            .map_err(|err| ApiError::Decode {
                message: err.to_string(),
            })?;
        decode(send(request).await?).await
    }

    pub(crate) async fn rename_organization(&self, name: &str) -> Result<StatusResponse, ApiError> {
        let body = RenameOrganizationRequest {
            name: name.to_string(),
        };
        let request = self
            .scoped(Request::put(&self.url("/organization/name")))
            .json(&body)
            .map_err(|err| ApiError::Decode {
                message: err.to_string(),
            })?;
        decode(send(request).await?).await
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|err| ApiError::Transport {
        message: err.to_string(),
    })?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let problem = response.json::<ProblemDetails>().await.ok();
    Err(ApiError::from_status(status, &status_text, problem))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|err| ApiError::Decode {
        message: err.to_string(),
    })
}
