//! Router construction and server host for the API.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, Method, Request, header::CONTENT_TYPE},
    routing::{get, put},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::SharedStore;
use crate::error::{ApiServerError, ApiServerResult};
use crate::http::constants::{HEADER_ORGANIZATION, HEADER_REQUEST_ID};
use crate::http::health::health;
use crate::http::organization::{get_organization, put_organization, put_organization_name};
use crate::http::user::get_user;
use crate::state::ApiState;

/// Axum router wrapper that hosts the organization API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Construct a server over `store`; requests without an `x-organization`
    /// header target `default_org_id`.
    #[must_use]
    pub fn new(store: SharedStore, default_org_id: impl Into<String>) -> Self {
        let state = Arc::new(ApiState::new(store, default_org_id));
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE, HeaderName::from_static(HEADER_ORGANIZATION)]);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("");
                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = request.uri().path(),
                    request_id,
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );

        let router = Self::build_router()
            .layer(cors_layer)
            .layer(trace_layer)
            .with_state(state);
        Self { router }
    }

    fn build_router() -> Router<Arc<ApiState>> {
        Router::new()
            .route("/health", get(health))
            .route("/user", get(get_user))
            .route(
                "/organization",
                get(get_organization).put(put_organization),
            )
            .route("/organization/name", put(put_organization_name))
    }

    /// Serve the API on the supplied address until the listener fails.
    ///
    /// # Errors
    ///
    /// Returns [`ApiServerError::Bind`] if the listener cannot bind, or
    /// [`ApiServerError::Serve`] if the server terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> ApiServerResult<()> {
        tracing::info!(addr = %addr, "starting api listener");
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(|source| ApiServerError::Serve { source })
    }

    #[cfg(test)]
    pub(crate) fn router(&self) -> Router {
        self.router.clone()
    }
}
