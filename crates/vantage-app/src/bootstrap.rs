use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use vantage_api::{ApiServer, InMemoryOrganizationStore, SessionUser};
use vantage_api_models::{MemberRole, OrganizationMember, OrganizationSettings, OrganizationView};
use vantage_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig};

use crate::error::{AppError, AppResult};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7070";
const DEFAULT_ORG_ID: &str = "org_default";
const DEFAULT_ORG_NAME: &str = "My Organization";
const DEFAULT_OWNER_EMAIL: &str = "owner@localhost";
const DEFAULT_PRIMARY_COLOR: &str = "#391c6d";
const DEFAULT_SECONDARY_COLOR: &str = "#50279a";

/// Runtime configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listener address (`VANTAGE_BIND_ADDR`).
    pub bind_addr: SocketAddr,
    /// Log level when `RUST_LOG` is unset (`VANTAGE_LOG_LEVEL`).
    pub log_level: String,
    /// Log output format (`VANTAGE_LOG_FORMAT`).
    pub log_format: LogFormat,
    /// Seeded organization id and default target (`VANTAGE_ORG_ID`).
    pub org_id: String,
    /// Seeded organization name (`VANTAGE_ORG_NAME`).
    pub org_name: String,
    /// Seeded owner and session email (`VANTAGE_OWNER_EMAIL`).
    pub owner_email: String,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] when a value fails validation.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] when a value fails validation.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let read = |name: &str, default: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let raw_addr = read("VANTAGE_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| AppError::InvalidConfig {
                field: "VANTAGE_BIND_ADDR",
                reason: "unparseable",
                value: Some(raw_addr.clone()),
            })?;
        if bind_addr.port() == 0 {
            return Err(AppError::InvalidConfig {
                field: "VANTAGE_BIND_ADDR",
                reason: "zero_port",
                value: Some(raw_addr),
            });
        }

        let owner_email = read("VANTAGE_OWNER_EMAIL", DEFAULT_OWNER_EMAIL);
        if !owner_email.contains('@') {
            return Err(AppError::InvalidConfig {
                field: "VANTAGE_OWNER_EMAIL",
                reason: "not_an_email",
                value: Some(owner_email),
            });
        }

        Ok(Self {
            bind_addr,
            log_level: read("VANTAGE_LOG_LEVEL", DEFAULT_LOG_LEVEL),
            log_format: lookup("VANTAGE_LOG_FORMAT")
                .map_or_else(LogFormat::infer, |value| LogFormat::from_name(&value)),
            org_id: read("VANTAGE_ORG_ID", DEFAULT_ORG_ID),
            org_name: read("VANTAGE_ORG_NAME", DEFAULT_ORG_NAME),
            owner_email,
        })
    }
}

/// Build the store seeded with the configured organization.
pub(crate) fn seed_store(config: &AppConfig) -> InMemoryOrganizationStore {
    let owner = SessionUser {
        user_id: "u_owner".to_string(),
        email: config.owner_email.clone(),
    };
    let organization = OrganizationView {
        id: config.org_id.clone(),
        name: config.org_name.clone(),
        url: config.org_id.clone(),
        owner_email: config.owner_email.clone(),
        members: vec![OrganizationMember {
            id: owner.user_id.clone(),
            email: owner.email.clone(),
            name: "Owner".to_string(),
            role: MemberRole::Admin,
        }],
        invites: Vec::new(),
        subscription: None,
        slack_team: None,
        settings: Some(OrganizationSettings {
            implementation_types: Vec::new(),
            customized: Some(false),
            logo_path: Some(String::new()),
            primary_color: Some(DEFAULT_PRIMARY_COLOR.to_string()),
            secondary_color: Some(DEFAULT_SECONDARY_COLOR.to_string()),
        }),
    };
    InMemoryOrganizationStore::new(owner, vec![(organization, MemberRole::Admin)])
}

/// Entry point for the Vantage application boot sequence.
///
/// # Errors
///
/// Returns an error if configuration is invalid, logging cannot be installed,
/// or the API server fails.
pub async fn run_app() -> AppResult<()> {
    let config = AppConfig::from_env()?;
    run_app_with(config).await
}

pub(crate) async fn run_app_with(config: AppConfig) -> AppResult<()> {
    let logging = LoggingConfig {
        level: &config.log_level,
        format: config.log_format,
        ..LoggingConfig::default()
    };
    vantage_telemetry::init_logging(&logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;

    info!(
        org_id = %config.org_id,
        build = vantage_telemetry::build_sha(),
        "Vantage bootstrap starting"
    );

    let store = Arc::new(seed_store(&config));
    let api = ApiServer::new(store, config.org_id.clone());
    api.serve(config.bind_addr)
        .await
        .map_err(|err| AppError::api_server("api_server.serve", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use vantage_api::OrganizationStore;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().expect("addr"));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_format, LogFormat::infer());
        assert_eq!(config.org_id, DEFAULT_ORG_ID);
        assert_eq!(config.owner_email, DEFAULT_OWNER_EMAIL);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("VANTAGE_BIND_ADDR", "0.0.0.0:9000"),
            ("VANTAGE_LOG_FORMAT", "json"),
            ("VANTAGE_ORG_ID", " acme "),
            ("VANTAGE_OWNER_EMAIL", "ops@acme.test"),
        ]))
        .expect("config");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.org_id, "acme");
        assert_eq!(config.owner_email, "ops@acme.test");
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("VANTAGE_BIND_ADDR", "nowhere")]))
            .expect_err("invalid addr");
        assert!(matches!(
            err,
            AppError::InvalidConfig {
                field: "VANTAGE_BIND_ADDR",
                reason: "unparseable",
                ..
            }
        ));

        let err = AppConfig::from_lookup(lookup(&[("VANTAGE_BIND_ADDR", "127.0.0.1:0")]))
            .expect_err("zero port");
        assert!(matches!(
            err,
            AppError::InvalidConfig {
                reason: "zero_port",
                ..
            }
        ));
    }

    #[test]
    fn invalid_owner_email_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("VANTAGE_OWNER_EMAIL", "owner")]))
            .expect_err("invalid email");
        assert!(matches!(
            err,
            AppError::InvalidConfig {
                field: "VANTAGE_OWNER_EMAIL",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn seeded_store_exposes_configured_organization() {
        let config = AppConfig::from_lookup(lookup(&[("VANTAGE_ORG_ID", "acme")])).expect("config");
        let store = seed_store(&config);
        let org = store
            .organization("acme")
            .await
            .expect("load")
            .expect("seeded organization");
        let settings = org.settings.expect("settings");
        assert!(settings.implementation_types.is_empty());
        assert_eq!(settings.primary_color.as_deref(), Some(DEFAULT_PRIMARY_COLOR));
        assert_eq!(store.session_user().await.expect("user").email, config.owner_email);
    }
}
