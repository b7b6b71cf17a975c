#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Vantage organization API.
//!
//! The web UI and the API server both encode/decode through these types so the
//! wire contract (camelCase field names, optional settings fields) has a single
//! source of truth.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Parameters that failed validation, if applicable.
    pub invalid_params: Option<Vec<ProblemInvalidParam>>,
}

/// Invalid parameter pointer surfaced alongside a [`ProblemDetails`] payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemInvalidParam {
    /// JSON Pointer to the offending field.
    pub pointer: String,
    /// Human-readable description of the validation failure.
    pub message: String,
}

/// How an experiment variation is implemented.
///
/// The set is closed; values outside it are tolerated on read (see
/// [`OrganizationSettings::implementation_types`]) but never written.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationType {
    /// Visual editor changes.
    Visual,
    /// Code-based variations.
    Code,
    /// Feature flag / configuration driven variations.
    Configuration,
    /// Anything else.
    Custom,
}

impl ImplementationType {
    /// Every known category, in display order.
    pub const ALL: [Self; 4] = [Self::Visual, Self::Code, Self::Configuration, Self::Custom];

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Code => "code",
            Self::Configuration => "configuration",
            Self::Custom => "custom",
        }
    }

    /// Parse a wire name, returning `None` for unknown categories.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == value)
    }
}

/// Organization-level settings as stored by the server.
///
/// Every field is optional on the wire; older organizations may be missing the
/// customization block entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSettings {
    /// Enabled implementation categories. Kept as raw strings so unknown
    /// categories survive decoding.
    #[serde(default)]
    pub implementation_types: Vec<String>,
    /// Whether branding customization is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customized: Option<bool>,
    /// Path or URL of the custom logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
    /// Primary brand color (`#rrggbb`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Secondary brand color (`#rrggbb`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

impl From<&SettingsPayload> for OrganizationSettings {
    fn from(payload: &SettingsPayload) -> Self {
        Self {
            implementation_types: payload
                .implementation_types
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
            customized: Some(payload.customized),
            logo_path: Some(payload.logo_path.clone()),
            primary_color: Some(payload.primary_color.clone()),
            secondary_color: Some(payload.secondary_color.clone()),
        }
    }
}

/// Complete settings object sent on every write (never a partial patch).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPayload {
    /// Enabled implementation categories.
    pub implementation_types: Vec<ImplementationType>,
    /// Whether branding customization is enabled.
    pub customized: bool,
    /// Path or URL of the custom logo.
    pub logo_path: String,
    /// Primary brand color.
    pub primary_color: String,
    /// Secondary brand color.
    pub secondary_color: String,
}

/// Body of `PUT /organization`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateOrganizationRequest {
    /// Full replacement settings.
    pub settings: SettingsPayload,
}

/// Body of `PUT /organization/name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenameOrganizationRequest {
    /// New display name; surrounding whitespace is ignored.
    pub name: String,
}

/// Minimal status envelope returned by write endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    /// HTTP-like status code echoed in the body.
    pub status: u16,
}

/// Role of a member within an organization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Full administrative access.
    Admin,
    /// Can manage experiments and metrics.
    Developer,
    /// Can edit visual variations.
    Designer,
}

/// Pending invitation to join an organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInvite {
    /// Invitee email address.
    pub email: String,
    /// Invitation key.
    pub key: String,
    /// Role granted on acceptance.
    pub role: MemberRole,
    /// When the invitation was sent.
    pub date_created: DateTime<Utc>,
}

/// Member of an organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizationMember {
    /// User identifier.
    pub id: String,
    /// Member email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role within the organization.
    pub role: MemberRole,
}

/// Billing subscription lifecycle states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Initial payment pending.
    Incomplete,
    /// Initial payment never completed.
    IncompleteExpired,
    /// In the trial window.
    Trialing,
    /// Paid and current.
    Active,
    /// Payment overdue.
    PastDue,
    /// Cancelled by the customer.
    Canceled,
    /// Payment failed permanently.
    Unpaid,
}

/// Billing subscription summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Billing provider identifier.
    pub id: String,
    /// Seat quantity.
    pub qty: u32,
    /// End of the trial window.
    pub trial_end: DateTime<Utc>,
    /// Lifecycle state.
    pub status: SubscriptionStatus,
}

/// Organization record returned by `GET /organization`.
///
/// Everything but `settings` is display-only for the settings editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationView {
    /// Organization identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Public URL slug.
    #[serde(default)]
    pub url: String,
    /// Owner contact.
    pub owner_email: String,
    /// Current members.
    #[serde(default)]
    pub members: Vec<OrganizationMember>,
    /// Outstanding invitations.
    #[serde(default)]
    pub invites: Vec<OrganizationInvite>,
    /// Billing subscription, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
    /// Linked Slack team identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_team: Option<String>,
    /// Editable settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<OrganizationSettings>,
}

/// Envelope returned by `GET /organization`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsApiResponse {
    /// HTTP-like status code echoed in the body.
    pub status: u16,
    /// Organization payload, absent when the session has no organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationView>,
}

/// Organization entry in the session's organization list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizationSummary {
    /// Organization identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role of the current user.
    pub role: MemberRole,
    /// Settings as last known to the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<OrganizationSettings>,
}

/// Envelope returned by `GET /user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// HTTP-like status code echoed in the body.
    pub status: u16,
    /// Current user identifier.
    pub user_id: String,
    /// Current user email.
    pub email: String,
    /// Organizations the user belongs to.
    #[serde(default)]
    pub organizations: Vec<OrganizationSummary>,
}
