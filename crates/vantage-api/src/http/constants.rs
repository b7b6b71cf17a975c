//! Shared HTTP constants (headers, problem URIs).

pub(crate) const HEADER_ORGANIZATION: &str = "x-organization";
pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

pub(crate) const PROBLEM_INTERNAL: &str = "https://vantage.dev/problems/internal";
pub(crate) const PROBLEM_NOT_FOUND: &str = "https://vantage.dev/problems/not-found";
pub(crate) const PROBLEM_SETTINGS_INVALID: &str = "https://vantage.dev/problems/settings-invalid";
pub(crate) const PROBLEM_NAME_INVALID: &str = "https://vantage.dev/problems/name-invalid";
