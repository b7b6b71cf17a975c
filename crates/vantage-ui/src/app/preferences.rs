//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

pub(crate) const ACTIVE_ORG_KEY: &str = "vantage.active_org";

const FALLBACK_API_BASE: &str = "http://localhost:7070";

pub(crate) fn load_active_org() -> Option<String> {
    LocalStorage::get::<String>(ACTIVE_ORG_KEY)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub(crate) fn persist_active_org(org_id: Option<&str>) {
    match org_id {
        Some(org_id) => set_storage(ACTIVE_ORG_KEY, org_id),
        None => LocalStorage::delete(ACTIVE_ORG_KEY),
    }
}

/// Derive the API origin from the page origin; the dev server on 8080
/// talks to the API on 7070.
pub(crate) fn api_base_url() -> String {
    let Ok(href) = window().location().href() else {
        return FALLBACK_API_BASE.to_string();
    };
    let Ok(url) = Url::new(&href) else {
        return FALLBACK_API_BASE.to_string();
    };

    let port = url.port();
    let mapped_port = match port.as_str() {
        "" => None,
        "8080" => Some("7070"),
        other => Some(other),
    };
    let mut base = format!("{}//{}", url.protocol(), url.hostname());
    if let Some(port) = mapped_port {
        base.push(':');
        base.push_str(port);
    }
    base
}

fn set_storage(key: &'static str, value: &str) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
