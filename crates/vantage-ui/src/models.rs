//! UI-side models plus the shared API DTOs the views consume.

pub use vantage_api_models::{
    ImplementationType, MemberRole, OrganizationSettings, OrganizationSummary, OrganizationView,
    ProblemDetails, RenameOrganizationRequest, SettingsApiResponse, SettingsPayload,
    StatusResponse, SubscriptionStatus, UpdateOrganizationRequest, UserResponse,
};

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// Alert tone class suffix for the toast.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Toast payload held by the app store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Human label for a subscription state shown on the settings page.
#[must_use]
pub const fn subscription_label(status: SubscriptionStatus) -> &'static str {
    match status {
        SubscriptionStatus::Incomplete => "Incomplete",
        SubscriptionStatus::IncompleteExpired => "Expired",
        SubscriptionStatus::Trialing => "Trial",
        SubscriptionStatus::Active => "Active",
        SubscriptionStatus::PastDue => "Past due",
        SubscriptionStatus::Canceled => "Canceled",
        SubscriptionStatus::Unpaid => "Unpaid",
    }
}

/// Toast expiry timers to start and to drop after the visible list changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastTimerPlan {
    /// Visible toasts without a running timer.
    pub start: Vec<u64>,
    /// Running timers whose toast is gone.
    pub cancel: Vec<u64>,
}

/// Diff running timers against the visible toasts.
///
/// Toasts that already have a timer keep it, so each toast expires a fixed
/// time after it first appeared no matter how many arrive after it.
#[must_use]
pub fn plan_toast_timers(running: &[u64], visible: &[Toast]) -> ToastTimerPlan {
    ToastTimerPlan {
        start: visible
            .iter()
            .map(|toast| toast.id)
            .filter(|id| !running.contains(id))
            .collect(),
        cancel: running
            .iter()
            .copied()
            .filter(|id| !visible.iter().any(|toast| toast.id == *id))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_tones_map_to_alert_classes() {
        assert_eq!(ToastKind::Info.tone(), "info");
        assert_eq!(ToastKind::Success.tone(), "success");
        assert_eq!(ToastKind::Error.tone(), "error");
    }

    #[test]
    fn subscription_labels_cover_billing_states() {
        assert_eq!(subscription_label(SubscriptionStatus::Trialing), "Trial");
        assert_eq!(subscription_label(SubscriptionStatus::PastDue), "Past due");
    }

    fn toasts(ids: &[u64]) -> Vec<Toast> {
        ids.iter()
            .map(|id| Toast {
                id: *id,
                message: format!("toast {id}"),
                kind: ToastKind::Info,
            })
            .collect()
    }

    #[test]
    fn new_toast_does_not_restart_existing_timers() {
        let plan = plan_toast_timers(&[1, 2], &toasts(&[1, 2, 3]));
        assert_eq!(plan.start, vec![3]);
        assert!(plan.cancel.is_empty());
    }

    #[test]
    fn dismissed_toast_cancels_only_its_timer() {
        let plan = plan_toast_timers(&[1, 2, 3], &toasts(&[1, 3]));
        assert!(plan.start.is_empty());
        assert_eq!(plan.cancel, vec![2]);
    }

    #[test]
    fn first_render_starts_every_timer() {
        assert_eq!(
            plan_toast_timers(&[], &toasts(&[4, 5])),
            ToastTimerPlan {
                start: vec![4, 5],
                cancel: Vec::new(),
            }
        );
    }
}
