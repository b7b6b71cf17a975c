//! Shared tokens for the DaisyUI wrappers.

use yew::prelude::*;

/// Semantic color tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DaisyColor {
    Primary,
    Info,
    Success,
    Error,
}

impl DaisyColor {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Control sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum DaisySize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl DaisySize {
    /// `prefix-size`, e.g. `btn-sm`.
    pub(crate) fn with_prefix(self, prefix: &str) -> String {
        let suffix = match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        };
        format!("{prefix}-{suffix}")
    }
}

/// Button fill styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum DaisyVariant {
    #[default]
    Solid,
    Ghost,
    Link,
}

impl DaisyVariant {
    pub(crate) const fn as_class(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Ghost => Some("btn-ghost"),
            Self::Link => Some("btn-link"),
        }
    }
}

/// Append `prefix-<tone>` to `classes` when a tone is set.
pub(crate) fn push_tone(classes: &mut Classes, prefix: &str, tone: Option<DaisyColor>) {
    if let Some(color) = tone {
        classes.push(format!("{prefix}-{}", color.as_str()));
    }
}
