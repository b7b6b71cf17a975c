//! Sample Ratio Mismatch disclosure rules and explanation content.

/// p-values at or above this are not flagged.
pub const SRM_THRESHOLD: f64 = 0.001;

/// Write-up linked from the explanation panel.
pub const REFERENCE_URL: &str =
    "https://exp-platform.com/Documents/2019_KDDFabijanGupchupFuptaOmhoverVermeerDmitriev.pdf";

/// A named group of common SRM causes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CauseGroup {
    /// Group heading.
    pub title: &'static str,
    /// Individual causes.
    pub causes: &'static [&'static str],
}

/// Most common causes, grouped by where they originate.
pub const CAUSE_GROUPS: [CauseGroup; 4] = [
    CauseGroup {
        title: "Bucketing",
        causes: &[
            "Bad randomization function",
            "Corrupted user IDs",
            "Carry over effects from previous tests",
            "Interaction effects",
        ],
    },
    CauseGroup {
        title: "Execution",
        causes: &[
            "Different start times for variations",
            "Variation-specific errors or crashes",
            "Variation-specific performance issues",
            "Broken event firing",
        ],
    },
    CauseGroup {
        title: "Analysis",
        causes: &[
            "Broken filtering (e.g. bot removal)",
            "Missing data",
            "Wrong start date",
            "Wrong triggering condition",
        ],
    },
    CauseGroup {
        title: "Interference",
        causes: &[
            "Inconsistent ramping of variations",
            "Pausing variations during execution",
            "Injection attacks and hacks",
        ],
    },
];

/// Round a p-value to 8 decimal places for display.
#[must_use]
pub fn display_value(p: f64) -> f64 {
    (p * 1e8).round() / 1e8
}

/// A p-value that warrants the SRM warning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SrmDisclosure {
    p_value: f64,
}

impl SrmDisclosure {
    /// Decide whether `p` is flagged. `None`, non-finite, negative and
    /// at-or-above-threshold values are suppressed.
    #[must_use]
    pub fn evaluate(p: Option<f64>) -> Option<Self> {
        let p = p.filter(|value| value.is_finite())?;
        if !(0.0..SRM_THRESHOLD).contains(&p) {
            return None;
        }
        // abs() folds -0.0 into 0.0
        Some(Self {
            p_value: display_value(p).abs(),
        })
    }

    /// Rounded p-value shown to the user.
    #[must_use]
    pub const fn p_value(self) -> f64 {
        self.p_value
    }

    /// `N` in "1 in N chance"; `None` when the rounded value is zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn odds_denominator(self) -> Option<u64> {
        (self.p_value > 0.0).then(|| (1.0 / self.p_value).floor() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppresses_values_at_or_above_threshold() {
        assert!(SrmDisclosure::evaluate(Some(0.001)).is_none());
        assert!(SrmDisclosure::evaluate(Some(0.5)).is_none());
        assert!(SrmDisclosure::evaluate(Some(1.0)).is_none());
    }

    #[test]
    fn suppresses_non_numeric_and_negative_values() {
        assert!(SrmDisclosure::evaluate(None).is_none());
        assert!(SrmDisclosure::evaluate(Some(f64::NAN)).is_none());
        assert!(SrmDisclosure::evaluate(Some(f64::INFINITY)).is_none());
        assert!(SrmDisclosure::evaluate(Some(f64::NEG_INFINITY)).is_none());
        assert!(SrmDisclosure::evaluate(Some(-0.0001)).is_none());
    }

    #[test]
    fn flags_small_values_with_rounded_display() {
        let disclosure = SrmDisclosure::evaluate(Some(0.000_123_456_789)).expect("flagged");
        assert!((disclosure.p_value() - 0.000_123_46).abs() < 1e-12);
        assert_eq!(disclosure.odds_denominator(), Some(8099));
    }

    #[test]
    fn odds_use_floor_of_reciprocal() {
        let disclosure = SrmDisclosure::evaluate(Some(0.0003)).expect("flagged");
        assert_eq!(disclosure.odds_denominator(), Some(3333));
        let disclosure = SrmDisclosure::evaluate(Some(0.000_999_9)).expect("flagged");
        assert_eq!(disclosure.odds_denominator(), Some(1000));
    }

    #[test]
    fn zero_omits_odds() {
        let disclosure = SrmDisclosure::evaluate(Some(0.0)).expect("flagged");
        assert!(disclosure.p_value().abs() < f64::EPSILON);
        assert_eq!(disclosure.odds_denominator(), None);
    }

    #[test]
    fn values_that_round_to_zero_omit_odds() {
        let disclosure = SrmDisclosure::evaluate(Some(1e-10)).expect("flagged");
        assert_eq!(disclosure.odds_denominator(), None);
    }

    #[test]
    fn cause_groups_are_populated() {
        assert!(CAUSE_GROUPS.iter().all(|group| !group.causes.is_empty()));
        assert_eq!(CAUSE_GROUPS[3].title, "Interference");
    }
}
