use super::rules::RuleViolation;

/// Outcome for a single address. `email` always carries the trimmed input
/// so display and export show the normalized string, valid or not.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub email: String,
    pub valid: bool,
    /// Empty exactly when `valid` is true.
    pub reason: String,
}

impl ValidationResult {
    pub(crate) fn ok(email: &str) -> Self {
        Self {
            email: email.to_string(),
            valid: true,
            reason: String::new(),
        }
    }

    pub(crate) fn rejected(email: &str, violation: RuleViolation) -> Self {
        Self {
            email: email.to_string(),
            valid: false,
            reason: violation.reason().to_string(),
        }
    }
}
