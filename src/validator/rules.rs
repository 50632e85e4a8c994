use std::sync::LazyLock;

use regex::Regex;

/// Overall shape: local `@` domain `.` tld, no whitespace, no second '@'.
static FORMAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("format regex is valid")
});

/// One variant per rejection reason, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleViolation {
    Empty,
    Format,
    LocalTooLong,
    DomainTooLong,
    ConsecutiveDots,
    TldTooShort,
}

impl RuleViolation {
    pub(crate) fn reason(self) -> &'static str {
        match self {
            Self::Empty => "Email is empty",
            Self::Format => "Invalid email format",
            Self::LocalTooLong => "Local part exceeds 64 characters",
            Self::DomainTooLong => "Domain part exceeds 255 characters",
            Self::ConsecutiveDots => "Domain contains consecutive dots",
            Self::TldTooShort => "TLD must be at least 2 characters",
        }
    }
}

/// Runs the rule chain over an already-trimmed input. The first failing
/// rule wins; `None` means every check passed.
pub(crate) fn first_violation(input: &str) -> Option<RuleViolation> {
    if input.is_empty() {
        return Some(RuleViolation::Empty);
    }
    if !FORMAT_RE.is_match(input) {
        return Some(RuleViolation::Format);
    }
    // the format rule guarantees exactly one '@'
    let Some((local, domain)) = input.split_once('@') else {
        return Some(RuleViolation::Format);
    };
    if local.len() > 64 {
        return Some(RuleViolation::LocalTooLong);
    }
    if domain.len() > 255 {
        return Some(RuleViolation::DomainTooLong);
    }
    if domain.contains("..") {
        return Some(RuleViolation::ConsecutiveDots);
    }
    let tld = domain.rsplit('.').next().unwrap_or(domain);
    if tld.len() < 2 {
        // unreachable in practice: the format rule already demands two
        // trailing characters, kept so the rule order stays complete
        return Some(RuleViolation::TldTooShort);
    }
    None
}
