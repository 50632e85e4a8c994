mod rules;
mod types;

pub use types::ValidationResult;

use rules::first_violation;

/// Validates one address. Total function: every input maps to a result,
/// there is no error path. The reason string comes from the first failing
/// rule; a valid address carries an empty reason.
pub fn validate(raw: &str) -> ValidationResult {
    let input = raw.trim();
    match first_violation(input) {
        Some(violation) => ValidationResult::rejected(input, violation),
        None => ValidationResult::ok(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_basic() {
        let r = validate("alice@example.com");
        assert!(r.valid, "{}", r.reason);
        assert_eq!(r.reason, "");
    }

    #[test]
    fn empty_and_blank_inputs() {
        for raw in ["", "   "] {
            let r = validate(raw);
            assert!(!r.valid);
            assert_eq!(r.reason, "Email is empty");
            assert_eq!(r.email, "");
        }
    }

    #[test]
    fn missing_dot_is_a_format_error() {
        let r = validate("a@b");
        assert!(!r.valid);
        assert_eq!(r.reason, "Invalid email format");
    }

    #[test]
    fn consecutive_domain_dots() {
        let r = validate("a@b..com");
        assert!(!r.valid);
        assert_eq!(r.reason, "Domain contains consecutive dots");
    }

    #[test]
    fn result_email_is_trimmed() {
        let r = validate(" x@y.com ");
        assert!(r.valid);
        assert_eq!(r.email, "x@y.com");
    }

    #[test]
    fn local_part_limit_is_64() {
        let r = validate(&format!("{}@example.com", "a".repeat(65)));
        assert_eq!(r.reason, "Local part exceeds 64 characters");
        let r = validate(&format!("{}@example.com", "a".repeat(64)));
        assert!(r.valid, "{}", r.reason);
    }

    #[test]
    fn domain_part_limit_is_255() {
        let r = validate(&format!("user@{}.com", "a".repeat(251)));
        assert!(r.valid, "{}", r.reason);
        let r = validate(&format!("user@{}.com", "a".repeat(252)));
        assert_eq!(r.reason, "Domain part exceeds 255 characters");
    }

    #[test]
    fn first_failing_rule_decides_the_reason() {
        // violates both the local-length and consecutive-dot rules;
        // the local-length rule runs first
        let r = validate(&format!("{}@b..com", "a".repeat(65)));
        assert_eq!(r.reason, "Local part exceeds 64 characters");
    }

    proptest! {
        #[test]
        fn well_formed_addresses_validate(
            local in "[a-z0-9]{1,64}",
            domain in "[a-z0-9]{1,20}",
            tld in "[a-z]{2,10}",
        ) {
            let r = validate(&format!("{local}@{domain}.{tld}"));
            prop_assert!(r.valid, "{}", r.reason);
            prop_assert!(r.reason.is_empty());
        }
    }
}
