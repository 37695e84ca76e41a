//! Pure field validators shared by every entity factory and update
//! transition.
//!
//! Each function takes the candidate value and the target constraint and
//! either returns normally or fails with a [`DomainError::Validation`]
//! carrying the offending field name. No I/O, no reference to other
//! entities.
//!
//! Lengths are counted in characters (`chars().count()`), not bytes, so a
//! 100-character accented street name passes the same boundary a user
//! would count.

use crate::error::DomainError;

/// Non-empty after whitespace trim, at most `max` characters.
pub fn required_text(field: &'static str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    let len = value.chars().count();
    if len > max {
        return Err(DomainError::validation(
            field,
            format!("must be at most {max} characters (got {len})"),
        ));
    }
    Ok(())
}

/// Non-empty after whitespace trim, exactly `len` characters.
pub fn exact_length(field: &'static str, value: &str, len: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    let got = value.chars().count();
    if got != len {
        return Err(DomainError::validation(
            field,
            format!("must be exactly {len} characters (got {got})"),
        ));
    }
    Ok(())
}

/// Absent is fine; when present, at most `max` characters.
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), DomainError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > max {
            return Err(DomainError::validation(
                field,
                format!("must be at most {max} characters (got {len})"),
            ));
        }
    }
    Ok(())
}

/// Non-empty, at most 255 characters, and shaped like an address.
///
/// Only the presence of `@` is checked; full RFC 5322 parsing is not the
/// business of this service.
pub fn email(field: &'static str, value: &str) -> Result<(), DomainError> {
    required_text(field, value, 255)?;
    if !value.contains('@') {
        return Err(DomainError::validation(field, "must contain '@'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_whitespace() {
        assert!(required_text("name", "", 100).is_err());
        assert!(required_text("name", "   ", 100).is_err());
        assert!(required_text("name", "\t\n", 100).is_err());
    }

    #[test]
    fn required_text_boundary() {
        let exactly = "a".repeat(100);
        let over = "a".repeat(101);
        assert!(required_text("name", &exactly, 100).is_ok());
        assert!(required_text("name", &over, 100).is_err());
    }

    #[test]
    fn required_text_counts_chars_not_bytes() {
        // 100 two-byte characters is 200 bytes but exactly at the limit.
        let accented = "á".repeat(100);
        assert!(required_text("name", &accented, 100).is_ok());
    }

    #[test]
    fn exact_length_boundary() {
        assert!(exact_length("code", "S", 2).is_err());
        assert!(exact_length("code", "SP", 2).is_ok());
        assert!(exact_length("code", "SPX", 2).is_err());
        assert!(exact_length("code", "", 2).is_err());
        assert!(exact_length("code", "  ", 2).is_err());
    }

    #[test]
    fn optional_text_allows_absent() {
        assert!(optional_text("complement", None, 50).is_ok());
        assert!(optional_text("complement", Some(""), 50).is_ok());
        assert!(optional_text("complement", Some(&"a".repeat(50)), 50).is_ok());
        assert!(optional_text("complement", Some(&"a".repeat(51)), 50).is_err());
    }

    #[test]
    fn email_requires_at_sign() {
        assert!(email("email", "ana@example.com").is_ok());
        assert!(email("email", "ana.example.com").is_err());
        assert!(email("email", "").is_err());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = required_text("street", "", 100).unwrap_err();
        assert!(err.to_string().contains("street"));
    }
}
