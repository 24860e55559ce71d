//! The establishment number, identifying a place of business.

use crate::error::{ValidationError, ValidationResult};
use log::trace;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]\.[0-9]{3}\.[0-9]{3}\.[0-9]{3}$").expect("valid pattern")
});

/// A validated Belgian establishment number.
///
/// The establishment number identifies a physical place of business of an
/// enterprise and is the key of an
/// [`Establishment`](crate::entities::Establishment). Its canonical form is
/// ten digits grouped `D.DDD.DDD.DDD`. The wrapped string is stored verbatim
/// and never re-rendered.
///
/// ## Examples
///
/// ```rust
/// use kbobce::identifiers::EstablishmentNumber;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let number = EstablishmentNumber::new("2.123.456.789")?;
///     assert_eq!(number.as_str(), "2.123.456.789");
///
///     let parsed = EstablishmentNumber::parse("2 123 456 789").unwrap();
///     assert_eq!(parsed, number);
///
///     assert!(EstablishmentNumber::new("2123456789").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EstablishmentNumber(String);

impl EstablishmentNumber {
    /// Check whether the given string is a canonically formatted
    /// establishment number.
    pub fn is_valid(value: &str) -> bool {
        FORMAT.is_match(value)
    }

    /// Create a new EstablishmentNumber with validation.
    ///
    /// The strict constructor: the argument must already be in canonical
    /// form. Use [`parse`](Self::parse) for input that may carry other
    /// separators.
    ///
    /// # Returns
    ///
    /// * `Ok(EstablishmentNumber)` - If the value matches `D.DDD.DDD.DDD`
    /// * `Err(ValidationError)` - Otherwise
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidEstablishmentNumber { value });
        }
        Ok(Self(value))
    }

    /// Leniently parse an establishment number from arbitrarily formatted
    /// input.
    ///
    /// Canonical input is wrapped directly. Anything else has every
    /// non-digit stripped; exactly ten digits must remain, an eleventh digit
    /// rejects the input. The dots are re-inserted at the fixed canonical
    /// offsets and the result re-validated.
    pub fn parse(value: &str) -> Option<Self> {
        if Self::is_valid(value) {
            return Some(Self(value.to_string()));
        }
        let mut digits = String::with_capacity(10);
        for c in value.chars() {
            if c.is_ascii_digit() {
                if digits.len() == 10 {
                    trace!("rejecting establishment number input with more than 10 digits");
                    return None;
                }
                digits.push(c);
            }
        }
        if digits.len() < 10 {
            trace!("rejecting establishment number input with fewer than 10 digits");
            return None;
        }
        let canonical = format!(
            "{}.{}.{}.{}",
            &digits[..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        );
        debug_assert!(Self::is_valid(&canonical));
        Some(Self(canonical))
    }

    /// The canonical string form of this establishment number.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the canonical string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EstablishmentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EstablishmentNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EstablishmentNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for EstablishmentNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EstablishmentNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_canonical_form() {
        let number = EstablishmentNumber::new("2.123.456.789").unwrap();
        assert_eq!(number.as_str(), "2.123.456.789");
    }

    #[test]
    fn test_is_valid() {
        assert!(EstablishmentNumber::is_valid("2.123.456.789"));
        assert!(EstablishmentNumber::is_valid("0.000.000.000"));
        assert!(!EstablishmentNumber::is_valid("2123456789"));
        assert!(!EstablishmentNumber::is_valid("2.123.456.78"));
        assert!(!EstablishmentNumber::is_valid("2.123.456.7890"));
        assert!(!EstablishmentNumber::is_valid("0123.456.789")); // enterprise grouping
        assert!(!EstablishmentNumber::is_valid(""));
    }

    #[test]
    fn test_strict_construction_rejects_invalid() {
        let result = EstablishmentNumber::new("2123456789");
        match result.unwrap_err() {
            ValidationError::InvalidEstablishmentNumber { value } => {
                assert_eq!(value, "2123456789");
            }
            other => panic!("expected InvalidEstablishmentNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_canonical_is_identity() {
        let parsed = EstablishmentNumber::parse("2.123.456.789").unwrap();
        let direct = EstablishmentNumber::new("2.123.456.789").unwrap();
        assert_eq!(parsed, direct);
    }

    #[test]
    fn test_parse_strips_separators() {
        let expected = EstablishmentNumber::new("2.123.456.789").unwrap();
        assert_eq!(
            EstablishmentNumber::parse("2 123 456 789").unwrap(),
            expected
        );
        assert_eq!(EstablishmentNumber::parse("2123456789").unwrap(), expected);
        assert_eq!(
            EstablishmentNumber::parse("2-123-456-789").unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_rejects_wrong_digit_count() {
        assert!(EstablishmentNumber::parse("212345678").is_none());
        assert!(EstablishmentNumber::parse("21234567890").is_none());
        assert!(EstablishmentNumber::parse("").is_none());
    }

    #[test]
    fn test_any_leading_digit_accepted() {
        // unlike the enterprise number, no leading zero is required
        assert!(EstablishmentNumber::parse("9123456789").is_some());
    }

    #[test]
    fn test_display() {
        let number = EstablishmentNumber::new("2.123.456.789").unwrap();
        assert_eq!(format!("{}", number), "2.123.456.789");
    }

    #[test]
    fn test_serialization_round_trip() {
        let number = EstablishmentNumber::new("2.123.456.789").unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"2.123.456.789\"");
        let back: EstablishmentNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, number);
    }

    #[test]
    fn test_deserialization_rejects_invalid() {
        let result: Result<EstablishmentNumber, _> = serde_json::from_str("\"2123456789\"");
        assert!(result.is_err());
    }
}
