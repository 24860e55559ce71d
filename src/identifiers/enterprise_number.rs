//! The enterprise number, the national identifier of a registered enterprise.

use crate::error::{ValidationError, ValidationResult};
use log::trace;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[0-9]{3}\.[0-9]{3}\.[0-9]{3}$").expect("valid pattern"));

/// A validated Belgian enterprise number.
///
/// The enterprise number is the nationally unique identifier of a registered
/// enterprise and the key of an [`Enterprise`](crate::entities::Enterprise).
/// Its canonical form is ten digits with a leading zero, grouped
/// `0DDD.DDD.DDD`. External data sources and consumers depend on this exact
/// formatting, so the wrapped string is stored verbatim and never
/// re-rendered.
///
/// ## Validation Rules
///
/// - Must match `0DDD.DDD.DDD` exactly (leading zero, dots at fixed
///   positions)
///
/// ## Examples
///
/// ```rust
/// use kbobce::identifiers::EnterpriseNumber;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // strict construction requires canonical form
///     let number = EnterpriseNumber::new("0123.456.789")?;
///     assert_eq!(number.as_str(), "0123.456.789");
///
///     // lenient parsing recovers the number from formatted source data
///     let parsed = EnterpriseNumber::parse("BE 0123 456 789").unwrap();
///     assert_eq!(parsed, number);
///
///     assert!(EnterpriseNumber::new("123.456.789").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnterpriseNumber(String);

impl EnterpriseNumber {
    /// Check whether the given string is a canonically formatted enterprise
    /// number.
    pub fn is_valid(value: &str) -> bool {
        FORMAT.is_match(value)
    }

    /// Create a new EnterpriseNumber with validation.
    ///
    /// The strict constructor: the argument must already be in canonical
    /// form. Use [`parse`](Self::parse) for input that may carry separators
    /// or a country prefix.
    ///
    /// # Returns
    ///
    /// * `Ok(EnterpriseNumber)` - If the value matches `0DDD.DDD.DDD`
    /// * `Err(ValidationError)` - Otherwise
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidEnterpriseNumber { value });
        }
        Ok(Self(value))
    }

    /// Leniently parse an enterprise number from arbitrarily formatted
    /// input.
    ///
    /// Canonical input is wrapped directly. Anything else has every
    /// non-digit stripped; exactly ten digits must remain. An eleventh digit
    /// means the input is something other than an enterprise number, so it
    /// rejects rather than truncates. The dots are re-inserted at the fixed
    /// canonical offsets and the result re-validated, which still rejects a
    /// ten-digit string that does not start with zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kbobce::identifiers::EnterpriseNumber;
    ///
    /// assert!(EnterpriseNumber::parse("0123.456.789").is_some());
    /// assert!(EnterpriseNumber::parse("BE0123456789").is_some());
    /// assert!(EnterpriseNumber::parse("0123 456 789 0").is_none()); // 11 digits
    /// assert!(EnterpriseNumber::parse("9123.456.789").is_none()); // no leading 0
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        if Self::is_valid(value) {
            return Some(Self(value.to_string()));
        }
        let mut digits = String::with_capacity(10);
        for c in value.chars() {
            if c.is_ascii_digit() {
                if digits.len() == 10 {
                    trace!("rejecting enterprise number input with more than 10 digits");
                    return None;
                }
                digits.push(c);
            }
        }
        if digits.len() < 10 {
            trace!("rejecting enterprise number input with fewer than 10 digits");
            return None;
        }
        let canonical = format!("{}.{}.{}", &digits[..4], &digits[4..7], &digits[7..]);
        if Self::is_valid(&canonical) {
            Some(Self(canonical))
        } else {
            trace!("digits of enterprise number input do not form a canonical number");
            None
        }
    }

    /// Attempt to construct an enterprise number from its numeric value, as
    /// returned by [`as_u64`](Self::as_u64).
    ///
    /// # Returns
    ///
    /// * `Some(EnterpriseNumber)` - For values up to 999 999 999
    /// * `None` - For values that do not fit the nine significant digits
    pub fn from_u64(number: u64) -> Option<Self> {
        if number > 999_999_999 {
            return None;
        }
        let raw = format!("{:010}", number);
        Self::parse(&raw)
    }

    /// The canonical string form of this enterprise number.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the canonical string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The numeric value of this enterprise number.
    ///
    /// Concatenates the digit groups at positions 1-3, 5-7 and 9-11 of the
    /// canonical form (the leading zero and the dots are skipped) and reads
    /// them as a base-10 integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kbobce::identifiers::EnterpriseNumber;
    ///
    /// let number = EnterpriseNumber::new("0123.456.789").unwrap();
    /// assert_eq!(number.as_u64(), 123_456_789);
    /// ```
    pub fn as_u64(&self) -> u64 {
        self.0[1..4]
            .chars()
            .chain(self.0[5..8].chars())
            .chain(self.0[9..].chars())
            .fold(0, |acc, c| acc * 10 + u64::from(c as u8 - b'0'))
    }
}

impl fmt::Display for EnterpriseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EnterpriseNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EnterpriseNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for EnterpriseNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EnterpriseNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value)
    }
}
