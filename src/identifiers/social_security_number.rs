//! The RSZ/ONSS social security number of an enterprise.

use crate::error::{ValidationError, ValidationResult};
use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The number under which an enterprise is registered with the Belgian
/// social security office (RSZ/ONSS).
///
/// The full form is twelve digits: a three-digit prefix, the seven-digit
/// registration number proper, and a two-digit check number. Older source
/// data sometimes carries only the bare nine-digit registration number;
/// [`parse`](Self::parse) accepts both forms, the strict constructor only
/// the full twelve digits.
///
/// This identifier is informational. It is not a key of any entity in this
/// crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SocialSecurityNumber(String);

impl SocialSecurityNumber {
    /// Check whether the given string is a full twelve-digit social
    /// security number.
    pub fn is_valid(value: &str) -> bool {
        value.len() == 12 && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Create a new SocialSecurityNumber with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(SocialSecurityNumber)` - If the value is exactly twelve digits
    /// * `Err(ValidationError)` - Otherwise
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidSocialSecurityNumber { value });
        }
        Ok(Self(value))
    }

    /// Leniently parse a social security number.
    ///
    /// Strips every non-digit character, then accepts either the full
    /// twelve-digit form or the bare nine-digit registration number. Any
    /// other digit count yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let digits: String = value.chars().filter(char::is_ascii_digit).collect();
        match digits.len() {
            9 | 12 => Some(Self(digits)),
            _ => {
                trace!("rejecting social security number input with {} digits", digits.len());
                None
            }
        }
    }

    /// The digit string of this social security number.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the digit string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SocialSecurityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SocialSecurityNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SocialSecurityNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for SocialSecurityNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SocialSecurityNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value)
    }
}
