//! A registered name of an enterprise or establishment.

use crate::codes::{Language, TypeOfDenomination};
use crate::error::ValidationResult;
use crate::validation;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A registered name of an enterprise or establishment in a given language.
///
/// An entity typically carries several denominations: its social name,
/// abbreviation and commercial name, each in one or more languages. The
/// name itself is free text of 1 to 320 characters.
///
/// ## Examples
///
/// ```rust
/// use kbobce::codes::{Descriptions, Language, TypeOfDenomination};
/// use kbobce::entities::Denomination;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let denomination = Denomination::new(
///         Language::new("2", Descriptions::default())?,
///         TypeOfDenomination::new("001", Descriptions::default())?,
///         "Proximus",
///     )?;
///     assert_eq!(denomination.value(), "Proximus");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Denomination {
    language: Language,
    type_of_denomination: TypeOfDenomination,
    value: String,
}

impl Denomination {
    /// Create a new Denomination with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(Denomination)` - If the value is non-blank and at most 320
    ///   characters
    /// * `Err(ValidationError)` - Otherwise
    pub fn new(
        language: Language,
        type_of_denomination: TypeOfDenomination,
        value: impl Into<String>,
    ) -> ValidationResult<Self> {
        let value = value.into();
        validation::not_blank("denomination", &value)?;
        validation::max_length("denomination", 320, &value)?;
        Ok(Self {
            language,
            type_of_denomination,
            value,
        })
    }

    /// The language this name is registered in.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The type of this name (social, abbreviation, commercial, ...).
    pub fn type_of_denomination(&self) -> &TypeOfDenomination {
        &self.type_of_denomination
    }

    /// The name itself.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Deserialize)]
struct RawDenomination {
    language: Language,
    type_of_denomination: TypeOfDenomination,
    value: String,
}

impl<'de> Deserialize<'de> for Denomination {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawDenomination::deserialize(deserializer)?;
        Self::new(raw.language, raw.type_of_denomination, raw.value)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Descriptions;

    fn language() -> Language {
        Language::new("2", Descriptions::default()).unwrap()
    }

    fn type_of_denomination() -> TypeOfDenomination {
        TypeOfDenomination::new("001", Descriptions::default()).unwrap()
    }

    #[test]
    fn test_valid_denomination() {
        let denomination =
            Denomination::new(language(), type_of_denomination(), "Acme BVBA").unwrap();
        assert_eq!(denomination.value(), "Acme BVBA");
        assert_eq!(denomination.language().code(), "2");
    }

    #[test]
    fn test_blank_value_rejected() {
        assert!(Denomination::new(language(), type_of_denomination(), "").is_err());
        assert!(Denomination::new(language(), type_of_denomination(), "   ").is_err());
    }

    #[test]
    fn test_length_boundary() {
        let at_limit = "x".repeat(320);
        assert!(Denomination::new(language(), type_of_denomination(), at_limit).is_ok());

        let over_limit = "x".repeat(321);
        assert!(Denomination::new(language(), type_of_denomination(), over_limit).is_err());
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let a = Denomination::new(language(), type_of_denomination(), "Acme").unwrap();
        let b = Denomination::new(language(), type_of_denomination(), "Acme").unwrap();
        let c = Denomination::new(language(), type_of_denomination(), "Other").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let other_language = Language::new("1", Descriptions::default()).unwrap();
        let d = Denomination::new(other_language, type_of_denomination(), "Acme").unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn test_display() {
        let denomination = Denomination::new(language(), type_of_denomination(), "Acme").unwrap();
        assert_eq!(format!("{}", denomination), "Acme");
    }

    #[test]
    fn test_serialization_round_trip() {
        let denomination = Denomination::new(language(), type_of_denomination(), "Acme").unwrap();
        let json = serde_json::to_string(&denomination).unwrap();
        let back: Denomination = serde_json::from_str(&json).unwrap();
        assert_eq!(back, denomination);
    }

    #[test]
    fn test_deserialization_validates_value() {
        let json = format!(
            r#"{{"language":{{"code":"2"}},"type_of_denomination":{{"code":"001"}},"value":"{}"}}"#,
            "x".repeat(321)
        );
        let result: Result<Denomination, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
