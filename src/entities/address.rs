//! A registered address of an enterprise or establishment.

use crate::codes::TypeOfAddress;
use crate::error::ValidationResult;
use crate::validation;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A registered address of an enterprise or establishment.
///
/// The register records addresses bilingually: country, municipality and
/// street each appear in Dutch and French. The country fields are only
/// filled for addresses outside Belgium. Every text field is optional in the
/// source data and stored here as an empty string when absent, so accessors
/// never return an option.
///
/// An address that has been struck from the register carries the date of
/// striking off; `date_striking_off() == None` means the address is
/// currently in force. The striking-off date takes part in equality, so the
/// same street address in force and struck off are two distinct values.
///
/// ## Examples
///
/// ```rust
/// use kbobce::codes::{Descriptions, TypeOfAddress};
/// use kbobce::entities::Address;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let address = Address::new(
///         TypeOfAddress::new("REGO", Descriptions::default())?,
///         None,
///         None,
///         Some("1000".to_string()),
///         Some("Brussel".to_string()),
///         Some("Bruxelles".to_string()),
///         Some("Koning Albert II-laan".to_string()),
///         Some("Boulevard Roi Albert II".to_string()),
///         Some("27".to_string()),
///         None,
///         None,
///         None,
///     )?;
///     assert_eq!(address.zipcode(), "1000");
///     assert_eq!(address.country_nl(), "");
///     assert!(!address.is_struck_off());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    type_of_address: TypeOfAddress,
    #[serde(skip_serializing_if = "String::is_empty")]
    country_nl: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    country_fr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    zipcode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    municipality_nl: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    municipality_fr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    street_nl: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    street_fr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    house_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    box_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    extra_address_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_striking_off: Option<NaiveDate>,
}

impl Address {
    /// Create a new Address with validation.
    ///
    /// # Arguments
    ///
    /// * `type_of_address` - The kind of address (registered office, ...)
    /// * `country_nl` - Country name in Dutch, for addresses outside Belgium
    /// * `country_fr` - Country name in French, for addresses outside Belgium
    /// * `zipcode` - Postal code
    /// * `municipality_nl` - Municipality name in Dutch
    /// * `municipality_fr` - Municipality name in French
    /// * `street_nl` - Street name in Dutch
    /// * `street_fr` - Street name in French
    /// * `house_number` - House number, excluding the box
    /// * `box_number` - Box number
    /// * `extra_address_info` - Extra information such as a building name
    /// * `date_striking_off` - Date the address was struck off, if it was
    ///
    /// # Returns
    ///
    /// * `Ok(Address)` - If every supplied field is within its length limit
    /// * `Err(ValidationError)` - Otherwise
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        type_of_address: TypeOfAddress,
        country_nl: Option<String>,
        country_fr: Option<String>,
        zipcode: Option<String>,
        municipality_nl: Option<String>,
        municipality_fr: Option<String>,
        street_nl: Option<String>,
        street_fr: Option<String>,
        house_number: Option<String>,
        box_number: Option<String>,
        extra_address_info: Option<String>,
        date_striking_off: Option<NaiveDate>,
    ) -> ValidationResult<Self> {
        let country_nl = checked("country NL", 100, country_nl)?;
        let country_fr = checked("country FR", 100, country_fr)?;
        let zipcode = checked("zipcode", 20, zipcode)?;
        let municipality_nl = checked("municipality NL", 200, municipality_nl)?;
        let municipality_fr = checked("municipality FR", 200, municipality_fr)?;
        let street_nl = checked("street NL", 200, street_nl)?;
        let street_fr = checked("street FR", 200, street_fr)?;
        let house_number = checked("house number", 22, house_number)?;
        let box_number = checked("box number", 20, box_number)?;
        let extra_address_info = checked("extra address info", 80, extra_address_info)?;

        Ok(Self {
            type_of_address,
            country_nl,
            country_fr,
            zipcode,
            municipality_nl,
            municipality_fr,
            street_nl,
            street_fr,
            house_number,
            box_number,
            extra_address_info,
            date_striking_off,
        })
    }

    /// The kind of this address.
    pub fn type_of_address(&self) -> &TypeOfAddress {
        &self.type_of_address
    }

    /// Country name in Dutch. Empty for addresses in Belgium.
    pub fn country_nl(&self) -> &str {
        &self.country_nl
    }

    /// Country name in French. Empty for addresses in Belgium.
    pub fn country_fr(&self) -> &str {
        &self.country_fr
    }

    /// Postal code. May be empty.
    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    /// Municipality name in Dutch. May be empty.
    pub fn municipality_nl(&self) -> &str {
        &self.municipality_nl
    }

    /// Municipality name in French. May be empty.
    pub fn municipality_fr(&self) -> &str {
        &self.municipality_fr
    }

    /// Street name in Dutch. May be empty.
    pub fn street_nl(&self) -> &str {
        &self.street_nl
    }

    /// Street name in French. May be empty.
    pub fn street_fr(&self) -> &str {
        &self.street_fr
    }

    /// House number, excluding the box number. May be empty.
    pub fn house_number(&self) -> &str {
        &self.house_number
    }

    /// Box number. May be empty.
    pub fn box_number(&self) -> &str {
        &self.box_number
    }

    /// Extra information about the address, such as "City Atrium" or
    /// "North Gate II & III". May be empty.
    pub fn extra_address_info(&self) -> &str {
        &self.extra_address_info
    }

    /// The date this address was struck from the register, if it was.
    pub fn date_striking_off(&self) -> Option<NaiveDate> {
        self.date_striking_off
    }

    /// True if this address has been struck from the register.
    pub fn is_struck_off(&self) -> bool {
        self.date_striking_off.is_some()
    }
}

fn checked(
    attribute: &'static str,
    max: usize,
    value: Option<String>,
) -> ValidationResult<String> {
    match value {
        Some(value) => {
            validation::max_length(attribute, max, &value)?;
            Ok(value)
        }
        None => Ok(String::new()),
    }
}

#[derive(Deserialize)]
struct RawAddress {
    type_of_address: TypeOfAddress,
    #[serde(default)]
    country_nl: Option<String>,
    #[serde(default)]
    country_fr: Option<String>,
    #[serde(default)]
    zipcode: Option<String>,
    #[serde(default)]
    municipality_nl: Option<String>,
    #[serde(default)]
    municipality_fr: Option<String>,
    #[serde(default)]
    street_nl: Option<String>,
    #[serde(default)]
    street_fr: Option<String>,
    #[serde(default)]
    house_number: Option<String>,
    #[serde(default)]
    box_number: Option<String>,
    #[serde(default)]
    extra_address_info: Option<String>,
    #[serde(default)]
    date_striking_off: Option<NaiveDate>,
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAddress::deserialize(deserializer)?;
        Self::new(
            raw.type_of_address,
            raw.country_nl,
            raw.country_fr,
            raw.zipcode,
            raw.municipality_nl,
            raw.municipality_fr,
            raw.street_nl,
            raw.street_fr,
            raw.house_number,
            raw.box_number,
            raw.extra_address_info,
            raw.date_striking_off,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Descriptions;

    fn type_of_address() -> TypeOfAddress {
        TypeOfAddress::new("REGO", Descriptions::default()).unwrap()
    }

    fn brussels_address(date_striking_off: Option<NaiveDate>) -> Address {
        Address::new(
            type_of_address(),
            None,
            None,
            Some("1000".to_string()),
            Some("Brussel".to_string()),
            Some("Bruxelles".to_string()),
            Some("Koning Albert II-laan".to_string()),
            Some("Boulevard Roi Albert II".to_string()),
            Some("27".to_string()),
            Some("b1".to_string()),
            None,
            date_striking_off,
        )
        .unwrap()
    }

    #[test]
    fn test_absent_fields_become_empty_strings() {
        let address = brussels_address(None);
        assert_eq!(address.country_nl(), "");
        assert_eq!(address.country_fr(), "");
        assert_eq!(address.extra_address_info(), "");
        assert_eq!(address.zipcode(), "1000");
    }

    #[test]
    fn test_length_limits() {
        let too_long = "x".repeat(21);
        let result = Address::new(
            type_of_address(),
            None,
            None,
            Some(too_long),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        );
        assert!(result.is_err());

        let at_limit = "x".repeat(20);
        let result = Address::new(
            type_of_address(),
            None,
            None,
            Some(at_limit),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_house_number_limit() {
        let result = Address::new(
            type_of_address(),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            Some("x".repeat(23)),
            None,
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_striking_off() {
        let in_force = brussels_address(None);
        assert!(!in_force.is_struck_off());
        assert_eq!(in_force.date_striking_off(), None);

        let date = NaiveDate::from_ymd_opt(2015, 6, 30).unwrap();
        let struck = brussels_address(Some(date));
        assert!(struck.is_struck_off());
        assert_eq!(struck.date_striking_off(), Some(date));
    }

    #[test]
    fn test_striking_off_date_takes_part_in_equality() {
        let in_force = brussels_address(None);
        let struck = brussels_address(NaiveDate::from_ymd_opt(2015, 6, 30));
        assert_ne!(in_force, struck);
        assert_eq!(in_force, brussels_address(None));
    }

    #[test]
    fn test_serialization_round_trip() {
        let address = brussels_address(NaiveDate::from_ymd_opt(2015, 6, 30));
        let json = serde_json::to_string(&address).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let address = brussels_address(None);
        let json = serde_json::to_string(&address).unwrap();
        assert!(!json.contains("country_nl"));
        assert!(!json.contains("date_striking_off"));
        assert!(json.contains("\"zipcode\":\"1000\""));
    }

    #[test]
    fn test_deserialization_validates_lengths() {
        let json = format!(
            r#"{{"type_of_address":{{"code":"REGO"}},"zipcode":"{}"}}"#,
            "x".repeat(21)
        );
        let result: Result<Address, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
