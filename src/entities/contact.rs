//! A contact detail of an enterprise or establishment.

use crate::codes::{ContactType, EntityContact};
use crate::error::ValidationResult;
use crate::validation;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A contact detail of an enterprise or establishment.
///
/// Pairs the kind of entity the detail belongs to with the kind of detail
/// (telephone, email, web address) and the detail itself as free text of 1
/// to 254 characters. The register does not validate the text against the
/// kind, so a `TEL` contact may well carry an address-shaped value; this
/// crate stores it as found.
///
/// ## Examples
///
/// ```rust
/// use kbobce::codes::{ContactType, Descriptions, EntityContact};
/// use kbobce::entities::Contact;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let contact = Contact::new(
///         EntityContact::new("ENT", Descriptions::default())?,
///         ContactType::new("EMAIL", Descriptions::default())?,
///         "info@example.be",
///     )?;
///     assert_eq!(contact.value(), "info@example.be");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Contact {
    entity_contact: EntityContact,
    contact_type: ContactType,
    value: String,
}

impl Contact {
    /// Create a new Contact with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(Contact)` - If the value is non-blank and at most 254
    ///   characters
    /// * `Err(ValidationError)` - Otherwise
    pub fn new(
        entity_contact: EntityContact,
        contact_type: ContactType,
        value: impl Into<String>,
    ) -> ValidationResult<Self> {
        let value = value.into();
        validation::not_blank("contact value", &value)?;
        validation::max_length("contact value", 254, &value)?;
        Ok(Self {
            entity_contact,
            contact_type,
            value,
        })
    }

    /// The kind of entity this contact detail belongs to.
    pub fn entity_contact(&self) -> &EntityContact {
        &self.entity_contact
    }

    /// The kind of contact detail.
    pub fn contact_type(&self) -> &ContactType {
        &self.contact_type
    }

    /// The contact detail itself.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Deserialize)]
struct RawContact {
    entity_contact: EntityContact,
    contact_type: ContactType,
    value: String,
}

impl<'de> Deserialize<'de> for Contact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawContact::deserialize(deserializer)?;
        Self::new(raw.entity_contact, raw.contact_type, raw.value)
            .map_err(serde::de::Error::custom)
    }
}
