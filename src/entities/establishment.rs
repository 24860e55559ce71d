//! An establishment, a place of business of an enterprise.

use crate::entities::{Activity, Address, Contact, Denomination};
use crate::error::{BuildError, BuildResult};
use crate::identifiers::EstablishmentNumber;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// A place of business of an enterprise.
///
/// Keyed by its [`EstablishmentNumber`]; equality and hashing consider the
/// number alone, so two snapshots of the same establishment taken from
/// different extracts compare equal. Child records live in sets that
/// deduplicate by the child's own equality.
///
/// Construct instances through [`Establishment::builder`]. Once built, an
/// establishment is immutable.
///
/// ## Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use kbobce::entities::Establishment;
/// use kbobce::identifiers::EstablishmentNumber;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let establishment = Establishment::builder()
///         .with_establishment_number(EstablishmentNumber::new("2.123.456.789")?)
///         .with_start_date(NaiveDate::from_ymd_opt(2001, 9, 14).unwrap())
///         .build()?;
///     assert!(establishment.denominations().is_empty());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Establishment {
    establishment_number: EstablishmentNumber,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    denominations: HashSet<Denomination>,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    addresses: HashSet<Address>,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    contacts: HashSet<Contact>,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    activities: HashSet<Activity>,
    start_date: NaiveDate,
}

impl Establishment {
    /// A new builder for fluent construction of an establishment.
    pub fn builder() -> EstablishmentBuilder {
        EstablishmentBuilder::default()
    }

    /// The identifying number of this establishment.
    pub fn establishment_number(&self) -> &EstablishmentNumber {
        &self.establishment_number
    }

    /// The names this establishment is registered under.
    pub fn denominations(&self) -> &HashSet<Denomination> {
        &self.denominations
    }

    /// The addresses of this establishment.
    pub fn addresses(&self) -> &HashSet<Address> {
        &self.addresses
    }

    /// The contact details of this establishment.
    pub fn contacts(&self) -> &HashSet<Contact> {
        &self.contacts
    }

    /// The economic activities of this establishment.
    pub fn activities(&self) -> &HashSet<Activity> {
        &self.activities
    }

    /// The date this establishment started operating.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }
}

// Identity by establishment number alone.
impl PartialEq for Establishment {
    fn eq(&self, other: &Self) -> bool {
        self.establishment_number == other.establishment_number
    }
}

impl Eq for Establishment {}

impl Hash for Establishment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.establishment_number.hash(state);
    }
}

/// Mutable staging object for assembling an [`Establishment`].
///
/// Children may be added in any order and multiplicity; duplicates collapse
/// through the child's own equality. `build()` consumes the builder, so a
/// built establishment can never observe later mutation.
#[derive(Debug, Default)]
pub struct EstablishmentBuilder {
    establishment_number: Option<EstablishmentNumber>,
    denominations: HashSet<Denomination>,
    addresses: HashSet<Address>,
    contacts: HashSet<Contact>,
    activities: HashSet<Activity>,
    start_date: Option<NaiveDate>,
}

impl EstablishmentBuilder {
    /// Set the identifying number.
    pub fn with_establishment_number(mut self, establishment_number: EstablishmentNumber) -> Self {
        self.establishment_number = Some(establishment_number);
        self
    }

    /// Set the start date.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Add a single denomination.
    pub fn add_denomination(mut self, denomination: Denomination) -> Self {
        self.denominations.insert(denomination);
        self
    }

    /// Add every denomination in the given collection.
    pub fn add_denominations(mut self, denominations: impl IntoIterator<Item = Denomination>) -> Self {
        self.denominations.extend(denominations);
        self
    }

    /// Add a single address.
    pub fn add_address(mut self, address: Address) -> Self {
        self.addresses.insert(address);
        self
    }

    /// Add every address in the given collection.
    pub fn add_addresses(mut self, addresses: impl IntoIterator<Item = Address>) -> Self {
        self.addresses.extend(addresses);
        self
    }

    /// Add a single contact.
    pub fn add_contact(mut self, contact: Contact) -> Self {
        self.contacts.insert(contact);
        self
    }

    /// Add every contact in the given collection.
    pub fn add_contacts(mut self, contacts: impl IntoIterator<Item = Contact>) -> Self {
        self.contacts.extend(contacts);
        self
    }

    /// Add a single activity.
    pub fn add_activity(mut self, activity: Activity) -> Self {
        self.activities.insert(activity);
        self
    }

    /// Add every activity in the given collection.
    pub fn add_activities(mut self, activities: impl IntoIterator<Item = Activity>) -> Self {
        self.activities.extend(activities);
        self
    }

    /// Build the immutable [`Establishment`].
    ///
    /// # Returns
    ///
    /// * `Ok(Establishment)` - If the number and start date were supplied
    /// * `Err(BuildError)` - Naming the first missing required field
    pub fn build(self) -> BuildResult<Establishment> {
        let establishment_number = self
            .establishment_number
            .ok_or(BuildError::missing("establishment number"))?;
        let start_date = self.start_date.ok_or(BuildError::missing("start date"))?;
        Ok(Establishment {
            establishment_number,
            denominations: self.denominations,
            addresses: self.addresses,
            contacts: self.contacts,
            activities: self.activities,
            start_date,
        })
    }
}
