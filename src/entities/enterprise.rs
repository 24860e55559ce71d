//! An enterprise, the main entity of the register.

use crate::codes::{JuridicalForm, JuridicalSituation, Status, TypeOfEnterprise};
use crate::entities::{Activity, Address, Contact, Denomination, Establishment};
use crate::error::{BuildError, BuildResult};
use crate::identifiers::{EnterpriseNumber, EstablishmentNumber};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// A registered Belgian enterprise.
///
/// The main entity of the register, keyed by its [`EnterpriseNumber`].
/// Equality and hashing consider the number alone. Besides its own child
/// records an enterprise owns the set of its establishments.
///
/// The juridical form is the one scalar field the register leaves optional:
/// natural persons carry none.
///
/// Construct instances through [`Enterprise::builder`]. Once built, an
/// enterprise is immutable and safe to share across threads.
///
/// ## Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use kbobce::codes::{Descriptions, JuridicalSituation, Status, TypeOfEnterprise};
/// use kbobce::entities::Enterprise;
/// use kbobce::identifiers::EnterpriseNumber;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let enterprise = Enterprise::builder()
///         .with_enterprise_number(EnterpriseNumber::new("0123.456.789")?)
///         .with_status(Status::new("AC", Descriptions::default())?)
///         .with_juridical_situation(JuridicalSituation::new("000", Descriptions::default())?)
///         .with_type_of_enterprise(TypeOfEnterprise::new("2", Descriptions::default())?)
///         .with_start_date(NaiveDate::from_ymd_opt(1999, 4, 21).unwrap())
///         .build()?;
///     assert!(enterprise.juridical_form().is_none());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enterprise {
    enterprise_number: EnterpriseNumber,
    status: Status,
    juridical_situation: JuridicalSituation,
    type_of_enterprise: TypeOfEnterprise,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    juridical_form: Option<JuridicalForm>,
    start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    denominations: HashSet<Denomination>,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    addresses: HashSet<Address>,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    contacts: HashSet<Contact>,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    activities: HashSet<Activity>,
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    establishments: HashSet<Establishment>,
}

impl Enterprise {
    /// A new builder for fluent construction of an enterprise.
    pub fn builder() -> EnterpriseBuilder {
        EnterpriseBuilder::default()
    }

    /// The identifying number of this enterprise.
    pub fn enterprise_number(&self) -> &EnterpriseNumber {
        &self.enterprise_number
    }

    /// The status of this enterprise.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The juridical situation of this enterprise.
    pub fn juridical_situation(&self) -> &JuridicalSituation {
        &self.juridical_situation
    }

    /// The type of this enterprise.
    pub fn type_of_enterprise(&self) -> &TypeOfEnterprise {
        &self.type_of_enterprise
    }

    /// The juridical form of this enterprise. Natural persons carry none.
    pub fn juridical_form(&self) -> Option<&JuridicalForm> {
        self.juridical_form.as_ref()
    }

    /// The date this enterprise was registered.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The names this enterprise is registered under.
    pub fn denominations(&self) -> &HashSet<Denomination> {
        &self.denominations
    }

    /// The addresses of this enterprise.
    pub fn addresses(&self) -> &HashSet<Address> {
        &self.addresses
    }

    /// The contact details of this enterprise.
    pub fn contacts(&self) -> &HashSet<Contact> {
        &self.contacts
    }

    /// The economic activities of this enterprise.
    pub fn activities(&self) -> &HashSet<Activity> {
        &self.activities
    }

    /// The establishments of this enterprise.
    pub fn establishments(&self) -> &HashSet<Establishment> {
        &self.establishments
    }
}

// Identity by enterprise number alone.
impl PartialEq for Enterprise {
    fn eq(&self, other: &Self) -> bool {
        self.enterprise_number == other.enterprise_number
    }
}

impl Eq for Enterprise {}

impl Hash for Enterprise {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.enterprise_number.hash(state);
    }
}

/// Mutable staging object for assembling an [`Enterprise`].
///
/// Children may be added in any order and multiplicity. Plain child records
/// deduplicate through their own equality. Establishments are staged by
/// their number instead: adding an establishment whose number is already
/// staged replaces the earlier entry, so the last snapshot supplied for a
/// number wins. `build()` consumes the builder.
#[derive(Debug, Default)]
pub struct EnterpriseBuilder {
    enterprise_number: Option<EnterpriseNumber>,
    status: Option<Status>,
    juridical_situation: Option<JuridicalSituation>,
    type_of_enterprise: Option<TypeOfEnterprise>,
    juridical_form: Option<JuridicalForm>,
    start_date: Option<NaiveDate>,
    denominations: HashSet<Denomination>,
    addresses: HashSet<Address>,
    contacts: HashSet<Contact>,
    activities: HashSet<Activity>,
    establishments: HashMap<EstablishmentNumber, Establishment>,
}

impl EnterpriseBuilder {
    /// Set the identifying number.
    pub fn with_enterprise_number(mut self, enterprise_number: EnterpriseNumber) -> Self {
        self.enterprise_number = Some(enterprise_number);
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the juridical situation.
    pub fn with_juridical_situation(mut self, juridical_situation: JuridicalSituation) -> Self {
        self.juridical_situation = Some(juridical_situation);
        self
    }

    /// Set the type of enterprise.
    pub fn with_type_of_enterprise(mut self, type_of_enterprise: TypeOfEnterprise) -> Self {
        self.type_of_enterprise = Some(type_of_enterprise);
        self
    }

    /// Set the juridical form. Optional; natural persons carry none.
    pub fn with_juridical_form(mut self, juridical_form: JuridicalForm) -> Self {
        self.juridical_form = Some(juridical_form);
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

    /// Add a single establishment.
    ///
    /// Establishments are staged by number: a second establishment with the
    /// same number replaces the first. Bulk ingestion reads several partial
    /// snapshots of the same establishment per extract; the most recently
    /// assembled one is the complete one.
    pub fn add_establishment(mut self, establishment: Establishment) -> Self {
        let number = establishment.establishment_number().clone();
        if let Some(previous) = self.establishments.insert(number, establishment) {
            debug!(
                "establishment {} staged twice, keeping the later snapshot",
                previous.establishment_number()
            );
        }
        self
    }

    /// Add every establishment in the given collection, in order.
    pub fn add_establishments(
        mut self,
        establishments: impl IntoIterator<Item = Establishment>,
    ) -> Self {
        for establishment in establishments {
            self = self.add_establishment(establishment);
        }
        self
    }

    /// Build the immutable [`Enterprise`].
    ///
    /// # Returns
    ///
    /// * `Ok(Enterprise)` - If every required scalar field was supplied
    /// * `Err(BuildError)` - Naming the first missing required field
    pub fn build(self) -> BuildResult<Enterprise> {
        let enterprise_number = self
            .enterprise_number
            .ok_or(BuildError::missing("enterprise number"))?;
        let status = self.status.ok_or(BuildError::missing("status"))?;
        let juridical_situation = self
            .juridical_situation
            .ok_or(BuildError::missing("juridical situation"))?;
        let type_of_enterprise = self
            .type_of_enterprise
            .ok_or(BuildError::missing("type of enterprise"))?;
        let start_date = self.start_date.ok_or(BuildError::missing("start date"))?;
        Ok(Enterprise {
            enterprise_number,
            status,
            juridical_situation,
            type_of_enterprise,
            juridical_form: self.juridical_form,
            start_date,
            denominations: self.denominations,
            addresses: self.addresses,
            contacts: self.contacts,
            activities: self.activities,
            establishments: self.establishments.into_values().collect(),
        })
    }
}
