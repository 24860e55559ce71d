//! Shared fixtures for integration tests.

use chrono::NaiveDate;
use kbobce::codes::{
    ActivityGroup, Classification, ContactType, Descriptions, EntityContact, JuridicalSituation,
    Language, Nace, NaceVersion, Status, TypeOfAddress, TypeOfDenomination, TypeOfEnterprise,
};
use kbobce::entities::{Activity, Address, Contact, Denomination};

/// Initialize logging once for a test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn nl(text: &str) -> Descriptions {
    Descriptions::new(Some(text.to_string()), None, None)
}

pub fn active_status() -> Status {
    Status::new("AC", nl("Actief")).unwrap()
}

pub fn normal_situation() -> JuridicalSituation {
    JuridicalSituation::new("000", nl("Normale toestand")).unwrap()
}

pub fn legal_person() -> TypeOfEnterprise {
    TypeOfEnterprise::new("2", nl("Rechtspersoon")).unwrap()
}

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1999, 4, 21).unwrap()
}

pub fn dutch() -> Language {
    Language::new("2", nl("Nederlands")).unwrap()
}

pub fn social_name(value: &str) -> Denomination {
    Denomination::new(
        dutch(),
        TypeOfDenomination::new("001", nl("Maatschappelijke naam")).unwrap(),
        value,
    )
    .unwrap()
}

pub fn registered_office(zipcode: &str, street: &str) -> Address {
    Address::new(
        TypeOfAddress::new("REGO", nl("Maatschappelijke zetel")).unwrap(),
        None,
        None,
        Some(zipcode.to_string()),
        Some("Brussel".to_string()),
        Some("Bruxelles".to_string()),
        Some(street.to_string()),
        Some(street.to_string()),
        Some("1".to_string()),
        None,
        None,
        None,
    )
    .unwrap()
}

pub fn email_contact(value: &str) -> Contact {
    Contact::new(
        EntityContact::new("ENT", Descriptions::default()).unwrap(),
        ContactType::new("EMAIL", Descriptions::default()).unwrap(),
        value,
    )
    .unwrap()
}

pub fn main_activity(nace_code: &str) -> Activity {
    Activity::new(
        ActivityGroup::new("001", Descriptions::default()).unwrap(),
        Nace::new(NaceVersion::Nace2008, nace_code, Descriptions::default()).unwrap(),
        Classification::new("MAIN", Descriptions::default()).unwrap(),
    )
}
