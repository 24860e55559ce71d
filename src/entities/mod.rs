//! Entities of the KBO/BCE register.
//!
//! Leaf records ([`Denomination`], [`Address`], [`Contact`], [`Activity`])
//! are immutable composites of reference codes and free text, each
//! independently constructible and validated. The two aggregates,
//! [`Enterprise`] and [`Establishment`], own sets of those records and are
//! assembled through fluent builders that accept children in any order and
//! multiplicity.
//!
//! Aggregates are immutable once built and hold no interior mutability, so
//! they can be shared freely across threads. Builders are single-owner
//! staging objects; `build()` consumes them.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kbobce::codes::{Descriptions, JuridicalSituation, Status, TypeOfEnterprise};
//! use kbobce::entities::Enterprise;
//! use kbobce::identifiers::EnterpriseNumber;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let enterprise = Enterprise::builder()
//!         .with_enterprise_number(EnterpriseNumber::new("0123.456.789")?)
//!         .with_status(Status::new("AC", Descriptions::default())?)
//!         .with_juridical_situation(JuridicalSituation::new("000", Descriptions::default())?)
//!         .with_type_of_enterprise(TypeOfEnterprise::new("2", Descriptions::default())?)
//!         .with_start_date(NaiveDate::from_ymd_opt(1999, 4, 21).unwrap())
//!         .build()?;
//!     assert_eq!(enterprise.enterprise_number().as_str(), "0123.456.789");
//!     Ok(())
//! }
//! ```

mod activity;
mod address;
mod contact;
mod denomination;
mod enterprise;
mod establishment;

pub use activity::Activity;
pub use address::Address;
pub use contact::Contact;
pub use denomination::Denomination;
pub use enterprise::{Enterprise, EnterpriseBuilder};
pub use establishment::{Establishment, EstablishmentBuilder};
