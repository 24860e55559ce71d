//! Data model for the Belgian KBO/BCE enterprise register.
//!
//! Immutable value objects for the entities published in the KBO/BCE open
//! dataset: enterprises, establishments, addresses, contacts, activities,
//! denominations and the reference code tables they point into. Validation
//! happens at construction time, so a value that exists is a valid one.
//!
//! # Core Components
//!
//! - [`identifiers`] - Format-validated identifier wrappers
//!   ([`EnterpriseNumber`], [`EstablishmentNumber`]) with strict and lenient
//!   construction paths
//! - [`codes`] - Reference-table entries (status, juridical form, NACE
//!   activity codes, ...) with per-table code contracts
//! - [`entities`] - Leaf records and the [`Enterprise`] / [`Establishment`]
//!   aggregates with their builders
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kbobce::codes::{Descriptions, JuridicalSituation, Status, TypeOfEnterprise};
//! use kbobce::{Enterprise, EnterpriseNumber};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // identifiers parse leniently from formatted source data
//!     let number = EnterpriseNumber::parse("BE 0123.456.789").unwrap();
//!
//!     let enterprise = Enterprise::builder()
//!         .with_enterprise_number(number)
//!         .with_status(Status::new("AC", Descriptions::default())?)
//!         .with_juridical_situation(JuridicalSituation::new("000", Descriptions::default())?)
//!         .with_type_of_enterprise(TypeOfEnterprise::new("2", Descriptions::default())?)
//!         .with_start_date(NaiveDate::from_ymd_opt(1999, 4, 21).unwrap())
//!         .build()?;
//!
//!     assert_eq!(enterprise.enterprise_number().as_u64(), 123_456_789);
//!     Ok(())
//! }
//! ```
//!
//! This crate carries no I/O: the ingestion process that reads the CSV
//! extract files and feeds rows into these constructors lives outside it.

pub mod codes;
pub mod entities;
pub mod error;
pub mod identifiers;
pub mod validation;

// Re-export commonly used types for convenience
pub use entities::{Enterprise, EnterpriseBuilder, Establishment, EstablishmentBuilder};
pub use error::{BuildError, BuildResult, ValidationError, ValidationResult};
pub use identifiers::{EnterpriseNumber, EstablishmentNumber, SocialSecurityNumber};
