//! Identifier value types of the KBO/BCE register.
//!
//! The register identifies an enterprise by its enterprise number
//! (`0DDD.DDD.DDD`) and each of its places of business by an establishment
//! number (`D.DDD.DDD.DDD`). Both are format-validated wrappers around their
//! canonical string form. The informational RSZ/ONSS social security number
//! is carried as well.
//!
//! Each identifier offers the same contract:
//!
//! - `is_valid` checks a string against the canonical grammar,
//! - `new` constructs strictly and rejects anything not already canonical,
//! - `parse` constructs leniently, stripping separators and prefixes as they
//!   appear in source files ("BE 0123.456.789", "0123456789", ...) and
//!   returning `None` instead of an error when no identifier can be
//!   recovered.
//!
//! The lenient path exists for bulk ingestion, where a malformed row should
//! be skipped by the caller rather than abort a run.

mod enterprise_number;
mod establishment_number;
mod social_security_number;

pub use enterprise_number::EnterpriseNumber;
pub use establishment_number::EstablishmentNumber;
pub use social_security_number::SocialSecurityNumber;
