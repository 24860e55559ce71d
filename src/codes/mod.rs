//! Reference-code types from the KBO/BCE code tables.
//!
//! The dataset ships a handful of code tables (enterprise status, juridical
//! form, address type, ...) that all share one shape: a short identifying
//! code plus descriptive text in up to three languages. They differ only in
//! the length contract the code string must satisfy, so a single generic
//! [`Code`] parameterized by a [`CodeKind`] marker replaces a class per
//! table. The marker fixes the length rule and the attribute name used in
//! error messages; aliases such as [`Status`] and [`JuridicalForm`] name the
//! instantiations.
//!
//! Identity of a code is its code string alone. Descriptions are metadata
//! and never take part in equality or hashing, so two `Status` values with
//! the same code but differently translated tables compare equal.
//!
//! [`Nace`] does not fit the shared shape (no length rule, an extra vintage
//! attribute) and has its own type in this module.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use kbobce::codes::{Descriptions, Status};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let status = Status::new("AC", Descriptions::from_pairs([
//!         ("NL".to_string(), "Actief".to_string()),
//!     ]))?;
//!     assert_eq!(status.code(), "AC");
//!
//!     // one character short of the contract
//!     assert!(Status::new("A", Descriptions::default()).is_err());
//!     Ok(())
//! }
//! ```

mod descriptions;
mod nace;

pub use descriptions::Descriptions;
pub use nace::{Nace, NaceVersion};

use crate::error::ValidationResult;
use crate::validation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Length contract a code string must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// Exactly this many characters
    Exactly(usize),
    /// At most this many characters
    AtMost(usize),
}

impl LengthRule {
    fn check(self, attribute: &'static str, code: &str) -> ValidationResult<()> {
        match self {
            Self::Exactly(expected) => validation::exact_length(attribute, expected, code),
            Self::AtMost(max) => validation::max_length(attribute, max, code),
        }
    }
}

/// Marker trait tying a code table to its validation contract.
pub trait CodeKind {
    /// Attribute name used in error messages
    const ATTRIBUTE: &'static str;
    /// Length contract for the code string
    const LENGTH: LengthRule;
}

/// A validated entry of a KBO/BCE code table.
///
/// Holds the code string plus its [`Descriptions`]. Construction validates
/// that the code is non-blank and satisfies the kind's length contract.
/// Equality and hashing consider the code string only.
pub struct Code<K> {
    code: String,
    descriptions: Descriptions,
    kind: PhantomData<K>,
}

impl<K: CodeKind> Code<K> {
    /// Create a new code with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(Code)` - If the code is non-blank and satisfies the length rule
    /// * `Err(ValidationError)` - Otherwise
    pub fn new(code: impl Into<String>, descriptions: Descriptions) -> ValidationResult<Self> {
        let code = code.into();
        validation::not_blank(K::ATTRIBUTE, &code)?;
        K::LENGTH.check(K::ATTRIBUTE, &code)?;
        Ok(Self {
            code,
            descriptions,
            kind: PhantomData,
        })
    }

    /// Check whether the given string satisfies this kind's code contract.
    pub fn is_valid(code: &str) -> bool {
        !code.chars().all(char::is_whitespace) && K::LENGTH.check(K::ATTRIBUTE, code).is_ok()
    }

    /// The code string.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The per-language descriptions.
    pub fn descriptions(&self) -> &Descriptions {
        &self.descriptions
    }
}

impl<K: CodeKind> fmt::Debug for Code<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Code")
            .field("kind", &K::ATTRIBUTE)
            .field("code", &self.code)
            .field("descriptions", &self.descriptions)
            .finish()
    }
}

impl<K> Clone for Code<K> {
    fn clone(&self) -> Self {
        Self {
            code: self.code.clone(),
            descriptions: self.descriptions.clone(),
            kind: PhantomData,
        }
    }
}

// Identity by code string only; descriptions are metadata.
impl<K> PartialEq for Code<K> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl<K> Eq for Code<K> {}

impl<K> Hash for Code<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl<K: CodeKind> fmt::Display for Code<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl<K: CodeKind> Serialize for Code<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RawCodeRef {
            code: &self.code,
            descriptions: &self.descriptions,
        }
        .serialize(serializer)
    }
}

#[derive(Serialize)]
struct RawCodeRef<'a> {
    code: &'a str,
    #[serde(skip_serializing_if = "Descriptions::is_empty")]
    descriptions: &'a Descriptions,
}

#[derive(Deserialize)]
struct RawCode {
    code: String,
    #[serde(default)]
    descriptions: Descriptions,
}

impl<'de, K: CodeKind> Deserialize<'de> for Code<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawCode::deserialize(deserializer)?;
        Self::new(raw.code, raw.descriptions).map_err(serde::de::Error::custom)
    }
}

/// Marker types for the code tables in the dataset.
pub mod kind {
    use super::{CodeKind, LengthRule};

    macro_rules! code_kind {
        ($(#[$doc:meta])* $name:ident, $attribute:literal, $rule:expr) => {
            $(#[$doc])*
            pub struct $name;

            impl CodeKind for $name {
                const ATTRIBUTE: &'static str = $attribute;
                const LENGTH: LengthRule = $rule;
            }
        };
    }

    code_kind!(
        /// Language of a denomination
        Language,
        "language code",
        LengthRule::Exactly(1)
    );
    code_kind!(
        /// Type of a registered enterprise
        TypeOfEnterprise,
        "type of enterprise code",
        LengthRule::Exactly(1)
    );
    code_kind!(
        /// Status of an enterprise, usually active
        Status,
        "status code",
        LengthRule::Exactly(2)
    );
    code_kind!(
        /// Legal structure of an enterprise
        JuridicalForm,
        "juridical form code",
        LengthRule::Exactly(3)
    );
    code_kind!(
        /// Current legal situation of an enterprise
        JuridicalSituation,
        "juridical situation code",
        LengthRule::Exactly(3)
    );
    code_kind!(
        /// Type of a registered name
        TypeOfDenomination,
        "type of denomination code",
        LengthRule::Exactly(3)
    );
    code_kind!(
        /// Type of a registered address
        TypeOfAddress,
        "type of address code",
        LengthRule::Exactly(4)
    );
    code_kind!(
        /// Kind of entity contact data belongs to
        EntityContact,
        "entity contact code",
        LengthRule::AtMost(3)
    );
    code_kind!(
        /// Kind of contact data (telephone, email, web)
        ContactType,
        "contact type code",
        LengthRule::AtMost(5)
    );
    code_kind!(
        /// Grouping of economic activities
        ActivityGroup,
        "activity group code",
        LengthRule::AtMost(6)
    );
    code_kind!(
        /// Rank of an activity (main, secondary, ancillary)
        Classification,
        "classification code",
        LengthRule::AtMost(4)
    );
}

/// The language of a denomination.
pub type Language = Code<kind::Language>;
/// The type of an enterprise.
pub type TypeOfEnterprise = Code<kind::TypeOfEnterprise>;
/// The status of an enterprise.
pub type Status = Code<kind::Status>;
/// The juridical form of an enterprise.
pub type JuridicalForm = Code<kind::JuridicalForm>;
/// The juridical situation of an enterprise.
pub type JuridicalSituation = Code<kind::JuridicalSituation>;
/// The type of a denomination.
pub type TypeOfDenomination = Code<kind::TypeOfDenomination>;
/// The type of an address.
pub type TypeOfAddress = Code<kind::TypeOfAddress>;
/// The kind of entity a contact record belongs to.
pub type EntityContact = Code<kind::EntityContact>;
/// The kind of a contact record.
pub type ContactType = Code<kind::ContactType>;
/// The group of an activity.
pub type ActivityGroup = Code<kind::ActivityGroup>;
/// The classification of an activity.
pub type Classification = Code<kind::Classification>;
