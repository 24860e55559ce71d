//! NACE economic-activity codes.
//!
//! NACE ("Nomenclature générale des Activités économiques dans les
//! Communautés Européennes") codes classify the economic activity of an
//! enterprise or establishment. The dataset carries codes from two published
//! vintages of the nomenclature, 2003 and 2008; a code is only meaningful
//! together with its vintage, so the vintage takes part in identity.

use crate::codes::Descriptions;
use crate::error::{ValidationError, ValidationResult};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The published vintages of the NACE nomenclature used by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NaceVersion {
    /// The 2003 revision (NACE-BEL 2003)
    Nace2003,
    /// The 2008 revision (NACE-BEL 2008)
    Nace2008,
}

impl NaceVersion {
    /// Resolve a vintage year to its version, if published.
    pub fn from_year(year: u16) -> Option<Self> {
        match year {
            2003 => Some(Self::Nace2003),
            2008 => Some(Self::Nace2008),
            _ => None,
        }
    }

    /// The vintage year of this version.
    pub fn year(self) -> u16 {
        match self {
            Self::Nace2003 => 2003,
            Self::Nace2008 => 2008,
        }
    }
}

/// A validated NACE activity code.
///
/// Unlike the other code tables there is no length contract on the code
/// string; instead the associated vintage must be one of the two published
/// revisions. Equality considers code and version, not descriptions.
///
/// ## Examples
///
/// ```rust
/// use kbobce::codes::{Descriptions, Nace, NaceVersion};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let nace = Nace::new(NaceVersion::Nace2008, "62010", Descriptions::default())?;
///     assert_eq!(nace.year(), 2008);
///
///     // vintage years straight from a source row
///     assert!(Nace::from_year(2003, "62010", Descriptions::default()).is_ok());
///     assert!(Nace::from_year(2014, "62010", Descriptions::default()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Nace {
    version: NaceVersion,
    code: String,
    descriptions: Descriptions,
}

impl Nace {
    /// Check whether the given year is a published NACE vintage.
    pub fn is_valid_year(year: u16) -> bool {
        NaceVersion::from_year(year).is_some()
    }

    /// Create a new NACE code with validation.
    pub fn new(
        version: NaceVersion,
        code: impl Into<String>,
        descriptions: Descriptions,
    ) -> ValidationResult<Self> {
        let code = code.into();
        validation::not_blank("nace code", &code)?;
        Ok(Self {
            version,
            code,
            descriptions,
        })
    }

    /// Create a new NACE code from a raw vintage year, as found in the
    /// activity extract.
    pub fn from_year(
        year: u16,
        code: impl Into<String>,
        descriptions: Descriptions,
    ) -> ValidationResult<Self> {
        let version =
            NaceVersion::from_year(year).ok_or(ValidationError::UnknownNaceVersion { year })?;
        Self::new(version, code, descriptions)
    }

    /// The nomenclature version of this code.
    pub fn version(&self) -> NaceVersion {
        self.version
    }

    /// The vintage year of this code.
    pub fn year(&self) -> u16 {
        self.version.year()
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

// Identity by code and version; descriptions are metadata.
impl PartialEq for Nace {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.version == other.version
    }
}

impl Eq for Nace {}

impl std::hash::Hash for Nace {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.version.hash(state);
    }
}

impl fmt::Display for Nace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl Serialize for Nace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RawNaceRef {
            year: self.version.year(),
            code: &self.code,
            descriptions: &self.descriptions,
        }
        .serialize(serializer)
    }
}

#[derive(Serialize)]
struct RawNaceRef<'a> {
    year: u16,
    code: &'a str,
    #[serde(skip_serializing_if = "Descriptions::is_empty")]
    descriptions: &'a Descriptions,
}

#[derive(Deserialize)]
struct RawNace {
    year: u16,
    code: String,
    #[serde(default)]
    descriptions: Descriptions,
}

impl<'de> Deserialize<'de> for Nace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawNace::deserialize(deserializer)?;
        Self::from_year(raw.year, raw.code, raw.descriptions).map_err(serde::de::Error::custom)
    }
}
