//! Error types for the KBO/BCE data model.
//!
//! Two tiers mirror the two construction paths in this crate: hard
//! validation failures raised by direct constructors, and precondition
//! failures raised by aggregate builders at `build()` time. The lenient
//! `parse` factories never surface either tier; they return `None` instead.

/// Validation errors raised by value-object constructors.
///
/// Each variant carries the attribute it concerns so bulk-ingestion callers
/// can report which column of a source row was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A required string is empty or whitespace-only
    #[error("'{attribute}' must not be blank")]
    Blank { attribute: &'static str },

    /// A string exceeds its maximum length
    #[error("'{attribute}' has {actual} characters, at most {max} allowed")]
    TooLong {
        attribute: &'static str,
        max: usize,
        actual: usize,
    },

    /// A string does not have its required exact length
    #[error("'{attribute}' has {actual} characters, exactly {expected} required")]
    WrongLength {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A collection that must hold at least one element is empty
    #[error("'{attribute}' must not be empty")]
    Empty { attribute: &'static str },

    /// Not a correctly formatted enterprise number
    #[error("'{value}' is not a valid enterprise number")]
    InvalidEnterpriseNumber { value: String },

    /// Not a correctly formatted establishment number
    #[error("'{value}' is not a valid establishment number")]
    InvalidEstablishmentNumber { value: String },

    /// Not a correctly formatted social security number
    #[error("'{value}' is not a valid social security number")]
    InvalidSocialSecurityNumber { value: String },

    /// A NACE vintage other than the two published ones
    #[error("{year} is not a published NACE vintage (2003 or 2008)")]
    UnknownNaceVersion { year: u16 },
}

impl ValidationError {
    /// Create a blank-string error for the given attribute.
    pub fn blank(attribute: &'static str) -> Self {
        Self::Blank { attribute }
    }

    /// Create a maximum-length error for the given attribute.
    pub fn too_long(attribute: &'static str, max: usize, actual: usize) -> Self {
        Self::TooLong {
            attribute,
            max,
            actual,
        }
    }

    /// Create an exact-length error for the given attribute.
    pub fn wrong_length(attribute: &'static str, expected: usize, actual: usize) -> Self {
        Self::WrongLength {
            attribute,
            expected,
            actual,
        }
    }
}

/// Errors raised by aggregate builders when `build()` is called before all
/// required scalar fields have been supplied.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A required field was never set on the builder
    #[error("required field '{field}' was not supplied before build()")]
    MissingField { field: &'static str },
}

impl BuildError {
    /// Create a missing-field error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

// Result type aliases for convenience
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type BuildResult<T> = Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let error = ValidationError::too_long("zipcode", 20, 33);
        assert!(error.to_string().contains("zipcode"));
        assert!(error.to_string().contains("20"));

        let error = ValidationError::blank("denomination");
        assert!(error.to_string().contains("denomination"));
    }

    #[test]
    fn test_build_error_names_field() {
        let error = BuildError::missing("start date");
        assert!(error.to_string().contains("start date"));
    }
}
