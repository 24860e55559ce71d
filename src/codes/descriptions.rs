//! Language-keyed descriptive text attached to a reference code.

use serde::{Deserialize, Serialize};

/// Descriptions of a reference code in the three dataset languages.
///
/// The KBO/BCE code tables carry descriptive text in Dutch, French and/or
/// German; any subset may be present. Descriptions are metadata and never
/// take part in code identity.
///
/// ## Examples
///
/// ```rust
/// use kbobce::codes::Descriptions;
///
/// let descriptions = Descriptions::from_pairs([
///     ("NL".to_string(), "Actief".to_string()),
///     ("FR".to_string(), "Actif".to_string()),
/// ]);
/// assert_eq!(descriptions.nl(), Some("Actief"));
/// assert_eq!(descriptions.de(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descriptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    de: Option<String>,
}

impl Descriptions {
    /// Create descriptions from explicit per-language values.
    pub fn new(nl: Option<String>, fr: Option<String>, de: Option<String>) -> Self {
        Self { nl, fr, de }
    }

    /// Create descriptions from `(language key, text)` pairs as they appear
    /// in the code-table extract files. Recognized keys are `NL`, `FR` and
    /// `DE`; other keys are ignored. A repeated key keeps the last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut descriptions = Self::default();
        for (language, text) in pairs {
            match language.as_str() {
                "NL" => descriptions.nl = Some(text),
                "FR" => descriptions.fr = Some(text),
                "DE" => descriptions.de = Some(text),
                _ => {}
            }
        }
        descriptions
    }

    /// The Dutch description, if present.
    pub fn nl(&self) -> Option<&str> {
        self.nl.as_deref()
    }

    /// The French description, if present.
    pub fn fr(&self) -> Option<&str> {
        self.fr.as_deref()
    }

    /// The German description, if present.
    pub fn de(&self) -> Option<&str> {
        self.de.as_deref()
    }

    /// True if no description is present in any language.
    pub fn is_empty(&self) -> bool {
        self.nl.is_none() && self.fr.is_none() && self.de.is_none()
    }
}
