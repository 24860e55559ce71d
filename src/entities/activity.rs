//! An economic activity of an enterprise or establishment.

use crate::codes::{ActivityGroup, Classification, Nace};
use serde::{Deserialize, Serialize};

/// An economic activity of an enterprise or establishment.
///
/// Ties a [`Nace`] activity code to the group it is registered under and its
/// classification (main, secondary or ancillary). All three parts are
/// required, so construction cannot fail.
///
/// ## Examples
///
/// ```rust
/// use kbobce::codes::{ActivityGroup, Classification, Descriptions, Nace, NaceVersion};
/// use kbobce::entities::Activity;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let activity = Activity::new(
///         ActivityGroup::new("001", Descriptions::default())?,
///         Nace::new(NaceVersion::Nace2008, "62010", Descriptions::default())?,
///         Classification::new("MAIN", Descriptions::default())?,
///     );
///     assert_eq!(activity.nace().code(), "62010");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    activity_group: ActivityGroup,
    nace: Nace,
    classification: Classification,
}

impl Activity {
    /// Create a new Activity.
    ///
    /// Every part is required and already validated by its own type, so this
    /// constructor is infallible.
    pub fn new(activity_group: ActivityGroup, nace: Nace, classification: Classification) -> Self {
        Self {
            activity_group,
            nace,
            classification,
        }
    }

    /// The group this activity is registered under.
    pub fn activity_group(&self) -> &ActivityGroup {
        &self.activity_group
    }

    /// The NACE code of this activity.
    pub fn nace(&self) -> &Nace {
        &self.nace
    }

    /// The classification of this activity.
    pub fn classification(&self) -> &Classification {
        &self.classification
    }
}
