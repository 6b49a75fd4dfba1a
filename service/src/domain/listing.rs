//! Listing submission definitions.

use common::{unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use uuid::Uuid;

#[cfg(doc)]
use common::DateTime;
#[cfg(doc)]
use super::User;
use super::{city, property, user};

/// Accepted property listing submission.
///
/// Drafts are acknowledged only: the catalog itself is immutable input and
/// never gains entries from them.
#[derive(Clone, Debug)]
pub struct Draft {
    /// ID of this [`Draft`].
    pub id: Id,

    /// [`property::Title`] of the listed property.
    pub title: property::Title,

    /// [`property::Description`] of the listed property, if provided.
    pub description: Option<property::Description>,

    /// Asking [`property::Price`].
    pub price: property::Price,

    /// [`property::Location`] of the listed property.
    pub location: property::Location,

    /// [`city::Name`] the listed property is located in.
    pub city: city::Name,

    /// Number of bedrooms in the listed property.
    pub bhk: property::Bhk,

    /// Transaction [`property::Kind`] of the listed property.
    pub kind: property::Kind,

    /// [`property::Category`] of the listed property, if provided.
    pub category: Option<property::Category>,

    /// Floor [`property::Area`] of the listed property, if provided.
    pub area: Option<property::Area>,

    /// ID of the [`User`] who submitted this [`Draft`].
    pub submitted_by: user::Id,

    /// [`DateTime`] when this [`Draft`] was submitted.
    pub submitted_at: SubmissionDateTime,
}

/// ID of a [`Draft`].
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, FromStr, Hash, Into,
    PartialEq,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// [`DateTime`] when a [`Draft`] was submitted.
pub type SubmissionDateTime = DateTimeOf<(Draft, unit::Submission)>;
