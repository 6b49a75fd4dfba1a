//! [`Command`] for submitting a property listing.

use derive_more::{Display, Error};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::{Property, User};
use crate::{
    domain::{city, listing, property},
    Service,
};

use super::Command;

/// [`Command`] for submitting a new property listing.
///
/// The submission is acknowledged as a [`listing::Draft`]; the [`Property`]
/// catalog itself stays immutable.
#[derive(Clone, Debug)]
pub struct SubmitListing {
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
}

impl<S, G> Command<SubmitListing> for Service<S, G> {
    type Ok = listing::Draft;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitListing,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let submitted_by = self
            .session()
            .read()
            .await
            .user
            .as_ref()
            .map(|u| u.id)
            .ok_or(E::NotAuthenticated)
            .map_err(tracerr::wrap!())?;

        let SubmitListing {
            title,
            description,
            price,
            location,
            city,
            bhk,
            kind,
            category,
            area,
        } = cmd;

        Ok(listing::Draft {
            id: listing::Id::new(),
            title,
            description,
            price,
            location,
            city,
            bhk,
            kind,
            category,
            area,
            submitted_by,
            submitted_at: listing::SubmissionDateTime::now(),
        })
    }
}

/// Error of [`SubmitListing`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// No authenticated [`User`] to submit as.
    #[display("no authenticated user")]
    NotAuthenticated,
}
