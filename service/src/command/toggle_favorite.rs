//! [`Command`] for toggling a favorite.

use std::convert::Infallible;

use derive_more::From;

#[cfg(doc)]
use crate::domain::Property;
use crate::{
    domain::{browse::Toggle, property},
    Service,
};

use super::Command;

/// [`Command`] for toggling membership of a [`Property`] in the favorites
/// set.
#[derive(Clone, Debug, From)]
pub struct ToggleFavorite {
    /// ID of the [`Property`] to toggle.
    pub property_id: property::Id,
}

impl<S, G> Command<ToggleFavorite> for Service<S, G> {
    type Ok = Toggle;
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: ToggleFavorite,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .browse()
            .write()
            .await
            .toggle_favorite(cmd.property_id))
    }
}
