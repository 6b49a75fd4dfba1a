//! [`Command`] for partially updating the active [`Filter`].

use std::convert::Infallible;

use derive_more::From;

use crate::{
    domain::browse::{Filter, Patch},
    Service,
};

use super::Command;

/// [`Command`] for merging a [`Patch`] into the active [`Filter`].
///
/// Only the fields the [`Patch`] carries are overwritten.
#[derive(Clone, Debug, From)]
pub struct UpdateFilters {
    /// [`Patch`] to merge.
    pub patch: Patch,
}

impl<S, G> Command<UpdateFilters> for Service<S, G> {
    type Ok = Filter;
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: UpdateFilters,
    ) -> Result<Self::Ok, Self::Err> {
        let mut browse = self.browse().write().await;
        browse.filter.apply(cmd.patch);
        Ok(browse.filter.clone())
    }
}
