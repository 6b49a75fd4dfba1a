//! [`Command`] for resetting the active [`Filter`].

use std::convert::Infallible;

use crate::{domain::browse::Filter, Service};

use super::Command;

/// [`Command`] for restoring the active [`Filter`] to its defaults.
#[derive(Clone, Copy, Debug)]
pub struct ResetFilters;

impl<S, G> Command<ResetFilters> for Service<S, G> {
    type Ok = Filter;
    type Err = Infallible;

    async fn execute(&self, _: ResetFilters) -> Result<Self::Ok, Self::Err> {
        let mut browse = self.browse().write().await;
        browse.filter = Filter::default();
        Ok(browse.filter.clone())
    }
}
