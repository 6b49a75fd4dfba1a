//! [`Query`] related to the browsing state.

use std::convert::Infallible;

use crate::{domain::Browse, Service};

use super::Query;

/// Queries a snapshot of the current [`Browse`] state: the active filter,
/// search query, and favorites.
#[derive(Clone, Copy, Debug)]
pub struct BrowseState;

impl<S, G> Query<BrowseState> for Service<S, G> {
    type Ok = Browse;
    type Err = Infallible;

    async fn execute(&self, _: BrowseState) -> Result<Self::Ok, Self::Err> {
        Ok(self.browse().read().await.clone())
    }
}
