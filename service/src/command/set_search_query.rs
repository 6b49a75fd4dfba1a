//! [`Command`] for replacing the active [`SearchQuery`].

use std::convert::Infallible;

use derive_more::From;

use crate::{domain::browse::SearchQuery, Service};

use super::Command;

/// [`Command`] for replacing the active [`SearchQuery`].
///
/// An empty input clears the query.
#[derive(Clone, Debug, From)]
pub struct SetSearchQuery {
    /// Submitted query input.
    pub query: String,
}

impl<S, G> Command<SetSearchQuery> for Service<S, G> {
    type Ok = Option<SearchQuery>;
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: SetSearchQuery,
    ) -> Result<Self::Ok, Self::Err> {
        let query = SearchQuery::new(cmd.query);
        self.browse().write().await.query.clone_from(&query);
        Ok(query)
    }
}
