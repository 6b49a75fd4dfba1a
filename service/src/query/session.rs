//! [`Query`] related to the current session.

use std::convert::Infallible;

use crate::{read, Service};

use super::Query;

/// Queries a [`read::session::Snapshot`] of the current session.
#[derive(Clone, Copy, Debug)]
pub struct CurrentSession;

impl<S, G> Query<CurrentSession> for Service<S, G> {
    type Ok = read::session::Snapshot;
    type Err = Infallible;

    async fn execute(&self, _: CurrentSession) -> Result<Self::Ok, Self::Err> {
        let session = self.session().read().await;
        Ok(read::session::Snapshot {
            user: session.user.clone(),
            restoring: session.restoring,
        })
    }
}
