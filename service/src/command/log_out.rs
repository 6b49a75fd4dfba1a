//! [`Command`] for logging the current [`User`] out.

use std::convert::Infallible;

use common::operations::{By, Delete};
use tracerr::Traced;

use crate::{
    domain::User,
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for logging the current [`User`] out.
///
/// Always succeeds, clearing the session, any pending registration, and the
/// durable slot.
#[derive(Clone, Copy, Debug)]
pub struct LogOut;

impl<S, G> Command<LogOut> for Service<S, G>
where
    S: Storage<Delete<By<User, ()>>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: LogOut) -> Result<Self::Ok, Self::Err> {
        {
            let mut session = self.session().write().await;
            session.user = None;
            session.pending = None;
        }

        self.erase().await;

        Ok(())
    }
}
