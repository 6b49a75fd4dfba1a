//! [`Command`] for charging a message send against the quota.

use common::operations::Update;
use derive_more::{Display, Error};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::user::Charge;
use crate::{
    domain::{user, User},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for charging a single message send against the current
/// [`User`]'s quota.
///
/// [`Charge::Exhausted`] is a regular outcome, not an error: callers block
/// the send and surface an upgrade prompt instead.
#[derive(Clone, Copy, Debug)]
pub struct IncrementMessageCount;

impl<S, G> Command<IncrementMessageCount> for Service<S, G>
where
    S: Storage<Update<User>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = user::Charge;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        _: IncrementMessageCount,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let mut session = self.session().write().await;
        let Some(user) = session.user.as_mut() else {
            return Err(tracerr::new!(E::NotAuthenticated));
        };

        let charge = user.charge_message();
        if charge == user::Charge::Charged {
            let user = user.clone();
            drop(session);
            self.persist(user).await;
        }

        Ok(charge)
    }
}

/// Error of [`IncrementMessageCount`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// No authenticated [`User`] to charge.
    #[display("no authenticated user")]
    NotAuthenticated,
}
