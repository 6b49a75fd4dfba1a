//! [`Command`] for switching the subscription [`Tier`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{user::Tier, User},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for switching the current [`User`] to a paid [`Tier`].
///
/// Resets the used messages counter and applies the [`Tier`]'s message
/// limit.
#[derive(Clone, Copy, Debug, From)]
pub struct UpdateSubscription {
    /// [`Tier`] to switch to.
    pub tier: Tier,
}

impl<S, G> Command<UpdateSubscription> for Service<S, G>
where
    S: Storage<Update<User>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateSubscription,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateSubscription { tier } = cmd;

        if tier == Tier::Free {
            return Err(tracerr::new!(E::TierNotPurchasable));
        }

        let mut session = self.session().write().await;
        let Some(user) = session.user.as_mut() else {
            return Err(tracerr::new!(E::NotAuthenticated));
        };

        user.subscribe(tier);
        let user = user.clone();
        drop(session);

        self.persist(user.clone()).await;

        Ok(user)
    }
}

/// Error of [`UpdateSubscription`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// No authenticated [`User`] to switch.
    #[display("no authenticated user")]
    NotAuthenticated,

    /// [`Tier::Free`] cannot be purchased.
    #[display("the free tier cannot be purchased")]
    TierNotPurchasable,
}
