//! [`RestoreSession`] [`Task`].

use std::{convert::Infallible, error::Error};

use common::operations::{By, Perform, Select, Start};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::User,
    infra::{storage, Storage},
    Service,
};

use super::Task;

/// One-shot [`Task`] restoring the stored [`User`] record into the session
/// on startup.
///
/// A failed restore degrades to an anonymous session; either way the
/// session's `restoring` flag is cleared once the task finishes.
#[derive(Clone, Debug)]
pub struct RestoreSession<S> {
    /// [`Service`] instance.
    service: S,
}

impl<S, G> Task<Start<By<RestoreSession<Self>, ()>>> for Service<S, G>
where
    RestoreSession<Service<S, G>>: Task<Perform<()>, Ok = (), Err: Error>,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(_): Start<By<RestoreSession<Self>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let task = RestoreSession {
            service: self.clone(),
        };

        _ = task.execute(Perform(())).await.map_err(|e| {
            log::warn!("`task::RestoreSession` failed: {e}");
        });

        self.session().write().await.restoring = false;

        Ok(())
    }
}

impl<S, G> Task<Perform<()>> for RestoreSession<Service<S, G>>
where
    S: Storage<
        Select<By<Option<User>, ()>>,
        Ok = Option<User>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        let user = self
            .service
            .storage()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        if let Some(user) = user {
            log::debug!("stored session restored for `{}`", user.email);
            self.service.session().write().await.user = Some(user);
        }

        Ok(())
    }
}

/// Error of [`RestoreSession`] execution.
pub type ExecutionError = Traced<storage::Error>;
