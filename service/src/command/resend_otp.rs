//! [`Command`] for re-dispatching an OTP.

use common::operations::Perform;
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::user::Registration;
use crate::{
    infra::{gateway, Gateway},
    Service,
};

use super::Command;

/// [`Command`] for re-dispatching the OTP of the pending [`Registration`].
#[derive(Clone, Copy, Debug)]
pub struct ResendOtp;

impl<S, G> Command<ResendOtp> for Service<S, G>
where
    G: Gateway<
        Perform<gateway::DispatchOtp>,
        Ok = (),
        Err = Traced<gateway::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: ResendOtp) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let phone = self
            .session()
            .read()
            .await
            .pending
            .as_ref()
            .map(|r| r.phone.clone())
            .ok_or(E::NoPendingRegistration)
            .map_err(tracerr::wrap!())?;

        self.gateway()
            .execute(Perform(gateway::DispatchOtp { phone }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`ResendOtp`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Gateway`] call failed.
    ///
    /// [`Gateway`]: crate::infra::Gateway
    #[display("backend call failed: {_0}")]
    Gateway(gateway::Error),

    /// No [`Registration`] is pending confirmation.
    #[display("no registration is pending confirmation")]
    NoPendingRegistration,
}
