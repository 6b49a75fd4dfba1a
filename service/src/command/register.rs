//! [`Command`] for submitting a [`Registration`].

use common::operations::Perform;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::user::Registration,
    infra::{gateway, Gateway},
    Service,
};

use super::Command;

/// [`Command`] for submitting a [`Registration`] pending OTP confirmation.
#[derive(Clone, Debug, From)]
pub struct Register {
    /// Submitted [`Registration`] fields.
    pub registration: Registration,
}

impl<S, G> Command<Register> for Service<S, G>
where
    G: Gateway<
        Perform<gateway::DispatchOtp>,
        Ok = (),
        Err = Traced<gateway::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: Register) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Register { registration } = cmd;

        if !registration.terms_accepted {
            return Err(tracerr::new!(E::TermsNotAccepted));
        }

        self.gateway()
            .execute(Perform(gateway::DispatchOtp {
                phone: registration.phone.clone(),
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // A newer submission replaces any previous pending one.
        self.session().write().await.pending = Some(registration);

        Ok(())
    }
}

/// Error of [`Register`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Gateway`] call failed.
    ///
    /// [`Gateway`]: crate::infra::Gateway
    #[display("backend call failed: {_0}")]
    Gateway(gateway::Error),

    /// Terms of service were not accepted.
    #[display("terms of service must be accepted")]
    TermsNotAccepted,
}
