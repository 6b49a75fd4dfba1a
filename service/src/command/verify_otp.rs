//! [`Command`] for confirming a pending [`Registration`] with an OTP.

use common::operations::Update;
use derive_more::{Display, Error, From};
use secrecy::ExposeSecret as _;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::user::Registration;
use crate::{
    domain::{
        user::{self, Tier},
        User,
    },
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for confirming the pending [`Registration`] with the
/// submitted OTP code.
#[derive(Clone, Debug, From)]
pub struct VerifyOtp {
    /// Submitted OTP code.
    pub code: String,
}

impl<S, G> Command<VerifyOtp> for Service<S, G>
where
    S: Storage<Update<User>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: VerifyOtp) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let VerifyOtp { code } = cmd;

        let mut session = self.session().write().await;
        if session.pending.is_none() {
            return Err(tracerr::new!(E::NoPendingRegistration));
        }

        // A wrong code keeps the pending registration alive for a retry.
        if code != self.config().otp_secret.expose_secret() {
            return Err(tracerr::new!(E::WrongCode));
        }

        let Some(registration) = session.pending.take() else {
            return Err(tracerr::new!(E::NoPendingRegistration));
        };

        let user = User {
            id: user::Id::new(),
            first_name: registration.first_name,
            last_name: registration.last_name,
            email: registration.email,
            phone: registration.phone,
            age: registration.age,
            sex: registration.sex,
            role: registration.role,
            subscription: Tier::Free,
            messages_used: 0,
            messages_limit: Tier::Free.message_limit(),
        };

        session.user = Some(user.clone());
        drop(session);

        self.persist(user.clone()).await;

        Ok(user)
    }
}

/// Error of [`VerifyOtp`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// No [`Registration`] is pending confirmation.
    #[display("no registration is pending confirmation")]
    NoPendingRegistration,

    /// Submitted code doesn't match the dispatched one.
    #[display("wrong OTP code")]
    WrongCode,
}
