//! [`Command`] for logging a [`User`] in.

use common::operations::{Perform, Update};
use derive_more::{Display, Error, From};
use secrecy::SecretBox;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::user::{Email, Password};
use crate::{
    domain::{
        user::{self, Tier},
        User,
    },
    infra::{gateway, storage, Gateway, Storage},
    Service,
};

use super::Command;

/// [`Command`] for logging a [`User`] in with the submitted credentials.
///
/// Credentials are mock-authenticated: any non-empty pair is accepted by the
/// backend [`Gateway`].
#[derive(Clone, Debug)]
pub struct LogIn {
    /// Submitted [`Email`] input.
    pub email: String,

    /// Submitted [`Password`] input.
    pub password: String,
}

impl<S, G> Command<LogIn> for Service<S, G>
where
    S: Storage<Update<User>, Ok = (), Err = Traced<storage::Error>>,
    G: Gateway<
        Perform<gateway::Authenticate>,
        Ok = gateway::Profile,
        Err = Traced<gateway::Error>,
    >,
{
    type Ok = User;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: LogIn) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let LogIn { email, password } = cmd;

        let email = user::Email::new(email)
            .ok_or(E::MissingCredentials)
            .map_err(tracerr::wrap!())?;
        let password = user::Password::new(password)
            .ok_or(E::MissingCredentials)
            .map_err(tracerr::wrap!())?;

        let profile = self
            .gateway()
            .execute(Perform(gateway::Authenticate {
                email: email.clone(),
                password: SecretBox::new(Box::new(password)),
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let user = User {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email,
            phone: profile.phone,
            age: profile.age,
            sex: profile.sex,
            role: profile.role,
            subscription: Tier::Free,
            messages_used: 0,
            messages_limit: Tier::Free.message_limit(),
        };

        self.session().write().await.user = Some(user.clone());
        self.persist(user.clone()).await;

        Ok(user)
    }
}

/// Error of [`LogIn`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Gateway`] call failed.
    ///
    /// [`Gateway`]: crate::infra::Gateway
    #[display("backend call failed: {_0}")]
    Gateway(gateway::Error),

    /// Either of the submitted credentials is empty.
    #[display("both email and password are required")]
    MissingCredentials,
}
