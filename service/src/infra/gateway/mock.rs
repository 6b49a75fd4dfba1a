//! [`Mock`] [`Gateway`] implementation.

use std::time::Duration;

use common::operations::Perform;
use smart_default::SmartDefault;
use tokio::time;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{chat, user},
    infra::Gateway,
};

use super::{Authenticate, DispatchOtp, Error, Profile, RequestAgentReply};

/// [`Mock`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Artificial delay before every response resolves.
    #[default(Duration::from_secs(1))]
    pub delay: Duration,
}

/// [`Gateway`] resolving every request locally after a fixed delay.
///
/// Stands in for the real backend until one exists: responses are canned and
/// never fail.
#[derive(Clone, Copy, Debug)]
pub struct Mock {
    /// [`Config`] of this [`Mock`].
    config: Config,
}

impl Mock {
    /// Creates a new [`Mock`] [`Gateway`] with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a new [`Mock`] [`Gateway`] resolving immediately, without any
    /// artificial delay.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(Config {
            delay: Duration::ZERO,
        })
    }
}

impl Gateway<Perform<Authenticate>> for Mock {
    type Ok = Profile;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Perform(request): Perform<Authenticate>,
    ) -> Result<Self::Ok, Self::Err> {
        time::sleep(self.config.delay).await;

        log::debug!("authenticated `{}`", request.email);

        Ok(Profile {
            id: user::Id::new(),
            first_name: user::Name::new("John").expect("valid name"),
            last_name: user::Name::new("Doe").expect("valid name"),
            phone: user::Phone::new("+91-9876543210").expect("valid phone"),
            age: user::Age::new(30).expect("valid age"),
            sex: user::Sex::Male,
            role: user::Role::Both,
        })
    }
}

impl Gateway<Perform<DispatchOtp>> for Mock {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Perform(request): Perform<DispatchOtp>,
    ) -> Result<Self::Ok, Self::Err> {
        time::sleep(self.config.delay).await;

        log::debug!("one-time password dispatched to `{}`", request.phone);

        Ok(())
    }
}

impl Gateway<Perform<RequestAgentReply>> for Mock {
    type Ok = chat::Text;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Perform(request): Perform<RequestAgentReply>,
    ) -> Result<Self::Ok, Self::Err> {
        time::sleep(self.config.delay).await;

        Ok(chat::Text::new(format!(
            "Hi, {} here. Thanks for reaching out, I'll get back to you \
             shortly!",
            request.agent.name,
        ))
        .expect("valid text"))
    }
}
