//! [`Command`] for messaging a [`Property`]'s agent.

use common::operations::{Perform, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Property;
use crate::{
    domain::{
        chat::{self, Message},
        property, user, User,
    },
    infra::{gateway, storage, Gateway, Storage},
    Service,
};

use super::Command;

/// [`Command`] for sending a chat [`Message`] to the agent of a
/// [`Property`].
///
/// The send is charged against the current [`User`]'s quota; an exhausted
/// quota blocks it. The agent's reply is a mocked delayed auto-response.
#[derive(Clone, Debug)]
pub struct SendChatMessage {
    /// ID of the [`Property`] whose agent is messaged.
    pub property_id: property::Id,

    /// [`chat::Text`] of the message.
    pub text: chat::Text,
}

/// Output of [`SendChatMessage`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`Message`] sent by the [`User`].
    pub sent: Message,

    /// Auto-reply [`Message`] of the agent.
    pub reply: Message,
}

impl<S, G> Command<SendChatMessage> for Service<S, G>
where
    S: Storage<Update<User>, Ok = (), Err = Traced<storage::Error>>,
    G: Gateway<
        Perform<gateway::RequestAgentReply>,
        Ok = chat::Text,
        Err = Traced<gateway::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SendChatMessage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SendChatMessage { property_id, text } = cmd;

        let agent = self
            .catalog()
            .property(&property_id)
            .map(|p| p.agent.clone())
            .ok_or_else(|| E::UnknownProperty(property_id))
            .map_err(tracerr::wrap!())?;

        {
            let mut session = self.session().write().await;
            let Some(user) = session.user.as_mut() else {
                return Err(tracerr::new!(E::NotAuthenticated));
            };

            match user.charge_message() {
                user::Charge::Exhausted => {
                    return Err(tracerr::new!(E::QuotaExhausted));
                }
                user::Charge::Charged => {
                    let user = user.clone();
                    drop(session);
                    self.persist(user).await;
                }
                user::Charge::Unlimited => {}
            }
        }

        let sent = Message {
            author: chat::Author::User,
            text: text.clone(),
            sent_at: chat::SentDateTime::now(),
        };

        let reply_text = self
            .gateway()
            .execute(Perform(gateway::RequestAgentReply { agent, text }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let reply = Message {
            author: chat::Author::Agent,
            text: reply_text,
            sent_at: chat::SentDateTime::now(),
        };

        Ok(Output { sent, reply })
    }
}

/// Error of [`SendChatMessage`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Gateway`] call failed.
    ///
    /// [`Gateway`]: crate::infra::Gateway
    #[display("backend call failed: {_0}")]
    Gateway(gateway::Error),

    /// No authenticated [`User`] to send as.
    #[display("no authenticated user")]
    NotAuthenticated,

    /// Message quota of the current [`User`] is exhausted.
    #[display("message quota exhausted")]
    QuotaExhausted,

    /// No [`Property`] with the provided ID exists in the catalog.
    #[display("`Property(id: {_0})` does not exist")]
    #[from(ignore)]
    UnknownProperty(#[error(not(source))] property::Id),
}
