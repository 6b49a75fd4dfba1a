//! [`Gateway`]-related implementations.

pub mod mock;

use derive_more::{Display, Error as StdError};
use secrecy::SecretBox;

use crate::domain::{chat, property, user};

#[cfg(doc)]
use crate::domain::User;

pub use self::mock::Mock;

/// Backend boundary operation.
///
/// Every remote interaction of the application goes through this boundary,
/// so a real backend can later replace the mocked one without touching the
/// commands.
pub use common::Handler as Gateway;

/// [`Gateway`] error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Backend cannot be reached.
    #[display("backend unreachable")]
    Unreachable,
}

/// Request to authenticate an [`user::Email`]/[`user::Password`] pair.
#[derive(Debug)]
pub struct Authenticate {
    /// Submitted [`user::Email`].
    pub email: user::Email,

    /// Submitted [`user::Password`].
    pub password: SecretBox<user::Password>,
}

/// Request to deliver a one-time password to the provided [`user::Phone`].
#[derive(Clone, Debug)]
pub struct DispatchOtp {
    /// [`user::Phone`] to deliver the one-time password to.
    pub phone: user::Phone,
}

/// Request for a reply of a [`property::Agent`] to a chat message.
#[derive(Clone, Debug)]
pub struct RequestAgentReply {
    /// [`property::Agent`] being messaged.
    pub agent: property::Agent,

    /// [`chat::Text`] of the message sent to the agent.
    pub text: chat::Text,
}

/// Identity attributes of an authenticated [`User`] returned by the backend.
#[derive(Clone, Debug)]
pub struct Profile {
    /// ID of the [`User`].
    pub id: user::Id,

    /// First [`user::Name`] of the [`User`].
    pub first_name: user::Name,

    /// Last [`user::Name`] of the [`User`].
    pub last_name: user::Name,

    /// [`user::Phone`] of the [`User`].
    pub phone: user::Phone,

    /// [`user::Age`] of the [`User`].
    pub age: user::Age,

    /// [`user::Sex`] of the [`User`].
    pub sex: user::Sex,

    /// [`user::Role`] of the [`User`].
    pub role: user::Role,
}
