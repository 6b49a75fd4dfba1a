//! [`Registration`] definitions.

use secrecy::SecretBox;

#[cfg(doc)]
use super::User;
use super::{Age, Email, Name, Password, Phone, Role, Sex};

/// Submitted registration fields awaiting OTP confirmation.
///
/// At most one [`Registration`] is alive at a time: it is discarded once a
/// [`User`] is created from it, and replaced by any newer submission.
#[derive(Clone, Debug)]
pub struct Registration {
    /// First [`Name`] of the registrant.
    pub first_name: Name,

    /// Last [`Name`] of the registrant.
    pub last_name: Name,

    /// [`Email`] of the registrant.
    pub email: Email,

    /// [`Phone`] the OTP is dispatched to.
    pub phone: Phone,

    /// Chosen [`Password`].
    pub password: SecretBox<Password>,

    /// [`Age`] of the registrant.
    pub age: Age,

    /// [`Sex`] of the registrant.
    pub sex: Sex,

    /// [`Role`] the registrant signs up for.
    pub role: Role,

    /// Indicator whether the terms of service were accepted.
    pub terms_accepted: bool,
}
