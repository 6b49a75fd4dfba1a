//! [`Session`] definitions.

use smart_default::SmartDefault;

use super::{Registration, User};

/// In-process authentication session state.
#[derive(Debug, SmartDefault)]
pub struct Session {
    /// Currently authenticated [`User`], if any.
    pub user: Option<User>,

    /// [`Registration`] awaiting OTP confirmation, if any.
    pub pending: Option<Registration>,

    /// Indicator whether the stored [`User`] record is still being restored.
    #[default(true)]
    pub restoring: bool,
}

impl Session {
    /// Indicates whether this [`Session`] is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
