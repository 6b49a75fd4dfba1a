//! Session-related read definitions.

#[cfg(doc)]
use crate::domain::user::Session;
use crate::domain::User;

/// Point-in-time view of the current [`Session`] exposed to callers.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Currently authenticated [`User`], if any.
    pub user: Option<User>,

    /// Indicator whether the stored [`User`] record is still being restored.
    pub restoring: bool,
}

impl Snapshot {
    /// Indicates whether the captured session is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
