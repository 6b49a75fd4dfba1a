//! [`Memory`] [`Storage`] implementation.

use std::sync::{Arc, Mutex};

use common::operations::{By, Delete, Select, Update};
use tracerr::Traced;

use crate::{
    domain::User,
    infra::{storage, Storage},
};

#[cfg(doc)]
use super::JsonFile;

/// [`Storage`] holding the [`User`] record in a shared in-memory slot.
///
/// Substitutes [`JsonFile`] in tests.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Shared slot holding the stored record.
    slot: Arc<Mutex<Option<User>>>,
}

impl Memory {
    /// Creates a new empty [`Memory`] [`Storage`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Memory`] [`Storage`] pre-populated with the provided
    /// [`User`] record.
    #[must_use]
    pub fn with(user: User) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(user))),
        }
    }

    /// Returns a copy of the currently stored [`User`] record, if any.
    #[must_use]
    pub fn stored(&self) -> Option<User> {
        self.slot.lock().expect("not poisoned").clone()
    }
}

impl Storage<Select<By<Option<User>, ()>>> for Memory {
    type Ok = Option<User>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Option<User>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.stored())
    }
}

impl Storage<Update<User>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(user): Update<User>,
    ) -> Result<Self::Ok, Self::Err> {
        *self.slot.lock().expect("not poisoned") = Some(user);
        Ok(())
    }
}

impl Storage<Delete<By<User, ()>>> for Memory {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(_): Delete<By<User, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        *self.slot.lock().expect("not poisoned") = None;
        Ok(())
    }
}
