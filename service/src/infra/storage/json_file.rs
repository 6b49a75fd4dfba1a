//! [`JsonFile`] [`Storage`] implementation.

use std::{io, path::PathBuf};

use common::operations::{By, Delete, Select, Update};
use derive_more::{Display, Error as StdError, From};
use tokio::fs;
use tracerr::Traced;

use crate::{
    domain::User,
    infra::{storage, Storage},
};

/// [`Storage`] persisting the [`User`] record as a single JSON file.
#[derive(Clone, Debug)]
pub struct JsonFile {
    /// Path of the backing file.
    path: PathBuf,
}

impl JsonFile {
    /// Creates a new [`JsonFile`] [`Storage`] backed by the provided `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage<Select<By<Option<User>, ()>>> for JsonFile {
    type Ok = Option<User>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<Option<User>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            // An absent file is an empty slot, not a failure.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(wrap(e)),
        };

        serde_json::from_slice(&raw).map(Some).map_err(wrap)
    }
}

impl Storage<Update<User>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(user): Update<User>,
    ) -> Result<Self::Ok, Self::Err> {
        let raw = serde_json::to_vec(&user).map_err(wrap)?;
        fs::write(&self.path, raw).await.map_err(wrap)
    }
}

impl Storage<Delete<By<User, ()>>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(_): Delete<By<User, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(wrap(e)),
        }
    }
}

/// Wraps the provided `err` into a [`Traced`] [`storage::Error`].
fn wrap(err: impl Into<Error>) -> Traced<storage::Error> {
    tracerr::new!(storage::Error::JsonFile(err.into()))
}

/// [`JsonFile`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// I/O operation failed.
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),

    /// [`User`] record (de)serialization failed.
    #[display("`User` record (de)serialization failed: {_0}")]
    Json(serde_json::Error),
}
