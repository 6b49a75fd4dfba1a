//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
pub mod task;

use std::{error::Error, sync::Arc};

use common::operations::{By, Delete, Start, Update};
use derive_more::Debug;
use secrecy::SecretString;
use tokio::sync::RwLock;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{user::Session, Browse, User},
    infra::{storage, Catalog, Storage},
};

pub use self::{command::Command, query::Query, task::Task};

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Secret code accepted as the one-time password confirming a pending
    /// registration.
    #[debug(skip)]
    pub otp_secret: SecretString,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<S, G> {
    /// Configuration of this [`Service`].
    config: Config,

    /// Durable slot [`Storage`] of this [`Service`].
    storage: S,

    /// Backend [`Gateway`] of this [`Service`].
    ///
    /// [`Gateway`]: infra::Gateway
    gateway: G,

    /// Immutable [`Catalog`] of this [`Service`].
    catalog: Arc<Catalog>,

    /// Authentication [`Session`] state of this [`Service`].
    session: Arc<RwLock<Session>>,

    /// [`Browse`] state of this [`Service`].
    browse: Arc<RwLock<Browse>>,
}

impl<S, G> Service<S, G> {
    /// Creates a new [`Service`] with the provided parameters, spawning its
    /// startup session restore onto the returned [`task::Background`].
    pub fn new(
        config: Config,
        storage: S,
        gateway: G,
        catalog: Catalog,
    ) -> (Self, task::Background)
    where
        Self: Task<
                Start<By<task::RestoreSession<Self>, ()>>,
                Ok = (),
                Err: Error,
            > + Clone
            + 'static,
    {
        let this = Service {
            config,
            storage,
            gateway,
            catalog: Arc::new(catalog),
            session: Arc::new(RwLock::new(Session::default())),
            browse: Arc::new(RwLock::new(Browse::default())),
        };

        let mut bg = task::Background::default();
        let svc = this.clone();
        bg.spawn(async move { svc.execute(Start(By::new(()))).await });

        (this, bg)
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the durable slot [`Storage`] of this [`Service`].
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the backend [`Gateway`] of this [`Service`].
    ///
    /// [`Gateway`]: infra::Gateway
    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Returns the immutable [`Catalog`] of this [`Service`].
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the authentication [`Session`] state of this [`Service`].
    pub(crate) fn session(&self) -> &RwLock<Session> {
        &self.session
    }

    /// Returns the [`Browse`] state of this [`Service`].
    pub(crate) fn browse(&self) -> &RwLock<Browse> {
        &self.browse
    }

    /// Writes the provided [`User`] record into the durable slot.
    ///
    /// Failures are logged and swallowed: the in-memory state stays
    /// authoritative, and loss of the slot is non-fatal.
    pub(crate) async fn persist(&self, user: User)
    where
        S: Storage<Update<User>, Ok = (), Err = Traced<storage::Error>>,
    {
        _ = self.storage.execute(Update(user)).await.map_err(|e| {
            log::warn!("failed to persist `User` record: {e}");
        });
    }

    /// Removes the [`User`] record from the durable slot.
    ///
    /// Failures are logged and swallowed, as in [`Service::persist`].
    pub(crate) async fn erase(&self)
    where
        S: Storage<Delete<By<User, ()>>, Ok = (), Err = Traced<storage::Error>>,
    {
        _ = self.storage.execute(Delete(By::new(()))).await.map_err(|e| {
            log::warn!("failed to erase `User` record: {e}");
        });
    }
}
