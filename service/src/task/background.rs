//! Background environment for running [`Task`]s.

use std::{
    error::Error,
    future::{Future, IntoFuture},
};

use futures::{future::LocalBoxFuture, FutureExt as _};
use tokio::task;

#[cfg(doc)]
use crate::Task;

/// Background environment for running [`Task`]s.
#[derive(Debug, Default)]
pub struct Background {
    /// Local set the spawned tasks run on.
    set: task::LocalSet,

    /// Handles of the spawned tasks.
    handles: Vec<task::JoinHandle<Result<(), Box<dyn Error + 'static>>>>,
}

impl Background {
    /// Spawns a new [`Task`] inside this [`Background`] environment.
    pub fn spawn<F, E>(&mut self, future: F)
    where
        F: Future<Output = Result<(), E>> + 'static,
        E: Error + 'static,
    {
        self.handles.push(self.set.spawn_local(async move {
            future
                .await
                .map_err(|e| -> Box<dyn Error + 'static> { Box::new(e) })
        }));
    }
}

impl IntoFuture for Background {
    type Output = Result<(), Box<dyn Error>>;
    type IntoFuture = LocalBoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        let Self { set, handles } = self;
        async move {
            set.await;
            for handle in handles {
                match handle.await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => return Err(e),
                    Err(e) => return Err(Box::new(e)),
                }
            }
            Ok(())
        }
        .boxed_local()
    }
}
