use std::{future::IntoFuture as _, io, sync::OnceLock};

use application::{Args, Config, Service};
use service::{
    infra::{gateway::Mock, storage::JsonFile, Catalog},
    query::{CurrentSession, FilteredProperties},
    Query as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        catalog,
        gateway,
        log,
        service,
        storage,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let catalog =
        Catalog::load(&catalog.properties, &catalog.cities).map_err(|e| {
            log::error!("failed to load `Catalog`: {e}");
        })?;

    log::info!(
        "catalog loaded: {} properties across {} cities",
        catalog.properties().len(),
        catalog.cities().len(),
    );

    let (service, background) = Service::new(
        service.into(),
        JsonFile::new(storage.path),
        Mock::new(gateway.into()),
        catalog,
    );

    background.into_future().await.map_err(|e| {
        log::error!("session restore failed: {e}");
    })?;

    let session = service
        .execute(CurrentSession)
        .await
        .unwrap_or_else(|e| match e {});
    match session.user {
        Some(user) => log::info!("session restored for `{}`", user.email),
        None => log::info!("no stored session, starting anonymous"),
    }

    let visible = service
        .execute(FilteredProperties)
        .await
        .unwrap_or_else(|e| match e {});
    log::info!("{} properties visible with default filters", visible.len());

    Ok(())
}
