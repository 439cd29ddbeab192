use lead_magnet_api::application::{
    ports::{identity::IdentityProvider, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use lead_magnet_api::config::AppConfig;
use lead_magnet_api::domain::lead_magnet::{LeadMagnetReadRepository, LeadMagnetWriteRepository};
use lead_magnet_api::infrastructure::{
    database,
    repositories::{PostgresLeadMagnetReadRepository, PostgresLeadMagnetWriteRepository},
    security::identity::BiscuitIdentityProvider,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use lead_magnet_api::presentation::http::{
    middleware::rate_limit::rate_limit_layer, routes::build_router_with_rate_limiter,
    state::HttpState,
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let write_repo: Arc<dyn LeadMagnetWriteRepository> =
        Arc::new(PostgresLeadMagnetWriteRepository::new(pool.clone()));
    let read_repo: Arc<dyn LeadMagnetReadRepository> =
        Arc::new(PostgresLeadMagnetReadRepository::new(pool.clone()));

    let identity_provider: Arc<dyn IdentityProvider> =
        Arc::new(BiscuitIdentityProvider::new(config.identity_public_key())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&write_repo),
        Arc::clone(&read_repo),
        Arc::clone(&identity_provider),
        Arc::clone(&clock),
        Arc::clone(&slugger),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let rate_limiter = rate_limit_layer(config.rate_limit());
    if rate_limiter.is_none() {
        tracing::warn!("rate limiting disabled: invalid quota settings");
    }
    let app = build_router_with_rate_limiter(state, config.allowed_origins(), rate_limiter);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("database pool closed");

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
