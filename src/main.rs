use anyhow::{Context, Result};
use resdev_core::application::{
    ports::{
        identity::IdentityProvider, oauth_state::OAuthStateStore, security::TokenManager,
        time::Clock, util::SuffixGenerator,
    },
    services::ApplicationServices,
};
use resdev_core::config::AppConfig;
use resdev_core::domain::{
    blog::{BlogReadRepository, BlogWriteRepository},
    user::UserRepository,
};
use resdev_core::infrastructure::{
    database,
    oauth::{GoogleIdentityProvider, GoogleOAuthSettings},
    repositories::{
        PostgresBlogReadRepository, PostgresBlogWriteRepository, PostgresUserRepository,
    },
    security::{oauth_state_store::PostgresOAuthStateStore, token::BiscuitTokenManager},
    time::SystemClock,
    util::RandomSuffixGenerator,
};
use resdev_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let blog_write_repo: Arc<dyn BlogWriteRepository> =
        Arc::new(PostgresBlogWriteRepository::new(pool.clone()));
    let blog_read_repo: Arc<dyn BlogReadRepository> =
        Arc::new(PostgresBlogReadRepository::new(pool.clone()));

    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let identity_provider: Arc<dyn IdentityProvider> =
        Arc::new(GoogleIdentityProvider::new(GoogleOAuthSettings {
            client_id: config.google_client_id().to_owned(),
            client_secret: config.google_client_secret().to_owned(),
            redirect_url: config.google_redirect_url().to_owned(),
        })?);
    let oauth_states: Arc<dyn OAuthStateStore> =
        Arc::new(PostgresOAuthStateStore::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let suffixes: Arc<dyn SuffixGenerator> = Arc::new(RandomSuffixGenerator);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        blog_write_repo,
        blog_read_repo,
        token_manager,
        identity_provider,
        oauth_states,
        clock,
        suffixes,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database::shutdown(&pool).await;
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
            tracing::error!(error = %err, "failed to listen for CTRL+C");
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
