mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    for migration in startup::run_migrations(&db, &config).await? {
        tracing::info!("Migration {} executed successfully", migration.name);
    }

    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config.keycloak)?;

    let state = AppState::new(db, http_client, oauth_client, config.keycloak.clone());
    let app = router::router(state, session);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Http server started on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
