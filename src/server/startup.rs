use migration::{migrations_up, AppliedMigration, Migrator, SESSION_TABLE};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use time::Duration;
use tokio::signal;
use tower_sessions::{cookie::Key, service::SignedCookie, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, KeycloakConfig},
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database pool
/// - `Err(AppError::DbErr)` - Failed to connect to database
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Runs pending migrations under the migration lock.
///
/// Every instance calls this before binding the HTTP listener. Only the instance
/// that wins the lock migrates; the others wait for it and get an empty list.
///
/// # Returns
/// - `Ok(Vec<AppliedMigration>)` - Migrations applied by this instance
/// - `Err(AppError::MigrationErr)` - Lock or migration failure, startup must abort
pub async fn run_migrations(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<Vec<AppliedMigration>, AppError> {
    let lock = config.migrations.lock();

    tracing::info!("Running migrations using lock {}", lock.path().display());

    Ok(migrations_up::<Migrator, _>(db, &lock).await?)
}

/// Creates the session layer backed by the `sessions` table.
///
/// Session cookies are signed with `SESSION_SECRET` and expire after 7 days of
/// inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore, SignedCookie>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone())
        .with_table_name(SESSION_TABLE)
        .map_err(AppError::InternalError)?;

    session_store.migrate().await?;

    let key = Key::try_from(config.session_secret.as_bytes()).map_err(|e| {
        ConfigError::InvalidValue {
            name: "SESSION_SECRET".to_string(),
            reason: e.to_string(),
        }
    })?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key);

    Ok(session)
}

/// Creates the HTTP client used for Keycloak requests.
///
/// Redirects are disabled so a misconfigured Keycloak URL cannot bounce requests
/// carrying credentials to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the OAuth2 client for the Keycloak realm.
pub fn setup_oauth_client(keycloak: &KeycloakConfig) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(keycloak.client_id.clone()))
        .set_client_secret(ClientSecret::new(keycloak.client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(keycloak.auth_url()).map_err(|e| invalid_url("KEYCLOAK_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(keycloak.token_url()).map_err(|e| invalid_url("KEYCLOAK_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(keycloak.redirect_url.clone())
                .map_err(|e| invalid_url("KEYCLOAK_REDIRECT_URL", e))?,
        );

    Ok(client)
}

fn invalid_url(name: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        reason: err.to_string(),
    }
}

/// Resolves on Ctrl+C or SIGTERM so the server can drain in-flight requests.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
