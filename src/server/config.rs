//! Environment-based application configuration.
//!
//! All settings come from environment variables (optionally loaded from a `.env`
//! file by `dotenvy` in `main`). `Config::from_lookup` accepts any key lookup so
//! parsing can be exercised without touching the process environment.

use std::{path::PathBuf, str::FromStr, time::Duration};

use migration::{LockFailurePolicy, MigrationLock};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOCK_FILE: &str = "migrations.lock";
const DEFAULT_LOCK_POLL_INTERVAL_MS: u64 = 300;
const DEFAULT_ADMIN_REALM: &str = "master";
const DEFAULT_ADMIN_CLIENT_ID: &str = "admin-cli";

/// Signed session cookies need a key of at least 64 bytes.
const MIN_SESSION_SECRET_LEN: usize = 64;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub session_secret: String,
    pub keycloak: KeycloakConfig,
    pub migrations: MigrationsConfig,
}

/// Keycloak realm the application authenticates against, plus the admin
/// credentials used to manage its users.
#[derive(Clone, Debug)]
pub struct KeycloakConfig {
    /// Base URL of the Keycloak server without trailing slash (`auth-server-url`).
    pub url: String,
    pub realm: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub admin: KeycloakAdminConfig,
}

#[derive(Clone, Debug)]
pub struct KeycloakAdminConfig {
    pub realm: String,
    pub client_id: String,
    pub username: String,
    pub password: String,
}

impl KeycloakConfig {
    fn openid_connect_url(&self, realm: &str, endpoint: &str) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/{}",
            self.url, realm, endpoint
        )
    }

    pub fn auth_url(&self) -> String {
        self.openid_connect_url(&self.realm, "auth")
    }

    pub fn token_url(&self) -> String {
        self.openid_connect_url(&self.realm, "token")
    }

    pub fn introspection_url(&self) -> String {
        self.openid_connect_url(&self.realm, "token/introspect")
    }

    /// Token endpoint of the realm holding the admin account.
    pub fn admin_token_url(&self) -> String {
        self.openid_connect_url(&self.admin.realm, "token")
    }

    /// Admin REST endpoint for the users of the application realm.
    pub fn admin_users_url(&self) -> String {
        format!("{}/admin/realms/{}/users", self.url, self.realm)
    }
}

/// Settings of the startup migration lock.
#[derive(Clone, Debug)]
pub struct MigrationsConfig {
    pub lock_file: PathBuf,
    pub lock_poll_interval: Duration,
    /// `None` waits for the lock forever.
    pub lock_wait_timeout: Option<Duration>,
    pub lock_failure_policy: LockFailurePolicy,
}

impl MigrationsConfig {
    pub fn lock(&self) -> MigrationLock {
        MigrationLock::new(self.lock_file.clone())
            .with_poll_interval(self.lock_poll_interval)
            .with_wait_timeout(self.lock_wait_timeout)
            .with_failure_policy(self.lock_failure_policy)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        let session_secret = vars.required("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidValue {
                name: "SESSION_SECRET".to_string(),
                reason: format!("must be at least {} bytes long", MIN_SESSION_SECRET_LEN),
            }
            .into());
        }

        let poll_interval_ms: u64 =
            vars.parsed_or("MIGRATIONS_LOCK_POLL_INTERVAL_MS", DEFAULT_LOCK_POLL_INTERVAL_MS)?;
        if poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                name: "MIGRATIONS_LOCK_POLL_INTERVAL_MS".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: vars.required("DATABASE_URL")?,
            port: vars.parsed_or("PORT", DEFAULT_PORT)?,
            session_secret,
            keycloak: KeycloakConfig {
                url: vars
                    .required("KEYCLOAK_URL")?
                    .trim_end_matches('/')
                    .to_string(),
                realm: vars.required("KEYCLOAK_REALM")?,
                client_id: vars.required("KEYCLOAK_CLIENT_ID")?,
                client_secret: vars.required("KEYCLOAK_CLIENT_SECRET")?,
                redirect_url: vars.required("KEYCLOAK_REDIRECT_URL")?,
                admin: KeycloakAdminConfig {
                    realm: vars.or("KEYCLOAK_ADMIN_REALM", DEFAULT_ADMIN_REALM),
                    client_id: vars.or("KEYCLOAK_ADMIN_CLIENT_ID", DEFAULT_ADMIN_CLIENT_ID),
                    username: vars.required("KEYCLOAK_ADMIN_USERNAME")?,
                    password: vars.required("KEYCLOAK_ADMIN_PASSWORD")?,
                },
            },
            migrations: MigrationsConfig {
                lock_file: PathBuf::from(vars.or("MIGRATIONS_LOCK_FILE", DEFAULT_LOCK_FILE)),
                lock_poll_interval: Duration::from_millis(poll_interval_ms),
                lock_wait_timeout: vars
                    .parsed::<u64>("MIGRATIONS_LOCK_WAIT_TIMEOUT_SECS")?
                    .map(Duration::from_secs),
                lock_failure_policy: vars
                    .parsed("MIGRATIONS_LOCK_ON_FAILURE")?
                    .unwrap_or_default(),
            },
        })
    }
}

struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Value of `name`, treating blank values as unset.
    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    fn parsed<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(name)
            .map(|value| {
                value
                    .trim()
                    .parse::<T>()
                    .map_err(|e| ConfigError::InvalidValue {
                        name: name.to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()
    }

    fn parsed_or<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        Ok(self.parsed(name)?.unwrap_or(default))
    }
}
