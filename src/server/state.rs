//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - HTTP client for Keycloak requests
//! - OAuth2 client for the Keycloak login flow
//! - Keycloak realm settings and admin credentials

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::config::KeycloakConfig;

/// Type alias for the OAuth2 client configured for Keycloak authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection pool and the reqwest client
/// share their internals, the rest are small values.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Keycloak requests.
    ///
    /// Configured without redirects to prevent SSRF vulnerabilities.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Keycloak authorization code flow.
    pub oauth_client: OAuth2Client,

    /// Keycloak realm, client and admin settings.
    pub keycloak: KeycloakConfig,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        keycloak: KeycloakConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            keycloak,
        }
    }
}
