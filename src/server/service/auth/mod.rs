//! OAuth2 login with Keycloak

use crate::server::{config::KeycloakConfig, state::OAuth2Client};

pub mod callback;
pub mod login;

pub struct KeycloakAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub keycloak: &'a KeycloakConfig,
}

impl<'a> KeycloakAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        keycloak: &'a KeycloakConfig,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            keycloak,
        }
    }
}
