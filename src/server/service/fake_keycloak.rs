//! In-process stand-in for a Keycloak server used by service tests.

use axum::Router;
use tokio::{net::TcpListener, task::JoinHandle};

use crate::server::{
    config::{KeycloakAdminConfig, KeycloakConfig},
    startup,
    state::OAuth2Client,
};

pub struct FakeKeycloak {
    base_url: String,
    task: JoinHandle<()>,
}

impl FakeKeycloak {
    /// Serves `router` on a random local port until dropped.
    pub async fn spawn(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let task = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            task,
        }
    }

    /// Keycloak settings pointing at this server, realm `test`.
    pub fn config(&self) -> KeycloakConfig {
        KeycloakConfig {
            url: self.base_url.clone(),
            realm: "test".to_string(),
            client_id: "hacky-rest".to_string(),
            client_secret: "client-secret".to_string(),
            redirect_url: "http://localhost:3000/api/auth/callback".to_string(),
            admin: KeycloakAdminConfig {
                realm: "master".to_string(),
                client_id: "admin-cli".to_string(),
                username: "admin".to_string(),
                password: "admin-password".to_string(),
            },
        }
    }
}

impl Drop for FakeKeycloak {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn oauth_client(config: &KeycloakConfig) -> OAuth2Client {
    startup::setup_oauth_client(config).unwrap()
}
