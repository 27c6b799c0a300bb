use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::auth::KeycloakAuthService;

impl<'a> KeycloakAuthService<'a> {
    /// Builds the Keycloak authorization URL and the CSRF token it carries.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .url();

        (authorize_url, csrf_state)
    }
}
