use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_sessions::{service::SignedCookie, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, character, full_character, news_article, stat, user},
    middleware::logging::log_request,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Hacky API",
    description = "Characters, stats, news articles and Keycloak user management"
))]
struct ApiDoc;

/// Builds the application router with Swagger UI, request logging, sessions and CORS.
pub fn router(
    state: AppState,
    session: SessionManagerLayer<SqliteStore, SignedCookie>,
) -> Router {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(middleware::from_fn(log_request))
        .layer(session)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes together with their OpenAPI documentation.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(character::create_character))
        .routes(routes!(character::get_user_characters))
        .routes(routes!(
            character::get_character,
            character::delete_character
        ))
        .routes(routes!(full_character::get_full_characters))
        .routes(routes!(stat::create_stat))
        .routes(routes!(stat::get_stat, stat::update_stat, stat::delete_stat))
        .routes(routes!(
            news_article::list_news_articles,
            news_article::create_news_article
        ))
        .routes(routes!(
            news_article::get_news_article,
            news_article::update_news_article,
            news_article::delete_news_article
        ))
        .routes(routes!(user::register_user, user::update_user))
        .routes(routes!(user::get_user, user::delete_user))
}
