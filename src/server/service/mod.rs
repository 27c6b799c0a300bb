//! Business logic between the controllers and the repositories.
//!
//! Services take validated parameters, apply the domain rules and return domain
//! models. Missing resources surface as `AppError::NotFound`.

pub mod auth;
pub mod character;
pub mod keycloak;
pub mod news_article;
pub mod stat;
pub mod user;

#[cfg(test)]
pub(crate) mod fake_keycloak;
