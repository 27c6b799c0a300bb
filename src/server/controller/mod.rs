//! HTTP handlers grouped by resource.
//!
//! Handlers check access with `AuthGuard`, convert DTOs into parameters, call a
//! service and convert the result back into a DTO.

pub mod auth;
pub mod character;
pub mod full_character;
pub mod news_article;
pub mod stat;
pub mod user;
