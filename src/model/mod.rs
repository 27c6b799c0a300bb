//! Request and response bodies of the REST API.
//!
//! Every DTO serializes with camelCase field names and derives `ToSchema` so it
//! appears in the generated OpenAPI document.

pub mod api;
pub mod character;
pub mod news_article;
pub mod stat;
pub mod user;
