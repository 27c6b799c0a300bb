//! SeaORM entities for the hacky-server database schema.
//!
//! Tables are created by the `migration` crate; these definitions must stay in
//! sync with the final state produced by the migrations.

pub mod prelude;

pub mod character;
pub mod news_article;
pub mod stat;
