//! Factory methods for creating test data.
//!
//! Each entity has its own module with a `*Factory` builder for customization and a
//! `create_*` function for quick default creation. Factories fill in ids and
//! timestamps so tests only spell out the fields they care about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let stat = factory::create_stat(db).await?;
//! let character = factory::character::CharacterFactory::new(db)
//!     .user_id("user-1")
//!     .stats_id(stat.id)
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod helpers;
pub mod news_article;
pub mod stat;

pub use character::create_character;
pub use news_article::create_news_article;
pub use stat::create_stat;
