pub use super::character::Entity as Character;
pub use super::news_article::Entity as NewsArticle;
pub use super::stat::Entity as Stat;
