pub use sea_orm_migration::prelude::*;

pub mod lock;
pub mod runner;

mod m20240101_000000_initial_database;
mod m20240101_000001_create_stats_table;
mod m20240102_000002_add_character_class_and_stats;
mod m20240103_000003_create_news_article_table;

pub use lock::{LockError, LockFailurePolicy, MigrationLock, Sleeper, TokioSleeper};
pub use runner::{migrations_up, AppliedMigration, MigrationError};

/// Table holding HTTP sessions, owned by the session store rather than by a migration.
pub const SESSION_TABLE: &str = "sessions";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000000_initial_database::Migration),
            Box::new(m20240101_000001_create_stats_table::Migration),
            Box::new(m20240102_000002_add_character_class_and_stats::Migration),
            Box::new(m20240103_000003_create_news_article_table::Migration),
        ]
    }
}
