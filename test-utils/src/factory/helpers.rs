//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a stat and a character owned by `user_id` that references it.
///
/// # Returns
/// - `Ok((stat, character))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_character_with_stat(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<(entity::stat::Model, entity::character::Model), DbErr> {
    let stat = crate::factory::stat::create_stat(db).await?;
    let character = crate::factory::character::CharacterFactory::new(db)
        .user_id(user_id)
        .stats_id(stat.id)
        .build()
        .await?;

    Ok((stat, character))
}
