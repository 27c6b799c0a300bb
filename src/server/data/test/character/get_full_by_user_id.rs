use super::*;

/// Tests joining characters with their stats.
///
/// Verifies that level and experience come from the stat and that `updated_at`
/// is the stat's update time.
///
/// Expected: Ok with one full character
#[tokio::test]
async fn joins_character_with_stat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stat = factory::stat::StatFactory::new(db)
        .level(12)
        .experience(3400)
        .build()
        .await?;
    let character = factory::character::CharacterFactory::new(db)
        .user_id("user-1")
        .class_type("wizard")
        .stats_id(stat.id)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let full = repo.get_full_by_user_id("user-1").await?;

    assert_eq!(full.len(), 1);
    assert_eq!(full[0].id, character.id);
    assert_eq!(full[0].class_type.as_deref(), Some("wizard"));
    assert_eq!(full[0].level, 12);
    assert_eq!(full[0].experience, 3400);
    assert_eq!(full[0].updated_at.timestamp(), stat.updated_at.timestamp());

    Ok(())
}

/// Tests that characters without stats are left out.
///
/// Expected: Ok with only the character that has stats
#[tokio::test]
async fn omits_characters_without_stats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, with_stat) = factory::helpers::create_character_with_stat(db, "user-1").await?;
    factory::create_character(db, "user-1").await?;
    factory::helpers::create_character_with_stat(db, "user-2").await?;

    let repo = CharacterRepository::new(db);
    let full = repo.get_full_by_user_id("user-1").await?;

    assert_eq!(full.len(), 1);
    assert_eq!(full[0].id, with_stat.id);

    Ok(())
}
