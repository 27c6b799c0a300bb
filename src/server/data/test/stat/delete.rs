use super::*;
use sea_orm::ConnectionTrait;

/// Tests deleting a stat referenced by a character.
///
/// Verifies the character survives with its stats reference cleared.
///
/// Expected: Ok(true), character.stats_id is None
#[tokio::test]
async fn deletes_stat_and_detaches_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (stat, character) = factory::helpers::create_character_with_stat(db, "user-1").await?;

    let repo = StatRepository::new(db);
    let deleted = repo.delete(stat.id).await?;

    assert!(deleted);
    assert!(Stat::find_by_id(stat.id).one(db).await?.is_none());

    let character = Character::find_by_id(character.id).one(db).await?.unwrap();
    assert_eq!(character.stats_id, None);

    Ok(())
}

/// Tests a stat delete that fails after characters were detached.
///
/// Verifies the detach is rolled back with the failed delete.
///
/// Expected: Err, stat and character.stats_id unchanged
#[tokio::test]
async fn failed_delete_keeps_character_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (stat, character) = factory::helpers::create_character_with_stat(db, "user-1").await?;

    db.execute_unprepared(
        "CREATE TRIGGER stat_delete_aborts BEFORE DELETE ON stat \
         BEGIN SELECT RAISE(ABORT, 'stat delete refused'); END",
    )
    .await?;

    let repo = StatRepository::new(db);

    assert!(repo.delete(stat.id).await.is_err());
    assert!(Stat::find_by_id(stat.id).one(db).await?.is_some());

    let character = Character::find_by_id(character.id).one(db).await?.unwrap();
    assert_eq!(character.stats_id, Some(stat.id));

    Ok(())
}

/// Tests deleting an unknown stat.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_stat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
