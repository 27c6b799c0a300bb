use super::*;

/// Tests deleting an existing character.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (stat, character) = factory::helpers::create_character_with_stat(db, "user-1").await?;

    let repo = CharacterRepository::new(db);
    let deleted = repo.delete(character.id).await?;

    assert!(deleted);
    assert!(Character::find_by_id(character.id).one(db).await?.is_none());
    // Stats outlive their character
    assert!(Stat::find_by_id(stat.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting an unknown character.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let deleted = repo.delete(Uuid::new_v4()).await?;

    assert!(!deleted);

    Ok(())
}
