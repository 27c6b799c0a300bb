use super::*;

/// Tests fetching an existing character.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_character(db, "user-1").await?;

    let repo = CharacterRepository::new(db);
    let character = repo.get_by_id(created.id).await?;

    let character = character.unwrap();
    assert_eq!(character.id, created.id);
    assert_eq!(character.name, created.name);
    assert_eq!(character.user_id, "user-1");

    Ok(())
}

/// Tests fetching an unknown character.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo.get_by_id(Uuid::new_v4()).await?;

    assert!(character.is_none());

    Ok(())
}
