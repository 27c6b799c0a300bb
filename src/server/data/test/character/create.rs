use super::*;

/// Tests creating a character referencing an existing stat.
///
/// Verifies that the repository generates an ID, stores every field and
/// truncates the timestamps to whole seconds.
///
/// Expected: Ok with character created
#[tokio::test]
async fn creates_character_with_stat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stat = factory::create_stat(db).await?;

    let repo = CharacterRepository::new(db);
    let character = repo
        .create(CreateCharacterParams {
            user_id: "user-1".to_string(),
            name: "Aragorn".to_string(),
            class_type: Some("ranger".to_string()),
            stats_id: Some(stat.id),
        })
        .await?;

    assert_eq!(character.user_id, "user-1");
    assert_eq!(character.name, "Aragorn");
    assert_eq!(character.class_type.as_deref(), Some("ranger"));
    assert_eq!(character.stats_id, Some(stat.id));
    assert_eq!(character.created_at.timestamp_subsec_nanos(), 0);
    assert_eq!(character.created_at, character.updated_at);

    let stored = Character::find_by_id(character.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a character without class or stats.
///
/// Expected: Ok with optional fields empty
#[tokio::test]
async fn creates_character_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo
        .create(CreateCharacterParams {
            user_id: "user-1".to_string(),
            name: "Gimli".to_string(),
            class_type: None,
            stats_id: None,
        })
        .await?;

    assert_eq!(character.class_type, None);
    assert_eq!(character.stats_id, None);

    Ok(())
}
