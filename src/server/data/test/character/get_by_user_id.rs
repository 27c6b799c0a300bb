use super::*;

/// Tests that only characters of the requested user are returned.
///
/// Expected: Ok with the two characters of user-1
#[tokio::test]
async fn returns_only_characters_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_character(db, "user-1").await?;
    let second = factory::create_character(db, "user-1").await?;
    factory::create_character(db, "user-2").await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_by_user_id("user-1").await?;

    assert_eq!(characters.len(), 2);
    assert!(characters.iter().all(|c| c.user_id == "user-1"));
    let ids: Vec<Uuid> = characters.iter().map(|c| c.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    Ok(())
}

/// Tests a user without characters.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_for_user_without_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character(db, "user-2").await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_by_user_id("user-1").await?;

    assert!(characters.is_empty());

    Ok(())
}
