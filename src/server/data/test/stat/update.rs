use super::*;

/// Tests updating a stat's values.
///
/// Expected: Ok(Some) with new values, created_at unchanged
#[tokio::test]
async fn updates_values() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Stat).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_stat(db).await?;

    let repo = StatRepository::new(db);
    let updated = repo
        .update(
            created.id,
            StatParams {
                level: 5,
                experience: 900,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.level, 5);
    assert_eq!(updated.experience, 900);
    assert_eq!(updated.created_at.timestamp(), created.created_at.timestamp());
    assert!(updated.updated_at >= updated.created_at);

    Ok(())
}

/// Tests updating an unknown stat.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_stat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Stat).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatRepository::new(db);
    let updated = repo
        .update(
            Uuid::new_v4(),
            StatParams {
                level: 5,
                experience: 900,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
