use super::*;

/// Tests fetching an existing and an unknown stat.
///
/// Expected: Ok(Some) for the created stat, Ok(None) for a random ID
#[tokio::test]
async fn returns_stat_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Stat).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::stat::StatFactory::new(db).level(9).build().await?;

    let repo = StatRepository::new(db);

    let found = repo.get_by_id(created.id).await?;
    assert_eq!(found.map(|s| s.level), Some(9));

    let missing = repo.get_by_id(Uuid::new_v4()).await?;
    assert!(missing.is_none());

    assert!(repo.exists(created.id).await?);
    assert!(!repo.exists(Uuid::new_v4()).await?);

    Ok(())
}
