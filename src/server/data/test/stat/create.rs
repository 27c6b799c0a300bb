use super::*;

/// Tests creating a stat.
///
/// Verifies that the repository generates the ID server side and stores level
/// and experience.
///
/// Expected: Ok with stat created
#[tokio::test]
async fn creates_stat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Stat).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatRepository::new(db);
    let stat = repo
        .create(StatParams {
            level: 3,
            experience: 250,
        })
        .await?;

    assert_eq!(stat.level, 3);
    assert_eq!(stat.experience, 250);
    assert_eq!(stat.updated_at.timestamp_subsec_nanos(), 0);

    let stored = Stat::find_by_id(stat.id).one(db).await?.unwrap();
    assert_eq!(stored.level, 3);

    Ok(())
}
