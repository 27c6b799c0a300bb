use super::*;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests that updating an article keeps its update timestamp.
///
/// Backdates the article first so a bumped timestamp would be detected.
///
/// Expected: Ok(Some) with new fields and the original updated_at
#[tokio::test]
async fn updates_fields_without_bumping_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NewsArticle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_news_article(db).await?;
    let yesterday = crate::server::util::time::truncate_to_seconds(Utc::now() - Duration::days(1));
    let mut backdated: entity::news_article::ActiveModel = created.into();
    backdated.updated_at = ActiveValue::Set(yesterday);
    let created = backdated.update(db).await?;

    let repo = NewsArticleRepository::new(db);
    let updated = repo
        .update_silently(
            created.id,
            NewsArticleParams {
                image_url: Some("https://cdn.example.com/new.png".to_string()),
                ..params("Renamed")
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(
        updated.image_url.as_deref(),
        Some("https://cdn.example.com/new.png")
    );
    assert_eq!(updated.updated_at, yesterday);

    Ok(())
}

/// Tests updating an unknown article.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NewsArticle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsArticleRepository::new(db);
    let updated = repo.update_silently(42, params("Ghost")).await?;

    assert!(updated.is_none());

    Ok(())
}
