use super::*;

/// Tests creating a news article with an image.
///
/// Expected: Ok with generated ID and matching timestamps
#[tokio::test]
async fn creates_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NewsArticle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsArticleRepository::new(db);
    let article = repo
        .create(NewsArticleParams {
            image_url: Some("https://cdn.example.com/launch.png".to_string()),
            ..params("Launch")
        })
        .await?;

    assert!(article.id > 0);
    assert_eq!(article.title, "Launch");
    assert_eq!(article.contents, "Launch contents");
    assert_eq!(
        article.image_url.as_deref(),
        Some("https://cdn.example.com/launch.png")
    );
    assert_eq!(article.created_at, article.updated_at);

    Ok(())
}
