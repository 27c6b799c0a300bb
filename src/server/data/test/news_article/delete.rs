use super::*;

/// Tests deleting an article twice.
///
/// Expected: Ok(true) the first time, Ok(false) afterwards
#[tokio::test]
async fn deletes_article_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NewsArticle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_news_article(db).await?;

    let repo = NewsArticleRepository::new(db);

    assert!(repo.delete(article.id).await?);
    assert!(NewsArticle::find_by_id(article.id).one(db).await?.is_none());
    assert!(!repo.delete(article.id).await?);

    Ok(())
}
