use super::*;

/// Tests listing every article when no limit is given.
///
/// Expected: Ok with all articles ordered by ID
#[tokio::test]
async fn lists_all_articles_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NewsArticle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_news_article(db).await?;
    }

    let repo = NewsArticleRepository::new(db);
    let articles = repo.get_paginated(0, None).await?;

    assert_eq!(articles.len(), 3);
    assert!(articles.windows(2).all(|pair| pair[0].id < pair[1].id));

    Ok(())
}

/// Tests an offset without a limit.
///
/// Expected: Ok with every article after the skipped ones
#[tokio::test]
async fn skips_first_results_without_max_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NewsArticle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..4 {
        created.push(factory::create_news_article(db).await?);
    }

    let repo = NewsArticleRepository::new(db);
    let articles = repo.get_paginated(2, None).await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![created[2].id, created[3].id]);

    Ok(())
}

/// Tests a limit without an offset.
///
/// Expected: Ok with the first two articles
#[tokio::test]
async fn applies_max_results_from_the_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NewsArticle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..3 {
        created.push(factory::create_news_article(db).await?);
    }

    let repo = NewsArticleRepository::new(db);
    let articles = repo.get_paginated(0, Some(2)).await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![created[0].id, created[1].id]);

    Ok(())
}

/// Tests applying offset and limit.
///
/// Expected: Ok with the second and third article
#[tokio::test]
async fn applies_first_and_max_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NewsArticle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..4 {
        created.push(factory::create_news_article(db).await?);
    }

    let repo = NewsArticleRepository::new(db);
    let articles = repo.get_paginated(1, Some(2)).await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![created[1].id, created[2].id]);

    Ok(())
}

/// Tests an offset past the end of the table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(NewsArticle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_news_article(db).await?;

    let repo = NewsArticleRepository::new(db);
    let articles = repo.get_paginated(5, Some(10)).await?;

    assert!(articles.is_empty());

    Ok(())
}
