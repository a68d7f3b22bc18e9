use chrono::{Duration, Utc};

use super::*;

/// Tests that listings are ordered newest first.
///
/// Expected: Ok with posts in descending publication order
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    let old = factory::post::PostFactory::new(db, user.id)
        .pub_date(now - Duration::days(2))
        .build()
        .await?;
    let new = factory::post::PostFactory::new(db, user.id)
        .pub_date(now)
        .build()
        .await?;
    let middle = factory::post::PostFactory::new(db, user.id)
        .pub_date(now - Duration::days(1))
        .build()
        .await?;

    let ids: Vec<i32> = PostRepository::new(db)
        .get_page(PostFilter::All, 0, 10)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(ids, vec![new.id, middle.id, old.id]);

    Ok(())
}

/// Tests paging through thirteen posts ten at a time.
///
/// Expected: Ok with 10 posts on the first page and 3 on the second
#[tokio::test]
async fn splits_posts_into_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for _ in 0..13 {
        factory::post::create_post(db, user.id).await?;
    }

    let repo = PostRepository::new(db);

    assert_eq!(repo.count(PostFilter::All).await?, 13);
    assert_eq!(repo.get_page(PostFilter::All, 0, 10).await?.len(), 10);
    assert_eq!(repo.get_page(PostFilter::All, 1, 10).await?.len(), 3);

    Ok(())
}

/// Tests filtering listings by group and by author.
///
/// Expected: Ok with only the matching posts counted and returned
#[tokio::test]
async fn filters_by_group_and_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, group, grouped) = factory::helpers::create_post_with_dependencies(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::post::create_post(db, other.id).await?;
    factory::post::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);

    let in_group = repo.get_page(PostFilter::Group(group.id), 0, 10).await?;
    assert_eq!(in_group.len(), 1);
    assert_eq!(in_group[0].id, grouped.id);

    assert_eq!(repo.count(PostFilter::Author(author.id)).await?, 2);
    assert_eq!(repo.count(PostFilter::Author(other.id)).await?, 1);
    assert_eq!(repo.count(PostFilter::All).await?, 3);

    Ok(())
}
