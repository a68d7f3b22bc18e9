use super::*;

/// Tests creating a post with an explicit id.
///
/// Verifies the row keeps the requested id and the post resolves its
/// author and group when read back.
///
/// Expected: Ok with id 1234 and relations attached
#[tokio::test]
async fn creates_post_with_explicit_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let group = factory::group::create_group(db).await?;

    let repo = PostRepository::new(db);
    let created = repo
        .create(CreatePostParam {
            id: Some(1234),
            text: "Тестовый текст".to_string(),
            author_id: user.id,
            group_id: Some(group.id),
        })
        .await?;

    assert_eq!(created.id, 1234);

    let post = repo.find_by_id(1234).await?.unwrap();
    assert_eq!(post.text, "Тестовый текст");
    assert_eq!(post.author.username, user.username);
    assert_eq!(post.group.map(|g| g.slug), Some(group.slug));

    Ok(())
}

/// Tests creating a post without a group or explicit id.
///
/// Expected: Ok with a database-assigned id and no group
#[tokio::test]
async fn creates_post_without_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let created = PostRepository::new(db)
        .create(CreatePostParam {
            id: None,
            text: "text".to_string(),
            author_id: user.id,
            group_id: None,
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.group_id, None);

    Ok(())
}

/// Tests that reusing an explicit id fails instead of overwriting.
///
/// Expected: Err from the primary key constraint
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::post::PostFactory::new(db, user.id)
        .id(1234)
        .build()
        .await?;

    let result = PostRepository::new(db)
        .create(CreatePostParam {
            id: Some(1234),
            text: "text".to_string(),
            author_id: user.id,
            group_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
