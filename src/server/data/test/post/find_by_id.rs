use super::*;

/// Tests looking up a post that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PostRepository::new(db).find_by_id(1234).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a post without a group resolves only its author.
///
/// Expected: Ok(Some) with `group` None
#[tokio::test]
async fn resolves_author_without_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let created = factory::post::create_post(db, user.id).await?;

    let post = PostRepository::new(db).find_by_id(created.id).await?.unwrap();

    assert_eq!(post.author.id, user.id);
    assert!(post.group.is_none());

    Ok(())
}
