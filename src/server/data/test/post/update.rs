use super::*;

/// Tests replacing the text and clearing the group of a post.
///
/// Expected: Ok(Some) with new values; author unchanged
#[tokio::test]
async fn updates_text_and_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _group, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let updated = PostRepository::new(db)
        .update(
            post.id,
            UpdatePostParam {
                text: "Edited".to_string(),
                group_id: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.text, "Edited");
    assert_eq!(updated.group_id, None);
    assert_eq!(updated.author_id, author.id);

    Ok(())
}

/// Tests updating a post that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PostRepository::new(db)
        .update(
            1234,
            UpdatePostParam {
                text: "Edited".to_string(),
                group_id: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
