use super::*;

/// Tests looking up a group by slug.
///
/// Expected: Ok(Group)
#[tokio::test]
async fn gets_group_by_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db)
        .slug("test-slug")
        .title("test-title")
        .build()
        .await?;

    let group = GroupService::new(db).get_by_slug("test-slug").await?;

    assert_eq!(group.title, "test-title");

    Ok(())
}

/// Tests an unknown slug.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_slug_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db).get_by_slug("missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests every group is offered, ordered by title.
///
/// Expected: Ok with groups sorted alphabetically
#[tokio::test]
async fn gets_all_groups_by_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db).title("b").build().await?;
    factory::group::GroupFactory::new(db).title("a").build().await?;

    let titles: Vec<String> = GroupService::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|g| g.title)
        .collect();

    assert_eq!(titles, vec!["a", "b"]);

    Ok(())
}
