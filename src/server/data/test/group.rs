use super::*;

/// Tests finding a group by slug.
///
/// Expected: Ok(Some) for the created slug, Ok(None) for an unknown one
#[tokio::test]
async fn finds_group_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = Group::from_entity(
        factory::group::GroupFactory::new(db)
            .title("test-title")
            .slug("test-slug")
            .description("test-decsr")
            .build()
            .await?,
    );

    let repo = GroupRepository::new(db);
    assert_eq!(repo.find_by_slug("test-slug").await?, Some(group));
    assert_eq!(repo.find_by_slug("other-slug").await?, None);

    Ok(())
}

/// Tests that all groups are listed alphabetically by title.
///
/// Expected: Ok with groups ordered by title
#[tokio::test]
async fn lists_groups_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db).title("Cats").build().await?;
    factory::group::GroupFactory::new(db).title("Art").build().await?;
    factory::group::GroupFactory::new(db).title("Books").build().await?;

    let titles: Vec<String> = GroupRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|g| g.title)
        .collect();

    assert_eq!(titles, vec!["Art", "Books", "Cats"]);

    Ok(())
}
