//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a post together with its author and group.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, group, post))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::group::Model,
        entity::post::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let group = crate::factory::group::create_group(db).await?;
    let post = crate::factory::post::PostFactory::new(db, user.id)
        .group_id(Some(group.id))
        .build()
        .await?;

    Ok((user, group, post))
}
