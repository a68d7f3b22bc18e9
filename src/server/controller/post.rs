use axum::{
    extract::{rejection::FormRejection, Path, RawQuery, State},
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::{
        post::{PostFormDto, PostFormErrorsDto},
        view::{GroupListPage, IndexPage, PostDetailPage, PostFormPage, ProfilePage},
    },
    server::{
        controller::layout,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            group::Group,
            post::{Post, PostForm},
            user::User,
        },
        service::{group::GroupService, post::PostService},
        state::AppState,
        template,
        util::parse::{last_query_value, parse_post_id},
    },
};

/// Reads the raw `page` value of a listing's query string.
///
/// Anything unparsable selects the first page later on, so the query itself never
/// rejects the request.
fn page_param(query: Option<&str>) -> Option<String> {
    last_query_value(query, "page")
}

/// Unwraps the submitted post form.
///
/// A body that is missing or not form-encoded counts as an empty submission and
/// is answered with the form's field errors.
fn submitted(input: Result<Form<PostFormDto>, FormRejection>) -> PostFormDto {
    match input {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::debug!("Unreadable post form: {}", rejection);
            PostFormDto::default()
        }
    }
}

/// GET / - Latest posts of everyone
///
/// # Returns
/// - `200 OK`: `posts/index.html`
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;

    let posts = PostService::new(&state.db, state.posts_per_page)
        .get_index(page_param(query.as_deref()).as_deref())
        .await?;

    state.templates.render(
        template::INDEX,
        &IndexPage {
            layout: layout(&state, viewer.as_ref()),
            page_obj: posts.into_dto(Post::into_dto),
        },
    )
}

/// GET /group/{slug}/ - Posts of one group
///
/// # Returns
/// - `200 OK`: `posts/group_list.html`
/// - `404 Not Found`: No group with that slug
pub async fn group_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    session: Session,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;

    let (group, posts) = PostService::new(&state.db, state.posts_per_page)
        .get_group_posts(&slug, page_param(query.as_deref()).as_deref())
        .await?;

    state.templates.render(
        template::GROUP_LIST,
        &GroupListPage {
            layout: layout(&state, viewer.as_ref()),
            group: group.into_dto(),
            page_obj: posts.into_dto(Post::into_dto),
        },
    )
}

/// GET /profile/{username}/ - Posts of one author
///
/// # Returns
/// - `200 OK`: `posts/profile.html` with the author's post count
/// - `404 Not Found`: No user with that username
pub async fn profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    session: Session,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;

    let (author, posts) = PostService::new(&state.db, state.posts_per_page)
        .get_profile(&username, page_param(query.as_deref()).as_deref())
        .await?;

    state.templates.render(
        template::PROFILE,
        &ProfilePage {
            layout: layout(&state, viewer.as_ref()),
            author: author.into_dto(),
            post_count: posts.total,
            page_obj: posts.into_dto(Post::into_dto),
        },
    )
}

/// GET /posts/{post_id}/ - A single post
///
/// # Returns
/// - `200 OK`: `posts/post_detail.html`
/// - `404 Not Found`: Missing post or non-integer id
pub async fn post_detail(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    session: Session,
) -> Result<Response, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;
    let post_id = parse_post_id(&post_id)?;

    let (post, author_post_count) = PostService::new(&state.db, state.posts_per_page)
        .get_detail(post_id)
        .await?;
    let is_author = viewer.as_ref().is_some_and(|v| post.is_authored_by(v));

    state.templates.render(
        template::POST_DETAIL,
        &PostDetailPage {
            layout: layout(&state, viewer.as_ref()),
            post: post.into_dto(),
            author_post_count,
            is_author,
        },
    )
}

/// GET /create/ - Empty post form
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: `posts/create.html`
/// - `303 See Other`: Anonymous, redirected to the login page
pub async fn post_create_form(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&state.login_url, uri.path())
        .await?;

    let groups = GroupService::new(&state.db).get_all().await?;

    render_form(
        &state,
        &user,
        None,
        PostFormDto::default(),
        groups,
        PostFormErrorsDto::default(),
    )
}

/// POST /create/ - Publish a post
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `303 See Other`: Published, redirected to the author's profile
/// - `200 OK`: `posts/create.html` with field errors, also for a missing or non-form body
/// - `303 See Other`: Anonymous, redirected to the login page
pub async fn post_create(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    input: Result<Form<PostFormDto>, FormRejection>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&state.login_url, uri.path())
        .await?;
    let input = submitted(input);

    let groups = GroupService::new(&state.db).get_all().await?;

    let form = match PostForm::validate(&input, &groups) {
        Ok(form) => form,
        Err(errors) => return render_form(&state, &user, None, input, groups, errors),
    };

    let post = PostService::new(&state.db, state.posts_per_page)
        .create(form, &user)
        .await?;

    tracing::info!("User {} published post {}", user.id, post.id);

    Ok(Redirect::to(&format!("/profile/{}/", user.username)).into_response())
}

/// GET /posts/{post_id}/edit/ - Pre-filled post form
///
/// # Authentication
/// Requires user to be logged in as the post's author
///
/// # Returns
/// - `200 OK`: `posts/create.html` with `is_edit`
/// - `303 See Other`: Anonymous, redirected to the login page
/// - `303 See Other`: Not the author, redirected to the post
/// - `404 Not Found`: Missing post or non-integer id
pub async fn post_edit_form(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    session: Session,
    uri: Uri,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&state.login_url, uri.path())
        .await?;
    let post_id = parse_post_id(&post_id)?;

    let post = PostService::new(&state.db, state.posts_per_page)
        .get_for_edit(post_id, &user)
        .await?;
    let groups = GroupService::new(&state.db).get_all().await?;

    render_form(
        &state,
        &user,
        Some(post.id),
        PostForm::initial(&post),
        groups,
        PostFormErrorsDto::default(),
    )
}

/// POST /posts/{post_id}/edit/ - Save changes to a post
///
/// # Authentication
/// Requires user to be logged in as the post's author
///
/// # Returns
/// - `303 See Other`: Saved, redirected to the post
/// - `200 OK`: `posts/create.html` with field errors, also for a missing or non-form body
/// - `303 See Other`: Not the author, redirected to the post unchanged
/// - `404 Not Found`: Missing post or non-integer id
pub async fn post_edit(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    session: Session,
    uri: Uri,
    input: Result<Form<PostFormDto>, FormRejection>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&state.login_url, uri.path())
        .await?;
    let post_id = parse_post_id(&post_id)?;

    let post_service = PostService::new(&state.db, state.posts_per_page);
    post_service.get_for_edit(post_id, &user).await?;
    let input = submitted(input);

    let groups = GroupService::new(&state.db).get_all().await?;

    let form = match PostForm::validate(&input, &groups) {
        Ok(form) => form,
        Err(errors) => return render_form(&state, &user, Some(post_id), input, groups, errors),
    };

    post_service.update(post_id, form, &user).await?;

    tracing::info!("User {} edited post {}", user.id, post_id);

    Ok(Redirect::to(&format!("/posts/{}/", post_id)).into_response())
}

/// Renders `posts/create.html` for creating (`post_id` is `None`) or editing a post.
fn render_form(
    state: &AppState,
    viewer: &User,
    post_id: Option<i32>,
    form: PostFormDto,
    groups: Vec<Group>,
    errors: PostFormErrorsDto,
) -> Result<Response, AppError> {
    let selected = form.group.trim().parse::<i32>().ok();

    state.templates.render(
        template::POST_FORM,
        &PostFormPage {
            layout: layout(state, Some(viewer)),
            is_edit: post_id.is_some(),
            post_id,
            form,
            groups: groups
                .into_iter()
                .map(|g| g.into_option_dto(selected))
                .collect(),
            errors,
        },
    )
}
