//! Post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Post, PostDraft, PostId};
use blog_core::error::{DomainError, RepoError};
use blog_shared::{PostPayload, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_newest_first().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = into_draft(body.into_inner())?;

    let post = state.posts.create(draft).await?;
    tracing::info!(post_id = post.id, "Post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let draft = into_draft(body.into_inner())?;

    let post = state
        .posts
        .update(id, draft)
        .await
        .map_err(|e| missing_as_not_found(e, id))?;
    tracing::info!(post_id = post.id, "Post updated");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .posts
        .delete(id)
        .await
        .map_err(|e| missing_as_not_found(e, id))?;
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}

fn into_draft(payload: PostPayload) -> Result<PostDraft, DomainError> {
    PostDraft::new(payload.title, payload.content)
}

fn not_found(id: PostId) -> DomainError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
}

fn missing_as_not_found(err: RepoError, id: PostId) -> AppError {
    match err {
        RepoError::NotFound => not_found(id).into(),
        other => other.into(),
    }
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
    }
}
